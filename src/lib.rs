//! # Stubforge
//!
//! Recursive fixture synthesis for tests.
//!
//! Stubforge builds fully populated instances of your types filled with
//! random data, so tests can focus on behaviour instead of hand-written
//! fixtures. Record types get every `set_<property>` mutator assigned,
//! containers get a configurable number of elements, self-referential types
//! become cyclic object graphs, and trait objects are answered by stubs that
//! return a fresh value per call.
//!
//! This crate re-exports the engine from `stubforge-core` and adds
//! `#[derive(Stub)]` from `stubforge-macros`.
//!
//! ## Quick Start
//!
//! ```
//! use stubforge::prelude::*;
//!
//! #[derive(Debug, Default, Stub)]
//! struct Address {
//! 	street: String,
//! 	zip: Option<u32>,
//! }
//!
//! #[derive(Debug, Default, Stub)]
//! struct Customer {
//! 	name: String,
//! 	address: Option<BeanRef<Address>>,
//! 	#[stub(read_only)]
//! 	orders: Vec<u64>,
//! 	#[stub(skip)]
//! 	notes: Vec<String>,
//! }
//!
//! let factory = StubFactory::builder()
//! 	.collection_size(2)
//! 	.add_custom_value("set_name", ["Ada".to_string(), "Grace".to_string()])
//! 	.unwrap()
//! 	.build();
//!
//! let customer = factory.create_bean::<Customer>().unwrap();
//! let customer = customer.borrow();
//! assert!(customer.name == "Ada" || customer.name == "Grace");
//! assert!(customer.address.as_ref().unwrap().borrow().zip.is_some());
//! assert_eq!(customer.orders.len(), 2);
//! assert!(customer.notes.is_empty());
//! ```
//!
//! ## Registration
//!
//! Rust has no runtime reflection, so every synthesized type describes
//! itself once through [`Stubbable`]. Standard leaves and containers are
//! covered out of the box. Record types implement [`Bean`] (usually through
//! `#[derive(Stub)]`) and are synthesized as [`BeanRef`] handles; fieldless
//! enums derive [`Stubbable`] directly. Interfaces are registered by hand
//! with [`TypeRegistry::interface`].

pub use stubforge_core::*;
pub use stubforge_macros::Stub;

/// Convenience re-exports for common usage, including `#[derive(Stub)]`.
pub mod prelude {
	pub use stubforge_core::prelude::*;
	pub use stubforge_macros::Stub;
}
