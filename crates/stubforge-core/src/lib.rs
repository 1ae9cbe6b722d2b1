//! Recursive fixture synthesis engine.
//!
//! Given a registered type, this crate produces a fully populated instance
//! filled with random data:
//!
//! - **Leaves**: numbers, booleans, characters, strings, dates and times,
//!   decimals and UUIDs come from a session-owned random source
//! - **Containers**: sequences, sets, maps and arrays receive a configurable
//!   number of synthesized elements
//! - **Beans**: record types are constructed, then every `set_<property>`
//!   mutator is assigned a synthesized value; self-referential types become
//!   cyclic object graphs instead of recursing forever
//! - **Interfaces**: trait objects are answered by an [`InterfaceStub`]
//!   returning a fresh value for every call
//! - **Overrides**: per-property value pools, suppliers and suppressions
//!
//! Rust has no runtime reflection, so types describe themselves once through
//! [`Stubbable`] (or [`Bean`] for record types). The `stubforge` facade crate
//! adds `#[derive(Stub)]` to generate those impls.
//!
//! # Quick Start
//!
//! ```
//! use stubforge_core::{Bean, BeanBuilder, BeanRef, StubFactory};
//!
//! #[derive(Default)]
//! struct Person {
//! 	name: Option<String>,
//! 	age: i32,
//! 	friend: Option<BeanRef<Person>>,
//! }
//!
//! impl Bean for Person {
//! 	fn describe(bean: &mut BeanBuilder<'_, Self>) {
//! 		bean.no_arg(Person::default)
//! 			.mutator("set_name", |p: &mut Person, name: String| p.name = Some(name))
//! 			.mutator("set_age", |p: &mut Person, age: i32| p.age = age)
//! 			.mutator("set_friend", |p: &mut Person, friend: BeanRef<Person>| {
//! 				p.friend = Some(friend)
//! 			});
//! 	}
//! }
//!
//! let factory = StubFactory::builder()
//! 	.add_custom_value("set_age", [30, 40])
//! 	.unwrap()
//! 	.build();
//! let person = factory.create_bean::<Person>().unwrap();
//!
//! let person_ref = person.borrow();
//! assert!(person_ref.name.is_some());
//! assert!([30, 40].contains(&person_ref.age));
//! // The self-referential property points back at the person itself.
//! let friend = person_ref.friend.as_ref().unwrap();
//! assert!(std::rc::Rc::ptr_eq(friend, &person));
//! ```
//!
//! # Configuration
//!
//! [`StubSettings`] holds the collection size and an optional seed. It can be
//! read from TOML or from the `STUBFORGE_COLLECTION_SIZE` and
//! `STUBFORGE_SEED` environment variables and handed to
//! [`StubFactoryBuilder::settings`].
//!
//! # Logging
//!
//! Synthesis decisions are reported through `tracing`. The crate never
//! installs a subscriber.

#![warn(missing_docs)]

mod builder;
mod collection;
mod error;
mod factory;
mod guard;
mod overrides;
mod random;
mod registry;
mod resolver;
mod settings;
mod stub;
mod synthesizer;
mod types;
mod value;

pub mod prelude;

pub use builder::StubFactoryBuilder;
pub use error::{StubError, StubResult};
pub use factory::StubFactory;
pub use overrides::OverrideRegistry;
pub use random::{DEFAULT_STRING_LENGTH, StubRng};
pub use registry::{
	Bean, BeanBuilder, ConstructorArgs, InterfaceBuilder, MemberSignature, Stubbable, TypeRegistry,
};
pub use resolver::{
	CollectionKind, PropertyDescriptor, SequenceAccessor, TypeKind, TypeSurface, getter_property,
	resolve, setter_property,
};
pub use settings::{COLLECTION_SIZE_ENV, DEFAULT_COLLECTION_SIZE, SEED_ENV, StubSettings};
pub use stub::InterfaceStub;
pub use types::{GenericParams, TypeDescriptor, TypeKey};
pub use value::{BeanRef, Value, bean_ref};
