//! Convenience re-exports for common usage.
//!
//! ```
//! use stubforge_core::prelude::*;
//!
//! let factory = StubFactory::with_collection_size(2);
//! let words: Vec<String> = factory.create_stub().unwrap();
//! assert_eq!(words.len(), 2);
//! ```

// Factory
pub use crate::{StubFactory, StubFactoryBuilder, StubSettings};

// Registration
pub use crate::{Bean, BeanBuilder, GenericParams, InterfaceStub, Stubbable, TypeKey, TypeRegistry};

// Values
pub use crate::{BeanRef, bean_ref};

// Error types
pub use crate::{StubError, StubResult};
