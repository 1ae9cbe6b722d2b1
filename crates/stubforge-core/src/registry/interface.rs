//! Interface descriptions.
//!
//! An interface is a trait object type such as `Box<dyn Repository>`. Its
//! members are declared by name and return type; the adapter wraps an
//! [`InterfaceStub`] in a concrete implementation of the trait, usually by
//! forwarding every trait method to [`InterfaceStub::invoke`].

use std::marker::PhantomData;
use std::sync::Arc;

use super::{AdapterFn, InterfaceShape, Shape, Stubbable, TypeRegistry, descriptor_of};
use crate::stub::InterfaceStub;
use crate::types::{GenericParams, TypeDescriptor, TypeKey};
use crate::value::Value;

/// Declared member of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSignature {
	name: String,
	returns: Option<TypeDescriptor>,
}

impl MemberSignature {
	/// Returns the member name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the declared return type, `None` for a member returning `()`.
	pub fn returns(&self) -> Option<&TypeDescriptor> {
		self.returns.as_ref()
	}

	/// Returns true if the member returns nothing.
	pub fn is_void(&self) -> bool {
		self.returns.is_none()
	}
}

/// Collects the members of the interface type `I`.
///
/// # Examples
///
/// ```
/// use stubforge_core::{InterfaceStub, StubFactory, StubResult, Stubbable, TypeRegistry};
///
/// trait Clock {
/// 	fn zone(&self) -> StubResult<String>;
/// }
///
/// struct StubClock(InterfaceStub);
///
/// impl Clock for StubClock {
/// 	fn zone(&self) -> StubResult<String> {
/// 		self.0.invoke("zone")
/// 	}
/// }
///
/// impl Stubbable for Box<dyn Clock> {
/// 	fn register(registry: &mut TypeRegistry) {
/// 		registry
/// 			.interface::<Self>()
/// 			.member::<String>("zone")
/// 			.build(|stub| Box::new(StubClock(stub)) as Box<dyn Clock>);
/// 	}
/// }
///
/// let clock = StubFactory::new().create_stub::<Box<dyn Clock>>().unwrap();
/// assert_eq!(clock.zone().unwrap().len(), 5);
/// ```
pub struct InterfaceBuilder<'r, I> {
	registry: &'r mut TypeRegistry,
	members: Vec<MemberSignature>,
	_interface: PhantomData<fn() -> I>,
}

impl<'r, I: Stubbable> InterfaceBuilder<'r, I> {
	pub(crate) fn new(registry: &'r mut TypeRegistry) -> Self {
		Self {
			registry,
			members: Vec::new(),
			_interface: PhantomData,
		}
	}

	/// Declares a member returning `R`.
	pub fn member<R: Stubbable>(self, name: impl Into<String>) -> Self {
		self.member_with::<R>(name, GenericParams::Inferred)
	}

	/// Declares a member returning `R`, reported with `generics`.
	pub fn member_with<R: Stubbable>(mut self, name: impl Into<String>, generics: GenericParams) -> Self {
		self.registry.ensure::<R>();
		let returns = match generics {
			GenericParams::Inferred => descriptor_of::<R>(),
			other => TypeDescriptor::new(TypeKey::of::<R>(), other.resolve(R::generics())),
		};
		self.members.push(MemberSignature {
			name: name.into(),
			returns: Some(returns),
		});
		self
	}

	/// Declares a member returning `()`.
	pub fn void_member(mut self, name: impl Into<String>) -> Self {
		self.members.push(MemberSignature {
			name: name.into(),
			returns: None,
		});
		self
	}

	/// Finishes the registration with the adapter building `I` from a stub.
	pub fn build(self, adapter: impl Fn(InterfaceStub) -> I + Send + Sync + 'static) {
		let adapter: AdapterFn = Arc::new(move |stub| Value::new(adapter(stub)));
		let shape = InterfaceShape {
			members: self.members.into(),
			adapter,
		};
		self.registry
			.insert(TypeKey::of::<I>(), I::generics(), Shape::Interface(shape));
	}
}
