//! Interface stubs.
//!
//! An [`InterfaceStub`] answers every member of a registered interface with a
//! freshly synthesized value of the member's declared return type. Nothing
//! is memoized: two calls of the same member return independent values.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{StubError, StubResult};
use crate::factory::StubFactory;
use crate::registry::{InterfaceShape, MemberSignature};
use crate::types::TypeKey;
use crate::value::Value;

/// Handle an interface adapter forwards its trait methods to.
#[derive(Clone)]
pub struct InterfaceStub {
	factory: StubFactory,
	interface: TypeKey,
	members: Arc<[MemberSignature]>,
}

impl InterfaceStub {
	/// Returns the interface type this stub answers for.
	pub fn interface(&self) -> TypeKey {
		self.interface
	}

	/// Returns the declared members.
	pub fn members(&self) -> &[MemberSignature] {
		&self.members
	}

	/// Answers `member` with a new value of its declared return type.
	///
	/// Every call opens its own synthesis session.
	pub fn invoke<R: Any>(&self, member: &str) -> StubResult<R> {
		let signature = self.member(member)?;
		let Some(returns) = signature.returns() else {
			return Err(StubError::TypeMismatch {
				expected: std::any::type_name::<R>().to_string(),
				actual: "()".to_string(),
			});
		};
		self.factory.synthesize(returns)?.take::<R>()
	}

	/// Answers `member` without producing a value.
	pub fn invoke_void(&self, member: &str) -> StubResult<()> {
		self.member(member).map(|_| ())
	}

	fn member(&self, name: &str) -> StubResult<&MemberSignature> {
		self.members
			.iter()
			.find(|member| member.name() == name)
			.ok_or_else(|| StubError::UnknownMember {
				interface: self.interface.name().to_string(),
				member: name.to_string(),
			})
	}
}

impl fmt::Debug for InterfaceStub {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InterfaceStub")
			.field("interface", &self.interface)
			.field("members", &self.members)
			.finish()
	}
}

/// Builds the interface implementation through its registered adapter.
pub(crate) fn generate(factory: &StubFactory, interface: TypeKey, shape: &InterfaceShape) -> Value {
	(shape.adapter)(InterfaceStub {
		factory: factory.clone(),
		interface,
		members: shape.members.clone(),
	})
}
