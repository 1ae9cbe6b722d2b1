//! Recursion guard.
//!
//! Remembers the bean instance of each bean type currently being populated
//! in one synthesis session. A property whose type is already in the guard
//! is assigned the remembered instance instead of a fresh one, which is what
//! turns self-referential types into cyclic object graphs rather than
//! unbounded recursion.

use std::collections::HashMap;
use std::fmt;

use crate::registry::Reuse;
use crate::types::TypeKey;
use crate::value::Value;

/// In-progress instances of one synthesis session, keyed by type.
#[derive(Default)]
pub(crate) struct RecursionGuard {
	in_progress: HashMap<TypeKey, Reuse>,
}

impl RecursionGuard {
	/// Creates an empty guard.
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Remembers the instance of `key`. `reuse` hands out shared handles to
	/// it. A later instance of the same type replaces an earlier one.
	pub(crate) fn enter(&mut self, key: TypeKey, reuse: impl Fn() -> Value + 'static) {
		self.in_progress.insert(key, Box::new(reuse));
	}

	/// Forgets the instance of `key` once it is fully populated.
	pub(crate) fn exit(&mut self, key: TypeKey) {
		self.in_progress.remove(&key);
	}

	/// Returns a shared handle to the remembered instance of `key`.
	pub(crate) fn reuse(&self, key: TypeKey) -> Option<Value> {
		self.in_progress.get(&key).map(|reuse| reuse())
	}
}

impl fmt::Debug for RecursionGuard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecursionGuard")
			.field("in_progress", &self.in_progress.keys().collect::<Vec<_>>())
			.finish()
	}
}
