//! Type-erased synthesized values and shared bean handles.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{StubError, StubResult};
use crate::types::TypeKey;

/// Runtime handle of every Bean-kind value.
///
/// Beans are shared so that a cyclic property can point at an ancestor that
/// is still being populated.
pub type BeanRef<T> = Rc<RefCell<T>>;

/// Wraps a bean in a fresh [`BeanRef`].
pub fn bean_ref<T>(bean: T) -> BeanRef<T> {
	Rc::new(RefCell::new(bean))
}

/// A synthesized value whose static type has been erased.
pub struct Value {
	inner: Box<dyn Any>,
	key: TypeKey,
}

impl Value {
	/// Erases `value`.
	///
	/// # Examples
	///
	/// ```
	/// use stubforge_core::Value;
	///
	/// let value = Value::new(42i32);
	/// assert!(value.is::<i32>());
	/// assert_eq!(value.downcast::<i32>().ok(), Some(42));
	/// ```
	pub fn new<T: Any>(value: T) -> Self {
		Self {
			inner: Box::new(value),
			key: TypeKey::of::<T>(),
		}
	}

	/// Returns the key of the runtime type.
	pub fn key(&self) -> TypeKey {
		self.key
	}

	/// Returns true if the value holds a `T`.
	pub fn is<T: Any>(&self) -> bool {
		self.inner.is::<T>()
	}

	/// Borrows the value as `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.inner.downcast_ref::<T>()
	}

	/// Recovers the value as `T`, handing the value back on mismatch.
	pub fn downcast<T: Any>(self) -> Result<T, Value> {
		let key = self.key;
		match self.inner.downcast::<T>() {
			Ok(value) => Ok(*value),
			Err(inner) => Err(Value { inner, key }),
		}
	}

	/// Recovers the value as `T`, reporting a [`StubError::TypeMismatch`] on failure.
	pub fn take<T: Any>(self) -> StubResult<T> {
		self.downcast::<T>().map_err(|value| StubError::TypeMismatch {
			expected: TypeKey::of::<T>().name().to_string(),
			actual: value.key().name().to_string(),
		})
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Value").field("type", &self.key).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_downcast_mismatch_returns_value() {
		let value = Value::new("text".to_string());

		let returned = value.downcast::<i32>().unwrap_err();

		assert_eq!(returned.key(), TypeKey::of::<String>());
		assert_eq!(returned.downcast::<String>().unwrap(), "text");
	}

	#[rstest]
	fn test_take_reports_type_names() {
		let error = Value::new(1u8).take::<String>().unwrap_err();

		match error {
			StubError::TypeMismatch { expected, actual } => {
				assert_eq!(expected, "alloc::string::String");
				assert_eq!(actual, "u8");
			}
			other => panic!("Expected TypeMismatch, got {:?}", other),
		}
	}

	#[rstest]
	fn test_bean_ref_shares_identity() {
		let bean = bean_ref(5i32);
		let value = Value::new(bean.clone());

		let recovered = value.take::<BeanRef<i32>>().unwrap();
		*recovered.borrow_mut() = 6;

		assert!(Rc::ptr_eq(&bean, &recovered));
		assert_eq!(*bean.borrow(), 6);
	}
}
