//! Per-property overrides.
//!
//! Overrides are keyed by mutator name and apply to every bean type that has
//! a property with that name. A property is either suppressed (left at the
//! value its constructor gave it), assigned a value drawn from a fixed pool,
//! or assigned the result of a supplier.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{StubError, StubResult};
use crate::random::StubRng;
use crate::registry::ValueFn;
use crate::value::Value;

/// Source of values for an overridden property.
#[derive(Clone)]
pub(crate) enum Override {
	/// A value is drawn uniformly from the pool.
	Fixed(Vec<ValueFn>),
	/// The supplier is called once per assignment.
	Supplier(ValueFn),
}

/// Registered overrides of a factory.
#[derive(Clone, Default)]
pub struct OverrideRegistry {
	overrides: HashMap<String, Override>,
	suppressed: HashSet<String>,
}

impl OverrideRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a pool of values for `property`.
	///
	/// Replaces any earlier value pool or supplier of the same property.
	///
	/// # Examples
	///
	/// ```
	/// use stubforge_core::OverrideRegistry;
	///
	/// let mut overrides = OverrideRegistry::new();
	/// overrides.register_values("set_status", ["open", "closed"]).unwrap();
	/// assert!(overrides.is_overridden("set_status"));
	/// assert!(overrides.register_values::<&str>("set_other", []).is_err());
	/// ```
	pub fn register_values<V>(&mut self, property: &str, values: impl IntoIterator<Item = V>) -> StubResult<()>
	where
		V: Any + Clone + Send + Sync,
	{
		validate_name(property)?;
		let pool: Vec<ValueFn> = values
			.into_iter()
			.map(|value| -> ValueFn { Arc::new(move || Value::new(value.clone())) })
			.collect();
		if pool.is_empty() {
			return Err(StubError::InvalidOverride {
				property: property.to_string(),
				reason: "value pool is empty".to_string(),
			});
		}
		debug!(property, values = pool.len(), "Registered override values");
		self.overrides.insert(property.to_string(), Override::Fixed(pool));
		Ok(())
	}

	/// Registers a supplier for `property`.
	///
	/// Replaces any earlier value pool or supplier of the same property.
	pub fn register_supplier<V, F>(&mut self, property: &str, supplier: F) -> StubResult<()>
	where
		V: Any,
		F: Fn() -> V + Send + Sync + 'static,
	{
		validate_name(property)?;
		debug!(property, "Registered override supplier");
		self.overrides.insert(
			property.to_string(),
			Override::Supplier(Arc::new(move || Value::new(supplier()))),
		);
		Ok(())
	}

	/// Suppresses `property`: synthesis never assigns it.
	pub fn suppress(&mut self, property: &str) -> StubResult<()> {
		validate_name(property)?;
		self.suppressed.insert(property.to_string());
		Ok(())
	}

	/// Returns true if `property` is suppressed.
	pub fn is_suppressed(&self, property: &str) -> bool {
		self.suppressed.contains(property)
	}

	/// Returns true if a value pool or supplier is registered for `property`.
	pub fn is_overridden(&self, property: &str) -> bool {
		self.overrides.contains_key(property)
	}

	/// Produces the override value of `property`, if one is registered.
	pub fn resolve(&self, property: &str, rng: &mut StubRng) -> Option<Value> {
		match self.overrides.get(property)? {
			Override::Fixed(pool) => {
				let pick = &pool[rng.next_index(pool.len())];
				Some(pick())
			}
			Override::Supplier(supplier) => Some(supplier()),
		}
	}

	/// Returns the number of overridden and suppressed properties.
	pub fn len(&self) -> usize {
		self.overrides.len() + self.suppressed.len()
	}

	/// Returns true if nothing is overridden or suppressed.
	pub fn is_empty(&self) -> bool {
		self.overrides.is_empty() && self.suppressed.is_empty()
	}
}

impl fmt::Debug for OverrideRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OverrideRegistry")
			.field("overridden", &self.overrides.keys().collect::<Vec<_>>())
			.field("suppressed", &self.suppressed)
			.finish()
	}
}

fn validate_name(property: &str) -> StubResult<()> {
	if property.trim().is_empty() {
		return Err(StubError::InvalidOverride {
			property: property.to_string(),
			reason: "property name is blank".to_string(),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_blank_names_are_rejected(#[case] name: &str) {
		let mut overrides = OverrideRegistry::new();

		assert!(matches!(
			overrides.register_values(name, [1]),
			Err(StubError::InvalidOverride { .. })
		));
		assert!(overrides.register_supplier(name, || 1).is_err());
		assert!(overrides.suppress(name).is_err());
		assert!(overrides.is_empty());
	}

	#[rstest]
	fn test_empty_pool_is_rejected() {
		let mut overrides = OverrideRegistry::new();

		let error = overrides.register_values::<i32>("set_age", Vec::new()).unwrap_err();

		assert!(error.to_string().contains("value pool is empty"));
	}

	#[rstest]
	fn test_values_are_drawn_from_pool() {
		let mut overrides = OverrideRegistry::new();
		overrides.register_values("set_code", [10u8, 20, 30]).unwrap();
		let mut rng = StubRng::seeded(5);

		for _ in 0..50 {
			let value = overrides.resolve("set_code", &mut rng).unwrap();
			assert!([10u8, 20, 30].contains(&value.take::<u8>().unwrap()));
		}
	}

	#[rstest]
	fn test_supplier_is_called_per_resolution() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let mut overrides = OverrideRegistry::new();
		overrides
			.register_supplier("set_id", move || counter.fetch_add(1, Ordering::SeqCst))
			.unwrap();
		let mut rng = StubRng::seeded(0);

		let first = overrides.resolve("set_id", &mut rng).unwrap().take::<usize>().unwrap();
		let second = overrides.resolve("set_id", &mut rng).unwrap().take::<usize>().unwrap();

		assert_eq!((first, second), (0, 1));
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	fn test_last_registration_wins() {
		let mut overrides = OverrideRegistry::new();
		overrides.register_values("set_name", ["pool"]).unwrap();
		overrides.register_supplier("set_name", || "supplied").unwrap();
		let mut rng = StubRng::seeded(0);

		let value = overrides.resolve("set_name", &mut rng).unwrap();

		assert_eq!(value.take::<&str>().unwrap(), "supplied");
		assert_eq!(overrides.len(), 1);
	}

	#[rstest]
	fn test_unknown_property_resolves_to_none() {
		let overrides = OverrideRegistry::new();
		assert!(overrides.resolve("set_missing", &mut StubRng::seeded(0)).is_none());
	}

	#[rstest]
	fn test_suppression() {
		let mut overrides = OverrideRegistry::new();
		overrides.suppress("set_secret").unwrap();

		assert!(overrides.is_suppressed("set_secret"));
		assert!(!overrides.is_overridden("set_secret"));
	}
}
