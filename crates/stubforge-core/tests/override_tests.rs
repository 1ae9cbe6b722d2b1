//! Tests for ignored setters, custom values and custom suppliers

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use common::{FullPojo, SimplePojo};
use rstest::*;
use stubforge_core::{BeanRef, StubError, StubFactory};

/// Test an ignored setter leaves its property unset and everything else populated
#[rstest]
fn test_ignored_setter() {
	// Arrange
	let factory = StubFactory::builder()
		.add_ignored_setter("set_name")
		.unwrap()
		.build();

	// Act
	let pojo = factory.create_bean::<SimplePojo>().unwrap();

	// Assert
	let pojo = pojo.borrow();
	assert!(pojo.name.is_none());
	assert!(pojo.same.is_some());
}

/// Test an ignored setter applies to every bean type with that property
#[rstest]
fn test_ignored_setter_applies_across_types() {
	let factory = StubFactory::builder()
		.add_ignored_setter("set_an_int")
		.unwrap()
		.build();

	let pojo = factory.create_bean::<FullPojo>().unwrap();

	let pojo = pojo.borrow();
	assert!(pojo.an_int.is_none());
	assert!(pojo.string.is_some());
	assert_eq!(pojo.simple_pojo.as_ref().unwrap().borrow().an_int, 0);
}

/// Test custom values are always drawn from the candidates
#[rstest]
fn test_custom_value() {
	let candidates = ["a", "b"];
	let factory = StubFactory::builder()
		.add_custom_value("set_name", candidates.map(String::from))
		.unwrap()
		.build();

	for _ in 0..20 {
		let pojo = factory.create_bean::<SimplePojo>().unwrap();
		let name = pojo.borrow().name.clone().unwrap();
		assert!(candidates.contains(&name.as_str()));
	}
}

/// Test a single custom value is equal across a batch of independent beans
#[rstest]
fn test_custom_value_is_shared_by_batch() {
	let factory = StubFactory::builder()
		.add_custom_value("set_an_int", [7])
		.unwrap()
		.build();

	let pojos = factory
		.create_stub_collection::<BeanRef<SimplePojo>, _>(5, Vec::new)
		.unwrap();

	assert_eq!(pojos.len(), 5);
	assert!(pojos.iter().all(|pojo| pojo.borrow().an_int == 7));
	let names: std::collections::HashSet<String> = pojos
		.iter()
		.map(|pojo| pojo.borrow().name.clone().unwrap())
		.collect();
	assert!(names.len() > 1);
}

/// Test a custom supplier provides exactly its value
#[rstest]
fn test_custom_supplier() {
	let factory = StubFactory::builder()
		.add_custom_supplier("set_name", || "I kent ba Liviu".to_string())
		.unwrap()
		.build();

	let pojo = factory.create_bean::<SimplePojo>().unwrap();

	assert_eq!(pojo.borrow().name.as_deref(), Some("I kent ba Liviu"));
}

/// Test a supplier is called for every assignment
#[rstest]
fn test_custom_supplier_is_called_per_assignment() {
	let counter = Arc::new(AtomicI32::new(100));
	let next = counter.clone();
	let factory = StubFactory::builder()
		.add_custom_supplier("set_an_int", move || next.fetch_add(1, Ordering::SeqCst))
		.unwrap()
		.build();

	let first = factory.create_bean::<SimplePojo>().unwrap();
	let second = factory.create_bean::<SimplePojo>().unwrap();

	assert_eq!(first.borrow().an_int, 100);
	assert_eq!(second.borrow().an_int, 101);
	assert_eq!(counter.load(Ordering::SeqCst), 102);
}

/// Test a supplier may call back into a factory while synthesis is running
#[rstest]
fn test_supplier_can_use_a_factory() {
	let inner = StubFactory::new();
	let factory = StubFactory::builder()
		.add_custom_supplier("set_name", move || {
			inner.create_stub::<String>().unwrap().to_uppercase()
		})
		.unwrap()
		.build();

	let pojo = factory.create_bean::<SimplePojo>().unwrap();

	let name = pojo.borrow().name.clone().unwrap();
	assert!(name.chars().all(|c| c.is_ascii_uppercase()));
}

/// Test an override of the wrong type fails the assignment
#[rstest]
fn test_override_of_wrong_type() {
	let factory = StubFactory::builder()
		.add_custom_value("set_an_int", ["not a number"])
		.unwrap()
		.build();

	let result = factory.create_bean::<SimplePojo>();

	match result {
		Err(StubError::MutatorInvocationFailed {
			property,
			target,
			value,
		}) => {
			assert_eq!(property, "set_an_int");
			assert!(target.ends_with("SimplePojo"));
			assert_eq!(value, "&str");
		}
		other => panic!("Expected MutatorInvocationFailed, got {:?}", other.map(|_| ())),
	}
}

/// Test suppression wins over an override registered for the same property
#[rstest]
fn test_suppression_wins_over_override() {
	let factory = StubFactory::builder()
		.add_custom_value("set_name", ["kept".to_string()])
		.unwrap()
		.add_ignored_setter("set_name")
		.unwrap()
		.build();

	let pojo = factory.create_bean::<SimplePojo>().unwrap();

	assert!(pojo.borrow().name.is_none());
}

/// Test an override of an unknown property has no effect
#[rstest]
fn test_override_of_unknown_property() {
	let factory = StubFactory::builder()
		.add_custom_value("set_nothing", [1u8])
		.unwrap()
		.build();

	let pojo = factory.create_bean::<SimplePojo>().unwrap();

	assert!(pojo.borrow().name.is_some());
}

/// Test blank or empty override registrations are rejected
#[rstest]
#[case::blank_value("", false)]
#[case::blank_ignored(" ", true)]
fn test_invalid_registration(#[case] name: &str, #[case] ignored: bool) {
	let result = if ignored {
		StubFactory::builder().add_ignored_setter(name)
	} else {
		StubFactory::builder().add_custom_value(name, [1])
	};

	assert!(matches!(result, Err(StubError::InvalidOverride { .. })));
}

/// Test the builder's creation shortcuts apply the configured overrides
#[rstest]
fn test_builder_shortcuts_apply_overrides() {
	// Arrange
	let builder = || {
		StubFactory::builder()
			.add_custom_value("set_an_int", [42])
			.unwrap()
			.add_ignored_setter("set_name")
			.unwrap()
	};

	// Act
	let single = builder().create_stub::<BeanRef<SimplePojo>>().unwrap();
	let batch = builder()
		.create_stub_collection::<BeanRef<SimplePojo>, _>(3, Vec::new)
		.unwrap();

	// Assert
	assert_eq!(single.borrow().an_int, 42);
	assert_eq!(batch.len(), 3);
	assert!(batch.iter().all(|pojo| {
		let pojo = pojo.borrow();
		pojo.an_int == 42 && pojo.name.is_none()
	}));
}
