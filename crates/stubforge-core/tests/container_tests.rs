//! Tests for sequence, set, map and array synthesis

mod common;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use common::{BasicEnum, FullPojo, SimplePojo};
use rstest::*;
use stubforge_core::{BeanRef, StubError, StubFactory, TypeDescriptor, TypeKey};

/// Test sequences and arrays have exactly the configured size
#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(17)]
fn test_exact_sizes(#[case] size: usize) {
	let factory = StubFactory::with_collection_size(size);

	let list = factory.create_stub::<Vec<String>>().unwrap();
	let deque = factory.create_stub::<VecDeque<i64>>().unwrap();
	let array = factory.create_stub::<Box<[u32]>>().unwrap();

	assert_eq!(list.len(), size);
	assert_eq!(deque.len(), size);
	assert_eq!(array.len(), size);
}

/// Test sets and maps never exceed the configured size
#[rstest]
fn test_sets_and_maps_are_bounded() {
	let factory = StubFactory::with_collection_size(10);

	let flags = factory.create_stub::<HashSet<bool>>().unwrap();
	let enums = factory.create_stub::<BTreeSet<BasicEnum>>().unwrap();
	let by_flag = factory.create_stub::<BTreeMap<bool, String>>().unwrap();
	let by_id = factory.create_stub::<HashMap<u64, String>>().unwrap();

	assert!(!flags.is_empty() && flags.len() <= 2);
	assert!(!enums.is_empty() && enums.len() <= 3);
	assert!(!by_flag.is_empty() && by_flag.len() <= 2);
	assert_eq!(by_id.len(), 10);
}

/// Test nested containers
#[rstest]
fn test_nested_containers() {
	let factory = StubFactory::with_collection_size(2);

	let nested = factory
		.create_stub::<HashMap<String, Vec<BTreeSet<u16>>>>()
		.unwrap();

	assert_eq!(nested.len(), 2);
	for inner in nested.values() {
		assert_eq!(inner.len(), 2);
		assert!(inner.iter().all(|set| !set.is_empty() && set.len() <= 2));
	}
}

/// Test explicit generic parameters matching the container
#[rstest]
fn test_explicit_generics() {
	let factory = StubFactory::new();

	let map = factory
		.create_stub_with::<HashMap<String, i32>>(&[TypeKey::of::<String>(), TypeKey::of::<i32>()])
		.unwrap();

	assert_eq!(map.len(), 3);
}

/// Test containers with the wrong number of generic parameters
#[rstest]
#[case::map_without_generics(TypeDescriptor::of::<HashMap<String, i32>>(), 2, 0)]
#[case::map_with_one(
	TypeDescriptor::of::<HashMap<String, i32>>().with_generics([TypeKey::of::<String>()]),
	2,
	1
)]
#[case::list_with_two(
	TypeDescriptor::of::<Vec<String>>().with_generics([TypeKey::of::<String>(), TypeKey::of::<String>()]),
	1,
	2
)]
#[case::set_without_generics(TypeDescriptor::of::<HashSet<u8>>(), 1, 0)]
fn test_invalid_generic_arity(
	#[case] descriptor: TypeDescriptor,
	#[case] expected_arity: usize,
	#[case] actual_arity: usize,
) {
	let factory = StubFactory::builder()
		.register::<HashMap<String, i32>>()
		.register::<Vec<String>>()
		.register::<HashSet<u8>>()
		.build();

	let result = factory.synthesize(&descriptor);

	match result {
		Err(StubError::InvalidGenericArity {
			expected, actual, ..
		}) => {
			assert_eq!(expected, expected_arity);
			assert_eq!(actual, actual_arity);
		}
		other => panic!("Expected InvalidGenericArity, got {:?}", other),
	}
}

/// Test generic parameters disagreeing with the concrete container
#[rstest]
fn test_mismatched_generics() {
	let factory = StubFactory::new();

	let result = factory.create_stub_with::<Vec<String>>(&[TypeKey::of::<i32>()]);

	assert!(matches!(result, Err(StubError::TypeMismatch { .. })));
}

/// Test a batch collected into a caller-supplied container
#[rstest]
fn test_create_stub_collection() {
	let factory = StubFactory::new();

	let pojos = factory
		.create_stub_collection::<BeanRef<FullPojo>, _>(5, Vec::new)
		.unwrap();
	let codes = factory
		.create_stub_collection::<u64, _>(5, HashSet::new)
		.unwrap();

	assert_eq!(pojos.len(), 5);
	assert!(pojos.iter().all(|pojo| pojo.borrow().all_populated()));
	assert_eq!(codes.len(), 5);
}

/// Test batch elements are independent instances
#[rstest]
fn test_create_stub_collection_elements_are_independent() {
	let factory = StubFactory::new();

	let pojos = factory
		.create_stub_collection::<BeanRef<SimplePojo>, _>(3, Vec::new)
		.unwrap();

	for (index, pojo) in pojos.iter().enumerate() {
		let same = pojo.borrow().same.clone().unwrap();
		assert!(std::rc::Rc::ptr_eq(&same, pojo));
		for other in &pojos[index + 1..] {
			assert!(!std::rc::Rc::ptr_eq(pojo, other));
		}
	}
}

/// Test a batch of containers with explicit element generics
#[rstest]
fn test_create_stub_collection_with_generics() {
	let factory = StubFactory::with_collection_size(4);

	let lists = factory
		.create_stub_collection_with::<Vec<char>, _>(2, Vec::new, &[TypeKey::of::<char>()])
		.unwrap();

	assert_eq!(lists.len(), 2);
	assert!(lists.iter().all(|list| list.len() == 4));
}

/// Test an empty batch
#[rstest]
fn test_create_stub_collection_empty() {
	let factory = StubFactory::new();

	let codes = factory.create_stub_collection::<u8, _>(0, Vec::new).unwrap();

	assert!(codes.is_empty());
}
