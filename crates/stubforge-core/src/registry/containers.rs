//! Standard library containers.
//!
//! `Vec` and `VecDeque` are sequences, `HashSet` and `BTreeSet` are sets,
//! `HashMap` and `BTreeMap` are maps and `Box<[T]>` is the fixed-size array.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use super::{Stubbable, TypeRegistry};
use crate::types::TypeKey;

impl<T: Stubbable> Stubbable for Vec<T> {
	fn register(registry: &mut TypeRegistry) {
		registry.sequence::<Self, T>(|items| items);
	}

	fn generics() -> Vec<TypeKey> {
		vec![TypeKey::of::<T>()]
	}
}

impl<T: Stubbable> Stubbable for VecDeque<T> {
	fn register(registry: &mut TypeRegistry) {
		registry.sequence::<Self, T>(VecDeque::from);
	}

	fn generics() -> Vec<TypeKey> {
		vec![TypeKey::of::<T>()]
	}
}

impl<T: Stubbable + Eq + Hash> Stubbable for HashSet<T> {
	fn register(registry: &mut TypeRegistry) {
		registry.set::<Self, T>(|items| items.into_iter().collect());
	}

	fn generics() -> Vec<TypeKey> {
		vec![TypeKey::of::<T>()]
	}
}

impl<T: Stubbable + Ord> Stubbable for BTreeSet<T> {
	fn register(registry: &mut TypeRegistry) {
		registry.set::<Self, T>(|items| items.into_iter().collect());
	}

	fn generics() -> Vec<TypeKey> {
		vec![TypeKey::of::<T>()]
	}
}

impl<K: Stubbable + Eq + Hash, V: Stubbable> Stubbable for HashMap<K, V> {
	fn register(registry: &mut TypeRegistry) {
		registry.map::<Self, K, V>(|pairs| pairs.into_iter().collect());
	}

	fn generics() -> Vec<TypeKey> {
		vec![TypeKey::of::<K>(), TypeKey::of::<V>()]
	}
}

impl<K: Stubbable + Ord, V: Stubbable> Stubbable for BTreeMap<K, V> {
	fn register(registry: &mut TypeRegistry) {
		registry.map::<Self, K, V>(|pairs| pairs.into_iter().collect());
	}

	fn generics() -> Vec<TypeKey> {
		vec![TypeKey::of::<K>(), TypeKey::of::<V>()]
	}
}

// The component type is part of the array type itself, so arrays report no
// generic parameters.
impl<T: Stubbable> Stubbable for Box<[T]> {
	fn register(registry: &mut TypeRegistry) {
		registry.array::<Self, T>(Vec::into_boxed_slice);
	}
}
