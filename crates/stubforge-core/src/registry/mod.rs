//! Explicit type-descriptor registry.
//!
//! Rust has no runtime reflection, so every synthesizable type describes its
//! shape here once: a leaf generator, a set of enum constants, a container
//! collector, an interface adapter, or the members and constructors of a
//! bean. The dispatcher consults this table instead of introspecting values.
//!
//! Types enter the registry through [`Stubbable::register`], reached via
//! [`TypeRegistry::ensure`]. Registration is transitive: registering a bean
//! registers the types of all of its members, and cyclic type graphs
//! terminate because a type is marked pending before its members are
//! visited.

mod bean;
mod containers;
mod interface;
mod leaves;

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::error::StubResult;
use crate::random::StubRng;
use crate::stub::InterfaceStub;
use crate::types::{TypeDescriptor, TypeKey};
use crate::value::Value;

pub use bean::{Bean, BeanBuilder, ConstructorArgs};
pub use interface::{InterfaceBuilder, MemberSignature};

pub(crate) use bean::{AccessorMember, BeanShape, ConstructorShape, Member, MutatorMember, Reuse};

/// A type the synthesizer knows how to produce.
///
/// Implemented by the library for the leaf types and the standard containers,
/// blanket-implemented for [`BeanRef<T>`](crate::BeanRef) where `T: Bean`, and
/// implemented by users for enums and `Box<dyn Trait>` interface types (or
/// derived with `#[derive(Stub)]`).
pub trait Stubbable: Any {
	/// Describes `Self` to the registry.
	///
	/// Implementations call exactly one of the registration methods of
	/// [`TypeRegistry`] for `Self`.
	fn register(registry: &mut TypeRegistry);

	/// Natural generic parameters of `Self` (element, key and value types of
	/// a container). Empty for everything else.
	fn generics() -> Vec<TypeKey> {
		Vec::new()
	}
}

/// Natural descriptor of a statically known type.
pub(crate) fn descriptor_of<T: Stubbable>() -> TypeDescriptor {
	TypeDescriptor::new(TypeKey::of::<T>(), T::generics())
}

pub(crate) type LeafFn = Arc<dyn Fn(&mut StubRng) -> Value + Send + Sync>;
pub(crate) type ValueFn = Arc<dyn Fn() -> Value + Send + Sync>;
pub(crate) type CollectFn = Arc<dyn Fn(Vec<Value>) -> StubResult<Value> + Send + Sync>;
pub(crate) type CollectPairsFn =
	Arc<dyn Fn(Vec<(Value, Value)>) -> StubResult<Value> + Send + Sync>;
pub(crate) type AdapterFn = Arc<dyn Fn(InterfaceStub) -> Value + Send + Sync>;

/// Registered structural capability of a type.
pub(crate) enum Shape {
	Leaf(LeafFn),
	Enum(Vec<ValueFn>),
	Array { component: TypeKey, collect: CollectFn },
	Sequence(CollectFn),
	Set(CollectFn),
	Map(CollectPairsFn),
	Interface(InterfaceShape),
	Bean(BeanShape),
}

pub(crate) struct InterfaceShape {
	pub(crate) members: Arc<[MemberSignature]>,
	pub(crate) adapter: AdapterFn,
}

pub(crate) struct TypeEntry {
	pub(crate) key: TypeKey,
	pub(crate) generics: Vec<TypeKey>,
	pub(crate) shape: Shape,
}

impl TypeEntry {
	pub(crate) fn descriptor(&self) -> TypeDescriptor {
		TypeDescriptor::new(self.key, self.generics.clone())
	}
}

/// Table of synthesizable types, keyed by type identity.
pub struct TypeRegistry {
	entries: HashMap<TypeKey, Arc<TypeEntry>>,
	pending: HashSet<TypeKey>,
}

impl TypeRegistry {
	/// Creates a registry holding every built-in leaf type.
	///
	/// # Examples
	///
	/// ```
	/// use stubforge_core::{TypeKey, TypeRegistry};
	///
	/// let registry = TypeRegistry::new();
	/// assert!(registry.contains(TypeKey::of::<String>()));
	/// assert!(!registry.contains(TypeKey::of::<Vec<String>>()));
	/// ```
	pub fn new() -> Self {
		let mut registry = Self::empty();
		leaves::register_defaults(&mut registry);
		registry
	}

	/// Creates a registry without any types.
	pub fn empty() -> Self {
		Self {
			entries: HashMap::new(),
			pending: HashSet::new(),
		}
	}

	/// Registers `T`, and transitively every type it mentions, unless it is
	/// already known.
	pub fn ensure<T: Stubbable>(&mut self) {
		let key = TypeKey::of::<T>();
		if self.entries.contains_key(&key) || !self.pending.insert(key) {
			return;
		}
		T::register(self);
		self.pending.remove(&key);
	}

	/// Returns true if the type is registered.
	pub fn contains(&self, key: TypeKey) -> bool {
		self.entries.contains_key(&key)
	}

	/// Returns the number of registered types.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no type is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the natural descriptor of a registered type, or a descriptor
	/// without generic parameters for an unknown one.
	pub fn descriptor(&self, key: TypeKey) -> TypeDescriptor {
		self.entries
			.get(&key)
			.map(|entry| entry.descriptor())
			.unwrap_or_else(|| TypeDescriptor::from(key))
	}

	/// Registers `T` as a leaf produced by `generate`.
	///
	/// Registering a leaf for an already-registered type replaces it.
	pub fn leaf<T: Stubbable>(&mut self, generate: impl Fn(&mut StubRng) -> T + Send + Sync + 'static) {
		let generate: LeafFn = Arc::new(move |rng| Value::new(generate(rng)));
		self.insert(TypeKey::of::<T>(), T::generics(), Shape::Leaf(generate));
	}

	/// Registers `T` as an enum with the given constants.
	///
	/// An enum registered without constants cannot be synthesized.
	pub fn enumeration<T>(&mut self, constants: impl IntoIterator<Item = T>)
	where
		T: Stubbable + Clone + Send + Sync,
	{
		let constants = constants
			.into_iter()
			.map(|constant| -> ValueFn { Arc::new(move || Value::new(constant.clone())) })
			.collect();
		self.insert(TypeKey::of::<T>(), T::generics(), Shape::Enum(constants));
	}

	/// Registers `C` as a fixed-size array of `T`, built from exactly
	/// collection-size elements.
	pub fn array<C: Stubbable, T: Stubbable>(
		&mut self,
		collect: impl Fn(Vec<T>) -> C + Send + Sync + 'static,
	) {
		self.ensure::<T>();
		let shape = Shape::Array {
			component: TypeKey::of::<T>(),
			collect: collector(collect),
		};
		self.insert(TypeKey::of::<C>(), C::generics(), shape);
	}

	/// Registers `C` as an ordered sequence of `T`.
	pub fn sequence<C: Stubbable, T: Stubbable>(
		&mut self,
		collect: impl Fn(Vec<T>) -> C + Send + Sync + 'static,
	) {
		self.ensure::<T>();
		self.insert(TypeKey::of::<C>(), C::generics(), Shape::Sequence(collector(collect)));
	}

	/// Registers `C` as a set of `T`. Duplicate elements collapse.
	pub fn set<C: Stubbable, T: Stubbable>(
		&mut self,
		collect: impl Fn(Vec<T>) -> C + Send + Sync + 'static,
	) {
		self.ensure::<T>();
		self.insert(TypeKey::of::<C>(), C::generics(), Shape::Set(collector(collect)));
	}

	/// Registers `C` as a map from `K` to `V`. Duplicate keys collapse.
	pub fn map<C: Stubbable, K: Stubbable, V: Stubbable>(
		&mut self,
		collect: impl Fn(Vec<(K, V)>) -> C + Send + Sync + 'static,
	) {
		self.ensure::<K>();
		self.ensure::<V>();
		let collect: CollectPairsFn = Arc::new(move |pairs: Vec<(Value, Value)>| {
			let pairs = pairs
				.into_iter()
				.map(|(key, value)| Ok((key.take::<K>()?, value.take::<V>()?)))
				.collect::<StubResult<Vec<(K, V)>>>()?;
			Ok(Value::new(collect(pairs)))
		});
		self.insert(TypeKey::of::<C>(), C::generics(), Shape::Map(collect));
	}

	/// Starts registering `I` as an interface type, usually `Box<dyn Trait>`.
	pub fn interface<I: Stubbable>(&mut self) -> InterfaceBuilder<'_, I> {
		InterfaceBuilder::new(self)
	}

	/// Registers the bean `T` under the identity of [`BeanRef<T>`](crate::BeanRef).
	pub(crate) fn bean<T: Bean>(&mut self) {
		let mut builder = BeanBuilder::new(self);
		T::describe(&mut builder);
		let shape = builder.finish();
		self.insert(
			TypeKey::of::<crate::BeanRef<T>>(),
			Vec::new(),
			Shape::Bean(shape),
		);
	}

	pub(crate) fn insert(&mut self, key: TypeKey, generics: Vec<TypeKey>, shape: Shape) {
		self.entries
			.insert(key, Arc::new(TypeEntry { key, generics, shape }));
	}

	pub(crate) fn get(&self, key: TypeKey) -> Option<Arc<TypeEntry>> {
		self.entries.get(&key).cloned()
	}
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("types", &self.entries.keys().collect::<Vec<_>>())
			.finish()
	}
}

fn collector<C: Any, T: Any>(collect: impl Fn(Vec<T>) -> C + Send + Sync + 'static) -> CollectFn {
	Arc::new(move |elements: Vec<Value>| {
		let items = elements
			.into_iter()
			.map(Value::take::<T>)
			.collect::<StubResult<Vec<T>>>()?;
		Ok(Value::new(collect(items)))
	})
}
