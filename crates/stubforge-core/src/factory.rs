//! The stub factory.
//!
//! A [`StubFactory`] bundles immutable settings and overrides with the type
//! registry. It is a cheap, `Send + Sync` handle: clones share one registry.
//! The registry lock is only held while a type is looked up or registered,
//! never while user code runs, so suppliers and interface adapters may call
//! back into the factory.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;

use crate::builder::StubFactoryBuilder;
use crate::error::{StubError, StubResult};
use crate::overrides::OverrideRegistry;
use crate::random::StubRng;
use crate::registry::{Bean, Stubbable, TypeEntry, TypeRegistry};
use crate::resolver::{self, TypeSurface};
use crate::settings::StubSettings;
use crate::synthesizer::Session;
use crate::types::{TypeDescriptor, TypeKey};
use crate::value::{BeanRef, Value};

struct FactoryInner {
	settings: StubSettings,
	overrides: OverrideRegistry,
	types: RwLock<TypeRegistry>,
	sessions: AtomicU64,
}

/// Synthesizes populated instances of registered types.
///
/// # Examples
///
/// ```
/// use stubforge_core::StubFactory;
///
/// let factory = StubFactory::new();
/// let names: Vec<String> = factory.create_stub().unwrap();
/// assert_eq!(names.len(), 3);
/// assert!(names.iter().all(|name| name.len() == 5));
/// ```
#[derive(Clone)]
pub struct StubFactory {
	inner: Arc<FactoryInner>,
}

impl StubFactory {
	/// Creates a factory with the default settings and no overrides.
	pub fn new() -> Self {
		Self::builder().build()
	}

	/// Creates a factory producing containers of `collection_size` elements.
	pub fn with_collection_size(collection_size: usize) -> Self {
		Self::builder().collection_size(collection_size).build()
	}

	/// Starts configuring a factory.
	pub fn builder() -> StubFactoryBuilder {
		StubFactoryBuilder::new()
	}

	pub(crate) fn from_parts(settings: StubSettings, overrides: OverrideRegistry, types: TypeRegistry) -> Self {
		debug!(
			collection_size = settings.collection_size,
			seed = ?settings.seed,
			overrides = overrides.len(),
			"Created stub factory"
		);
		Self {
			inner: Arc::new(FactoryInner {
				settings,
				overrides,
				types: RwLock::new(types),
				sessions: AtomicU64::new(0),
			}),
		}
	}

	/// Returns the settings.
	pub fn settings(&self) -> &StubSettings {
		&self.inner.settings
	}

	/// Returns the configured collection size.
	pub fn collection_size(&self) -> usize {
		self.inner.settings.collection_size
	}

	/// Returns the registered overrides.
	pub fn overrides(&self) -> &OverrideRegistry {
		&self.inner.overrides
	}

	/// Registers `T` and every type reachable from it.
	pub fn register<T: Stubbable>(&self) {
		let key = TypeKey::of::<T>();
		if self.inner.types.read().contains(key) {
			return;
		}
		self.inner.types.write().ensure::<T>();
	}

	/// Returns true if the type is registered.
	pub fn is_registered(&self, key: TypeKey) -> bool {
		self.inner.types.read().contains(key)
	}

	/// Returns the natural descriptor of a type.
	pub fn descriptor(&self, key: TypeKey) -> TypeDescriptor {
		self.inner.types.read().descriptor(key)
	}

	/// Resolves the kind and populatable members of a registered type.
	pub fn resolve(&self, key: TypeKey) -> StubResult<TypeSurface> {
		resolver::resolve(&self.inner.types.read(), key)
	}

	/// Creates one instance of `T`.
	///
	/// Containers are instantiated with their natural generic parameters.
	pub fn create_stub<T: Stubbable>(&self) -> StubResult<T> {
		self.register::<T>();
		let descriptor = self.descriptor(TypeKey::of::<T>());
		self.synthesize(&descriptor)?.take::<T>()
	}

	/// Creates one instance of `T`, reporting `generics` as its generic
	/// parameters.
	///
	/// # Errors
	///
	/// Fails with [`StubError::InvalidGenericArity`] if `T` is a container
	/// and `generics` does not have its arity.
	pub fn create_stub_with<T: Stubbable>(&self, generics: &[TypeKey]) -> StubResult<T> {
		self.register::<T>();
		let descriptor = TypeDescriptor::new(TypeKey::of::<T>(), generics.to_vec());
		self.synthesize(&descriptor)?.take::<T>()
	}

	/// Creates one populated bean.
	pub fn create_bean<B: Bean>(&self) -> StubResult<BeanRef<B>> {
		self.create_stub::<BeanRef<B>>()
	}

	/// Creates `count` independent instances of `T` and collects them into
	/// the container returned by `make`.
	///
	/// Every instance is synthesized in its own session, so no bean is shared
	/// between two elements.
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::BTreeSet;
	/// use stubforge_core::StubFactory;
	///
	/// let factory = StubFactory::new();
	/// let codes = factory.create_stub_collection::<u64, _>(4, Vec::new).unwrap();
	/// assert_eq!(codes.len(), 4);
	///
	/// let unique = factory.create_stub_collection::<u64, _>(4, BTreeSet::new).unwrap();
	/// assert!(unique.len() <= 4);
	/// ```
	pub fn create_stub_collection<T, C>(&self, count: usize, make: impl FnOnce() -> C) -> StubResult<C>
	where
		C: Extend<T>,
		T: Stubbable,
	{
		self.register::<T>();
		let descriptor = self.descriptor(TypeKey::of::<T>());
		self.collect_stubs(count, make, &descriptor)
	}

	/// Like [`StubFactory::create_stub_collection`], reporting `generics` as
	/// the generic parameters of every element.
	pub fn create_stub_collection_with<T, C>(
		&self,
		count: usize,
		make: impl FnOnce() -> C,
		generics: &[TypeKey],
	) -> StubResult<C>
	where
		C: Extend<T>,
		T: Stubbable,
	{
		self.register::<T>();
		let descriptor = TypeDescriptor::new(TypeKey::of::<T>(), generics.to_vec());
		self.collect_stubs(count, make, &descriptor)
	}

	/// Synthesizes one value of a registered type in a new session.
	pub fn synthesize(&self, descriptor: &TypeDescriptor) -> StubResult<Value> {
		Session::open(self).synthesize(descriptor)
	}

	fn collect_stubs<T, C>(&self, count: usize, make: impl FnOnce() -> C, descriptor: &TypeDescriptor) -> StubResult<C>
	where
		C: Extend<T>,
		T: Stubbable,
	{
		let mut collection = make();
		for _ in 0..count {
			let item = self.synthesize(descriptor)?.take::<T>()?;
			collection.extend(Some(item));
		}
		Ok(collection)
	}

	pub(crate) fn entry(&self, key: TypeKey) -> StubResult<Arc<TypeEntry>> {
		self.inner
			.types
			.read()
			.get(key)
			.ok_or_else(|| StubError::UnregisteredType(key.name().to_string()))
	}

	/// Numbers a new session and derives its random source.
	///
	/// With a seed, the n-th session of the factory is seeded with
	/// `seed + n`, so a replayed sequence of calls sees identical values.
	pub(crate) fn next_session(&self) -> (u64, StubRng) {
		let id = self.inner.sessions.fetch_add(1, Ordering::Relaxed);
		let rng = match self.inner.settings.seed {
			Some(seed) => StubRng::seeded(seed.wrapping_add(id)),
			None => StubRng::from_entropy(),
		};
		(id, rng)
	}
}

impl Default for StubFactory {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for StubFactory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StubFactory")
			.field("settings", &self.inner.settings)
			.field("overrides", &self.inner.overrides)
			.field("types", &self.inner.types.read().len())
			.finish()
	}
}
