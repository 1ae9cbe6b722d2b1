//! Factory configuration.

use std::any::Any;
use std::fmt;

use crate::error::StubResult;
use crate::factory::StubFactory;
use crate::overrides::OverrideRegistry;
use crate::registry::{Stubbable, TypeRegistry};
use crate::settings::StubSettings;
use crate::types::TypeKey;

/// Builder for [`StubFactory`].
///
/// # Examples
///
/// ```
/// use stubforge_core::StubFactory;
///
/// let factory = StubFactory::builder()
/// 	.collection_size(5)
/// 	.seed(42)
/// 	.add_custom_value("set_status", ["active", "suspended"])
/// 	.unwrap()
/// 	.add_ignored_setter("set_password")
/// 	.unwrap()
/// 	.build();
///
/// assert_eq!(factory.collection_size(), 5);
/// assert!(factory.overrides().is_suppressed("set_password"));
/// ```
pub struct StubFactoryBuilder {
	settings: StubSettings,
	overrides: OverrideRegistry,
	types: TypeRegistry,
}

impl StubFactoryBuilder {
	/// Creates a builder with the default settings.
	pub fn new() -> Self {
		Self {
			settings: StubSettings::default(),
			overrides: OverrideRegistry::new(),
			types: TypeRegistry::new(),
		}
	}

	/// Replaces all settings.
	pub fn settings(mut self, settings: StubSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Sets the number of elements generated per container.
	pub fn collection_size(mut self, collection_size: usize) -> Self {
		self.settings.collection_size = collection_size;
		self
	}

	/// Seeds the random sources for reproducible output.
	pub fn seed(mut self, seed: u64) -> Self {
		self.settings.seed = Some(seed);
		self
	}

	/// Assigns `property` a value drawn uniformly from `values`.
	///
	/// # Errors
	///
	/// Fails with [`StubError::InvalidOverride`](crate::StubError::InvalidOverride)
	/// for a blank property name or an empty pool.
	pub fn add_custom_value<V>(mut self, property: &str, values: impl IntoIterator<Item = V>) -> StubResult<Self>
	where
		V: Any + Clone + Send + Sync,
	{
		self.overrides.register_values(property, values)?;
		Ok(self)
	}

	/// Assigns `property` the result of calling `supplier`.
	///
	/// # Errors
	///
	/// Fails with [`StubError::InvalidOverride`](crate::StubError::InvalidOverride)
	/// for a blank property name.
	pub fn add_custom_supplier<V, F>(mut self, property: &str, supplier: F) -> StubResult<Self>
	where
		V: Any,
		F: Fn() -> V + Send + Sync + 'static,
	{
		self.overrides.register_supplier(property, supplier)?;
		Ok(self)
	}

	/// Never assigns `property`.
	///
	/// # Errors
	///
	/// Fails with [`StubError::InvalidOverride`](crate::StubError::InvalidOverride)
	/// for a blank property name.
	pub fn add_ignored_setter(mut self, property: &str) -> StubResult<Self> {
		self.overrides.suppress(property)?;
		Ok(self)
	}

	/// Registers `T` up front.
	pub fn register<T: Stubbable>(mut self) -> Self {
		self.types.ensure::<T>();
		self
	}

	/// Builds the factory.
	pub fn build(self) -> StubFactory {
		StubFactory::from_parts(self.settings, self.overrides, self.types)
	}

	/// Builds the factory and creates one instance of `T` with it.
	///
	/// # Examples
	///
	/// ```
	/// use stubforge_core::StubFactory;
	///
	/// let codes: Vec<u16> = StubFactory::builder().collection_size(2).create_stub().unwrap();
	/// assert_eq!(codes.len(), 2);
	/// ```
	pub fn create_stub<T: Stubbable>(self) -> StubResult<T> {
		self.build().create_stub()
	}

	/// Builds the factory and creates one instance of `T`, reporting
	/// `generics` as its generic parameters.
	pub fn create_stub_with<T: Stubbable>(self, generics: &[TypeKey]) -> StubResult<T> {
		self.build().create_stub_with(generics)
	}

	/// Builds the factory and creates `count` independent instances of `T`,
	/// collected into the container returned by `make`.
	pub fn create_stub_collection<T, C>(self, count: usize, make: impl FnOnce() -> C) -> StubResult<C>
	where
		C: Extend<T>,
		T: Stubbable,
	{
		self.build().create_stub_collection(count, make)
	}

	/// Like [`StubFactoryBuilder::create_stub_collection`], reporting
	/// `generics` as the generic parameters of every element.
	pub fn create_stub_collection_with<T, C>(
		self,
		count: usize,
		make: impl FnOnce() -> C,
		generics: &[TypeKey],
	) -> StubResult<C>
	where
		C: Extend<T>,
		T: Stubbable,
	{
		self.build().create_stub_collection_with(count, make, generics)
	}
}

impl Default for StubFactoryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for StubFactoryBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StubFactoryBuilder")
			.field("settings", &self.settings)
			.field("overrides", &self.overrides)
			.finish_non_exhaustive()
	}
}
