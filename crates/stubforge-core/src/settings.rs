//! Factory settings.
//!
//! Settings can be built in code, parsed from TOML or read from environment
//! variables:
//!
//! ```toml
//! collection_size = 5
//! seed = 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StubError, StubResult};

/// Number of elements generated per container when nothing else is configured.
pub const DEFAULT_COLLECTION_SIZE: usize = 3;

/// Environment variable holding the collection size.
pub const COLLECTION_SIZE_ENV: &str = "STUBFORGE_COLLECTION_SIZE";

/// Environment variable holding the seed.
pub const SEED_ENV: &str = "STUBFORGE_SEED";

/// Settings of a [`StubFactory`](crate::StubFactory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubSettings {
	/// Number of elements generated per sequence, set, map or array.
	pub collection_size: usize,
	/// Seed of the random sources. `None` seeds every session from entropy.
	pub seed: Option<u64>,
}

impl Default for StubSettings {
	fn default() -> Self {
		Self {
			collection_size: DEFAULT_COLLECTION_SIZE,
			seed: None,
		}
	}
}

impl StubSettings {
	/// Creates the default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the collection size.
	pub fn with_collection_size(mut self, collection_size: usize) -> Self {
		self.collection_size = collection_size;
		self
	}

	/// Sets the seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Parses settings from TOML. Missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use stubforge_core::StubSettings;
	///
	/// let settings = StubSettings::from_toml_str("seed = 7").unwrap();
	/// assert_eq!(settings.collection_size, 3);
	/// assert_eq!(settings.seed, Some(7));
	/// ```
	pub fn from_toml_str(source: &str) -> StubResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads settings from a TOML file.
	pub fn from_toml_file(path: impl AsRef<Path>) -> StubResult<Self> {
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// Reads settings from [`COLLECTION_SIZE_ENV`] and [`SEED_ENV`].
	pub fn from_env() -> StubResult<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads settings through `lookup`, which maps a variable name to its
	/// value. Unset variables keep their defaults.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StubResult<Self> {
		let mut settings = Self::default();
		if let Some(raw) = lookup(COLLECTION_SIZE_ENV) {
			settings.collection_size = parse_var(COLLECTION_SIZE_ENV, &raw)?;
		}
		if let Some(raw) = lookup(SEED_ENV) {
			settings.seed = Some(parse_var(SEED_ENV, &raw)?);
		}
		Ok(settings)
	}
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> StubResult<T>
where
	T::Err: std::fmt::Display,
{
	raw.trim()
		.parse()
		.map_err(|error| StubError::InvalidSettings(format!("{name}={raw:?}: {error}")))
}
