//! Type identities and synthesis-time descriptors.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a synthesizable type.
///
/// Equality and hashing only consider the [`TypeId`]; the type name is kept
/// for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	/// Returns the key of `T`.
	///
	/// # Examples
	///
	/// ```
	/// use stubforge_core::TypeKey;
	///
	/// let key = TypeKey::of::<String>();
	/// assert_eq!(key, TypeKey::of::<String>());
	/// assert_ne!(key, TypeKey::of::<i32>());
	/// ```
	pub fn of<T: Any + ?Sized>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Returns the underlying [`TypeId`].
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Returns the full type name.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl fmt::Display for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// A type together with the generic parameters it is instantiated with.
///
/// Container dispatch reads the generic parameters to decide which element,
/// key and value types to synthesize.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
	key: TypeKey,
	generics: Vec<TypeKey>,
}

impl TypeDescriptor {
	/// Creates a descriptor from a key and explicit generic parameters.
	pub fn new(key: TypeKey, generics: Vec<TypeKey>) -> Self {
		Self { key, generics }
	}

	/// Creates a descriptor for `T` without generic parameters.
	pub fn of<T: Any + ?Sized>() -> Self {
		Self::new(TypeKey::of::<T>(), Vec::new())
	}

	/// Replaces the generic parameters.
	pub fn with_generics(mut self, generics: impl IntoIterator<Item = TypeKey>) -> Self {
		self.generics = generics.into_iter().collect();
		self
	}

	/// Returns the type identity.
	pub fn key(&self) -> TypeKey {
		self.key
	}

	/// Returns the generic parameters, in declaration order.
	pub fn generics(&self) -> &[TypeKey] {
		&self.generics
	}
}

impl From<TypeKey> for TypeDescriptor {
	fn from(key: TypeKey) -> Self {
		Self::new(key, Vec::new())
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.key)?;
		if !self.generics.is_empty() {
			let names: Vec<&str> = self.generics.iter().map(TypeKey::name).collect();
			write!(f, " [{}]", names.join(", "))?;
		}
		Ok(())
	}
}

/// How a member declares the generic parameters of its type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenericParams {
	/// Use the natural generic parameters of the declared Rust type.
	#[default]
	Inferred,
	/// Use these generic parameters.
	Explicit(Vec<TypeKey>),
	/// The parameters are an unresolved type variable or wildcard; the member
	/// reports no generic parameters.
	Wildcard,
}

impl GenericParams {
	/// Resolves to concrete parameters, given the natural ones of the type.
	pub fn resolve(&self, natural: Vec<TypeKey>) -> Vec<TypeKey> {
		match self {
			Self::Inferred => natural,
			Self::Explicit(generics) => generics.clone(),
			Self::Wildcard => Vec::new(),
		}
	}
}
