//! Type surface resolution.
//!
//! Classifies a registered type into the kind that drives dispatch and, for
//! beans, lists the writable properties and the read-only sequence accessors.

use std::collections::HashSet;
use std::fmt;

use crate::error::{StubError, StubResult};
use crate::registry::{AccessorMember, Member, MutatorMember, Shape, TypeEntry, TypeRegistry};
use crate::types::{TypeDescriptor, TypeKey};
use crate::value::Value;

const SETTER_PREFIX: &str = "set_";
const GETTER_PREFIX: &str = "get_";

/// Category of a container type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
	/// Ordered sequence.
	Sequence,
	/// Set; duplicate elements collapse.
	Set,
}

/// Category of a type, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
	/// Scalar produced by a leaf generator.
	Leaf,
	/// Key/value container.
	Map,
	/// Sequence or set container.
	Collection(CollectionKind),
	/// Fixed-size array.
	Array,
	/// Enum with registered constants.
	Enum,
	/// Trait object type answered by an interface stub.
	Interface,
	/// Constructible record type populated through mutators.
	Bean,
}

impl TypeKind {
	/// Expected generic arity for container kinds.
	pub fn generic_arity(&self) -> Option<usize> {
		match self {
			Self::Map => Some(2),
			Self::Collection(_) => Some(1),
			_ => None,
		}
	}
}

impl fmt::Display for TypeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Leaf => write!(f, "leaf"),
			Self::Map => write!(f, "map"),
			Self::Collection(CollectionKind::Sequence) => write!(f, "sequence"),
			Self::Collection(CollectionKind::Set) => write!(f, "set"),
			Self::Array => write!(f, "array"),
			Self::Enum => write!(f, "enum"),
			Self::Interface => write!(f, "interface"),
			Self::Bean => write!(f, "bean"),
		}
	}
}

/// A writable property of a bean.
#[derive(Clone)]
pub struct PropertyDescriptor {
	owner: &'static str,
	mutator: MutatorMember,
}

impl PropertyDescriptor {
	/// Returns the mutator name, e.g. `set_name`.
	pub fn name(&self) -> &str {
		&self.mutator.name
	}

	/// Returns the declared argument type.
	pub fn declared(&self) -> &TypeDescriptor {
		&self.mutator.declared
	}

	/// Returns the name of the owning bean type.
	pub fn owner(&self) -> &'static str {
		self.owner
	}

	/// Assigns `value` to `instance` through the mutator.
	pub(crate) fn assign(&self, instance: &Value, value: Value) -> StubResult<()> {
		(self.mutator.apply)(instance, value).map_err(|rejected| StubError::MutatorInvocationFailed {
			property: self.mutator.name.clone(),
			target: self.owner.to_string(),
			value: rejected.name().to_string(),
		})
	}
}

impl fmt::Debug for PropertyDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PropertyDescriptor")
			.field("name", &self.mutator.name)
			.field("declared", &self.mutator.declared)
			.finish()
	}
}

/// A read-only accessor exposing a mutable sequence.
#[derive(Clone)]
pub struct SequenceAccessor {
	owner: &'static str,
	accessor: AccessorMember,
}

impl SequenceAccessor {
	/// Returns the accessor name, e.g. `get_tags`.
	pub fn name(&self) -> &str {
		&self.accessor.name
	}

	/// Returns the element type, `None` if it could not be resolved.
	pub fn element(&self) -> Option<&TypeDescriptor> {
		self.accessor.element.as_ref()
	}

	/// Appends `elements` to the sequence owned by `instance`.
	pub(crate) fn append(&self, instance: &Value, elements: Vec<Value>) -> StubResult<()> {
		(self.accessor.append)(instance, elements).map_err(|rejected| {
			StubError::MutatorInvocationFailed {
				property: self.accessor.name.clone(),
				target: self.owner.to_string(),
				value: rejected.name().to_string(),
			}
		})
	}
}

impl fmt::Debug for SequenceAccessor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SequenceAccessor")
			.field("name", &self.accessor.name)
			.field("element", &self.accessor.element)
			.finish()
	}
}

/// Kind and populatable members of a type.
#[derive(Debug, Clone)]
pub struct TypeSurface {
	kind: TypeKind,
	properties: Vec<PropertyDescriptor>,
	sequence_accessors: Vec<SequenceAccessor>,
}

impl TypeSurface {
	/// Returns the kind.
	pub fn kind(&self) -> TypeKind {
		self.kind
	}

	/// Returns the writable properties, in declaration order.
	pub fn properties(&self) -> &[PropertyDescriptor] {
		&self.properties
	}

	/// Returns the read-only sequence accessors, in declaration order.
	pub fn sequence_accessors(&self) -> &[SequenceAccessor] {
		&self.sequence_accessors
	}
}

/// Resolves the surface of a registered type.
pub fn resolve(registry: &TypeRegistry, key: TypeKey) -> StubResult<TypeSurface> {
	let entry = registry
		.get(key)
		.ok_or_else(|| StubError::UnregisteredType(key.name().to_string()))?;
	Ok(surface_of(&entry))
}

pub(crate) fn classify(shape: &Shape) -> TypeKind {
	match shape {
		Shape::Leaf(_) => TypeKind::Leaf,
		Shape::Map(_) => TypeKind::Map,
		Shape::Sequence(_) => TypeKind::Collection(CollectionKind::Sequence),
		Shape::Set(_) => TypeKind::Collection(CollectionKind::Set),
		Shape::Array { .. } => TypeKind::Array,
		Shape::Enum(_) => TypeKind::Enum,
		Shape::Interface(_) => TypeKind::Interface,
		Shape::Bean(_) => TypeKind::Bean,
	}
}

pub(crate) fn surface_of(entry: &TypeEntry) -> TypeSurface {
	let kind = classify(&entry.shape);
	let Shape::Bean(bean) = &entry.shape else {
		return TypeSurface {
			kind,
			properties: Vec::new(),
			sequence_accessors: Vec::new(),
		};
	};

	let mut setters = HashSet::new();
	let mut properties = Vec::new();
	for member in &bean.members {
		if let Member::Mutator(mutator) = member
			&& !mutator.bridge
			&& let Some(property) = setter_property(&mutator.name)
		{
			setters.insert(property);
			properties.push(PropertyDescriptor {
				owner: bean.name,
				mutator: mutator.clone(),
			});
		}
	}

	let sequence_accessors = bean
		.members
		.iter()
		.filter_map(|member| match member {
			Member::Accessor(accessor) => Some(accessor),
			Member::Mutator(_) => None,
		})
		.filter(|accessor| {
			getter_property(&accessor.name).is_some_and(|property| !setters.contains(property))
		})
		.map(|accessor| SequenceAccessor {
			owner: bean.name,
			accessor: accessor.clone(),
		})
		.collect();

	TypeSurface {
		kind,
		properties,
		sequence_accessors,
	}
}

/// Returns the property name of a `set_<property>` mutator.
pub fn setter_property(name: &str) -> Option<&str> {
	name.strip_prefix(SETTER_PREFIX).filter(|rest| !rest.is_empty())
}

/// Returns the property name of a `get_<property>` accessor.
pub fn getter_property(name: &str) -> Option<&str> {
	name.strip_prefix(GETTER_PREFIX).filter(|rest| !rest.is_empty())
}
