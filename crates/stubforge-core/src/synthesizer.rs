//! Recursive value synthesis.
//!
//! A [`Session`] owns the recursion guard and random source of one top-level
//! request and dispatches every descriptor on the kind of its registered
//! type, in this order: leaf, enum, array, collection or map, interface,
//! bean.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::collection;
use crate::error::{StubError, StubResult};
use crate::factory::StubFactory;
use crate::guard::RecursionGuard;
use crate::random::StubRng;
use crate::registry::{BeanShape, ConstructorShape, Shape, TypeEntry};
use crate::resolver::{self, CollectionKind, TypeKind};
use crate::stub;
use crate::types::{TypeDescriptor, TypeKey};
use crate::value::Value;

/// State of one top-level synthesis request.
pub(crate) struct Session<'f> {
	factory: &'f StubFactory,
	guard: RecursionGuard,
	constructing: HashSet<TypeKey>,
	rng: StubRng,
}

impl<'f> Session<'f> {
	/// Opens a session with an empty guard and the next random source of the
	/// factory.
	pub(crate) fn open(factory: &'f StubFactory) -> Self {
		let (id, rng) = factory.next_session();
		debug!(session = id, "Opened synthesis session");
		Self {
			factory,
			guard: RecursionGuard::new(),
			constructing: HashSet::new(),
			rng,
		}
	}

	pub(crate) fn factory(&self) -> &'f StubFactory {
		self.factory
	}

	pub(crate) fn collection_size(&self) -> usize {
		self.factory.collection_size()
	}

	/// Synthesizes one value of `descriptor`.
	pub(crate) fn synthesize(&mut self, descriptor: &TypeDescriptor) -> StubResult<Value> {
		let entry = self.factory.entry(descriptor.key())?;
		match &entry.shape {
			Shape::Leaf(generate) => Ok(generate(&mut self.rng)),
			Shape::Enum(constants) => {
				if constants.is_empty() {
					return Err(StubError::NoUsableConstructor(entry.key.name().to_string()));
				}
				let constant = &constants[self.rng.next_index(constants.len())];
				Ok(constant())
			}
			Shape::Array { component, collect } => {
				collection::synthesize_array(self, *component, collect)
			}
			Shape::Sequence(collect) => collection::synthesize_elements(
				self,
				TypeKind::Collection(CollectionKind::Sequence),
				&entry,
				descriptor,
				collect,
			),
			Shape::Set(collect) => collection::synthesize_elements(
				self,
				TypeKind::Collection(CollectionKind::Set),
				&entry,
				descriptor,
				collect,
			),
			Shape::Map(collect) => collection::synthesize_map(self, &entry, descriptor, collect),
			Shape::Interface(shape) => Ok(stub::generate(self.factory, entry.key, shape)),
			Shape::Bean(bean) => {
				if let Some(instance) = self.guard.reuse(entry.key) {
					trace!(bean = bean.name, "Reusing in-progress instance");
					return Ok(instance);
				}
				self.synthesize_bean(&entry, bean)
			}
		}
	}

	/// Synthesizes collection-size values of `descriptor`.
	pub(crate) fn synthesize_many(&mut self, descriptor: &TypeDescriptor) -> StubResult<Vec<Value>> {
		(0..self.collection_size())
			.map(|_| self.synthesize(descriptor))
			.collect()
	}

	fn synthesize_bean(&mut self, entry: &TypeEntry, bean: &BeanShape) -> StubResult<Value> {
		// A constructor needing an instance of its own type cannot be satisfied.
		if !self.constructing.insert(entry.key) {
			return Err(StubError::NoUsableConstructor(bean.name.to_string()));
		}
		let constructed = self.construct(bean);
		self.constructing.remove(&entry.key);
		let instance = constructed?;
		let reuse = (bean.share)(&instance).ok_or_else(|| StubError::TypeMismatch {
			expected: entry.key.name().to_string(),
			actual: instance.key().name().to_string(),
		})?;

		self.guard.enter(entry.key, reuse);
		let populated = self.populate(entry, bean, &instance);
		self.guard.exit(entry.key);

		populated.map(|()| instance)
	}

	fn construct(&mut self, bean: &BeanShape) -> StubResult<Value> {
		if let Some(no_arg) = &bean.no_arg {
			return Ok(no_arg());
		}
		for (index, constructor) in bean.constructors.iter().enumerate() {
			match self.invoke_constructor(constructor) {
				Ok(instance) => return Ok(instance),
				Err(error) => debug!(
					bean = bean.name,
					constructor = index,
					%error,
					"Constructor rejected, trying the next one"
				),
			}
		}
		Err(StubError::NoUsableConstructor(bean.name.to_string()))
	}

	fn invoke_constructor(&mut self, constructor: &ConstructorShape) -> StubResult<Value> {
		let args = constructor
			.params
			.iter()
			.map(|param| self.synthesize(param))
			.collect::<StubResult<Vec<_>>>()?;
		(constructor.invoke)(args)
	}

	fn populate(&mut self, entry: &TypeEntry, bean: &BeanShape, instance: &Value) -> StubResult<()> {
		let surface = resolver::surface_of(entry);
		let factory = self.factory;
		let overrides = factory.overrides();

		for property in surface.properties() {
			let name = property.name();
			if overrides.is_suppressed(name) {
				trace!(bean = bean.name, property = name, "Skipping suppressed property");
				continue;
			}
			let value = match overrides.resolve(name, &mut self.rng) {
				Some(value) => {
					trace!(bean = bean.name, property = name, "Assigning override");
					value
				}
				None => self.synthesize(property.declared())?,
			};
			property.assign(instance, value)?;
		}

		for accessor in surface.sequence_accessors() {
			let Some(element) = accessor.element() else {
				warn!(
					bean = bean.name,
					accessor = accessor.name(),
					"Skipping read-only accessor with unresolved element type"
				);
				continue;
			};
			let elements = self.synthesize_many(element)?;
			accessor.append(instance, elements)?;
		}
		Ok(())
	}
}
