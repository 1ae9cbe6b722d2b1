//! Container synthesis.
//!
//! Sequences and arrays receive exactly collection-size elements. Sets and
//! maps receive collection-size candidates; duplicates collapse, so they may
//! end up smaller.

use crate::error::{StubError, StubResult};
use crate::registry::{CollectFn, CollectPairsFn, TypeEntry};
use crate::resolver::TypeKind;
use crate::synthesizer::Session;
use crate::types::{TypeDescriptor, TypeKey};
use crate::value::Value;

/// Fills an array with collection-size component values.
pub(crate) fn synthesize_array(
	session: &mut Session<'_>,
	component: TypeKey,
	collect: &CollectFn,
) -> StubResult<Value> {
	let component = session.factory().descriptor(component);
	let elements = session.synthesize_many(&component)?;
	collect(elements)
}

/// Fills a sequence or set with values of its single generic parameter.
pub(crate) fn synthesize_elements(
	session: &mut Session<'_>,
	kind: TypeKind,
	entry: &TypeEntry,
	descriptor: &TypeDescriptor,
	collect: &CollectFn,
) -> StubResult<Value> {
	check_arity(kind, entry, descriptor)?;
	let element = session.factory().descriptor(descriptor.generics()[0]);
	let elements = session.synthesize_many(&element)?;
	collect(elements)
}

/// Fills a map with independently synthesized keys and values.
pub(crate) fn synthesize_map(
	session: &mut Session<'_>,
	entry: &TypeEntry,
	descriptor: &TypeDescriptor,
	collect: &CollectPairsFn,
) -> StubResult<Value> {
	check_arity(TypeKind::Map, entry, descriptor)?;
	let key = session.factory().descriptor(descriptor.generics()[0]);
	let value = session.factory().descriptor(descriptor.generics()[1]);
	let pairs = (0..session.collection_size())
		.map(|_| -> StubResult<(Value, Value)> {
			Ok((session.synthesize(&key)?, session.synthesize(&value)?))
		})
		.collect::<StubResult<Vec<_>>>()?;
	collect(pairs)
}

fn check_arity(kind: TypeKind, entry: &TypeEntry, descriptor: &TypeDescriptor) -> StubResult<()> {
	let expected = kind.generic_arity().unwrap_or_default();
	let actual = descriptor.generics().len();
	if actual != expected {
		return Err(StubError::InvalidGenericArity {
			type_name: entry.key.name().to_string(),
			expected,
			actual,
		});
	}
	Ok(())
}
