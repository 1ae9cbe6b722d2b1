//! Bean descriptions.
//!
//! A bean is a mutable record type populated through named mutators after it
//! has been constructed. Beans live behind a [`BeanRef`] so that a property
//! of a bean can refer back to the bean itself or to any of its ancestors.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{Stubbable, TypeRegistry, ValueFn, descriptor_of};
use crate::error::{StubError, StubResult};
use crate::types::{GenericParams, TypeDescriptor, TypeKey};
use crate::value::{BeanRef, Value, bean_ref};

/// A record type synthesized through its constructors and mutators.
///
/// # Examples
///
/// ```
/// use stubforge_core::{Bean, BeanBuilder};
///
/// #[derive(Default)]
/// struct Person {
/// 	name: Option<String>,
/// 	age: i32,
/// }
///
/// impl Bean for Person {
/// 	fn describe(bean: &mut BeanBuilder<'_, Self>) {
/// 		bean.no_arg(Person::default)
/// 			.mutator("set_name", |p: &mut Person, name: String| p.name = Some(name))
/// 			.mutator("set_age", |p: &mut Person, age: i32| p.age = age);
/// 	}
/// }
/// ```
pub trait Bean: Any + Sized {
	/// Declares the constructors and members of the bean.
	fn describe(bean: &mut BeanBuilder<'_, Self>);
}

impl<T: Bean> Stubbable for BeanRef<T> {
	fn register(registry: &mut TypeRegistry) {
		registry.bean::<T>();
	}
}

/// Restores a shared handle to an in-progress bean.
pub(crate) type Reuse = Box<dyn Fn() -> Value>;

pub(crate) type ShareFn = Arc<dyn Fn(&Value) -> Option<Reuse> + Send + Sync>;
pub(crate) type InvokeFn = Arc<dyn Fn(Vec<Value>) -> StubResult<Value> + Send + Sync>;

/// Assigns a value to an instance; on failure yields the key of the rejected
/// value.
pub(crate) type ApplyFn = Arc<dyn Fn(&Value, Value) -> Result<(), TypeKey> + Send + Sync>;

/// Appends elements to a sequence owned by an instance.
pub(crate) type AppendFn = Arc<dyn Fn(&Value, Vec<Value>) -> Result<(), TypeKey> + Send + Sync>;

pub(crate) struct BeanShape {
	pub(crate) name: &'static str,
	pub(crate) no_arg: Option<ValueFn>,
	pub(crate) constructors: Vec<ConstructorShape>,
	pub(crate) members: Vec<Member>,
	pub(crate) share: ShareFn,
}

#[derive(Clone)]
pub(crate) struct ConstructorShape {
	pub(crate) params: Vec<TypeDescriptor>,
	pub(crate) invoke: InvokeFn,
}

pub(crate) enum Member {
	Mutator(MutatorMember),
	Accessor(AccessorMember),
}

#[derive(Clone)]
pub(crate) struct MutatorMember {
	pub(crate) name: String,
	pub(crate) declared: TypeDescriptor,
	pub(crate) bridge: bool,
	pub(crate) apply: ApplyFn,
}

#[derive(Clone)]
pub(crate) struct AccessorMember {
	pub(crate) name: String,
	pub(crate) element: Option<TypeDescriptor>,
	pub(crate) append: AppendFn,
}

/// Collects the constructors and members of a bean `T`.
///
/// Every type mentioned by a constructor or member is registered as a side
/// effect.
pub struct BeanBuilder<'r, T> {
	registry: &'r mut TypeRegistry,
	no_arg: Option<ValueFn>,
	constructors: Vec<ConstructorShape>,
	members: Vec<Member>,
	_bean: PhantomData<fn() -> T>,
}

impl<'r, T: Bean> BeanBuilder<'r, T> {
	pub(crate) fn new(registry: &'r mut TypeRegistry) -> Self {
		Self {
			registry,
			no_arg: None,
			constructors: Vec::new(),
			members: Vec::new(),
			_bean: PhantomData,
		}
	}

	/// Declares the no-argument constructor. It is always tried first.
	pub fn no_arg(&mut self, construct: impl Fn() -> T + Send + Sync + 'static) -> &mut Self {
		self.no_arg = Some(Arc::new(move || Value::new(bean_ref(construct()))));
		self
	}

	/// Declares a constructor taking the tuple `A` of synthesized arguments.
	///
	/// Constructors are tried in declaration order; one that returns an error
	/// is skipped.
	pub fn constructor<A: ConstructorArgs>(
		&mut self,
		construct: impl Fn(A) -> StubResult<T> + Send + Sync + 'static,
	) -> &mut Self {
		A::register(self.registry);
		let invoke: InvokeFn = Arc::new(move |values| {
			let args = A::from_values(values)?;
			construct(args).map(|bean| Value::new(bean_ref(bean)))
		});
		self.constructors.push(ConstructorShape {
			params: A::params(),
			invoke,
		});
		self
	}

	/// Declares a single-argument mutator. Mutators named `set_<property>`
	/// are populated during synthesis.
	pub fn mutator<V: Stubbable>(
		&mut self,
		name: impl Into<String>,
		assign: impl Fn(&mut T, V) + Send + Sync + 'static,
	) -> &mut Self {
		self.push_mutator(name.into(), GenericParams::Inferred, false, assign)
	}

	/// Declares a mutator whose argument type reports `generics` instead of
	/// its natural generic parameters.
	pub fn mutator_with<V: Stubbable>(
		&mut self,
		name: impl Into<String>,
		generics: GenericParams,
		assign: impl Fn(&mut T, V) + Send + Sync + 'static,
	) -> &mut Self {
		self.push_mutator(name.into(), generics, false, assign)
	}

	/// Declares a compiler-synthesized mutator. Bridge mutators are never
	/// treated as properties.
	pub fn bridge_mutator<V: Stubbable>(
		&mut self,
		name: impl Into<String>,
		assign: impl Fn(&mut T, V) + Send + Sync + 'static,
	) -> &mut Self {
		self.push_mutator(name.into(), GenericParams::Inferred, true, assign)
	}

	/// Declares a read-only accessor exposing a mutable sequence of `E`.
	///
	/// An accessor named `get_<property>` without a matching `set_<property>`
	/// mutator receives collection-size synthesized elements.
	pub fn sequence_accessor<E: Stubbable>(
		&mut self,
		name: impl Into<String>,
		access: impl Fn(&mut T) -> &mut Vec<E> + Send + Sync + 'static,
	) -> &mut Self {
		self.sequence_accessor_with(name, GenericParams::Inferred, access)
	}

	/// Declares a read-only sequence accessor whose element type is reported
	/// through `generics`. With [`GenericParams::Wildcard`] the element type
	/// is unresolved and the accessor is left untouched.
	pub fn sequence_accessor_with<E: Stubbable>(
		&mut self,
		name: impl Into<String>,
		generics: GenericParams,
		access: impl Fn(&mut T) -> &mut Vec<E> + Send + Sync + 'static,
	) -> &mut Self {
		self.registry.ensure::<E>();
		let natural = TypeKey::of::<E>();
		let element = generics.resolve(vec![natural]).first().map(|key| {
			if *key == natural {
				descriptor_of::<E>()
			} else {
				TypeDescriptor::from(*key)
			}
		});
		let append: AppendFn = Arc::new(move |instance: &Value, elements: Vec<Value>| {
			let bean = instance
				.downcast_ref::<BeanRef<T>>()
				.ok_or_else(|| instance.key())?;
			let elements = elements
				.into_iter()
				.map(|element| element.downcast::<E>().map_err(|element| element.key()))
				.collect::<Result<Vec<E>, TypeKey>>()?;
			let mut bean = bean.try_borrow_mut().map_err(|_| natural)?;
			access(&mut bean).extend(elements);
			Ok(())
		});
		self.members.push(Member::Accessor(AccessorMember {
			name: name.into(),
			element,
			append,
		}));
		self
	}

	/// Gives access to the registry, to register types only reachable
	/// through overrides or interface members.
	pub fn registry(&mut self) -> &mut TypeRegistry {
		self.registry
	}

	fn push_mutator<V: Stubbable>(
		&mut self,
		name: String,
		generics: GenericParams,
		bridge: bool,
		assign: impl Fn(&mut T, V) + Send + Sync + 'static,
	) -> &mut Self {
		self.registry.ensure::<V>();
		let declared = TypeDescriptor::new(TypeKey::of::<V>(), generics.resolve(V::generics()));
		let apply: ApplyFn = Arc::new(move |instance: &Value, value: Value| {
			let bean = instance
				.downcast_ref::<BeanRef<T>>()
				.ok_or_else(|| value.key())?;
			let value = value.downcast::<V>().map_err(|value| value.key())?;
			let mut bean = bean.try_borrow_mut().map_err(|_| TypeKey::of::<V>())?;
			assign(&mut bean, value);
			Ok(())
		});
		self.members.push(Member::Mutator(MutatorMember {
			name,
			declared,
			bridge,
			apply,
		}));
		self
	}

	pub(crate) fn finish(self) -> BeanShape {
		let share: ShareFn = Arc::new(|instance: &Value| {
			let bean = instance.downcast_ref::<BeanRef<T>>()?.clone();
			Some(Box::new(move || Value::new(bean.clone())) as Reuse)
		});
		BeanShape {
			name: std::any::type_name::<T>(),
			no_arg: self.no_arg,
			constructors: self.constructors,
			members: self.members,
			share,
		}
	}
}

/// Argument tuple of a bean constructor.
///
/// Implemented for `()` and for tuples of up to six [`Stubbable`] types.
pub trait ConstructorArgs: Sized + 'static {
	/// Registers every argument type.
	fn register(registry: &mut TypeRegistry);

	/// Returns the argument descriptors, in order.
	fn params() -> Vec<TypeDescriptor>;

	/// Rebuilds the tuple from synthesized arguments.
	fn from_values(values: Vec<Value>) -> StubResult<Self>;
}

impl ConstructorArgs for () {
	fn register(_registry: &mut TypeRegistry) {}

	fn params() -> Vec<TypeDescriptor> {
		Vec::new()
	}

	fn from_values(_values: Vec<Value>) -> StubResult<Self> {
		Ok(())
	}
}

fn next_arg<A: Any>(values: &mut impl Iterator<Item = Value>) -> StubResult<A> {
	values
		.next()
		.ok_or_else(|| StubError::TypeMismatch {
			expected: TypeKey::of::<A>().name().to_string(),
			actual: "missing argument".to_string(),
		})?
		.take::<A>()
}

macro_rules! impl_constructor_args {
	($($arg:ident),+) => {
		impl<$($arg: Stubbable),+> ConstructorArgs for ($($arg,)+) {
			fn register(registry: &mut TypeRegistry) {
				$(registry.ensure::<$arg>();)+
			}

			fn params() -> Vec<TypeDescriptor> {
				vec![$(descriptor_of::<$arg>()),+]
			}

			fn from_values(values: Vec<Value>) -> StubResult<Self> {
				let mut values = values.into_iter();
				Ok(($(next_arg::<$arg>(&mut values)?,)+))
			}
		}
	};
}

impl_constructor_args!(A);
impl_constructor_args!(A, B);
impl_constructor_args!(A, B, C);
impl_constructor_args!(A, B, C, D);
impl_constructor_args!(A, B, C, D, E);
impl_constructor_args!(A, B, C, D, E, F);
