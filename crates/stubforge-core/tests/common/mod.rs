//! Model types shared by the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use stubforge_core::{
	Bean, BeanBuilder, BeanRef, InterfaceStub, StubResult, Stubbable, TypeRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BasicEnum {
	Alpha,
	Beta,
	Gamma,
}

impl Stubbable for BasicEnum {
	fn register(registry: &mut TypeRegistry) {
		registry.enumeration([BasicEnum::Alpha, BasicEnum::Beta, BasicEnum::Gamma]);
	}
}

/// Bean with a scalar pair and a property of its own type.
#[derive(Debug, Default)]
pub struct SimplePojo {
	pub name: Option<String>,
	pub an_int: i32,
	pub same: Option<BeanRef<SimplePojo>>,
}

impl Bean for SimplePojo {
	fn describe(bean: &mut BeanBuilder<'_, Self>) {
		bean.no_arg(SimplePojo::default)
			.mutator("set_name", |p: &mut SimplePojo, name: String| p.name = Some(name))
			.mutator("set_an_int", |p: &mut SimplePojo, value: i32| p.an_int = value)
			.mutator("set_same", |p: &mut SimplePojo, same: BeanRef<SimplePojo>| {
				p.same = Some(same)
			});
	}
}

pub trait BasicInterface {
	fn get_int(&self) -> StubResult<i32>;
	fn get_string(&self) -> StubResult<String>;
	fn get_simple_pojo(&self) -> StubResult<BeanRef<SimplePojo>>;
	fn get_self(&self) -> StubResult<Box<dyn BasicInterface>>;
	fn ping(&self) -> StubResult<()>;
}

pub struct BasicInterfaceStub(pub InterfaceStub);

impl BasicInterface for BasicInterfaceStub {
	fn get_int(&self) -> StubResult<i32> {
		self.0.invoke("get_int")
	}

	fn get_string(&self) -> StubResult<String> {
		self.0.invoke("get_string")
	}

	fn get_simple_pojo(&self) -> StubResult<BeanRef<SimplePojo>> {
		self.0.invoke("get_simple_pojo")
	}

	fn get_self(&self) -> StubResult<Box<dyn BasicInterface>> {
		self.0.invoke("get_self")
	}

	fn ping(&self) -> StubResult<()> {
		self.0.invoke_void("ping")
	}
}

impl Stubbable for Box<dyn BasicInterface> {
	fn register(registry: &mut TypeRegistry) {
		registry
			.interface::<Self>()
			.member::<i32>("get_int")
			.member::<String>("get_string")
			.member::<BeanRef<SimplePojo>>("get_simple_pojo")
			.member::<Box<dyn BasicInterface>>("get_self")
			.void_member("ping")
			.build(|stub| Box::new(BasicInterfaceStub(stub)) as Box<dyn BasicInterface>);
	}
}

/// Bean touching every kind of type.
#[derive(Default)]
pub struct FullPojo {
	pub string: Option<String>,
	pub an_int: Option<i32>,
	pub a_byte: Option<i8>,
	pub a_char: Option<char>,
	pub a_double: Option<f64>,
	pub a_long: Option<i64>,
	pub a_float: Option<f32>,
	pub date: Option<DateTime<Utc>>,
	pub big_integer: Option<i128>,
	pub big_decimal: Option<Decimal>,
	pub timestamp: Option<NaiveDateTime>,
	pub basic_enum: Option<BasicEnum>,
	pub simple_pojo: Option<BeanRef<SimplePojo>>,
	pub basic_interface: Option<Box<dyn BasicInterface>>,
	pub string_list: Option<Vec<String>>,
	pub date_set: Option<BTreeSet<NaiveDate>>,
	pub int_array: Option<Box<[i32]>>,
	pub map: Option<HashMap<i64, i128>>,
	pub enum_array: Option<Box<[BasicEnum]>>,
	pub complex_map: Option<BTreeMap<BasicEnum, Box<dyn BasicInterface>>>,
}

impl FullPojo {
	pub fn all_populated(&self) -> bool {
		self.string.is_some()
			&& self.an_int.is_some()
			&& self.a_byte.is_some()
			&& self.a_char.is_some()
			&& self.a_double.is_some()
			&& self.a_long.is_some()
			&& self.a_float.is_some()
			&& self.date.is_some()
			&& self.big_integer.is_some()
			&& self.big_decimal.is_some()
			&& self.timestamp.is_some()
			&& self.basic_enum.is_some()
			&& self.simple_pojo.is_some()
			&& self.basic_interface.is_some()
			&& self.string_list.is_some()
			&& self.date_set.is_some()
			&& self.int_array.is_some()
			&& self.map.is_some()
			&& self.enum_array.is_some()
			&& self.complex_map.is_some()
	}
}

impl Bean for FullPojo {
	fn describe(bean: &mut BeanBuilder<'_, Self>) {
		bean.no_arg(FullPojo::default)
			.mutator("set_string", |p: &mut FullPojo, v: String| p.string = Some(v))
			.mutator("set_an_int", |p: &mut FullPojo, v: i32| p.an_int = Some(v))
			.mutator("set_a_byte", |p: &mut FullPojo, v: i8| p.a_byte = Some(v))
			.mutator("set_a_char", |p: &mut FullPojo, v: char| p.a_char = Some(v))
			.mutator("set_a_double", |p: &mut FullPojo, v: f64| p.a_double = Some(v))
			.mutator("set_a_long", |p: &mut FullPojo, v: i64| p.a_long = Some(v))
			.mutator("set_a_float", |p: &mut FullPojo, v: f32| p.a_float = Some(v))
			.mutator("set_date", |p: &mut FullPojo, v: DateTime<Utc>| p.date = Some(v))
			.mutator("set_big_integer", |p: &mut FullPojo, v: i128| p.big_integer = Some(v))
			.mutator("set_big_decimal", |p: &mut FullPojo, v: Decimal| p.big_decimal = Some(v))
			.mutator("set_timestamp", |p: &mut FullPojo, v: NaiveDateTime| p.timestamp = Some(v))
			.mutator("set_basic_enum", |p: &mut FullPojo, v: BasicEnum| p.basic_enum = Some(v))
			.mutator("set_simple_pojo", |p: &mut FullPojo, v: BeanRef<SimplePojo>| {
				p.simple_pojo = Some(v)
			})
			.mutator("set_basic_interface", |p: &mut FullPojo, v: Box<dyn BasicInterface>| {
				p.basic_interface = Some(v)
			})
			.mutator("set_string_list", |p: &mut FullPojo, v: Vec<String>| p.string_list = Some(v))
			.mutator("set_date_set", |p: &mut FullPojo, v: BTreeSet<NaiveDate>| p.date_set = Some(v))
			.mutator("set_int_array", |p: &mut FullPojo, v: Box<[i32]>| p.int_array = Some(v))
			.mutator("set_map", |p: &mut FullPojo, v: HashMap<i64, i128>| p.map = Some(v))
			.mutator("set_enum_array", |p: &mut FullPojo, v: Box<[BasicEnum]>| {
				p.enum_array = Some(v)
			})
			.mutator(
				"set_complex_map",
				|p: &mut FullPojo, v: BTreeMap<BasicEnum, Box<dyn BasicInterface>>| {
					p.complex_map = Some(v)
				},
			);
	}
}

/// Bean without a no-argument constructor.
#[derive(Debug)]
pub struct Account {
	pub owner: String,
	pub balance: i64,
	pub tags: Vec<String>,
}

impl Bean for Account {
	fn describe(bean: &mut BeanBuilder<'_, Self>) {
		bean.constructor(|(owner, balance): (String, i64)| {
			Ok(Account {
				owner,
				balance,
				tags: Vec::new(),
			})
		})
		.sequence_accessor("get_tags", |a: &mut Account| &mut a.tags);
	}
}

/// Bean whose only constructor always fails.
#[derive(Debug)]
pub struct Unbuildable {
	pub value: u8,
}

impl Bean for Unbuildable {
	fn describe(bean: &mut BeanBuilder<'_, Self>) {
		bean.constructor(|(value,): (u8,)| {
			Err(stubforge_core::StubError::InvalidSettings(format!(
				"{value} is never accepted"
			)))
		});
	}
}
