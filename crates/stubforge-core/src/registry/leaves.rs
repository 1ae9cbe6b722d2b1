//! Built-in leaf types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{Stubbable, TypeRegistry};

macro_rules! standard_leaf {
	($($ty:ty),* $(,)?) => {
		$(
			impl Stubbable for $ty {
				fn register(registry: &mut TypeRegistry) {
					registry.leaf::<$ty>(|rng| rng.r#gen::<$ty>());
				}
			}
		)*
	};
}

macro_rules! generated_leaf {
	($($ty:ty => $generate:ident),* $(,)?) => {
		$(
			impl Stubbable for $ty {
				fn register(registry: &mut TypeRegistry) {
					registry.leaf::<$ty>(|rng| rng.$generate());
				}
			}
		)*
	};
}

standard_leaf!(
	bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

generated_leaf!(
	char => next_char,
	String => next_alphabetic_string,
	DateTime<Utc> => next_date_time,
	NaiveDate => next_date,
	NaiveDateTime => next_naive_date_time,
	NaiveTime => next_time,
	Decimal => next_decimal,
	Uuid => next_uuid,
);

pub(super) fn register_defaults(registry: &mut TypeRegistry) {
	registry.ensure::<bool>();
	registry.ensure::<char>();
	registry.ensure::<i8>();
	registry.ensure::<i16>();
	registry.ensure::<i32>();
	registry.ensure::<i64>();
	registry.ensure::<i128>();
	registry.ensure::<isize>();
	registry.ensure::<u8>();
	registry.ensure::<u16>();
	registry.ensure::<u32>();
	registry.ensure::<u64>();
	registry.ensure::<u128>();
	registry.ensure::<usize>();
	registry.ensure::<f32>();
	registry.ensure::<f64>();
	registry.ensure::<String>();
	registry.ensure::<DateTime<Utc>>();
	registry.ensure::<NaiveDate>();
	registry.ensure::<NaiveDateTime>();
	registry.ensure::<NaiveTime>();
	registry.ensure::<Decimal>();
	registry.ensure::<Uuid>();
}
