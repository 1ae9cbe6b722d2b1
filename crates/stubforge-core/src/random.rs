//! Random source and leaf value generators.
//!
//! [`StubRng`] is owned by a single synthesis session. Besides the raw
//! [`RngCore`] stream it offers one `next_*` operation per well-known leaf
//! type that has no obvious `rand` distribution.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Default length of generated strings.
pub const DEFAULT_STRING_LENGTH: usize = 5;

/// Number of random bits in generated big integers.
const BIG_INTEGER_BITS: u32 = 24;

/// Exclusive upper bound of generated instants, 2020-01-01T00:00:00Z in
/// milliseconds. Fixed so that seeded sessions replay regardless of the clock.
const DATE_TIME_UPPER_BOUND_MILLIS: i64 = 1_577_836_800_000;

/// Pseudo-random source of one synthesis session.
#[derive(Debug, Clone)]
pub struct StubRng {
	inner: StdRng,
}

impl StubRng {
	/// Creates a source seeded from the operating system.
	pub fn from_entropy() -> Self {
		Self {
			inner: StdRng::from_entropy(),
		}
	}

	/// Creates a reproducible source.
	///
	/// # Examples
	///
	/// ```
	/// use stubforge_core::StubRng;
	///
	/// let mut a = StubRng::seeded(7);
	/// let mut b = StubRng::seeded(7);
	/// assert_eq!(a.next_alphabetic_string(), b.next_alphabetic_string());
	/// ```
	pub fn seeded(seed: u64) -> Self {
		Self {
			inner: StdRng::seed_from_u64(seed),
		}
	}

	/// Returns a string of [`DEFAULT_STRING_LENGTH`] ASCII letters.
	pub fn next_alphabetic_string(&mut self) -> String {
		self.next_alphabetic_string_of(DEFAULT_STRING_LENGTH)
	}

	/// Returns a string of `len` ASCII letters of mixed case.
	pub fn next_alphabetic_string_of(&mut self, len: usize) -> String {
		(0..len).map(|_| self.next_char()).collect()
	}

	/// Returns an ASCII letter of either case.
	pub fn next_char(&mut self) -> char {
		let letter = char::from(b'a' + self.inner.gen_range(0..26u8));
		if self.inner.r#gen::<bool>() {
			letter.to_ascii_uppercase()
		} else {
			letter
		}
	}

	/// Returns an instant between the Unix epoch and 2020-01-01.
	pub fn next_date_time(&mut self) -> DateTime<Utc> {
		let millis = self.inner.gen_range(0..DATE_TIME_UPPER_BOUND_MILLIS);
		Utc.timestamp_millis_opt(millis).single().unwrap_or_default()
	}

	/// Returns a calendar date before 2020-01-01.
	pub fn next_date(&mut self) -> NaiveDate {
		self.next_date_time().date_naive()
	}

	/// Returns a local date and time before 2020-01-01.
	pub fn next_naive_date_time(&mut self) -> NaiveDateTime {
		self.next_date_time().naive_utc()
	}

	/// Returns a time of day.
	pub fn next_time(&mut self) -> NaiveTime {
		self.next_date_time().time()
	}

	/// Returns a non-negative integer of up to 24 random bits.
	pub fn next_big_integer(&mut self) -> i128 {
		i128::from(self.inner.gen_range(0..(1u32 << BIG_INTEGER_BITS)))
	}

	/// Returns an integral decimal built from [`StubRng::next_big_integer`].
	pub fn next_decimal(&mut self) -> Decimal {
		Decimal::from_i128_with_scale(self.next_big_integer(), 0)
	}

	/// Returns a random (version 4) UUID.
	pub fn next_uuid(&mut self) -> Uuid {
		uuid::Builder::from_random_bytes(self.inner.r#gen()).into_uuid()
	}

	/// Returns an index in `0..len`. `len` must be non-zero.
	pub fn next_index(&mut self, len: usize) -> usize {
		self.inner.gen_range(0..len)
	}
}

impl RngCore for StubRng {
	fn next_u32(&mut self) -> u32 {
		self.inner.next_u32()
	}

	fn next_u64(&mut self) -> u64 {
		self.inner.next_u64()
	}

	fn fill_bytes(&mut self, dest: &mut [u8]) {
		self.inner.fill_bytes(dest)
	}

	fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
		self.inner.try_fill_bytes(dest)
	}
}
