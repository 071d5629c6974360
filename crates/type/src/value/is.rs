// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use num_traits::{FromPrimitive, Zero};

use crate::value::{
	nil::Nil,
	oid::{OID_MAX, Oid},
	r#type::GetType,
};

/// A fixed-width numeric atom.
///
/// Arithmetic on any `(L, R) -> T` triple runs in one of two domains: exact
/// 128-bit integer arithmetic when all three are integers, otherwise native
/// double precision. `from_wide`/`from_double` narrow back into `T` and
/// reject anything outside `[MIN, MAX]`, which for signed types is symmetric
/// so that the NIL pattern can never be produced by a calculation.
pub trait IsNumber: Nil + GetType + Copy + PartialOrd + Zero + Display + Debug + Send + Sync + 'static {
	const MIN: Self;
	const MAX: Self;
	const IS_FLOAT: bool;
	/// Every legal value satisfies `|v| < 2^MAGNITUDE_BITS`.
	const MAGNITUDE_BITS: u32;
	/// Every value with `|v| < 2^CAPACITY_BITS` is representable.
	const CAPACITY_BITS: u32;

	fn to_wide(self) -> i128;

	fn to_double(self) -> f64;

	fn from_wide(value: i128) -> Option<Self>;

	fn from_double(value: f64) -> Option<Self>;

	fn from_wide_unchecked(value: i128) -> Self;

	fn from_double_unchecked(value: f64) -> Self;

	/// Rounds a double to this type's own precision; identity except for `f32`.
	#[inline]
	fn narrow(value: f64) -> f64 {
		value
	}
}

pub trait IsInt: IsNumber {}

pub trait IsFloat: IsNumber {}

macro_rules! impl_is_number_signed {
    ($($t:ty),*) => {
        $(
            impl IsNumber for $t {
                const MIN: Self = -<$t>::MAX;
                const MAX: Self = <$t>::MAX;
                const IS_FLOAT: bool = false;
                const MAGNITUDE_BITS: u32 = <$t>::BITS - 1;
                const CAPACITY_BITS: u32 = <$t>::BITS - 1;

                #[inline]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn to_double(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_wide(value: i128) -> Option<Self> {
                    <$t as FromPrimitive>::from_i128(value).filter(|v| !v.is_nil())
                }

                #[inline]
                fn from_double(value: f64) -> Option<Self> {
                    <$t as FromPrimitive>::from_f64(value.round()).filter(|v| !v.is_nil())
                }

                #[inline]
                fn from_wide_unchecked(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn from_double_unchecked(value: f64) -> Self {
                    value.round() as $t
                }
            }

            impl IsInt for $t {}
        )*
    };
}

impl_is_number_signed!(i8, i16, i32, i64);

#[cfg(feature = "hge")]
impl_is_number_signed!(i128);

impl IsNumber for u64 {
	const MIN: Self = 0;
	const MAX: Self = OID_MAX;
	const IS_FLOAT: bool = false;
	const MAGNITUDE_BITS: u32 = 63;
	// cannot hold negative results, so nothing is ever enlarged into an oid
	const CAPACITY_BITS: u32 = 0;

	#[inline]
	fn to_wide(self) -> i128 {
		self as i128
	}

	#[inline]
	fn to_double(self) -> f64 {
		self as f64
	}

	#[inline]
	fn from_wide(value: i128) -> Option<Self> {
		<Oid as FromPrimitive>::from_i128(value).filter(|v| *v <= OID_MAX)
	}

	#[inline]
	fn from_double(value: f64) -> Option<Self> {
		<Oid as FromPrimitive>::from_f64(value.round()).filter(|v| *v <= OID_MAX)
	}

	#[inline]
	fn from_wide_unchecked(value: i128) -> Self {
		value as Oid
	}

	#[inline]
	fn from_double_unchecked(value: f64) -> Self {
		value.round() as Oid
	}
}

impl IsInt for u64 {}

macro_rules! impl_is_number_float {
    ($($t:ty => $capacity:expr),*) => {
        $(
            impl IsNumber for $t {
                const MIN: Self = -<$t>::MAX;
                const MAX: Self = <$t>::MAX;
                const IS_FLOAT: bool = true;
                const MAGNITUDE_BITS: u32 = $capacity + 1;
                const CAPACITY_BITS: u32 = $capacity;

                #[inline]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn to_double(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_wide(value: i128) -> Option<Self> {
                    Some(value as $t)
                }

                #[inline]
                fn from_double(value: f64) -> Option<Self> {
                    if value.is_finite() && value.abs() <= <$t>::MAX as f64 {
                        Some(value as $t)
                    } else {
                        None
                    }
                }

                #[inline]
                fn from_wide_unchecked(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn from_double_unchecked(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn narrow(value: f64) -> f64 {
                    value as $t as f64
                }
            }

            impl IsFloat for $t {}
        )*
    };
}

impl_is_number_float!(f32 => 127, f64 => 1023);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_signed_range_is_symmetric() {
		assert_eq!(<i8 as IsNumber>::MIN, -127);
		assert_eq!(<i64 as IsNumber>::MIN, -i64::MAX);
	}

	#[test]
	fn test_from_wide_rejects_nil_pattern() {
		assert_eq!(i8::from_wide(-128), None);
		assert_eq!(i8::from_wide(-127), Some(-127));
		assert_eq!(i8::from_wide(128), None);
		assert_eq!(i16::from_wide(300), Some(300));
	}

	#[test]
	fn test_from_double_rounds_half_away_from_zero() {
		assert_eq!(i32::from_double(2.5), Some(3));
		assert_eq!(i32::from_double(-2.5), Some(-3));
		assert_eq!(i32::from_double(2.4), Some(2));
		assert_eq!(i8::from_double(127.4), Some(127));
		assert_eq!(i8::from_double(127.5), None);
		assert_eq!(i64::from_double(9.3e18), None);
		assert_eq!(i32::from_double(f64::NAN), None);
	}

	#[test]
	fn test_float_from_double_checks_magnitude() {
		assert_eq!(f32::from_double(1e39), None);
		assert_eq!(f32::from_double(f64::INFINITY), None);
		assert_eq!(f32::from_double(1.5), Some(1.5));
		assert_eq!(f64::from_double(f64::MAX), Some(f64::MAX));
	}

	#[test]
	fn test_oid_range() {
		assert_eq!(u64::from_wide(-1), None);
		assert_eq!(u64::from_wide(OID_MAX as i128), Some(OID_MAX));
		assert_eq!(u64::from_wide(OID_MAX as i128 + 1), None);
	}

	#[test]
	fn test_narrow_f32() {
		assert_eq!(f32::narrow(0.1), 0.1f32 as f64);
		assert_eq!(f64::narrow(0.1), 0.1);
	}
}
