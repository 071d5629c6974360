// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Per-type "unknown value" sentinel.
///
/// Signed integers reserve their minimum, floats use NaN, `oid` reserves
/// `1 << 63`. The patterns are part of the storage format and never change.
pub trait Nil: Copy {
	const NIL: Self;

	fn is_nil(&self) -> bool;

	#[inline]
	fn to_option(self) -> Option<Self> {
		if self.is_nil() { None } else { Some(self) }
	}

	#[inline]
	fn from_option(value: Option<Self>) -> Self {
		value.unwrap_or(Self::NIL)
	}
}

macro_rules! impl_nil_signed {
    ($($t:ty),*) => {
        $(
            impl Nil for $t {
                const NIL: Self = <$t>::MIN;

                #[inline]
                fn is_nil(&self) -> bool {
                    *self == <$t>::MIN
                }
            }
        )*
    };
}

macro_rules! impl_nil_float {
    ($($t:ty),*) => {
        $(
            impl Nil for $t {
                const NIL: Self = <$t>::NAN;

                #[inline]
                fn is_nil(&self) -> bool {
                    self.is_nan()
                }
            }
        )*
    };
}

impl_nil_signed!(i8, i16, i32, i64);
impl_nil_float!(f32, f64);

#[cfg(feature = "hge")]
impl_nil_signed!(i128);

impl Nil for u64 {
	const NIL: Self = 1 << 63;

	#[inline]
	fn is_nil(&self) -> bool {
		*self == Self::NIL
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_signed_nil_is_min() {
		assert!(i8::MIN.is_nil());
		assert!(!(-127i8).is_nil());
		assert_eq!(i32::NIL, i32::MIN);
	}

	#[test]
	fn test_float_nil_is_nan() {
		assert!(f64::NIL.is_nil());
		assert!(!f64::INFINITY.is_nil());
		assert!(f32::NAN.is_nil());
	}

	#[test]
	fn test_oid_nil() {
		assert!((1u64 << 63).is_nil());
		assert!(!0u64.is_nil());
	}

	#[test]
	fn test_option_round_trip() {
		assert_eq!(5i16.to_option(), Some(5));
		assert_eq!(i16::NIL.to_option(), None);
		assert_eq!(i16::from_option(None), i16::MIN);
	}
}
