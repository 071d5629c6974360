// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use crate::IsNumber;

/// Orders two non-NIL numbers of possibly different types.
///
/// Integer pairs compare exactly in 128 bits; as soon as one side is a float
/// both sides are compared in double precision.
#[inline]
pub fn compare_numbers<L: IsNumber, R: IsNumber>(l: L, r: R) -> Ordering {
	if L::IS_FLOAT || R::IS_FLOAT {
		l.to_double().partial_cmp(&r.to_double()).unwrap_or(Ordering::Equal)
	} else {
		l.to_wide().cmp(&r.to_wide())
	}
}

#[inline]
pub fn is_equal<L: IsNumber, R: IsNumber>(l: L, r: R) -> bool {
	compare_numbers(l, r) == Ordering::Equal
}

#[inline]
pub fn is_less_than<L: IsNumber, R: IsNumber>(l: L, r: R) -> bool {
	compare_numbers(l, r) == Ordering::Less
}

#[inline]
pub fn is_greater_than<L: IsNumber, R: IsNumber>(l: L, r: R) -> bool {
	compare_numbers(l, r) == Ordering::Greater
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mixed_width_integers() {
		assert_eq!(compare_numbers(-1i8, 1i64), Ordering::Less);
		assert_eq!(compare_numbers(i64::MAX, i32::MAX), Ordering::Greater);
		assert!(is_equal(42i16, 42i64));
	}

	#[test]
	fn test_large_integers_stay_exact() {
		// both round to the same double
		let l = (1i64 << 60) + 1;
		let r = 1i64 << 60;
		assert_eq!(compare_numbers(l, r), Ordering::Greater);
	}

	#[test]
	fn test_oid_against_signed() {
		assert!(is_greater_than(5u64, -1i32));
		assert!(is_less_than(0u64, 1i8));
	}

	#[test]
	fn test_float_against_integer() {
		assert!(is_less_than(2i32, 2.5f64));
		assert!(is_equal(0.5f32, 0.5f64));
		assert!(is_greater_than(1e20f32, i64::MAX));
	}
}
