// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{ArithError, float_domain};
use crate::IsNumber;

pub trait SafeDiv<R: IsNumber>: IsNumber {
	/// Integer division truncates toward zero; an integer result from a
	/// float operand is rounded half away from zero.
	fn safe_div<T: IsNumber>(self, r: R) -> Result<T, ArithError>;
}

impl<L: IsNumber, R: IsNumber> SafeDiv<R> for L {
	#[inline]
	fn safe_div<T: IsNumber>(self, r: R) -> Result<T, ArithError> {
		if float_domain::<L, R, T>() {
			if !T::IS_FLOAT && self.is_zero() {
				return Ok(T::zero());
			}
			if r.is_zero() {
				return Err(ArithError::DivisionByZero);
			}
			let quotient = T::narrow(self.to_double()) / T::narrow(r.to_double());
			T::from_double(quotient).ok_or(ArithError::Overflow)
		} else {
			if r.is_zero() {
				return Err(ArithError::DivisionByZero);
			}
			T::from_wide(self.to_wide() / r.to_wide()).ok_or(ArithError::Overflow)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_integer_truncates() {
		assert_eq!(7i32.safe_div::<i32>(2i32), Ok(3));
		assert_eq!((-7i32).safe_div::<i32>(2i32), Ok(-3));
	}

	#[test]
	fn test_zero_divisor() {
		assert_eq!(10i32.safe_div::<i32>(0i32), Err(ArithError::DivisionByZero));
		assert_eq!(1.0f64.safe_div::<f64>(0.0f64), Err(ArithError::DivisionByZero));
	}

	#[test]
	fn test_narrowing_result_checked() {
		assert_eq!(1000i32.safe_div::<i8>(2i8), Err(ArithError::Overflow));
		assert_eq!(1000i32.safe_div::<i8>(10i8), Ok(100));
	}

	#[test]
	fn test_small_float_divisor_overflows() {
		assert_eq!(f64::MAX.safe_div::<f64>(0.5f64), Err(ArithError::Overflow));
		assert_eq!(1e30f32.safe_div::<f32>(1e-10f32), Err(ArithError::Overflow));
	}

	#[test]
	fn test_int_by_float_to_int() {
		assert_eq!(5i32.safe_div::<i32>(2.0f64), Ok(3));
		assert_eq!(0i32.safe_div::<i32>(0.0f64), Ok(0));
		assert_eq!(5i32.safe_div::<i32>(0.0f64), Err(ArithError::DivisionByZero));
	}

	#[test]
	fn test_int_by_int_to_float() {
		assert_eq!(1i32.safe_div::<f64>(4i32), Ok(0.25));
	}
}
