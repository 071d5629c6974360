// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{ArithError, float_domain};
use crate::IsNumber;

pub trait SafeRemainder<R: IsNumber>: IsNumber {
	/// The result takes the sign of the dividend.
	fn safe_rem<T: IsNumber>(self, r: R) -> Result<T, ArithError>;
}

impl<L: IsNumber, R: IsNumber> SafeRemainder<R> for L {
	#[inline]
	fn safe_rem<T: IsNumber>(self, r: R) -> Result<T, ArithError> {
		if r.is_zero() {
			return Err(ArithError::DivisionByZero);
		}
		if float_domain::<L, R, T>() {
			T::from_double(T::narrow(self.to_double()) % T::narrow(r.to_double())).ok_or(ArithError::Overflow)
		} else {
			T::from_wide(self.to_wide() % r.to_wide()).ok_or(ArithError::Overflow)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sign_follows_dividend() {
		assert_eq!(7i32.safe_rem::<i32>(3i32), Ok(1));
		assert_eq!((-7i32).safe_rem::<i32>(3i32), Ok(-1));
		assert_eq!(7i32.safe_rem::<i32>(-3i32), Ok(1));
	}

	#[test]
	fn test_zero_divisor() {
		assert_eq!(7i8.safe_rem::<i8>(0i8), Err(ArithError::DivisionByZero));
		assert_eq!(7.5f64.safe_rem::<f64>(0.0f64), Err(ArithError::DivisionByZero));
	}

	#[test]
	fn test_narrow_result_fits_divisor_type() {
		assert_eq!(1_000_003i64.safe_rem::<i8>(10i8), Ok(3));
	}

	#[test]
	fn test_fmod() {
		assert_eq!(7.5f64.safe_rem::<f64>(2i32), Ok(1.5));
		assert_eq!((-7.5f32).safe_rem::<f32>(2.0f32), Ok(-1.5));
	}
}
