// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{ArithError, float_domain};
use crate::{Enlarge, IsNumber};

pub trait SafeSub<R: IsNumber>: IsNumber {
	fn safe_sub<T: IsNumber>(self, r: R) -> Result<T, ArithError>;
}

impl<L: IsNumber, R: IsNumber> SafeSub<R> for L {
	#[inline]
	fn safe_sub<T: IsNumber>(self, r: R) -> Result<T, ArithError> {
		if float_domain::<L, R, T>() {
			let difference = T::narrow(self.to_double()) - T::narrow(r.to_double());
			if Enlarge::<L, R, T>::ADDITIVE {
				Ok(T::from_double_unchecked(difference))
			} else {
				T::from_double(difference).ok_or(ArithError::Overflow)
			}
		} else if Enlarge::<L, R, T>::ADDITIVE {
			Ok(T::from_wide_unchecked(self.to_wide() - r.to_wide()))
		} else {
			self.to_wide().checked_sub(r.to_wide()).and_then(T::from_wide).ok_or(ArithError::Overflow)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_width() {
		assert_eq!(0i16.safe_sub::<i16>(i16::MAX), Ok(-i16::MAX));
		assert_eq!((-1i16).safe_sub::<i16>(i16::MAX), Err(ArithError::Overflow));
	}

	#[test]
	fn test_enlarging() {
		assert_eq!((-127i8).safe_sub::<i16>(127i8), Ok(-254));
	}

	#[test]
	fn test_float() {
		assert_eq!(1.5f64.safe_sub::<f64>(2i8), Ok(-0.5));
		assert_eq!((-f64::MAX).safe_sub::<f64>(f64::MAX), Err(ArithError::Overflow));
	}

	#[test]
	fn test_oid_target_rejects_negative() {
		assert_eq!(1i32.safe_sub::<u64>(2i32), Err(ArithError::Overflow));
		assert_eq!(3i32.safe_sub::<u64>(2i32), Ok(1));
	}
}
