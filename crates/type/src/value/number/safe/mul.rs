// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{ArithError, float_domain};
use crate::{Enlarge, IsNumber};

pub trait SafeMul<R: IsNumber>: IsNumber {
	/// Integer results from a float operand are rounded half away from zero.
	fn safe_mul<T: IsNumber>(self, r: R) -> Result<T, ArithError>;
}

impl<L: IsNumber, R: IsNumber> SafeMul<R> for L {
	#[inline]
	fn safe_mul<T: IsNumber>(self, r: R) -> Result<T, ArithError> {
		if float_domain::<L, R, T>() {
			if !T::IS_FLOAT && (self.is_zero() || r.is_zero()) {
				return Ok(T::zero());
			}
			let product = T::narrow(self.to_double()) * T::narrow(r.to_double());
			if Enlarge::<L, R, T>::MULTIPLICATIVE {
				Ok(T::from_double_unchecked(product))
			} else {
				T::from_double(product).ok_or(ArithError::Overflow)
			}
		} else if Enlarge::<L, R, T>::MULTIPLICATIVE {
			Ok(T::from_wide_unchecked(self.to_wide() * r.to_wide()))
		} else {
			self.to_wide().checked_mul(r.to_wide()).and_then(T::from_wide).ok_or(ArithError::Overflow)
		}
	}
}
