// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{ArithError, float_domain};
use crate::{Enlarge, IsNumber};

pub trait SafeAdd<R: IsNumber>: IsNumber {
	fn safe_add<T: IsNumber>(self, r: R) -> Result<T, ArithError>;
}

impl<L: IsNumber, R: IsNumber> SafeAdd<R> for L {
	#[inline]
	fn safe_add<T: IsNumber>(self, r: R) -> Result<T, ArithError> {
		if float_domain::<L, R, T>() {
			let sum = T::narrow(self.to_double()) + T::narrow(r.to_double());
			if Enlarge::<L, R, T>::ADDITIVE {
				Ok(T::from_double_unchecked(sum))
			} else {
				T::from_double(sum).ok_or(ArithError::Overflow)
			}
		} else if Enlarge::<L, R, T>::ADDITIVE {
			Ok(T::from_wide_unchecked(self.to_wide() + r.to_wide()))
		} else {
			self.to_wide().checked_add(r.to_wide()).and_then(T::from_wide).ok_or(ArithError::Overflow)
		}
	}
}
