// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::ArithError;
use crate::IsInt;

/// Bit shifts keep the left operand's type.
pub trait SafeShift<R: IsInt>: IsInt {
	/// Fails unless `0 <= r < bits`, `l >= 0` and no set bit leaves `[0, MAX]`.
	fn safe_shl(self, r: R) -> Result<Self, ArithError>;

	/// Arithmetic shift; fails unless `0 <= r < bits`.
	fn safe_shr(self, r: R) -> Result<Self, ArithError>;
}

impl<L: IsInt, R: IsInt> SafeShift<R> for L {
	#[inline]
	fn safe_shl(self, r: R) -> Result<Self, ArithError> {
		let (value, distance) = (self.to_wide(), r.to_wide());
		if distance < 0 || distance > L::MAGNITUDE_BITS as i128 {
			return Err(ArithError::ShiftOutOfRange);
		}
		if value < 0 || value > L::MAX.to_wide() >> distance {
			return Err(ArithError::ShiftOutOfRange);
		}
		L::from_wide(value << distance).ok_or(ArithError::ShiftOutOfRange)
	}

	#[inline]
	fn safe_shr(self, r: R) -> Result<Self, ArithError> {
		let (value, distance) = (self.to_wide(), r.to_wide());
		if distance < 0 || distance > L::MAGNITUDE_BITS as i128 {
			return Err(ArithError::ShiftOutOfRange);
		}
		L::from_wide(value >> distance).ok_or(ArithError::ShiftOutOfRange)
	}
}
