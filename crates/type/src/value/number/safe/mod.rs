// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod add;
pub mod convert;
pub mod div;
pub mod mul;
pub mod remainder;
pub mod shift;
pub mod sub;

use crate::IsNumber;

/// Why a primitive could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
	#[error("result outside the range of the destination type")]
	Overflow,

	#[error("division by zero")]
	DivisionByZero,

	#[error("shift distance or operand out of range")]
	ShiftOutOfRange,
}

/// Mixed or floating point triples compute in double precision.
#[inline]
pub(crate) fn float_domain<L: IsNumber, R: IsNumber, T: IsNumber>() -> bool {
	L::IS_FLOAT || R::IS_FLOAT || T::IS_FLOAT
}
