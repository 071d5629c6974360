// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod compare;
mod enlarge;
mod parse;
mod safe;
pub mod scale;

pub use compare::*;
pub use enlarge::Enlarge;
pub use parse::{parse_bit, parse_float, parse_int, parse_oid};
pub use safe::{
	ArithError, add::SafeAdd, convert::Rescale, convert::SafeConvert, div::SafeDiv, mul::SafeMul,
	remainder::SafeRemainder, shift::SafeShift, sub::SafeSub,
};
