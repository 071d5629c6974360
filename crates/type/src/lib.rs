// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{Error, diagnostic};
pub use util::{BitVec, BitVecIter};
pub use value::{
	Value,
	bit::Bit,
	is::{IsFloat, IsInt, IsNumber},
	nil::Nil,
	number::{
		ArithError, Enlarge, Rescale, SafeAdd, SafeConvert, SafeDiv, SafeMul, SafeRemainder, SafeShift, SafeSub,
		compare_numbers, is_equal, is_greater_than, is_less_than, parse_bit, parse_float, parse_int, parse_oid,
		scale::{MAX_SCALE, SCALES, Wide, scale_factor},
	},
	oid::{OID_MAX, Oid},
	r#type::{GetType, Type},
};

pub mod error;
pub mod util;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
