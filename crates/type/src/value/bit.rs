// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::nil::Nil;

/// Three-valued boolean: false, true or unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bit(i8);

impl Bit {
	pub const FALSE: Bit = Bit(0);
	pub const TRUE: Bit = Bit(1);
	pub const UNKNOWN: Bit = Bit(i8::MIN);

	pub fn to_bool(self) -> Option<bool> {
		match self.0 {
			i8::MIN => None,
			0 => Some(false),
			_ => Some(true),
		}
	}

	pub fn is_true(self) -> bool {
		self.to_bool() == Some(true)
	}

	/// Kleene conjunction: false absorbs unknown.
	pub fn and3(self, other: Bit) -> Bit {
		match (self.to_bool(), other.to_bool()) {
			(Some(false), _) | (_, Some(false)) => Bit::FALSE,
			(Some(true), Some(true)) => Bit::TRUE,
			_ => Bit::UNKNOWN,
		}
	}

	/// Kleene disjunction: true absorbs unknown.
	pub fn or3(self, other: Bit) -> Bit {
		match (self.to_bool(), other.to_bool()) {
			(Some(true), _) | (_, Some(true)) => Bit::TRUE,
			(Some(false), Some(false)) => Bit::FALSE,
			_ => Bit::UNKNOWN,
		}
	}

	pub fn not3(self) -> Bit {
		match self.to_bool() {
			Some(value) => Bit::from(!value),
			None => Bit::UNKNOWN,
		}
	}

	pub fn xor3(self, other: Bit) -> Bit {
		match (self.to_bool(), other.to_bool()) {
			(Some(l), Some(r)) => Bit::from(l != r),
			_ => Bit::UNKNOWN,
		}
	}
}

impl Nil for Bit {
	const NIL: Self = Bit::UNKNOWN;

	#[inline]
	fn is_nil(&self) -> bool {
		self.0 == i8::MIN
	}
}

impl From<bool> for Bit {
	fn from(value: bool) -> Self {
		if value { Bit::TRUE } else { Bit::FALSE }
	}
}

impl From<Option<bool>> for Bit {
	fn from(value: Option<bool>) -> Self {
		value.map(Bit::from).unwrap_or(Bit::UNKNOWN)
	}
}

impl Display for Bit {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.to_bool() {
			Some(true) => f.write_str("true"),
			Some(false) => f.write_str("false"),
			None => f.write_str("nil"),
		}
	}
}
