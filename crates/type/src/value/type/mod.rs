// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The base types a column or scalar can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// Three-valued boolean stored in one byte
	Bit,
	/// 1-byte signed integer
	Int1,
	/// 2-byte signed integer
	Int2,
	/// 4-byte signed integer
	Int4,
	/// 8-byte signed integer
	Int8,
	/// 16-byte signed integer
	#[cfg(feature = "hge")]
	Int16,
	/// 4-byte floating point
	Float4,
	/// 8-byte floating point
	Float8,
	/// Object identifier, a 63-bit unsigned position
	Oid,
	/// Variable-length UTF-8 string
	Utf8,
}

impl Type {
	pub fn is_integer(&self) -> bool {
		match self {
			Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 => true,
			#[cfg(feature = "hge")]
			Type::Int16 => true,
			_ => false,
		}
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	/// Member of the arithmetic lattice.
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_float()
	}

	pub fn is_fixed(&self) -> bool {
		!matches!(self, Type::Utf8)
	}

	/// Width in bits of the fixed-size representation, 0 for strings.
	pub fn bits(&self) -> u32 {
		match self {
			Type::Bit | Type::Int1 => 8,
			Type::Int2 => 16,
			Type::Int4 | Type::Float4 => 32,
			Type::Int8 | Type::Float8 | Type::Oid => 64,
			#[cfg(feature = "hge")]
			Type::Int16 => 128,
			Type::Utf8 => 0,
		}
	}

	/// Significand precision in bits; integers are exact in all their bits.
	pub fn mantissa_digits(&self) -> u32 {
		match self {
			Type::Float4 => f32::MANTISSA_DIGITS,
			Type::Float8 => f64::MANTISSA_DIGITS,
			other => other.bits(),
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Type::Bit => "bit",
			Type::Int1 => "bte",
			Type::Int2 => "sht",
			Type::Int4 => "int",
			Type::Int8 => "lng",
			#[cfg(feature = "hge")]
			Type::Int16 => "hge",
			Type::Float4 => "flt",
			Type::Float8 => "dbl",
			Type::Oid => "oid",
			Type::Utf8 => "str",
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lattice_membership() {
		assert!(Type::Int1.is_number());
		assert!(Type::Float8.is_number());
		assert!(!Type::Oid.is_number());
		assert!(!Type::Bit.is_number());
		assert!(!Type::Utf8.is_fixed());
	}

	#[test]
	fn test_names() {
		assert_eq!(Type::Int1.to_string(), "bte");
		assert_eq!(Type::Float8.to_string(), "dbl");
	}

	#[test]
	fn test_mantissa_digits() {
		assert_eq!(Type::Float4.mantissa_digits(), 24);
		assert_eq!(Type::Float8.mantissa_digits(), 53);
		assert_eq!(Type::Int4.mantissa_digits(), 32);
	}
}
