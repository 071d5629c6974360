// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Runtime type tags to monomorphized kernels.
//!
//! Each macro binds a type alias to the concrete Rust type behind a [`Type`]
//! tag and evaluates the body with it, so a kernel is written once as a
//! generic function and instantiated for every combination the caller
//! nests. Unlisted tags evaluate the fallback expression.
//!
//! [`Type`]: batcalc_type::Type

use batcalc_column::Element;
use batcalc_type::{IsInt, IsNumber};

/// A numeric atom that also has a column representation.
pub(crate) trait Number: IsNumber + Element {}

impl<T: IsNumber + Element> Number for T {}

/// An integer atom with a column representation.
pub(crate) trait Integer: IsInt + Element {}

impl<T: IsInt + Element> Integer for T {}

/// Signed integers and floats.
macro_rules! with_number {
	($ty:expr, $T:ident => $body:expr, $otherwise:expr) => {
		match $ty {
			batcalc_type::Type::Int1 => {
				type $T = i8;
				$body
			}
			batcalc_type::Type::Int2 => {
				type $T = i16;
				$body
			}
			batcalc_type::Type::Int4 => {
				type $T = i32;
				$body
			}
			batcalc_type::Type::Int8 => {
				type $T = i64;
				$body
			}
			#[cfg(feature = "hge")]
			batcalc_type::Type::Int16 => {
				type $T = i128;
				$body
			}
			batcalc_type::Type::Float4 => {
				type $T = f32;
				$body
			}
			batcalc_type::Type::Float8 => {
				type $T = f64;
				$body
			}
			_ => $otherwise,
		}
	};
}

/// Signed integers only.
macro_rules! with_integer {
	($ty:expr, $T:ident => $body:expr, $otherwise:expr) => {
		match $ty {
			batcalc_type::Type::Int1 => {
				type $T = i8;
				$body
			}
			batcalc_type::Type::Int2 => {
				type $T = i16;
				$body
			}
			batcalc_type::Type::Int4 => {
				type $T = i32;
				$body
			}
			batcalc_type::Type::Int8 => {
				type $T = i64;
				$body
			}
			#[cfg(feature = "hge")]
			batcalc_type::Type::Int16 => {
				type $T = i128;
				$body
			}
			_ => $otherwise,
		}
	};
}

/// Numbers plus `oid`: everything with a numeric value.
macro_rules! with_ordinal {
	($ty:expr, $T:ident => $body:expr, $otherwise:expr) => {
		match $ty {
			batcalc_type::Type::Oid => {
				type $T = batcalc_type::Oid;
				$body
			}
			other => $crate::dispatch::with_number!(other, $T => $body, $otherwise),
		}
	};
}

/// Every fixed-width atom: ordinals plus `bit`.
macro_rules! with_fixed {
	($ty:expr, $T:ident => $body:expr, $otherwise:expr) => {
		match $ty {
			batcalc_type::Type::Bit => {
				type $T = batcalc_type::Bit;
				$body
			}
			other => $crate::dispatch::with_ordinal!(other, $T => $body, $otherwise),
		}
	};
}

pub(crate) use {with_fixed, with_integer, with_number, with_ordinal};

#[cfg(test)]
mod tests {
	use batcalc_type::{GetType, Type};

	#[test]
	fn test_binds_matching_type() {
		for ty in [Type::Int1, Type::Int8, Type::Float4, Type::Oid, Type::Bit] {
			let bound = with_fixed!(ty, T => Some(<T as GetType>::get_type()), None);
			assert_eq!(bound, Some(ty));
		}
	}

	#[test]
	fn test_fallback() {
		assert_eq!(with_number!(Type::Utf8, T => Some(<T as GetType>::get_type()), None), None);
		assert_eq!(with_integer!(Type::Float8, T => Some(<T as GetType>::get_type()), None), None);
	}
}
