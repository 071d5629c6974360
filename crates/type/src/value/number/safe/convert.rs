// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::ArithError;
use crate::{
	IsNumber,
	value::number::scale::{divide_round, scale_factor},
};

/// Decimal rescaling parameters for one conversion.
///
/// Exactly one of `divisor`/`multiplier` is ever above one. A `precision`
/// of zero disables the digit-count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rescale {
	pub source_scale: u8,
	pub target_scale: u8,
	pub precision: u8,
	divisor: i128,
	multiplier: i128,
	source_factor: i128,
	target_factor: i128,
	limit: i128,
}

impl Rescale {
	pub const NONE: Rescale = Rescale {
		source_scale: 0,
		target_scale: 0,
		precision: 0,
		divisor: 1,
		multiplier: 1,
		source_factor: 1,
		target_factor: 1,
		limit: 0,
	};

	/// `None` when a scale or the precision exceeds the power-of-ten table.
	pub fn new(source_scale: u8, target_scale: u8, precision: u8) -> Option<Rescale> {
		let divisor = scale_factor(source_scale.saturating_sub(target_scale))?;
		let multiplier = scale_factor(target_scale.saturating_sub(source_scale))?;
		Some(Rescale {
			source_scale,
			target_scale,
			precision,
			divisor,
			multiplier,
			source_factor: scale_factor(source_scale)?,
			target_factor: scale_factor(target_scale)?,
			limit: if precision > 0 { scale_factor(precision)? } else { 0 },
		})
	}

	/// The conversion may map distinct inputs onto one output.
	pub fn is_reducing(&self) -> bool {
		self.divisor > 1
	}

	#[inline]
	fn exceeds_precision(&self, value: i128) -> bool {
		self.limit > 0 && (value >= self.limit || value <= -self.limit)
	}
}

impl Default for Rescale {
	fn default() -> Self {
		Rescale::NONE
	}
}

pub trait SafeConvert<T: IsNumber>: IsNumber {
	fn checked_convert(self, rescale: &Rescale) -> Result<T, ArithError>;
}

impl<S: IsNumber, T: IsNumber> SafeConvert<T> for S {
	fn checked_convert(self, rescale: &Rescale) -> Result<T, ArithError> {
		match (S::IS_FLOAT, T::IS_FLOAT) {
			(false, false) => {
				let mut value = self.to_wide();
				if rescale.divisor > 1 {
					value = divide_round(value, rescale.divisor);
				}
				let min = T::MIN.to_wide() / rescale.multiplier;
				let max = T::MAX.to_wide() / rescale.multiplier;
				if value < min || value > max {
					return Err(ArithError::Overflow);
				}
				if rescale.exceeds_precision(value * rescale.multiplier) {
					return Err(ArithError::Overflow);
				}
				Ok(T::from_wide_unchecked(value * rescale.multiplier))
			}
			(false, true) => {
				let value = T::narrow(self.to_double()) / T::narrow(rescale.source_factor as f64);
				T::from_double(value).ok_or(ArithError::Overflow)
			}
			(true, false) => {
				let scaled = (self.to_double() * rescale.target_factor as f64).round();
				let value = T::from_double(scaled).ok_or(ArithError::Overflow)?;
				if rescale.exceeds_precision(value.to_wide()) {
					return Err(ArithError::Overflow);
				}
				Ok(value)
			}
			(true, true) => T::from_double(self.to_double()).ok_or(ArithError::Overflow),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn plain() -> Rescale {
		Rescale::NONE
	}

	mod integer {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let y: Result<i8, _> = 42i64.checked_convert(&plain());
			assert_eq!(y, Ok(42));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let y: Result<i8, _> = 300i32.checked_convert(&plain());
			assert_eq!(y, Err(ArithError::Overflow));
			let y: Result<i8, _> = (-128i32).checked_convert(&plain());
			assert_eq!(y, Err(ArithError::Overflow));
		}

		#[test]
		fn test_to_oid() {
			let y: Result<u64, _> = (-1i32).checked_convert(&plain());
			assert_eq!(y, Err(ArithError::Overflow));
			let y: Result<u64, _> = 7i32.checked_convert(&plain());
			assert_eq!(y, Ok(7));
		}
	}

	mod decimal {
		use super::*;

		#[test]
		fn test_upscale_multiplies() {
			let rescale = Rescale::new(0, 2, 0).unwrap();
			let y: Result<i32, _> = 123i32.checked_convert(&rescale);
			assert_eq!(y, Ok(12300));
		}

		#[test]
		fn test_upscale_bound_is_divided() {
			let rescale = Rescale::new(0, 2, 0).unwrap();
			let y: Result<i8, _> = 2i8.checked_convert(&rescale);
			assert_eq!(y, Err(ArithError::Overflow));
			let y: Result<i8, _> = 1i8.checked_convert(&rescale);
			assert_eq!(y, Ok(100));
		}

		#[test]
		fn test_downscale_rounds_half_away_from_zero() {
			let rescale = Rescale::new(2, 0, 0).unwrap();
			assert!(rescale.is_reducing());
			let y: Result<i32, _> = 150i32.checked_convert(&rescale);
			assert_eq!(y, Ok(2));
			let y: Result<i32, _> = (-150i32).checked_convert(&rescale);
			assert_eq!(y, Ok(-2));
			let y: Result<i32, _> = 149i32.checked_convert(&rescale);
			assert_eq!(y, Ok(1));
		}

		#[test]
		fn test_precision_limit() {
			let rescale = Rescale::new(0, 2, 5).unwrap();
			let y: Result<i64, _> = 999i64.checked_convert(&rescale);
			assert_eq!(y, Ok(99900));
			let y: Result<i64, _> = 1000i64.checked_convert(&rescale);
			assert_eq!(y, Err(ArithError::Overflow));
		}

		#[test]
		fn test_scale_out_of_table() {
			assert!(Rescale::new(0, 200, 0).is_none());
		}
	}

	mod float {
		use super::*;

		#[test]
		fn test_int_to_float_divides_by_source_scale() {
			let rescale = Rescale::new(2, 0, 0).unwrap();
			let y: Result<f64, _> = 12345i32.checked_convert(&rescale);
			assert_eq!(y, Ok(123.45));
		}

		#[test]
		fn test_float_to_int_rounds() {
			let y: Result<i32, _> = 2.5f64.checked_convert(&plain());
			assert_eq!(y, Ok(3));
			let y: Result<i8, _> = 200.0f32.checked_convert(&plain());
			assert_eq!(y, Err(ArithError::Overflow));
		}

		#[test]
		fn test_float_to_scaled_int() {
			let rescale = Rescale::new(0, 2, 0).unwrap();
			let y: Result<i32, _> = 1.236f64.checked_convert(&rescale);
			assert_eq!(y, Ok(124));
		}

		#[test]
		fn test_double_to_float_overflow() {
			let y: Result<f32, _> = 1e300f64.checked_convert(&plain());
			assert_eq!(y, Err(ArithError::Overflow));
			let y: Result<f64, _> = 1.5f32.checked_convert(&plain());
			assert_eq!(y, Ok(1.5));
		}
	}
}
