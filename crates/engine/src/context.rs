// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Display, time::Instant};

use batcalc_type::{
	ArithError, Nil, Result, Type,
	diagnostic::{
		Diagnostic,
		number::{division_by_zero, overflow_in_calculation, overflow_in_unary},
		operator::shift_operand_too_large,
	},
	error,
};
use tracing::debug;

use crate::CalcOptions;

/// Per-call state: the overflow policy and the number of NILs written.
pub(crate) struct EvaluationContext {
	pub(crate) operator: &'static str,
	pub(crate) options: CalcOptions,
	pub(crate) nils: usize,
	started: Instant,
}

impl EvaluationContext {
	pub(crate) fn new(operator: &'static str, options: &CalcOptions) -> Self {
		Self {
			operator,
			options: *options,
			nils: 0,
			started: Instant::now(),
		}
	}

	pub(crate) fn abort_on_error(&self) -> bool {
		self.options.abort_on_error()
	}

	/// Records a NIL produced by NIL input.
	#[inline]
	pub(crate) fn nil<T: Nil>(&mut self) -> T {
		self.nils += 1;
		T::NIL
	}

	/// Counts `value` when it is NIL and passes it through.
	#[inline]
	pub(crate) fn count<T: Nil>(&mut self, value: T) -> T {
		if value.is_nil() {
			self.nils += 1;
		}
		value
	}

	/// Resolves a primitive's outcome under the overflow policy. Shift
	/// range violations fail regardless of the policy.
	#[inline]
	pub(crate) fn check<T: Nil>(
		&mut self,
		outcome: std::result::Result<T, ArithError>,
		report: impl FnOnce(ArithError) -> Diagnostic,
	) -> Result<T> {
		match outcome {
			Ok(value) => Ok(value),
			Err(e @ ArithError::ShiftOutOfRange) => Err(error!(report(e))),
			Err(e) if self.abort_on_error() => Err(error!(report(e))),
			Err(_) => Ok(self.nil()),
		}
	}

	/// Emits the per-call summary event.
	pub(crate) fn finish(&self, signature: impl Display, count: usize) {
		debug!(
			operator = self.operator,
			signature = %signature,
			count,
			nils = self.nils,
			elapsed_us = self.started.elapsed().as_micros() as u64,
			"calc"
		);
	}
}

/// Error report of a binary primitive, `l {symbol} r` for overflow.
pub(crate) fn binary_report(
	operator: &str,
	symbol: &str,
	left: impl Display,
	right: impl Display,
	target: Type,
) -> impl FnOnce(ArithError) -> Diagnostic {
	move |error| match error {
		ArithError::Overflow => overflow_in_calculation(left, symbol, right, target),
		ArithError::DivisionByZero => division_by_zero(),
		ArithError::ShiftOutOfRange => shift_operand_too_large(operator, left, right),
	}
}

/// Error report of a unary primitive, `operator(value)` for overflow.
pub(crate) fn unary_report(operator: &str, value: impl Display, target: Type) -> impl FnOnce(ArithError) -> Diagnostic {
	move |error| match error {
		ArithError::DivisionByZero => division_by_zero(),
		_ => overflow_in_unary(operator, value, target),
	}
}

#[cfg(test)]
mod tests {
	use batcalc_type::ArithError;

	use super::*;

	#[test]
	fn test_abort_policy_fails() {
		let mut ctx = EvaluationContext::new("add", &CalcOptions::default());
		let err = ctx
			.check::<i8>(Err(ArithError::Overflow), binary_report("add", "+", 127, 1, Type::Int1))
			.unwrap_err();
		assert_eq!(err.to_string(), "22003!overflow in calculation 127+1.");
		assert_eq!(ctx.nils, 0);
	}

	#[test]
	fn test_nil_policy_counts() {
		let mut ctx = EvaluationContext::new("div", &CalcOptions::new().nil_on_error());
		let value = ctx
			.check::<i32>(Err(ArithError::DivisionByZero), binary_report("div", "/", 1, 0, Type::Int4))
			.unwrap();
		assert!(value.is_nil());
		assert_eq!(ctx.nils, 1);
	}

	#[test]
	fn test_shift_error_ignores_policy() {
		let mut ctx = EvaluationContext::new("lsh", &CalcOptions::new().nil_on_error());
		let err = ctx
			.check::<i8>(Err(ArithError::ShiftOutOfRange), binary_report("lsh", "<<", 1, 9, Type::Int1))
			.unwrap_err();
		assert_eq!(err.code(), "CALC_003");
	}
}
