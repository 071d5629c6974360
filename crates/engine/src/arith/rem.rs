// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::Column;
use batcalc_type::{ArithError, IsNumber, Result, SafeRemainder, Type};
use tracing::instrument;

use super::{BinaryKernel, binary, exact_only};
use crate::{CalcOptions, Operand, property::Order};

pub(crate) struct Rem;

impl BinaryKernel for Rem {
	const NAME: &'static str = "mod";
	const SYMBOL: &'static str = "%";

	fn supports(l: Type, r: Type, t: Type) -> bool {
		exact_only(l, r, t)
	}

	#[inline]
	fn apply<L: IsNumber, R: IsNumber, T: IsNumber>(l: L, r: R) -> std::result::Result<T, ArithError> {
		l.safe_rem(r)
	}
}

/// Remainder with the sign of the dividend.
#[instrument(name = "calc::modulo", level = "trace", skip_all)]
pub fn modulo(lhs: Operand<'_>, rhs: Operand<'_>, target: Type, options: &CalcOptions) -> Result<Column> {
	binary::<Rem>(lhs, rhs, target, options, Order::None)
}

#[cfg(test)]
mod tests {
	use batcalc_column::ColumnData;
	use batcalc_type::Value;

	use super::*;

	#[test]
	fn test_modulo() {
		let l = Column::new(ColumnData::int8([7, -7, 1_000_003]));
		let three = Value::Int1(3);
		let result = modulo((&l).into(), (&three).into(), Type::Int1, &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int1([1, -1, 1]));
	}

	#[test]
	fn test_zero_divisor() {
		let l = Column::new(ColumnData::float8([7.5]));
		let zero = Value::Float8(0.0);
		let err = modulo((&l).into(), (&zero).into(), Type::Float8, &CalcOptions::default()).unwrap_err();
		assert_eq!(err.code(), "22012");
	}
}
