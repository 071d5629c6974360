// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::Column;
use batcalc_type::{ArithError, IsNumber, Result, SafeDiv, Type};
use tracing::instrument;

use super::{BinaryKernel, any_number, binary};
use crate::{CalcOptions, Operand, property::Order};

pub(crate) struct Div;

impl BinaryKernel for Div {
	const NAME: &'static str = "div";
	const SYMBOL: &'static str = "/";

	fn supports(l: Type, r: Type, t: Type) -> bool {
		any_number(l, r, t)
	}

	#[inline]
	fn apply<L: IsNumber, R: IsNumber, T: IsNumber>(l: L, r: R) -> std::result::Result<T, ArithError> {
		l.safe_div(r)
	}
}

/// Quotients claim no order beyond the trivial flags.
#[instrument(name = "calc::div", level = "trace", skip_all)]
pub fn div(lhs: Operand<'_>, rhs: Operand<'_>, target: Type, options: &CalcOptions) -> Result<Column> {
	binary::<Div>(lhs, rhs, target, options, Order::None)
}

#[cfg(test)]
mod tests {
	use batcalc_column::ColumnData;

	use super::*;

	#[test]
	fn test_division_by_zero_to_nil() {
		let l = Column::new(ColumnData::int4([10, 0, i32::MIN]));
		let r = Column::new(ColumnData::int4([2, 0, 5]));
		let result = div((&l).into(), (&r).into(), Type::Int4, &CalcOptions::new().nil_on_error()).unwrap();
		assert_eq!(result.data, ColumnData::int4([5, i32::MIN, i32::MIN]));
		assert_eq!(result.count_nils(), 2);
	}

	#[test]
	fn test_division_by_zero_aborts() {
		let l = Column::new(ColumnData::int4([10, 1]));
		let r = Column::new(ColumnData::int4([2, 0]));
		let err = div((&l).into(), (&r).into(), Type::Int4, &CalcOptions::default()).unwrap_err();
		assert_eq!(err.to_string(), "22012!division by zero.");
	}

	#[test]
	fn test_sorted_input_not_claimed() {
		let l = Column::new(ColumnData::int4([2, 4, 6]));
		let r = Column::new(ColumnData::int4([1, 1, 1]));
		let result = div((&l).into(), (&r).into(), Type::Int4, &CalcOptions::default()).unwrap();
		assert!(!result.properties.sorted);
	}
}
