// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::Column;
use batcalc_type::{ArithError, IsNumber, Result, SafeSub, Type};
use tracing::instrument;

use super::{BinaryKernel, add::additive_order, binary, exact_only};
use crate::{CalcOptions, Operand};

pub(crate) struct Sub;

impl BinaryKernel for Sub {
	const NAME: &'static str = "sub";
	const SYMBOL: &'static str = "-";

	fn supports(l: Type, r: Type, t: Type) -> bool {
		exact_only(l, r, t)
	}

	#[inline]
	fn apply<L: IsNumber, R: IsNumber, T: IsNumber>(l: L, r: R) -> std::result::Result<T, ArithError> {
		l.safe_sub(r)
	}
}

#[instrument(name = "calc::sub", level = "trace", skip_all)]
pub fn sub(lhs: Operand<'_>, rhs: Operand<'_>, target: Type, options: &CalcOptions) -> Result<Column> {
	let order = additive_order(&lhs, &rhs, true);
	binary::<Sub>(lhs, rhs, target, options, order)
}

#[cfg(test)]
mod tests {
	use batcalc_column::ColumnData;
	use batcalc_type::Value;

	use super::*;

	#[test]
	fn test_sub() {
		let l = Column::new(ColumnData::int4([10, 20, i32::MIN]));
		let r = Column::new(ColumnData::int4([1, 2, 3]));
		let result = sub((&l).into(), (&r).into(), Type::Int4, &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int4([9, 18, i32::MIN]));
	}

	#[test]
	fn test_constant_minus_column_reverses() {
		let ten = Value::Int4(10);
		let r = Column::new(ColumnData::int4([1, 2, 3]));
		let result = sub((&ten).into(), (&r).into(), Type::Int4, &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int4([9, 8, 7]));
		assert!(result.properties.revsorted);
		assert!(!result.properties.sorted);
	}

	#[test]
	fn test_sorted_minus_revsorted() {
		let l = Column::new(ColumnData::int4([1, 2, 3]));
		let r = Column::new(ColumnData::int4([3, 2, 1]));
		let result = sub((&l).into(), (&r).into(), Type::Int4, &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int4([-2, 0, 2]));
		assert!(result.properties.sorted);
	}

	#[test]
	fn test_below_min_is_overflow() {
		let l = Column::new(ColumnData::int1([-127]));
		let one = Value::Int1(1);
		let err = sub((&l).into(), (&one).into(), Type::Int1, &CalcOptions::default()).unwrap_err();
		assert_eq!(err.to_string(), "22003!overflow in calculation -127-1.");
	}
}
