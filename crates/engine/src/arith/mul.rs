// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use batcalc_column::Column;
use batcalc_type::{ArithError, IsNumber, Result, SafeMul, Type};
use tracing::instrument;

use super::{BinaryKernel, any_number, binary, value_sign};
use crate::{CalcOptions, Operand, property::Order};

pub(crate) struct Mul;

impl BinaryKernel for Mul {
	const NAME: &'static str = "mul";
	const SYMBOL: &'static str = "*";

	fn supports(l: Type, r: Type, t: Type) -> bool {
		any_number(l, r, t)
	}

	#[inline]
	fn apply<L: IsNumber, R: IsNumber, T: IsNumber>(l: L, r: R) -> std::result::Result<T, ArithError> {
		l.safe_mul(r)
	}
}

#[instrument(name = "calc::mul", level = "trace", skip_all)]
pub fn mul(lhs: Operand<'_>, rhs: Operand<'_>, target: Type, options: &CalcOptions) -> Result<Column> {
	let order = if options.abort_on_error() {
		multiplicative_order(&lhs, &rhs)
	} else {
		Order::None
	};
	binary::<Mul>(lhs, rhs, target, options, order)
}

/// Scaling a column by a constant keeps, reverses or flattens its order
/// depending on the constant's sign.
fn multiplicative_order(lhs: &Operand<'_>, rhs: &Operand<'_>) -> Order {
	let (input, constant) = match (lhs.properties(), rhs.scalar_value(), lhs.scalar_value(), rhs.properties()) {
		(Some(input), Some(constant), _, _) | (_, _, Some(constant), Some(input)) => (input, constant),
		_ => return Order::None,
	};
	match value_sign(constant) {
		Some(Ordering::Greater) => Order::preserve(Some(input), false),
		Some(Ordering::Less) => Order::reverse(Some(input), false),
		Some(Ordering::Equal) => Order::Constant,
		None => Order::None,
	}
}

#[cfg(test)]
mod tests {
	use batcalc_column::ColumnData;
	use batcalc_type::Value;

	use super::*;

	#[test]
	fn test_carry() {
		let l = Column::new(ColumnData::int1([15, 16]));
		let eight = Value::Int1(8);
		let result = mul((&l).into(), (&eight).into(), Type::Int1, &CalcOptions::new().nil_on_error()).unwrap();
		assert_eq!(result.data, ColumnData::int1([120, i8::MIN]));
		assert_eq!(result.count_nils(), 1);
	}

	#[test]
	fn test_negative_constant_reverses() {
		let l = Column::new(ColumnData::int4([1, 2, 3]));
		let factor = Value::Int4(-2);
		let result = mul((&factor).into(), (&l).into(), Type::Int8, &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int8([-2, -4, -6]));
		assert!(result.properties.revsorted);
		assert!(!result.properties.sorted);
	}

	#[test]
	fn test_zero_constant_is_constant() {
		let l = Column::new(ColumnData::int4([3, 1, 2]));
		let zero = Value::Int4(0);
		let result = mul((&l).into(), (&zero).into(), Type::Int4, &CalcOptions::default()).unwrap();
		assert!(result.properties.sorted);
		assert!(result.properties.revsorted);
	}

	#[test]
	fn test_no_order_under_nil_policy() {
		let l = Column::new(ColumnData::int4([1, 2, 3]));
		let two = Value::Int4(2);
		let result = mul((&l).into(), (&two).into(), Type::Int4, &CalcOptions::new().nil_on_error()).unwrap();
		assert!(!result.properties.sorted);
	}

	#[test]
	fn test_int_by_float_to_int_rounds() {
		let l = Column::new(ColumnData::int4([3, -3]));
		let half = Value::Float8(0.5);
		let result = mul((&l).into(), (&half).into(), Type::Int4, &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int4([2, -2]));
	}
}
