// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::{Column, ColumnData};
use batcalc_type::{GetType, Nil, Result, SafeShift, diagnostic::operator::unsupported_types, return_error};
use tracing::instrument;

use crate::{
	CalcOptions, Operand,
	context::{EvaluationContext, binary_report},
	dispatch::{Integer, with_integer},
	operand::{Lane, align},
	property::{Order, derive},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
	Left,
	Right,
}

impl Direction {
	fn name(self) -> &'static str {
		match self {
			Direction::Left => "lsh",
			Direction::Right => "rsh",
		}
	}

	fn symbol(self) -> &'static str {
		match self {
			Direction::Left => "<<",
			Direction::Right => ">>",
		}
	}
}

/// Left shift; the result keeps the left operand's type.
#[instrument(name = "calc::lsh", level = "trace", skip_all)]
pub fn lsh(lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	shift(Direction::Left, lhs, rhs, options)
}

/// Arithmetic right shift; the result keeps the left operand's type.
#[instrument(name = "calc::rsh", level = "trace", skip_all)]
pub fn rsh(lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	shift(Direction::Right, lhs, rhs, options)
}

fn shift(direction: Direction, lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let name = direction.name();
	let (lt, rt) = (lhs.get_type(), rhs.get_type());
	let shape = align(name, &[&lhs, &rhs])?;
	let mut ctx = EvaluationContext::new(name, options);

	let data = with_integer!(lt, L => with_integer!(rt, R =>
		run::<L, R>(direction, &mut ctx, &lhs, &rhs, shape.count)?,
		return_error!(unsupported_types(name, lt, rt, lt))),
		return_error!(unsupported_types(name, lt, rt, lt)));

	let properties = derive(Order::None, shape.count, ctx.nils, ctx.abort_on_error());
	ctx.finish(format_args!("{}({},{})->{}", name, lt, rt, lt), shape.count);
	Ok(Column::from_parts(shape.hseq, data, properties))
}

fn run<L: Integer, R: Integer>(
	direction: Direction,
	ctx: &mut EvaluationContext,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
) -> Result<ColumnData> {
	let mut lhs = Lane::<L>::new(direction.name(), lhs)?;
	let mut rhs = Lane::<R>::new(direction.name(), rhs)?;
	let mut result = Vec::with_capacity(count);
	for _ in 0..count {
		let (l, r) = (lhs.next(), rhs.next());
		if l.is_nil() || r.is_nil() {
			result.push(ctx.nil());
			continue;
		}
		let outcome = match direction {
			Direction::Left => l.safe_shl(r),
			Direction::Right => l.safe_shr(r),
		};
		let value = ctx.check(outcome, binary_report(direction.name(), direction.symbol(), l, r, L::get_type()))?;
		result.push(value);
	}
	Ok(L::into_data(result))
}

#[cfg(test)]
mod tests {
	use batcalc_type::{Type, Value};

	use super::*;

	#[test]
	fn test_lsh() {
		let l = Column::new(ColumnData::int1([1, 3, i8::MIN]));
		let r = Value::Int4(2);
		let result = lsh((&l).into(), (&r).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int1([4, 12, i8::MIN]));
		assert_eq!(result.get_type(), Type::Int1);
	}

	#[test]
	fn test_rsh_is_arithmetic() {
		let l = Column::new(ColumnData::int2([-64, 64]));
		let r = Value::Int1(3);
		let result = rsh((&l).into(), (&r).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int2([-8, 8]));
	}

	#[test]
	fn test_out_of_range_ignores_nil_policy() {
		let l = Column::new(ColumnData::int1([1]));
		let r = Value::Int1(8);
		let err = lsh((&l).into(), (&r).into(), &CalcOptions::new().nil_on_error()).unwrap_err();
		assert_eq!(err.to_string(), "CALC_003!shift operand too large in lsh(1,8).");
	}

	#[test]
	fn test_negative_distance() {
		let l = Column::new(ColumnData::int4([16]));
		let r = Value::Int4(-1);
		let err = rsh((&l).into(), (&r).into(), &CalcOptions::default()).unwrap_err();
		assert_eq!(err.code(), "CALC_003");
	}

	#[test]
	fn test_float_rejected() {
		let l = Column::new(ColumnData::float8([1.0]));
		let r = Value::Int4(1);
		let err = lsh((&l).into(), (&r).into(), &CalcOptions::default()).unwrap_err();
		assert_eq!(err.code(), "CALC_002");
	}
}
