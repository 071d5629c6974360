// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Single-operand operators. Each maps one input value to one output
//! value; NIL input gives NIL output except for the NIL tests.

use std::fmt::Display;

use batcalc_column::{Column, ColumnData, Element};
use batcalc_type::{
	ArithError, Bit, GetType, Nil, Result, SafeAdd, SafeSub, Type, diagnostic::operator::unsupported_type,
	return_error,
};
use tracing::instrument;

use crate::{
	CalcOptions, Operand,
	context::{EvaluationContext, unary_report},
	dispatch::{Number, with_fixed, with_integer, with_number},
	operand::{Lane, TextLane, align},
	property::{Order, derive},
};

/// Bitwise complement of integers, three-valued negation of `bit`.
#[instrument(name = "calc::not", level = "trace", skip_all)]
pub fn not(input: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let ty = input.get_type();
	let order = Order::reverse(input.properties(), true);
	evaluate("not", input, ty, options, order, |ctx, input, count| {
		if ty == Type::Bit {
			return map::<Bit, Bit>(ctx, input, count, |v| Ok(v.not3()));
		}
		with_integer!(ty, T => map::<T, T>(ctx, input, count, complement::<T>), return_error!(unsupported_type("not", ty)))
	})
}

#[instrument(name = "calc::negate", level = "trace", skip_all)]
pub fn negate(input: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let ty = input.get_type();
	let order = Order::reverse(input.properties(), true);
	evaluate("negate", input, ty, options, order, |ctx, input, count| {
		with_number!(ty, T => map::<T, T>(ctx, input, count, negated::<T>), return_error!(unsupported_type("negate", ty)))
	})
}

#[instrument(name = "calc::absolute", level = "trace", skip_all)]
pub fn absolute(input: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let ty = input.get_type();
	evaluate("absolute", input, ty, options, Order::None, |ctx, input, count| {
		with_number!(ty, T => map::<T, T>(ctx, input, count, magnitude::<T>), return_error!(unsupported_type("absolute", ty)))
	})
}

/// -1, 0 or 1 as `Int1`.
#[instrument(name = "calc::sign", level = "trace", skip_all)]
pub fn sign(input: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let ty = input.get_type();
	let order = Order::preserve(input.properties(), false);
	evaluate("sign", input, Type::Int1, options, order, |ctx, input, count| {
		with_number!(ty, T => map::<T, i8>(ctx, input, count, signum::<T>), return_error!(unsupported_type("sign", ty)))
	})
}

#[instrument(name = "calc::iszero", level = "trace", skip_all)]
pub fn iszero(input: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let ty = input.get_type();
	evaluate("iszero", input, Type::Bit, options, Order::None, |ctx, input, count| {
		with_number!(ty, T => map::<T, Bit>(ctx, input, count, zero_test::<T>), return_error!(unsupported_type("iszero", ty)))
	})
}

/// TRUE where the input is NIL; never NIL itself.
#[instrument(name = "calc::isnil", level = "trace", skip_all)]
pub fn isnil(input: Operand<'_>) -> Result<Column> {
	let order = Order::reverse(input.properties(), false);
	nil_test("isnil", input, order, true)
}

/// TRUE where the input is not NIL; never NIL itself.
#[instrument(name = "calc::isnotnil", level = "trace", skip_all)]
pub fn isnotnil(input: Operand<'_>) -> Result<Column> {
	let order = Order::preserve(input.properties(), false);
	nil_test("isnotnil", input, order, false)
}

/// `input + 1` in the input's type.
#[instrument(name = "calc::incr", level = "trace", skip_all)]
pub fn incr(input: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let ty = input.get_type();
	let order = Order::preserve(input.properties(), false);
	evaluate("incr", input, ty, options, order, |ctx, input, count| {
		with_number!(ty, T => map::<T, T>(ctx, input, count, |v: T| v.safe_add(1i8)),
			return_error!(unsupported_type("incr", ty)))
	})
}

/// `input - 1` in the input's type.
#[instrument(name = "calc::decr", level = "trace", skip_all)]
pub fn decr(input: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let ty = input.get_type();
	let order = Order::preserve(input.properties(), false);
	evaluate("decr", input, ty, options, order, |ctx, input, count| {
		with_number!(ty, T => map::<T, T>(ctx, input, count, |v: T| v.safe_sub(1i8)),
			return_error!(unsupported_type("decr", ty)))
	})
}

fn complement<T: Number>(value: T) -> std::result::Result<T, ArithError> {
	// the complement of MAX is the NIL pattern
	T::from_wide(!value.to_wide()).ok_or(ArithError::Overflow)
}

fn negated<T: Number>(value: T) -> std::result::Result<T, ArithError> {
	T::zero().safe_sub(value)
}

fn magnitude<T: Number>(value: T) -> std::result::Result<T, ArithError> {
	if value < T::zero() { negated(value) } else { Ok(value) }
}

fn zero_test<T: Number>(value: T) -> std::result::Result<Bit, ArithError> {
	Ok(Bit::from(value.is_zero()))
}

fn signum<T: Number>(value: T) -> std::result::Result<i8, ArithError> {
	Ok(if value > T::zero() {
		1
	} else if value < T::zero() {
		-1
	} else {
		0
	})
}

/// Shared frame of every unary operator over fixed-width values.
fn evaluate(
	operator: &'static str,
	input: Operand<'_>,
	target: Type,
	options: &CalcOptions,
	order: Order,
	kernel: impl FnOnce(&mut EvaluationContext, &Operand<'_>, usize) -> Result<ColumnData>,
) -> Result<Column> {
	let source = input.get_type();
	let shape = align(operator, &[&input])?;
	let mut ctx = EvaluationContext::new(operator, options);
	let data = kernel(&mut ctx, &input, shape.count)?;
	let properties = derive(order, shape.count, ctx.nils, ctx.abort_on_error());
	ctx.finish(format_args!("{}({})->{}", operator, source, target), shape.count);
	Ok(Column::from_parts(shape.hseq, data, properties))
}

fn map<T: Element + Display, U: Element>(
	ctx: &mut EvaluationContext,
	input: &Operand<'_>,
	count: usize,
	mut f: impl FnMut(T) -> std::result::Result<U, ArithError>,
) -> Result<ColumnData> {
	let mut lane = Lane::<T>::new(ctx.operator, input)?;
	let mut result = Vec::with_capacity(count);
	for _ in 0..count {
		let value = lane.next();
		if value.is_nil() {
			result.push(ctx.nil());
			continue;
		}
		let outcome = f(value);
		result.push(ctx.check(outcome, unary_report(ctx.operator, value, U::get_type()))?);
	}
	Ok(U::into_data(result))
}

fn nil_test(operator: &'static str, input: Operand<'_>, order: Order, want_nil: bool) -> Result<Column> {
	let ty = input.get_type();
	evaluate(operator, input, Type::Bit, &CalcOptions::default(), order, |_, input, count| {
		let flags: Vec<Bit> = if ty == Type::Utf8 {
			let mut lane = TextLane::new(operator, input)?;
			(0..count).map(|_| Bit::from(lane.next().is_none() == want_nil)).collect()
		} else {
			with_fixed!(ty, T => {
				let mut lane = Lane::<T>::new(operator, input)?;
				(0..count).map(|_| Bit::from(lane.next().is_nil() == want_nil)).collect()
			}, return_error!(unsupported_type(operator, ty)))
		};
		Ok(Bit::into_data(flags))
	})
}

#[cfg(test)]
mod tests {
	use batcalc_column::CandidateList;
	use batcalc_type::Value;

	use super::*;

	#[test]
	fn test_negate_selected_positions() {
		let input = Column::new(ColumnData::int4([1, 2, 3]));
		let candidates = CandidateList::list(vec![0, 2]).unwrap();
		let result = negate(Operand::selected(&input, &candidates), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int4([-1, -3]));
		assert!(result.properties.revsorted);
		assert!(result.properties.key);
	}

	#[test]
	fn test_not_integer() {
		let input = Column::new(ColumnData::int1([0, 5, i8::MIN]));
		let result = not((&input).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int1([-1, -6, i8::MIN]));
	}

	#[test]
	fn test_not_max_overflows() {
		let input = Column::new(ColumnData::int1([i8::MAX]));
		let err = not((&input).into(), &CalcOptions::default()).unwrap_err();
		assert_eq!(err.code(), "22003");
		let result = not((&input).into(), &CalcOptions::new().nil_on_error()).unwrap();
		assert_eq!(result.count_nils(), 1);
	}

	#[test]
	fn test_not_bit() {
		let input = Column::new(ColumnData::bit([Some(true), Some(false), None]));
		let result = not((&input).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(false), Some(true), None]));
	}

	#[test]
	fn test_not_twice_is_identity() {
		let options = CalcOptions::default();
		let input = Column::new(ColumnData::int4([i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1]));
		let once = not((&input).into(), &options).unwrap();
		let twice = not((&once).into(), &options).unwrap();
		assert_eq!(twice.data, input.data);

		let input = Column::new(ColumnData::bit([Some(true), None, Some(false)]));
		let once = not((&input).into(), &options).unwrap();
		let twice = not((&once).into(), &options).unwrap();
		assert_eq!(twice.data, input.data);
	}

	#[test]
	fn test_absolute_destroys_order() {
		let input = Column::new(ColumnData::int4([-3, -1, 2]));
		let result = absolute((&input).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int4([3, 1, 2]));
		assert!(!result.properties.sorted);
		assert!(!result.properties.revsorted);
	}

	#[test]
	fn test_sign() {
		let input = Column::new(ColumnData::float8([-2.5, 0.0, 7.0]));
		let result = sign((&input).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int1([-1, 0, 1]));
		assert!(result.properties.sorted);
	}

	#[test]
	fn test_iszero() {
		let input = Column::new(ColumnData::int2([0, 3, i16::MIN]));
		let result = iszero((&input).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(true), Some(false), None]));
	}

	#[test]
	fn test_isnil_never_nil() {
		let input = Column::new(ColumnData::utf8([Some("a"), None]));
		let result = isnil((&input).into()).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(false), Some(true)]));
		assert!(result.properties.nonil);

		let nil = Value::Nil(Type::Int4);
		let result = isnotnil((&nil).into()).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(false)]));
	}

	#[test]
	fn test_isnotnil_keeps_order() {
		let input = Column::new(ColumnData::int4([i32::MIN, 1, 2]));
		let result = isnotnil((&input).into()).unwrap();
		assert!(result.properties.sorted);
	}

	#[test]
	fn test_incr_overflow() {
		let input = Column::new(ColumnData::int1([1, 127]));
		let result = incr((&input).into(), &CalcOptions::new().nil_on_error()).unwrap();
		assert_eq!(result.data, ColumnData::int1([2, i8::MIN]));
		let result = decr((&input).into(), &CalcOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::int1([0, 126]));
	}
}
