// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Single-value forms of every operator, computed with the same kernels as
//! the column forms so that NIL, overflow and conversion rules agree.

use batcalc_column::Column;
use batcalc_type::{Result, Type, Value};

use crate::{BetweenOptions, CalcOptions, Comparison, Condition, ConvertOptions, Operand};

fn first(column: Column) -> Value {
	column.data.get_value(0)
}

macro_rules! binary_with_target {
	($($(#[$meta:meta])* $name:ident),* $(,)?) => {
		$(
			$(#[$meta])*
			pub fn $name(lhs: &Value, rhs: &Value, target: Type, options: &CalcOptions) -> Result<Value> {
				crate::$name(Operand::scalar(lhs), Operand::scalar(rhs), target, options).map(first)
			}
		)*
	};
}

macro_rules! binary_with_options {
	($($name:ident),* $(,)?) => {
		$(
			pub fn $name(lhs: &Value, rhs: &Value, options: &CalcOptions) -> Result<Value> {
				crate::$name(Operand::scalar(lhs), Operand::scalar(rhs), options).map(first)
			}
		)*
	};
}

macro_rules! binary {
	($($name:ident),* $(,)?) => {
		$(
			pub fn $name(lhs: &Value, rhs: &Value) -> Result<Value> {
				crate::$name(Operand::scalar(lhs), Operand::scalar(rhs)).map(first)
			}
		)*
	};
}

macro_rules! unary_with_options {
	($($name:ident),* $(,)?) => {
		$(
			pub fn $name(value: &Value, options: &CalcOptions) -> Result<Value> {
				crate::$name(Operand::scalar(value), options).map(first)
			}
		)*
	};
}

binary_with_target!(
	/// `lhs + rhs`; strings concatenate.
	add,
	sub,
	mul,
	div,
	modulo
);

binary_with_options!(lsh, rsh, and, or, xor);

binary!(min, max, min_no_nil, max_no_nil, lt, gt, le, ge, cmp);

unary_with_options!(not, negate, absolute, sign, iszero, incr, decr);

pub fn eq(lhs: &Value, rhs: &Value, nil_matches: bool) -> Result<Value> {
	crate::eq(Operand::scalar(lhs), Operand::scalar(rhs), nil_matches).map(first)
}

pub fn ne(lhs: &Value, rhs: &Value, nil_matches: bool) -> Result<Value> {
	crate::ne(Operand::scalar(lhs), Operand::scalar(rhs), nil_matches).map(first)
}

pub fn compare(op: Comparison, lhs: &Value, rhs: &Value, nil_matches: bool) -> Result<Value> {
	crate::compare(op, Operand::scalar(lhs), Operand::scalar(rhs), nil_matches).map(first)
}

pub fn isnil(value: &Value) -> Result<Value> {
	crate::isnil(Operand::scalar(value)).map(first)
}

pub fn isnotnil(value: &Value) -> Result<Value> {
	crate::isnotnil(Operand::scalar(value)).map(first)
}

pub fn between(value: &Value, lo: &Value, hi: &Value, options: &BetweenOptions) -> Result<Value> {
	crate::between(Operand::scalar(value), Operand::scalar(lo), Operand::scalar(hi), options).map(first)
}

/// `then` when `condition` is TRUE, `otherwise` when it is FALSE or NIL.
pub fn ifthenelse(condition: &Value, then: &Value, otherwise: &Value) -> Result<Value> {
	crate::ifthenelse(Condition::Bits(Operand::scalar(condition)), Operand::scalar(then), Operand::scalar(otherwise))
		.map(first)
}

pub fn convert(value: &Value, target: Type, options: &ConvertOptions) -> Result<Value> {
	crate::convert(Operand::scalar(value), target, options).map(first)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_add_overflow() {
		let err = add(&Value::Int1(127), &Value::Int1(1), Type::Int1, &CalcOptions::default()).unwrap_err();
		assert_eq!(err.code(), "22003");
		let nil = add(&Value::Int1(127), &Value::Int1(1), Type::Int1, &CalcOptions::new().nil_on_error()).unwrap();
		assert_eq!(nil, Value::Nil(Type::Int1));
	}

	#[test]
	fn test_nil_propagates() {
		let result = mul(&Value::Nil(Type::Int4), &Value::Int4(2), Type::Int8, &CalcOptions::default()).unwrap();
		assert_eq!(result, Value::Nil(Type::Int8));
	}

	#[test]
	fn test_concat() {
		let result = add(&Value::utf8("foo"), &Value::utf8("bar"), Type::Utf8, &CalcOptions::default()).unwrap();
		assert_eq!(result, Value::utf8("foobar"));
	}

	#[test]
	fn test_comparisons() {
		assert_eq!(lt(&Value::Int1(1), &Value::Float8(1.5)).unwrap(), Value::bit(true));
		assert_eq!(eq(&Value::Nil(Type::Int4), &Value::Nil(Type::Int4), true).unwrap(), Value::bit(true));
		assert_eq!(eq(&Value::Nil(Type::Int4), &Value::Nil(Type::Int4), false).unwrap(), Value::Nil(Type::Bit));
		assert_eq!(cmp(&Value::utf8("b"), &Value::utf8("a")).unwrap(), Value::Int1(1));
	}

	#[test]
	fn test_unary() {
		assert_eq!(negate(&Value::Int8(5), &CalcOptions::default()).unwrap(), Value::Int8(-5));
		assert_eq!(isnil(&Value::Nil(Type::Utf8)).unwrap(), Value::bit(true));
		assert_eq!(sign(&Value::Float4(-0.5), &CalcOptions::default()).unwrap(), Value::Int1(-1));
	}

	#[test]
	fn test_between() {
		let (lo, hi) = (Value::Int4(1), Value::Int4(10));
		assert_eq!(between(&Value::Int4(5), &lo, &hi, &BetweenOptions::default()).unwrap(), Value::bit(true));
		assert_eq!(
			between(&Value::Int4(5), &lo, &hi, &BetweenOptions::new().anti(true)).unwrap(),
			Value::bit(false)
		);
	}

	#[test]
	fn test_ifthenelse() {
		let nil = Value::Nil(Type::Bit);
		assert_eq!(ifthenelse(&nil, &Value::Int4(1), &Value::Int4(2)).unwrap(), Value::Int4(2));
	}

	#[test]
	fn test_convert() {
		let result = convert(&Value::Int4(300), Type::Int1, &ConvertOptions::new().nil_on_error()).unwrap();
		assert_eq!(result, Value::Nil(Type::Int1));
		let result = convert(&Value::Float8(2.5), Type::Utf8, &ConvertOptions::default()).unwrap();
		assert_eq!(result, Value::utf8("2.5"));
	}
}
