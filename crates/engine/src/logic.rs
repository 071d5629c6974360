// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::{Column, ColumnData, Element};
use batcalc_type::{
	ArithError, Bit, GetType, Nil, Result, Type, diagnostic::operator::unsupported_types, return_error,
};
use tracing::instrument;

use crate::{
	CalcOptions, Operand,
	context::{EvaluationContext, binary_report},
	dispatch::{Integer, with_integer},
	operand::{Lane, align},
	property::{Order, derive},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Connective {
	And,
	Or,
	Xor,
}

impl Connective {
	fn name(self) -> &'static str {
		match self {
			Connective::And => "and",
			Connective::Or => "or",
			Connective::Xor => "xor",
		}
	}

	fn symbol(self) -> &'static str {
		match self {
			Connective::And => "&",
			Connective::Or => "|",
			Connective::Xor => "^",
		}
	}

	/// Kleene logic for `and`/`or`; xor is unknown whenever a side is.
	fn truth(self, l: Bit, r: Bit) -> Bit {
		match self {
			Connective::And => l.and3(r),
			Connective::Or => l.or3(r),
			Connective::Xor => l.xor3(r),
		}
	}

	fn bits(self, l: i128, r: i128) -> i128 {
		match self {
			Connective::And => l & r,
			Connective::Or => l | r,
			Connective::Xor => l ^ r,
		}
	}
}

/// Three-valued conjunction of `bit`s, bitwise AND of integers.
#[instrument(name = "calc::and", level = "trace", skip_all)]
pub fn and(lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	logic(Connective::And, lhs, rhs, options)
}

/// Three-valued disjunction of `bit`s, bitwise OR of integers.
#[instrument(name = "calc::or", level = "trace", skip_all)]
pub fn or(lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	logic(Connective::Or, lhs, rhs, options)
}

#[instrument(name = "calc::xor", level = "trace", skip_all)]
pub fn xor(lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	logic(Connective::Xor, lhs, rhs, options)
}

fn logic(op: Connective, lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let name = op.name();
	let (lt, rt) = (lhs.get_type(), rhs.get_type());
	if lt != rt {
		return_error!(unsupported_types(name, lt, rt, lt));
	}
	let shape = align(name, &[&lhs, &rhs])?;
	let mut ctx = EvaluationContext::new(name, options);

	let data = if lt == Type::Bit {
		truth(op, &mut ctx, &lhs, &rhs, shape.count)?
	} else {
		with_integer!(lt, T => bitwise::<T>(op, &mut ctx, &lhs, &rhs, shape.count)?,
			return_error!(unsupported_types(name, lt, rt, lt)))
	};

	let properties = derive(Order::None, shape.count, ctx.nils, ctx.abort_on_error());
	ctx.finish(format_args!("{}({},{})->{}", name, lt, rt, lt), shape.count);
	Ok(Column::from_parts(shape.hseq, data, properties))
}

fn truth(
	op: Connective,
	ctx: &mut EvaluationContext,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
) -> Result<ColumnData> {
	let mut lhs = Lane::<Bit>::new(op.name(), lhs)?;
	let mut rhs = Lane::<Bit>::new(op.name(), rhs)?;
	let result: Vec<Bit> = (0..count).map(|_| ctx.count(op.truth(lhs.next(), rhs.next()))).collect();
	Ok(Bit::into_data(result))
}

fn bitwise<T: Integer>(
	op: Connective,
	ctx: &mut EvaluationContext,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
) -> Result<ColumnData> {
	let mut lhs = Lane::<T>::new(op.name(), lhs)?;
	let mut rhs = Lane::<T>::new(op.name(), rhs)?;
	let mut result = Vec::with_capacity(count);
	for _ in 0..count {
		let (l, r) = (lhs.next(), rhs.next());
		if l.is_nil() || r.is_nil() {
			result.push(ctx.nil());
			continue;
		}
		// a combination landing on the NIL pattern is out of range
		let outcome = T::from_wide(op.bits(l.to_wide(), r.to_wide())).ok_or(ArithError::Overflow);
		result.push(ctx.check(outcome, binary_report(op.name(), op.symbol(), l, r, T::get_type()))?);
	}
	Ok(T::into_data(result))
}
