// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::{Column, ColumnData, Properties, container::Utf8Container};
use batcalc_type::{ArithError, IsNumber, Result, SafeAdd, Type};
use tracing::instrument;

use super::{BinaryKernel, binary, exact_only};
use crate::{
	CalcOptions, Operand,
	context::EvaluationContext,
	operand::{TextLane, align},
	property::Order,
};

pub(crate) struct Add;

impl BinaryKernel for Add {
	const NAME: &'static str = "add";
	const SYMBOL: &'static str = "+";

	fn supports(l: Type, r: Type, t: Type) -> bool {
		exact_only(l, r, t)
	}

	#[inline]
	fn apply<L: IsNumber, R: IsNumber, T: IsNumber>(l: L, r: R) -> std::result::Result<T, ArithError> {
		l.safe_add(r)
	}
}

/// `lhs + rhs` into `target`; three strings concatenate.
#[instrument(name = "calc::add", level = "trace", skip_all)]
pub fn add(lhs: Operand<'_>, rhs: Operand<'_>, target: Type, options: &CalcOptions) -> Result<Column> {
	if lhs.get_type() == Type::Utf8 && rhs.get_type() == Type::Utf8 && target == Type::Utf8 {
		return concat(lhs, rhs, options);
	}
	let order = additive_order(&lhs, &rhs, false);
	binary::<Add>(lhs, rhs, target, options, order)
}

/// Adding or subtracting a constant moves every value by the same amount;
/// subtracting a column from a constant turns its order around.
pub(crate) fn additive_order(lhs: &Operand<'_>, rhs: &Operand<'_>, subtract: bool) -> Order {
	match (lhs.properties(), rhs.properties()) {
		(Some(lhs), Some(rhs)) => Order::Pairwise {
			lhs,
			rhs,
			flip_rhs: subtract,
		},
		(Some(input), None) => Order::preserve(Some(input), false),
		(None, Some(input)) if subtract => Order::reverse(Some(input), false),
		(None, Some(input)) => Order::preserve(Some(input), false),
		(None, None) => Order::None,
	}
}

fn concat(lhs: Operand<'_>, rhs: Operand<'_>, options: &CalcOptions) -> Result<Column> {
	let shape = align(Add::NAME, &[&lhs, &rhs])?;
	let mut ctx = EvaluationContext::new(Add::NAME, options);
	let mut left = TextLane::new(Add::NAME, &lhs)?;
	let mut right = TextLane::new(Add::NAME, &rhs)?;

	let mut result = Utf8Container::with_capacity(shape.count);
	let mut buffer = String::new();
	for _ in 0..shape.count {
		match (left.next(), right.next()) {
			(Some(l), Some(r)) => {
				buffer.clear();
				buffer.push_str(l);
				buffer.push_str(r);
				result.push(&buffer);
			}
			_ => {
				ctx.nils += 1;
				result.push_nil();
			}
		}
	}

	ctx.finish(format_args!("add(str,str)->str"), shape.count);
	Ok(Column::from_parts(shape.hseq, ColumnData::Utf8(result), Properties::trivial(shape.count, ctx.nils)))
}
