// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod add;
mod div;
mod mul;
mod rem;
mod shift;
mod sub;

pub use add::add;
pub use div::div;
pub use mul::mul;
pub use rem::modulo;
pub use shift::{lsh, rsh};
pub use sub::sub;

use std::cmp::Ordering;

use batcalc_column::{Column, ColumnData};
use batcalc_type::{
	ArithError, GetType, IsNumber, Nil, Result, Type, Value, diagnostic::operator::unsupported_types, return_error,
};

use crate::{
	CalcOptions, Operand,
	context::{EvaluationContext, binary_report},
	dispatch::{Number, with_number},
	operand::{Lane, align},
	property::{Order, derive},
};

/// One arithmetic operator over the numeric lattice.
pub(crate) trait BinaryKernel {
	const NAME: &'static str;
	const SYMBOL: &'static str;

	/// Whether `l op r -> t` is defined.
	fn supports(l: Type, r: Type, t: Type) -> bool;

	fn apply<L: IsNumber, R: IsNumber, T: IsNumber>(l: L, r: R) -> std::result::Result<T, ArithError>;
}

/// Integer results only from integer operands.
pub(crate) fn exact_only(l: Type, r: Type, t: Type) -> bool {
	l.is_number() && r.is_number() && t.is_number() && (t.is_float() || (l.is_integer() && r.is_integer()))
}

/// Any numeric combination, float operands may produce integers.
pub(crate) fn any_number(l: Type, r: Type, t: Type) -> bool {
	l.is_number() && r.is_number() && t.is_number()
}

pub(crate) fn binary<K: BinaryKernel>(
	lhs: Operand<'_>,
	rhs: Operand<'_>,
	target: Type,
	options: &CalcOptions,
	order: Order,
) -> Result<Column> {
	let (lt, rt) = (lhs.get_type(), rhs.get_type());
	if !K::supports(lt, rt, target) {
		return_error!(unsupported_types(K::NAME, lt, rt, target));
	}
	let shape = align(K::NAME, &[&lhs, &rhs])?;
	let mut ctx = EvaluationContext::new(K::NAME, options);

	let data = with_number!(lt, L => with_number!(rt, R => with_number!(target, T =>
		run::<K, L, R, T>(&mut ctx, &lhs, &rhs, shape.count)?,
		return_error!(unsupported_types(K::NAME, lt, rt, target))),
		return_error!(unsupported_types(K::NAME, lt, rt, target))),
		return_error!(unsupported_types(K::NAME, lt, rt, target)));

	let properties = derive(order, shape.count, ctx.nils, ctx.abort_on_error());
	ctx.finish(format_args!("{}({},{})->{}", K::NAME, lt, rt, target), shape.count);
	Ok(Column::from_parts(shape.hseq, data, properties))
}

fn run<K: BinaryKernel, L: Number, R: Number, T: Number>(
	ctx: &mut EvaluationContext,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
) -> Result<ColumnData> {
	let mut lhs = Lane::<L>::new(K::NAME, lhs)?;
	let mut rhs = Lane::<R>::new(K::NAME, rhs)?;
	let mut result = Vec::with_capacity(count);
	for _ in 0..count {
		let (l, r) = (lhs.next(), rhs.next());
		if l.is_nil() || r.is_nil() {
			result.push(ctx.nil());
			continue;
		}
		let value = ctx.check(K::apply::<L, R, T>(l, r), binary_report(K::NAME, K::SYMBOL, l, r, T::get_type()))?;
		result.push(value);
	}
	Ok(T::into_data(result))
}

/// Sign of a numeric constant; `None` for NIL and non-numbers.
pub(crate) fn value_sign(value: &Value) -> Option<Ordering> {
	match value {
		Value::Int1(v) => Some(v.cmp(&0)),
		Value::Int2(v) => Some(v.cmp(&0)),
		Value::Int4(v) => Some(v.cmp(&0)),
		Value::Int8(v) => Some(v.cmp(&0)),
		#[cfg(feature = "hge")]
		Value::Int16(v) => Some(v.cmp(&0)),
		Value::Float4(v) => v.partial_cmp(&0.0),
		Value::Float8(v) => v.partial_cmp(&0.0),
		_ => None,
	}
	.filter(|_| !value.is_nil())
}
