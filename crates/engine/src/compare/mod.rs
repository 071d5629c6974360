// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ordering and equality predicates producing `bit` columns, plus the
//! three-way compare producing `Int1`.
//!
//! Numbers compare across types by value: integer pairs exactly, anything
//! involving a float in double precision. A NIL side makes the outcome
//! unknown, except that `eq`/`ne` with `nil_matches` treat NIL as an
//! ordinary value equal only to itself.

mod atom;

pub use atom::compare_atoms;

use std::cmp::Ordering;

use batcalc_column::{Column, Element};
use batcalc_type::{Bit, Nil, Result, Type, compare_numbers, diagnostic::operator::unsupported_types, return_error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
	CalcOptions, Operand,
	context::EvaluationContext,
	dispatch::{Number, with_ordinal},
	operand::{Lane, TextLane, align},
	property::{Order, derive},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
	Lt,
	Gt,
	Le,
	Ge,
	Eq,
	Ne,
}

impl Comparison {
	pub fn name(self) -> &'static str {
		match self {
			Comparison::Lt => "lt",
			Comparison::Gt => "gt",
			Comparison::Le => "le",
			Comparison::Ge => "ge",
			Comparison::Eq => "eq",
			Comparison::Ne => "ne",
		}
	}

	pub fn holds(self, ordering: Ordering) -> bool {
		match self {
			Comparison::Lt => ordering == Ordering::Less,
			Comparison::Gt => ordering == Ordering::Greater,
			Comparison::Le => ordering != Ordering::Greater,
			Comparison::Ge => ordering != Ordering::Less,
			Comparison::Eq => ordering == Ordering::Equal,
			Comparison::Ne => ordering != Ordering::Equal,
		}
	}

	pub(crate) fn resolve(self, outcome: Outcome, nil_matches: bool) -> Bit {
		match (outcome, self) {
			(Outcome::Ordered(ordering), _) => Bit::from(self.holds(ordering)),
			(Outcome::BothNil, Comparison::Eq) | (Outcome::OneNil, Comparison::Ne) if nil_matches => Bit::TRUE,
			(Outcome::BothNil, Comparison::Ne) | (Outcome::OneNil, Comparison::Eq) if nil_matches => Bit::FALSE,
			_ => Bit::UNKNOWN,
		}
	}
}

/// One position's comparison before it is turned into a result value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
	Ordered(Ordering),
	BothNil,
	OneNil,
}

impl Outcome {
	pub(crate) fn of<T>(l: Option<T>, r: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Outcome {
		match (l, r) {
			(Some(l), Some(r)) => Outcome::Ordered(cmp(&l, &r)),
			(None, None) => Outcome::BothNil,
			_ => Outcome::OneNil,
		}
	}
}

#[instrument(name = "calc::lt", level = "trace", skip_all)]
pub fn lt(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	compare(Comparison::Lt, lhs, rhs, false)
}

#[instrument(name = "calc::gt", level = "trace", skip_all)]
pub fn gt(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	compare(Comparison::Gt, lhs, rhs, false)
}

#[instrument(name = "calc::le", level = "trace", skip_all)]
pub fn le(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	compare(Comparison::Le, lhs, rhs, false)
}

#[instrument(name = "calc::ge", level = "trace", skip_all)]
pub fn ge(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	compare(Comparison::Ge, lhs, rhs, false)
}

/// Equality; with `nil_matches` NIL equals NIL and the result is never NIL.
#[instrument(name = "calc::eq", level = "trace", skip_all)]
pub fn eq(lhs: Operand<'_>, rhs: Operand<'_>, nil_matches: bool) -> Result<Column> {
	compare(Comparison::Eq, lhs, rhs, nil_matches)
}

#[instrument(name = "calc::ne", level = "trace", skip_all)]
pub fn ne(lhs: Operand<'_>, rhs: Operand<'_>, nil_matches: bool) -> Result<Column> {
	compare(Comparison::Ne, lhs, rhs, nil_matches)
}

/// Any predicate by value. `nil_matches` only affects `Eq` and `Ne`.
#[instrument(name = "calc::compare", level = "trace", skip_all)]
pub fn compare(op: Comparison, lhs: Operand<'_>, rhs: Operand<'_>, nil_matches: bool) -> Result<Column> {
	evaluate(op.name(), lhs, rhs, Type::Bit, |outcome| op.resolve(outcome, nil_matches))
}

/// -1, 0 or 1 as `Int1`; NIL when either side is NIL.
#[instrument(name = "calc::cmp", level = "trace", skip_all)]
pub fn cmp(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	evaluate("cmp", lhs, rhs, Type::Int1, |outcome| match outcome {
		Outcome::Ordered(ordering) => ordering as i8,
		Outcome::BothNil | Outcome::OneNil => i8::NIL,
	})
}

fn evaluate<U: Element>(
	name: &'static str,
	lhs: Operand<'_>,
	rhs: Operand<'_>,
	target: Type,
	emit: impl Fn(Outcome) -> U,
) -> Result<Column> {
	let (lt, rt) = (lhs.get_type(), rhs.get_type());
	let shape = align(name, &[&lhs, &rhs])?;
	let mut ctx = EvaluationContext::new(name, &CalcOptions::default());
	let mut result = Vec::with_capacity(shape.count);
	let mut push = |outcome: Outcome| result.push(ctx.count(emit(outcome)));

	match (lt, rt) {
		(Type::Utf8, Type::Utf8) => scan_text(name, &lhs, &rhs, shape.count, &mut push)?,
		(Type::Bit, Type::Bit) => scan_atoms::<Bit>(name, &lhs, &rhs, shape.count, &mut push)?,
		_ => with_ordinal!(lt, L => with_ordinal!(rt, R => scan_numbers::<L, R>(name, &lhs, &rhs, shape.count, &mut push)?,
			return_error!(unsupported_types(name, lt, rt, target))),
			return_error!(unsupported_types(name, lt, rt, target))),
	}

	let properties = derive(Order::None, shape.count, ctx.nils, true);
	ctx.finish(format_args!("{}({},{})->{}", name, lt, rt, target), shape.count);
	Ok(Column::from_parts(shape.hseq, U::into_data(result), properties))
}

fn scan_numbers<L: Number, R: Number>(
	name: &str,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
	push: &mut impl FnMut(Outcome),
) -> Result<()> {
	let mut lhs = Lane::<L>::new(name, lhs)?;
	let mut rhs = Lane::<R>::new(name, rhs)?;
	for _ in 0..count {
		let (l, r) = (lhs.next(), rhs.next());
		push(match (l.is_nil(), r.is_nil()) {
			(false, false) => Outcome::Ordered(compare_numbers(l, r)),
			(true, true) => Outcome::BothNil,
			_ => Outcome::OneNil,
		});
	}
	Ok(())
}

fn scan_atoms<T: Element>(
	name: &str,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
	push: &mut impl FnMut(Outcome),
) -> Result<()> {
	let mut lhs = Lane::<T>::new(name, lhs)?;
	let mut rhs = Lane::<T>::new(name, rhs)?;
	for _ in 0..count {
		push(Outcome::of(lhs.next().to_option(), rhs.next().to_option(), T::atom_cmp));
	}
	Ok(())
}

fn scan_text(
	name: &str,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
	push: &mut impl FnMut(Outcome),
) -> Result<()> {
	let mut lhs = TextLane::new(name, lhs)?;
	let mut rhs = TextLane::new(name, rhs)?;
	for _ in 0..count {
		push(Outcome::of(lhs.next(), rhs.next(), |l, r| l.as_bytes().cmp(r.as_bytes())));
	}
	Ok(())
}
