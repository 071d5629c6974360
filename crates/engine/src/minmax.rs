// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use batcalc_column::{Column, ColumnData, Element, container::Utf8Container};
use batcalc_type::{Nil, Result, Type, diagnostic::operator::unsupported_types, return_error};
use tracing::instrument;

use crate::{
	CalcOptions, Operand,
	context::EvaluationContext,
	dispatch::with_fixed,
	operand::{Lane, TextLane, align},
	property::{Order, derive},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pick {
	Min,
	Max,
}

#[derive(Clone, Copy, Debug)]
struct Extremum {
	name: &'static str,
	pick: Pick,
	/// Ignore a NIL side instead of propagating it
	skip_nil: bool,
}

impl Extremum {
	fn choose<T>(self, l: Option<T>, r: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Option<T> {
		match (l, r) {
			(Some(l), Some(r)) => {
				let right_wins = match self.pick {
					Pick::Min => cmp(&r, &l) == Ordering::Less,
					Pick::Max => cmp(&r, &l) == Ordering::Greater,
				};
				Some(if right_wins { r } else { l })
			}
			(Some(value), None) | (None, Some(value)) if self.skip_nil => Some(value),
			_ => None,
		}
	}

	/// Both sides move the same way; a skipped NIL may land anywhere.
	fn order(self, lhs: &Operand<'_>, rhs: &Operand<'_>) -> Order {
		match (lhs.properties(), rhs.properties()) {
			(Some(l), Some(r)) if !self.skip_nil || (l.nonil && r.nonil) => Order::Pairwise {
				lhs: l,
				rhs: r,
				flip_rhs: false,
			},
			(Some(input), None) | (None, Some(input)) if !self.skip_nil || input.nonil => {
				Order::preserve(Some(input), false)
			}
			_ => Order::None,
		}
	}
}

/// The smaller of each pair; NIL if either side is NIL.
#[instrument(name = "calc::min", level = "trace", skip_all)]
pub fn min(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	extremum(
		Extremum {
			name: "min",
			pick: Pick::Min,
			skip_nil: false,
		},
		lhs,
		rhs,
	)
}

/// The larger of each pair; NIL if either side is NIL.
#[instrument(name = "calc::max", level = "trace", skip_all)]
pub fn max(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	extremum(
		Extremum {
			name: "max",
			pick: Pick::Max,
			skip_nil: false,
		},
		lhs,
		rhs,
	)
}

/// The smaller of each pair, taking the other side when one is NIL.
#[instrument(name = "calc::min_no_nil", level = "trace", skip_all)]
pub fn min_no_nil(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	extremum(
		Extremum {
			name: "min_no_nil",
			pick: Pick::Min,
			skip_nil: true,
		},
		lhs,
		rhs,
	)
}

/// The larger of each pair, taking the other side when one is NIL.
#[instrument(name = "calc::max_no_nil", level = "trace", skip_all)]
pub fn max_no_nil(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	extremum(
		Extremum {
			name: "max_no_nil",
			pick: Pick::Max,
			skip_nil: true,
		},
		lhs,
		rhs,
	)
}

fn extremum(op: Extremum, lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Column> {
	let (lt, rt) = (lhs.get_type(), rhs.get_type());
	if lt != rt {
		return_error!(unsupported_types(op.name, lt, rt, lt));
	}
	let shape = align(op.name, &[&lhs, &rhs])?;
	let mut ctx = EvaluationContext::new(op.name, &CalcOptions::default());

	let data = if lt == Type::Utf8 {
		run_text(op, &mut ctx, &lhs, &rhs, shape.count)?
	} else {
		with_fixed!(lt, T => run_fixed::<T>(op, &mut ctx, &lhs, &rhs, shape.count)?,
			return_error!(unsupported_types(op.name, lt, rt, lt)))
	};

	let properties = derive(op.order(&lhs, &rhs), shape.count, ctx.nils, true);
	ctx.finish(format_args!("{}({},{})->{}", op.name, lt, rt, lt), shape.count);
	Ok(Column::from_parts(shape.hseq, data, properties))
}

fn run_fixed<T: Element>(
	op: Extremum,
	ctx: &mut EvaluationContext,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
) -> Result<ColumnData> {
	let mut lhs = Lane::<T>::new(op.name, lhs)?;
	let mut rhs = Lane::<T>::new(op.name, rhs)?;
	let mut result = Vec::with_capacity(count);
	for _ in 0..count {
		let chosen = op.choose(lhs.next().to_option(), rhs.next().to_option(), T::atom_cmp);
		result.push(ctx.count(T::from_option(chosen)));
	}
	Ok(T::into_data(result))
}

fn run_text(
	op: Extremum,
	ctx: &mut EvaluationContext,
	lhs: &Operand<'_>,
	rhs: &Operand<'_>,
	count: usize,
) -> Result<ColumnData> {
	let mut lhs = TextLane::new(op.name, lhs)?;
	let mut rhs = TextLane::new(op.name, rhs)?;
	let mut result = Utf8Container::with_capacity(count);
	for _ in 0..count {
		let chosen = op.choose(lhs.next(), rhs.next(), |l, r| l.cmp(r));
		if chosen.is_none() {
			ctx.nils += 1;
		}
		result.push_option(chosen);
	}
	Ok(ColumnData::Utf8(result))
}

#[cfg(test)]
mod tests {
	use batcalc_type::Value;

	use super::*;

	#[test]
	fn test_min_propagates_nil() {
		let l = Column::new(ColumnData::int4([1, 5, i32::MIN]));
		let r = Column::new(ColumnData::int4([3, 2, 7]));
		let result = min((&l).into(), (&r).into()).unwrap();
		assert_eq!(result.data, ColumnData::int4([1, 2, i32::MIN]));
	}

	#[test]
	fn test_max_no_nil_takes_other_side() {
		let l = Column::new(ColumnData::int4([1, i32::MIN, i32::MIN]));
		let r = Column::new(ColumnData::int4([3, 2, i32::MIN]));
		let result = max_no_nil((&l).into(), (&r).into()).unwrap();
		assert_eq!(result.data, ColumnData::int4([3, 2, i32::MIN]));
		assert_eq!(result.count_nils(), 1);
	}

	#[test]
	fn test_strings() {
		let l = Column::new(ColumnData::utf8([Some("apple"), None, Some("b")]));
		let floor = Value::utf8("banana");
		let result = max_no_nil((&l).into(), (&floor).into()).unwrap();
		assert_eq!(result.values(), vec![Value::utf8("banana"), Value::utf8("banana"), Value::utf8("banana")]);
		let result = min((&l).into(), (&floor).into()).unwrap();
		assert_eq!(result.values(), vec![Value::utf8("apple"), Value::Nil(Type::Utf8), Value::utf8("b")]);
	}

	#[test]
	fn test_constant_keeps_order() {
		let l = Column::new(ColumnData::int8([1, 4, 9]));
		let cap = Value::Int8(5);
		let result = min((&l).into(), (&cap).into()).unwrap();
		assert_eq!(result.data, ColumnData::int8([1, 4, 5]));
		assert!(result.properties.sorted);
	}

	#[test]
	fn test_no_nil_with_nil_input_drops_order() {
		let l = Column::new(ColumnData::int8([i64::MIN, 1, 2]));
		let floor = Value::Int8(5);
		let result = min_no_nil((&l).into(), (&floor).into()).unwrap();
		assert_eq!(result.data, ColumnData::int8([5, 1, 2]));
		assert!(!result.properties.sorted);
	}

	#[test]
	fn test_mixed_types_rejected() {
		let l = Column::new(ColumnData::int8([1]));
		let r = Value::Int4(1);
		assert_eq!(min((&l).into(), (&r).into()).unwrap_err().code(), "CALC_002");
	}
}
