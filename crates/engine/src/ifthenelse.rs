// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::{Column, ColumnData, Element, container::Utf8Container};
use batcalc_type::{
	Bit, BitVec, BitVecIter, Result, Type,
	diagnostic::{
		column::{mask_length_mismatch, type_mismatch},
		operator::unsupported_types,
	},
	return_error,
};
use tracing::instrument;

use crate::{
	CalcOptions, Operand,
	context::EvaluationContext,
	dispatch::with_fixed,
	operand::{Alignment, Lane, TextLane, align},
	property::{Order, derive},
};

const NAME: &str = "ifthenelse";

/// What picks between the two branches at each position.
#[derive(Clone, Copy, Debug)]
pub enum Condition<'a> {
	/// A `bit` column or constant; FALSE and NIL pick the else branch
	Bits(Operand<'a>),
	/// A packed mask covering every output position
	Mask(&'a BitVec),
}

impl<'a> From<Operand<'a>> for Condition<'a> {
	fn from(operand: Operand<'a>) -> Self {
		Condition::Bits(operand)
	}
}

impl<'a> From<&'a BitVec> for Condition<'a> {
	fn from(mask: &'a BitVec) -> Self {
		Condition::Mask(mask)
	}
}

enum Selector<'a> {
	Bits(Lane<'a, Bit>),
	Mask(BitVecIter<'a>),
}

impl Selector<'_> {
	#[inline]
	fn next(&mut self) -> bool {
		match self {
			Selector::Bits(lane) => lane.next().is_true(),
			Selector::Mask(iter) => iter.next().unwrap_or(false),
		}
	}
}

/// Takes `then` where the condition holds and `otherwise` everywhere else,
/// including where the condition is NIL.
#[instrument(name = "calc::ifthenelse", level = "trace", skip_all)]
pub fn ifthenelse(condition: Condition<'_>, then: Operand<'_>, otherwise: Operand<'_>) -> Result<Column> {
	let (tt, et) = (then.get_type(), otherwise.get_type());
	if tt != et {
		return_error!(unsupported_types(NAME, tt, et, tt));
	}
	let shape = shape(&condition, &then, &otherwise)?;
	let mut selector = match condition {
		Condition::Bits(operand) => Selector::Bits(Lane::new(NAME, &operand)?),
		Condition::Mask(mask) => Selector::Mask(mask.iter()),
	};
	let mut ctx = EvaluationContext::new(NAME, &CalcOptions::default());

	let data = if tt == Type::Utf8 {
		let (mut then, mut otherwise) = (TextLane::new(NAME, &then)?, TextLane::new(NAME, &otherwise)?);
		let mut result = Utf8Container::with_capacity(shape.count);
		for _ in 0..shape.count {
			let (t, e) = (then.next(), otherwise.next());
			let chosen = if selector.next() { t } else { e };
			if chosen.is_none() {
				ctx.nils += 1;
			}
			result.push_option(chosen);
		}
		ColumnData::Utf8(result)
	} else {
		with_fixed!(tt, T => {
			let (mut then, mut otherwise) = (Lane::<T>::new(NAME, &then)?, Lane::<T>::new(NAME, &otherwise)?);
			let mut result = Vec::with_capacity(shape.count);
			for _ in 0..shape.count {
				let (t, e) = (then.next(), otherwise.next());
				result.push(ctx.count(if selector.next() { t } else { e }));
			}
			T::into_data(result)
		}, return_error!(unsupported_types(NAME, tt, et, tt)))
	};

	let properties = derive(Order::None, shape.count, ctx.nils, true);
	ctx.finish(format_args!("ifthenelse({},{})->{}", tt, et, tt), shape.count);
	Ok(Column::from_parts(shape.hseq, data, properties))
}

fn shape(condition: &Condition<'_>, then: &Operand<'_>, otherwise: &Operand<'_>) -> Result<Alignment> {
	match condition {
		Condition::Bits(operand) => {
			if operand.get_type() != Type::Bit {
				return_error!(type_mismatch(Type::Bit, operand.get_type()));
			}
			align(NAME, &[operand, then, otherwise])
		}
		Condition::Mask(mask) => {
			if then.is_scalar() && otherwise.is_scalar() {
				return Ok(Alignment {
					count: mask.len(),
					hseq: 0,
				});
			}
			let shape = align(NAME, &[then, otherwise])?;
			if shape.count != mask.len() {
				return_error!(mask_length_mismatch(shape.count, mask.len()));
			}
			Ok(shape)
		}
	}
}
