// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Type conversion between any two atom types.
//!
//! Integers may carry a decimal scale: the value `12345` at scale 2 stands
//! for `123.45`. Rescaling multiplies or divides by a power of ten, never
//! both, and a non-zero precision bounds the number of digits of the result.

mod number;
mod text;

use std::fmt::Display;

use batcalc_column::{Column, ColumnData, Element};
use batcalc_type::{
	ArithError, MAX_SCALE, Nil, Rescale, Result, Type,
	diagnostic::{
		Diagnostic,
		number::{overflow_in_conversion, overflow_in_decimal},
		operator::invalid_scale,
	},
	return_error,
};
use tracing::instrument;

use crate::{
	ConvertOptions, Operand,
	context::EvaluationContext,
	operand::{Lane, align},
	property::{Order, derive},
};

const NAME: &str = "convert";

/// Converts every selected value of `input` to `target`.
#[instrument(name = "calc::convert", level = "trace", skip_all)]
pub fn convert(input: Operand<'_>, target: Type, options: &ConvertOptions) -> Result<Column> {
	let source = input.get_type();
	let rescale = rescale(options)?;
	let reducing = reduces_with(source, target, &rescale);
	let order = match (source, target) {
		(Type::Utf8, _) | (_, Type::Utf8) => Order::None,
		(Type::Bit, Type::Bit) => Order::preserve(input.properties(), true),
		(_, Type::Bit) => Order::None,
		_ => Order::preserve(input.properties(), !reducing),
	};

	let shape = align(NAME, &[&input])?;
	let mut ctx = EvaluationContext::new(NAME, &options.calc());
	let data = match (source, target) {
		(Type::Utf8, Type::Utf8) => text::copy(&mut ctx, &input, shape.count)?,
		(Type::Utf8, _) => text::parse(&mut ctx, &input, target, options, shape.count)?,
		(_, Type::Utf8) => text::format(&mut ctx, &input, options, shape.count)?,
		_ => number::convert(&mut ctx, &input, target, options, &rescale, shape.count)?,
	};

	let properties = derive(order, shape.count, ctx.nils, ctx.abort_on_error());
	ctx.finish(
		format_args!(
			"convert({}[{}])->{}[{},{}]",
			source, options.source_scale, target, options.precision, options.target_scale
		),
		shape.count,
	);
	Ok(Column::from_parts(shape.hseq, data, properties))
}

/// Whether converting `source` to `target` may map distinct values onto
/// one, so that uniqueness of the input does not carry over.
pub fn reduces(source: Type, target: Type, options: &ConvertOptions) -> Result<bool> {
	Ok(reduces_with(source, target, &rescale(options)?))
}

fn reduces_with(source: Type, target: Type, rescale: &Rescale) -> bool {
	if source == target && !rescale.is_reducing() {
		return false;
	}
	match (source, target) {
		(Type::Utf8, _) | (_, Type::Bit) => true,
		(s, t) if s.is_float() && !t.is_float() && t != Type::Utf8 => true,
		(s, t) if !s.is_float() && t.is_float() => s.bits() > t.mantissa_digits(),
		(Type::Float8, Type::Float4) => true,
		_ => rescale.is_reducing(),
	}
}

fn rescale(options: &ConvertOptions) -> Result<Rescale> {
	match Rescale::new(options.source_scale, options.target_scale, options.precision) {
		Some(rescale) => Ok(rescale),
		None => {
			let widest = options.source_scale.max(options.target_scale).max(options.precision);
			return_error!(invalid_scale(widest, MAX_SCALE))
		}
	}
}

/// Overflow report of one value, naming the decimal type when a precision
/// was requested.
fn overflow_report(value: impl Display, target: Type, options: &ConvertOptions) -> Diagnostic {
	if options.precision > 0 {
		overflow_in_decimal(options.precision, options.target_scale)
	} else {
		overflow_in_conversion(value, target)
	}
}

/// Applies `f` to every non-NIL value of a fixed-width input.
fn map<S: Element + Display, T: Element>(
	ctx: &mut EvaluationContext,
	input: &Operand<'_>,
	target: Type,
	options: &ConvertOptions,
	count: usize,
	mut f: impl FnMut(S) -> std::result::Result<T, ArithError>,
) -> Result<ColumnData> {
	let mut lane = Lane::<S>::new(NAME, input)?;
	let mut result = Vec::with_capacity(count);
	for _ in 0..count {
		let value = lane.next();
		if value.is_nil() {
			result.push(ctx.nil());
			continue;
		}
		let converted = ctx.check(f(value), |_| overflow_report(value, target, options))?;
		result.push(converted);
	}
	Ok(T::into_data(result))
}
