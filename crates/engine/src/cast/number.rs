// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::ColumnData;
use batcalc_type::{
	ArithError, Bit, Rescale, Result, SafeConvert, Type, diagnostic::cast::unsupported_cast, return_error,
};

use super::map;
use crate::{
	ConvertOptions, Operand,
	context::EvaluationContext,
	dispatch::{Number, with_number, with_ordinal},
};

/// Conversions among fixed-width atoms.
pub(super) fn convert(
	ctx: &mut EvaluationContext,
	input: &Operand<'_>,
	target: Type,
	options: &ConvertOptions,
	rescale: &Rescale,
	count: usize,
) -> Result<ColumnData> {
	let source = input.get_type();
	match (source, target) {
		(Type::Bit, Type::Bit) => map::<Bit, Bit>(ctx, input, target, options, count, Ok),
		(Type::Oid, Type::Bit) | (Type::Bit, Type::Oid) => return_error!(unsupported_cast(source, target)),
		(Type::Oid, t) | (t, Type::Oid) if t.is_float() => return_error!(unsupported_cast(source, target)),
		(Type::Bit, _) => with_number!(target, T =>
			map::<Bit, T>(ctx, input, target, options, count, |bit| from_bit::<T>(bit, rescale)),
			return_error!(unsupported_cast(source, target))),
		(_, Type::Bit) => with_number!(source, S =>
			map::<S, Bit>(ctx, input, target, options, count, to_bit::<S>),
			return_error!(unsupported_cast(source, target))),
		_ => with_ordinal!(source, S => with_ordinal!(target, T =>
			map::<S, T>(ctx, input, target, options, count, |value: S| value.checked_convert(rescale)),
			return_error!(unsupported_cast(source, target))),
			return_error!(unsupported_cast(source, target))),
	}
}

fn from_bit<T: Number>(bit: Bit, rescale: &Rescale) -> std::result::Result<T, ArithError> {
	let value: i8 = if bit.is_true() { 1 } else { 0 };
	value.checked_convert(rescale)
}

/// Non-zero is true.
fn to_bit<S: Number>(value: S) -> std::result::Result<Bit, ArithError> {
	Ok(Bit::from(!value.is_zero()))
}
