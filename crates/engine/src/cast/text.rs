// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, LowerExp};

use batcalc_column::{ColumnData, Element, container::Utf8Container};
use batcalc_type::{
	IsNumber, Nil, OID_MAX, Result, Type, Value,
	diagnostic::{cast::conversion_failed, operator::unsupported_type},
	error, parse_bit, parse_float, parse_int, parse_oid, return_error, scale_factor,
};

use super::{NAME, overflow_report};
use crate::{
	ConvertOptions, Operand,
	context::EvaluationContext,
	dispatch::{with_fixed, with_integer, with_number},
	operand::{Lane, TextLane},
};

/// Why a string did not convert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Failure {
	Malformed,
	Range,
}

pub(super) fn copy(ctx: &mut EvaluationContext, input: &Operand<'_>, count: usize) -> Result<ColumnData> {
	let mut lane = TextLane::new(NAME, input)?;
	let mut result = Utf8Container::with_capacity(count);
	for _ in 0..count {
		let text = lane.next();
		if text.is_none() {
			ctx.nils += 1;
		}
		result.push_option(text);
	}
	Ok(ColumnData::Utf8(result))
}

/// Renders fixed-width atoms; integers are printed with `source_scale`
/// digits after the point.
pub(super) fn format(
	ctx: &mut EvaluationContext,
	input: &Operand<'_>,
	options: &ConvertOptions,
	count: usize,
) -> Result<ColumnData> {
	let source = input.get_type();
	let mut result = Utf8Container::with_capacity(count);
	with_fixed!(source, S => {
		let mut lane = Lane::<S>::new(NAME, input)?;
		for _ in 0..count {
			match render(&lane.next().into_value(), options.source_scale) {
				Some(text) => result.push(&text),
				None => {
					ctx.nils += 1;
					result.push_nil();
				}
			}
		}
	}, return_error!(unsupported_type(NAME, source)));
	Ok(ColumnData::Utf8(result))
}

/// Parses strings into `target`. The literal `nil` is NIL; text that is not
/// a value of the type, or a value out of its range, is an error or NIL
/// depending on the overflow policy.
pub(super) fn parse(
	ctx: &mut EvaluationContext,
	input: &Operand<'_>,
	target: Type,
	options: &ConvertOptions,
	count: usize,
) -> Result<ColumnData> {
	let mut lane = TextLane::new(NAME, input)?;
	with_fixed!(target, T => {
		let mut result = Vec::with_capacity(count);
		for _ in 0..count {
			let parsed = match lane.next() {
				None => None,
				Some(text) if text.trim() == "nil" => None,
				Some(text) => match parse_value(text, target, options).and_then(|v| T::from_value(&v).ok_or(Failure::Malformed)) {
					Ok(value) => Some(value),
					Err(failure) if ctx.abort_on_error() => {
						let diagnostic = match failure {
							Failure::Malformed => conversion_failed(text, target),
							Failure::Range => overflow_report(text, target, options),
						};
						return Err(error!(diagnostic));
					}
					Err(_) => None,
				},
			};
			result.push(ctx.count(T::from_option(parsed)));
		}
		Ok(T::into_data(result))
	}, return_error!(unsupported_type(NAME, target)))
}

fn parse_value(text: &str, target: Type, options: &ConvertOptions) -> std::result::Result<Value, Failure> {
	match target {
		Type::Bit => parse_bit(text).map(Value::Bit).ok_or(Failure::Malformed),
		Type::Oid => match parse_oid(text) {
			Some(oid) if oid <= OID_MAX => Ok(Value::Oid(oid)),
			Some(_) => Err(Failure::Range),
			None => Err(Failure::Malformed),
		},
		t if t.is_float() => {
			let value = parse_float(text).ok_or(Failure::Malformed)?;
			with_number!(t, T => T::from_double(value).map(Element::into_value).ok_or(Failure::Range), Err(Failure::Malformed))
		}
		t if t.is_integer() => {
			let value = parse_decimal(text, options.target_scale)?;
			if options.precision > 0 {
				let limit = scale_factor(options.precision).ok_or(Failure::Range)?;
				if value >= limit || value <= -limit {
					return Err(Failure::Range);
				}
			}
			with_integer!(t, T => T::from_wide(value).map(Element::into_value).ok_or(Failure::Range), Err(Failure::Malformed))
		}
		_ => Err(Failure::Malformed),
	}
}

/// A decimal literal as an integer with `scale` fraction digits; further
/// digits round half away from zero.
fn parse_decimal(text: &str, scale: u8) -> std::result::Result<i128, Failure> {
	let text = text.trim();
	let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
	let unsigned = whole.strip_prefix(['+', '-']).unwrap_or(whole);
	let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
	if (unsigned.is_empty() && fraction.is_empty()) || !is_digits(unsigned) || !is_digits(fraction) {
		return Err(Failure::Malformed);
	}

	let scale = scale as usize;
	let kept = &fraction[..fraction.len().min(scale)];
	let mut digits = String::with_capacity(unsigned.len() + scale + 1);
	digits.push_str(if unsigned.is_empty() { "0" } else { unsigned });
	digits.push_str(kept);
	digits.extend(std::iter::repeat_n('0', scale - kept.len()));

	let mut value = parse_int(&digits).ok_or(Failure::Range)?;
	if fraction.as_bytes().get(scale).is_some_and(|digit| *digit >= b'5') {
		value = value.checked_add(1).ok_or(Failure::Range)?;
	}
	Ok(if whole.starts_with('-') { -value } else { value })
}

fn render(value: &Value, scale: u8) -> Option<String> {
	Some(match value {
		Value::Nil(_) => return None,
		Value::Bit(bit) => bit.to_string(),
		Value::Int1(v) => decimal(*v as i128, scale),
		Value::Int2(v) => decimal(*v as i128, scale),
		Value::Int4(v) => decimal(*v as i128, scale),
		Value::Int8(v) => decimal(*v as i128, scale),
		#[cfg(feature = "hge")]
		Value::Int16(v) => decimal(*v, scale),
		Value::Float4(v) => float(*v, *v as f64),
		Value::Float8(v) => float(*v, *v),
		Value::Oid(v) => format!("{}@0", v),
		Value::Utf8(text) => text.clone(),
	})
}

fn decimal(value: i128, scale: u8) -> String {
	if scale == 0 {
		return value.to_string();
	}
	let scale = scale as usize;
	let digits = format!("{:0>width$}", value.unsigned_abs(), width = scale + 1);
	let (whole, fraction) = digits.split_at(digits.len() - scale);
	let sign = if value < 0 { "-" } else { "" };
	format!("{}{}.{}", sign, whole, fraction)
}

/// Positional notation except for very large or very small magnitudes.
fn float<F: Display + LowerExp>(value: F, magnitude: f64) -> String {
	let magnitude = magnitude.abs();
	if magnitude >= 1e16 || (magnitude > 0.0 && magnitude < 1e-5) {
		format!("{:e}", value)
	} else {
		value.to_string()
	}
}
