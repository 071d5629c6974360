// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Text forms accepted when converting strings into atoms. Surrounding
//! whitespace is ignored; the caller handles the literal `nil`.

use crate::Oid;

/// Parses an optionally signed decimal integer into the widest integer.
pub fn parse_int(text: &str) -> Option<i128> {
	let text = text.trim();
	let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	text.strip_prefix('+').unwrap_or(text).parse::<i128>().ok()
}

/// Parses a finite floating point literal.
pub fn parse_float(text: &str) -> Option<f64> {
	let text = text.trim();
	if text.is_empty() || text.eq_ignore_ascii_case("nan") || text.to_ascii_lowercase().contains("inf") {
		return None;
	}
	text.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_bit(text: &str) -> Option<bool> {
	match text.trim().to_ascii_lowercase().as_str() {
		"true" | "t" | "1" => Some(true),
		"false" | "f" | "0" => Some(false),
		_ => None,
	}
}

/// Accepts both the bare position and the `N@0` display form.
pub fn parse_oid(text: &str) -> Option<Oid> {
	let text = text.trim();
	let digits = text.strip_suffix("@0").unwrap_or(text);
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	digits.parse::<Oid>().ok()
}
