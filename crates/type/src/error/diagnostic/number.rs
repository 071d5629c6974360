// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use crate::{Type, error::diagnostic::Diagnostic};

pub fn overflow_in_calculation(left: impl Display, operator: &str, right: impl Display, target: Type) -> Diagnostic {
	Diagnostic {
		code: "22003".to_string(),
		message: format!("overflow in calculation {}{}{}.", left, operator, right),
		label: Some(format!("result does not fit in {}", target)),
		help: Some("use a wider result type or enable NIL substitution on overflow".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn overflow_in_unary(operator: &str, value: impl Display, target: Type) -> Diagnostic {
	Diagnostic {
		code: "22003".to_string(),
		message: format!("overflow in calculation {}({}).", operator, value),
		label: Some(format!("result does not fit in {}", target)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn overflow_in_conversion(value: impl Display, target: Type) -> Diagnostic {
	Diagnostic {
		code: "22003".to_string(),
		message: format!("overflow in conversion of {} to {}.", value, target),
		label: Some(format!("value outside the range of {}", target)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn overflow_in_decimal(precision: u8, scale: u8) -> Diagnostic {
	Diagnostic {
		code: "22003".to_string(),
		message: format!("overflow in conversion to DECIMAL({},{}).", precision, scale),
		label: Some(format!("value needs more than {} digits", precision)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn division_by_zero() -> Diagnostic {
	Diagnostic {
		code: "22012".to_string(),
		message: "division by zero.".to_string(),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_overflow_in_calculation_message() {
		let diagnostic = overflow_in_calculation(127i8, "+", 1i8, Type::Int1);
		assert_eq!(diagnostic.to_string(), "22003!overflow in calculation 127+1.");
	}

	#[test]
	fn test_overflow_in_conversion_message() {
		let diagnostic = overflow_in_conversion(300i32, Type::Int1);
		assert_eq!(diagnostic.to_string(), "22003!overflow in conversion of 300 to bte.");
	}

	#[test]
	fn test_decimal_overflow_message() {
		assert_eq!(overflow_in_decimal(5, 2).to_string(), "22003!overflow in conversion to DECIMAL(5,2).");
	}

	#[test]
	fn test_division_by_zero_is_distinct_from_overflow() {
		assert_ne!(division_by_zero().code, overflow_in_conversion(1, Type::Int1).code);
	}
}
