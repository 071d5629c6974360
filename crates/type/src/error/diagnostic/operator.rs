// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use crate::{Type, error::diagnostic::Diagnostic};

pub fn inputs_not_same_size(operator: &str) -> Diagnostic {
	Diagnostic {
		code: "CALC_001".to_string(),
		message: "inputs not the same size.".to_string(),
		label: Some(format!("{} needs aligned operands", operator)),
		help: Some("operands must have the same candidate count and head sequence base".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn unsupported_types(operator: &str, left: Type, right: Type, target: Type) -> Diagnostic {
	Diagnostic {
		code: "CALC_002".to_string(),
		message: format!("type combination ({}({},{})->{}) not supported.", operator, left, right, target),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn unsupported_type(operator: &str, operand: Type) -> Diagnostic {
	Diagnostic {
		code: "CALC_002".to_string(),
		message: format!("type {} not supported by {}.", operand, operator),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn shift_operand_too_large(operator: &str, left: impl Display, right: impl Display) -> Diagnostic {
	Diagnostic {
		code: "CALC_003".to_string(),
		message: format!("shift operand too large in {}({},{}).", operator, left, right),
		label: None,
		help: Some("shift distances must lie in [0, bit width) and keep the value in range".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_scale(scale: u8, max: usize) -> Diagnostic {
	Diagnostic {
		code: "CALC_004".to_string(),
		message: format!("scale or precision {} exceeds the maximum of {}.", scale, max),
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
	fn test_unsupported_types_names_operator_and_types() {
		let diagnostic = unsupported_types("add", Type::Utf8, Type::Int4, Type::Int4);
		assert_eq!(diagnostic.to_string(), "CALC_002!type combination (add(str,int)->int) not supported.");
	}

	#[test]
	fn test_size_mismatch() {
		assert_eq!(inputs_not_same_size("sub").message, "inputs not the same size.");
	}
}
