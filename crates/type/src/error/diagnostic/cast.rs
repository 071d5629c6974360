// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Type, error::diagnostic::Diagnostic};

pub fn unsupported_cast(from_type: Type, to_type: Type) -> Diagnostic {
	Diagnostic {
		code: "CAST_001".to_string(),
		message: format!("unsupported cast from {} to {}", from_type, to_type),
		label: Some(format!("cannot cast {} to {}", from_type, to_type)),
		help: Some("ensure the source and target types are compatible for casting".to_string()),
		notes: vec!["supported casts include: numeric to numeric, any to str, str to any, any to bit".to_string()],
		cause: None,
	}
}

pub fn conversion_failed(text: &str, target: Type) -> Diagnostic {
	Diagnostic {
		code: "22018".to_string(),
		message: format!("conversion of string '{}' to type {} failed.", text.escape_default(), target),
		label: Some(format!("failed to parse {}", target)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_conversion_failed_message() {
		assert_eq!(
			conversion_failed("abc", Type::Int4).to_string(),
			"22018!conversion of string 'abc' to type int failed."
		);
	}

	#[test]
	fn test_unsupported_cast_code() {
		assert_eq!(unsupported_cast(Type::Utf8, Type::Oid).code, "CAST_001");
	}
}
