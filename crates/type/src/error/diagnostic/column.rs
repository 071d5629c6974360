// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Oid, Type, error::diagnostic::Diagnostic};

pub fn candidates_not_sorted(previous: Oid, next: Oid) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_001".to_string(),
		message: format!("candidate list not strictly increasing: {}@0 followed by {}@0.", previous, next),
		label: None,
		help: Some("candidate positions must be sorted and free of duplicates".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn type_mismatch(expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_002".to_string(),
		message: format!("expected a column of type {}, got {}.", expected, actual),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn mask_length_mismatch(expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_003".to_string(),
		message: format!("mask covers {} positions, column has {}.", actual, expected),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
