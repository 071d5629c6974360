// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

pub mod diagnostic;

use diagnostic::Diagnostic;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	/// The stable code prefix, e.g. `22003` for overflow.
	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::Error($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostic::number::division_by_zero;

	#[test]
	fn test_error_renders_code_prefix() {
		let error = error!(division_by_zero());
		assert_eq!(error.code(), "22012");
		assert_eq!(error.to_string(), "22012!division by zero.");
	}

	#[test]
	fn test_return_error_macro() {
		fn fails() -> crate::Result<()> {
			return_error!(division_by_zero());
		}
		let error = fails().unwrap_err();
		assert_eq!(error.diagnostic().code, "22012");
	}
}
