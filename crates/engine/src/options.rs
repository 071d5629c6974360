// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// What happens when a value does not fit its destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
	/// Fail the whole call
	#[default]
	Abort,
	/// Store NIL and keep going
	Nil,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcOptions {
	pub overflow: OverflowPolicy,
}

impl CalcOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
		self.overflow = policy;
		self
	}

	/// Shorthand for [`OverflowPolicy::Nil`].
	pub fn nil_on_error(self) -> Self {
		self.overflow(OverflowPolicy::Nil)
	}

	pub fn abort_on_error(&self) -> bool {
		self.overflow == OverflowPolicy::Abort
	}
}

/// Options of a type conversion. Scales count decimal digits after the
/// point of a fixed-point integer; a `precision` of zero is unchecked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
	pub overflow: OverflowPolicy,
	pub source_scale: u8,
	pub target_scale: u8,
	pub precision: u8,
}

impl ConvertOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
		self.overflow = policy;
		self
	}

	pub fn nil_on_error(self) -> Self {
		self.overflow(OverflowPolicy::Nil)
	}

	pub fn source_scale(mut self, scale: u8) -> Self {
		self.source_scale = scale;
		self
	}

	pub fn target_scale(mut self, scale: u8) -> Self {
		self.target_scale = scale;
		self
	}

	pub fn precision(mut self, precision: u8) -> Self {
		self.precision = precision;
		self
	}

	pub fn calc(&self) -> CalcOptions {
		CalcOptions {
			overflow: self.overflow,
		}
	}
}

/// Flags of a range test `lo <= v <= hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetweenOptions {
	pub lo_inclusive: bool,
	pub hi_inclusive: bool,
	/// Also accept `hi <= v <= lo`
	pub symmetric: bool,
	/// Negate the outcome
	pub anti: bool,
	/// Report a NIL value as false rather than NIL
	pub nils_as_false: bool,
}

impl Default for BetweenOptions {
	fn default() -> Self {
		Self {
			lo_inclusive: true,
			hi_inclusive: true,
			symmetric: false,
			anti: false,
			nils_as_false: false,
		}
	}
}

impl BetweenOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lo_inclusive(mut self, inclusive: bool) -> Self {
		self.lo_inclusive = inclusive;
		self
	}

	pub fn hi_inclusive(mut self, inclusive: bool) -> Self {
		self.hi_inclusive = inclusive;
		self
	}

	pub fn symmetric(mut self, symmetric: bool) -> Self {
		self.symmetric = symmetric;
		self
	}

	pub fn anti(mut self, anti: bool) -> Self {
		self.anti = anti;
		self
	}

	pub fn nils_as_false(mut self, nils_as_false: bool) -> Self {
		self.nils_as_false = nils_as_false;
		self
	}
}
