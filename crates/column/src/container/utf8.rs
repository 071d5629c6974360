// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use batcalc_type::{BitVec, Type, Value};
use serde::{Deserialize, Serialize};

/// Variable-length strings in one shared heap.
///
/// Element `i` occupies `heap[offsets[i]..offsets[i + 1]]`; a set bit in
/// `nils` marks the element unknown, in which case its range is empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	heap: String,
	offsets: Vec<usize>,
	nils: BitVec,
}

impl Default for Utf8Container {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}

impl Utf8Container {
	pub fn with_capacity(capacity: usize) -> Self {
		let mut offsets = Vec::with_capacity(capacity + 1);
		offsets.push(0);
		Self {
			heap: String::new(),
			offsets,
			nils: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_options<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Self {
		let mut result = Self::with_capacity(0);
		for value in values {
			result.push_option(value);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.offsets.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn push(&mut self, value: &str) {
		self.heap.push_str(value);
		self.offsets.push(self.heap.len());
		self.nils.push(false);
	}

	pub fn push_nil(&mut self) {
		self.offsets.push(self.heap.len());
		self.nils.push(true);
	}

	pub fn push_option(&mut self, value: Option<&str>) {
		match value {
			Some(value) => self.push(value),
			None => self.push_nil(),
		}
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if index >= self.len() || self.nils.get(index) {
			return None;
		}
		self.heap.get(self.offsets[index]..self.offsets[index + 1])
	}

	pub fn is_nil(&self, index: usize) -> bool {
		index >= self.len() || self.nils.get(index)
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(value) => Value::utf8(value),
			None => Value::Nil(Type::Utf8),
		}
	}

	pub fn count_nils(&self) -> usize {
		self.nils.count_ones()
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut container = Utf8Container::with_capacity(3);
		container.push("ab");
		container.push_nil();
		container.push("");
		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some("ab"));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some(""));
		assert_eq!(container.count_nils(), 1);
	}

	#[test]
	fn test_multibyte() {
		let container = Utf8Container::from_options([Some("héllo"), Some("wörld")]);
		assert_eq!(container.get(1), Some("wörld"));
		assert_eq!(container.get_value(0), Value::utf8("héllo"));
	}
}
