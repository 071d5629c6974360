// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use batcalc_type::{Bit, Nil, Value};
use serde::{Deserialize, Serialize};

/// One three-valued boolean per byte.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BitContainer {
	data: Vec<Bit>,
}

impl Deref for BitContainer {
	type Target = [Bit];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl BitContainer {
	pub fn new(data: Vec<Bit>) -> Self {
		Self {
			data,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
		}
	}

	pub fn from_options(values: impl IntoIterator<Item = Option<bool>>) -> Self {
		Self::new(values.into_iter().map(Bit::from).collect())
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: Bit) {
		self.data.push(value);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		self.data.get(index).and_then(|b| b.to_bool())
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.data.get(index) {
			Some(bit) => Value::from(*bit),
			None => Value::Nil(batcalc_type::Type::Bit),
		}
	}

	pub fn count_nils(&self) -> usize {
		self.data.iter().filter(|b| b.is_nil()).count()
	}

	pub fn as_slice(&self) -> &[Bit] {
		&self.data
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_options() {
		let container = BitContainer::from_options([Some(true), None, Some(false)]);
		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some(false));
		assert_eq!(container.count_nils(), 1);
	}
}
