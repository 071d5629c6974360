// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use batcalc_type::{IsNumber, Nil, Value};
use serde::{Deserialize, Serialize};

/// Fixed-width values with NIL stored in-band as the type's sentinel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T> {
	data: Vec<T>,
}

impl<T: IsNumber> Deref for NumberContainer<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl<T: IsNumber> NumberContainer<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			data,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
		}
	}

	pub fn from_options(values: impl IntoIterator<Item = Option<T>>) -> Self {
		Self::new(values.into_iter().map(T::from_option).collect())
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
	}

	pub fn push_nil(&mut self) {
		self.data.push(T::NIL);
	}

	/// `None` past the end or at a NIL position.
	pub fn get(&self, index: usize) -> Option<T> {
		self.data.get(index).and_then(|v| v.to_option())
	}

	pub fn get_value(&self, index: usize) -> Value
	where
		Value: From<T>,
	{
		match self.data.get(index) {
			Some(value) => Value::from(*value),
			None => Value::Nil(T::get_type()),
		}
	}

	pub fn count_nils(&self) -> usize {
		self.data.iter().filter(|v| v.is_nil()).count()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	pub fn into_inner(self) -> Vec<T> {
		self.data
	}
}
