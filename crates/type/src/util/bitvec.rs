// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

const WORD_BITS: usize = u32::BITS as usize;

/// Bits packed into 32-bit words, least significant bit first.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BitVec {
	words: Vec<u32>,
	len: usize,
}

impl BitVec {
	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value { u32::MAX } else { 0 };
		let mut result = Self {
			words: vec![fill; len.div_ceil(WORD_BITS)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			words: Vec::with_capacity(capacity.div_ceil(WORD_BITS)),
			len: 0,
		}
	}

	pub fn from_fn(len: usize, f: impl Fn(usize) -> bool) -> Self {
		let mut result = Self::with_capacity(len);
		for i in 0..len {
			result.push(f(i));
		}
		result
	}

	pub fn from_slice(values: &[bool]) -> Self {
		Self::from_fn(values.len(), |i| values[i])
	}

	/// Adopts already packed words; bits past `len` are ignored.
	pub fn from_words(words: Vec<u32>, len: usize) -> Option<Self> {
		if words.len() != len.div_ceil(WORD_BITS) {
			return None;
		}
		let mut result = Self {
			words,
			len,
		};
		result.clear_tail();
		Some(result)
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn words(&self) -> &[u32] {
		&self.words
	}

	pub fn get(&self, index: usize) -> bool {
		assert!(index < self.len, "bit index {index} out of bounds for length {}", self.len);
		self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
	}

	pub fn set(&mut self, index: usize, value: bool) {
		assert!(index < self.len, "bit index {index} out of bounds for length {}", self.len);
		let mask = 1 << (index % WORD_BITS);
		if value {
			self.words[index / WORD_BITS] |= mask;
		} else {
			self.words[index / WORD_BITS] &= !mask;
		}
	}

	pub fn push(&mut self, value: bool) {
		if self.len % WORD_BITS == 0 {
			self.words.push(0);
		}
		self.len += 1;
		self.set(self.len - 1, value);
	}

	pub fn count_ones(&self) -> usize {
		self.words.iter().map(|w| w.count_ones() as usize).sum()
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			inner: self,
			pos: 0,
		}
	}

	fn clear_tail(&mut self) {
		let used = self.len % WORD_BITS;
		if used != 0 {
			if let Some(last) = self.words.last_mut() {
				*last &= (1u32 << used) - 1;
			}
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit { "1" } else { "0" })?;
		}
		f.write_str("]")
	}
}

impl From<Vec<bool>> for BitVec {
	fn from(values: Vec<bool>) -> Self {
		Self::from_slice(&values)
	}
}

pub struct BitVecIter<'a> {
	inner: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.inner.len {
			return None;
		}
		let bit = self.inner.get(self.pos);
		self.pos += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.inner.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}
