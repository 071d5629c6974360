// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use batcalc_type::{Oid, Type, Value};
use serde::{Deserialize, Serialize};

use crate::{ColumnData, Properties};

/// An ordered, typed sequence of values whose positions are the object
/// identifiers `hseqbase, hseqbase + 1, ...`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub hseqbase: Oid,
	pub data: ColumnData,
	pub properties: Properties,
}

impl Column {
	/// Wraps `data` at head sequence base 0 with exactly analyzed properties.
	pub fn new(data: ColumnData) -> Self {
		Self::with_hseqbase(0, data)
	}

	pub fn with_hseqbase(hseqbase: Oid, data: ColumnData) -> Self {
		let properties = Properties::analyze(&data);
		Self {
			hseqbase,
			data,
			properties,
		}
	}

	pub fn from_parts(hseqbase: Oid, data: ColumnData, properties: Properties) -> Self {
		Self {
			hseqbase,
			data,
			properties,
		}
	}

	/// A virtual OID column `seqbase, seqbase + 1, ...` of `len` elements.
	pub fn dense(seqbase: Oid, len: usize) -> Self {
		Self::new(ColumnData::dense_oid(seqbase, len))
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The value at object identifier `oid`.
	pub fn get(&self, oid: Oid) -> Value {
		match oid.checked_sub(self.hseqbase) {
			Some(offset) => self.data.get_value(offset as usize),
			None => Value::Nil(self.get_type()),
		}
	}

	pub fn values(&self) -> Vec<Value> {
		self.data.to_values()
	}

	pub fn count_nils(&self) -> usize {
		self.data.count_nils()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_analyzes() {
		let column = Column::new(ColumnData::int2([1, 2, 3]));
		assert!(column.properties.sorted);
		assert!(column.properties.key);
		assert_eq!(column.hseqbase, 0);
	}

	#[test]
	fn test_get_by_oid() {
		let column = Column::with_hseqbase(100, ColumnData::int4([7, 8]));
		assert_eq!(column.get(101), Value::Int4(8));
		assert_eq!(column.get(5), Value::Nil(Type::Int4));
	}

	#[test]
	fn test_dense() {
		let column = Column::dense(5, 2);
		assert_eq!(column.values(), vec![Value::Oid(5), Value::Oid(6)]);
		assert!(column.properties.sorted);
	}
}
