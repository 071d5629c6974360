// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use batcalc_type::{Bit, Oid, Type, Value};
use serde::{Deserialize, Serialize};

use crate::container::{BitContainer, NumberContainer, Utf8Container};

/// The typed payload of a column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bit(BitContainer),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	#[cfg(feature = "hge")]
	Int16(NumberContainer<i128>),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Oid(NumberContainer<Oid>),
	/// Object identifiers `seqbase, seqbase + 1, ...` derived on demand.
	DenseOid {
		seqbase: Oid,
		len: usize,
	},
	Utf8(Utf8Container),
}

impl ColumnData {
	pub fn bit(values: impl IntoIterator<Item = Option<bool>>) -> Self {
		ColumnData::Bit(BitContainer::from_options(values))
	}

	pub fn int1(values: impl IntoIterator<Item = i8>) -> Self {
		ColumnData::Int1(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int2(values: impl IntoIterator<Item = i16>) -> Self {
		ColumnData::Int2(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(NumberContainer::new(values.into_iter().collect()))
	}

	#[cfg(feature = "hge")]
	pub fn int16(values: impl IntoIterator<Item = i128>) -> Self {
		ColumnData::Int16(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn float4(values: impl IntoIterator<Item = f32>) -> Self {
		ColumnData::Float4(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn oid(values: impl IntoIterator<Item = Oid>) -> Self {
		ColumnData::Oid(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn dense_oid(seqbase: Oid, len: usize) -> Self {
		ColumnData::DenseOid {
			seqbase,
			len,
		}
	}

	pub fn utf8<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Self {
		ColumnData::Utf8(Utf8Container::from_options(values))
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bit(_) => Type::Bit,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			#[cfg(feature = "hge")]
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Oid(_) | ColumnData::DenseOid {
				..
			} => Type::Oid,
			ColumnData::Utf8(_) => Type::Utf8,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bit(c) => c.len(),
			ColumnData::Int1(c) => c.len(),
			ColumnData::Int2(c) => c.len(),
			ColumnData::Int4(c) => c.len(),
			ColumnData::Int8(c) => c.len(),
			#[cfg(feature = "hge")]
			ColumnData::Int16(c) => c.len(),
			ColumnData::Float4(c) => c.len(),
			ColumnData::Float8(c) => c.len(),
			ColumnData::Oid(c) => c.len(),
			ColumnData::DenseOid {
				len,
				..
			} => *len,
			ColumnData::Utf8(c) => c.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bit(c) => c.get_value(index),
			ColumnData::Int1(c) => c.get_value(index),
			ColumnData::Int2(c) => c.get_value(index),
			ColumnData::Int4(c) => c.get_value(index),
			ColumnData::Int8(c) => c.get_value(index),
			#[cfg(feature = "hge")]
			ColumnData::Int16(c) => c.get_value(index),
			ColumnData::Float4(c) => c.get_value(index),
			ColumnData::Float8(c) => c.get_value(index),
			ColumnData::Oid(c) => c.get_value(index),
			ColumnData::DenseOid {
				seqbase,
				len,
			} => {
				if index < *len {
					Value::Oid(seqbase + index as Oid)
				} else {
					Value::Nil(Type::Oid)
				}
			}
			ColumnData::Utf8(c) => c.get_value(index),
		}
	}

	pub fn count_nils(&self) -> usize {
		match self {
			ColumnData::Bit(c) => c.count_nils(),
			ColumnData::Int1(c) => c.count_nils(),
			ColumnData::Int2(c) => c.count_nils(),
			ColumnData::Int4(c) => c.count_nils(),
			ColumnData::Int8(c) => c.count_nils(),
			#[cfg(feature = "hge")]
			ColumnData::Int16(c) => c.count_nils(),
			ColumnData::Float4(c) => c.count_nils(),
			ColumnData::Float8(c) => c.count_nils(),
			ColumnData::Oid(c) => c.count_nils(),
			ColumnData::DenseOid {
				..
			} => 0,
			ColumnData::Utf8(c) => c.count_nils(),
		}
	}

	/// Materializes every position, NIL as [`Value::Nil`].
	pub fn to_values(&self) -> Vec<Value> {
		(0..self.len()).map(|i| self.get_value(i)).collect()
	}

	pub fn as_bits(&self) -> Option<&[Bit]> {
		match self {
			ColumnData::Bit(c) => Some(c.as_slice()),
			_ => None,
		}
	}

	pub fn as_utf8(&self) -> Option<&Utf8Container> {
		match self {
			ColumnData::Utf8(c) => Some(c),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_dense_oid_values() {
		let data = ColumnData::dense_oid(10, 3);
		assert_eq!(data.get_type(), Type::Oid);
		assert_eq!(data.to_values(), vec![Value::Oid(10), Value::Oid(11), Value::Oid(12)]);
		assert_eq!(data.count_nils(), 0);
	}

	#[test]
	fn test_to_values_maps_nil() {
		let data = ColumnData::int1([1, i8::MIN, 3]);
		assert_eq!(data.to_values(), vec![Value::Int1(1), Value::Nil(Type::Int1), Value::Int1(3)]);
	}

	#[test]
	fn test_serde_round_trip() {
		let data = ColumnData::utf8([Some("a"), None]);
		let json = serde_json::to_string(&data).unwrap();
		assert_eq!(serde_json::from_str::<ColumnData>(&json).unwrap(), data);
	}
}
