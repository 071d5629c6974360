// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use batcalc_type::{Bit, GetType, Nil, Oid, Value};

use crate::{
	ColumnData,
	container::{BitContainer, NumberContainer},
};

/// A fixed-width atom that can live in a [`ColumnData`] variant.
///
/// Lets kernels be written once over `T` and still read and write the
/// concrete typed storage without matching on every variant.
pub trait Element: Nil + GetType + Copy + Send + Sync + 'static {
	/// The backing slice when `data` holds this type.
	fn slice(data: &ColumnData) -> Option<&[Self]>;

	/// The value of a dense OID sequence element, for the `oid` type only.
	fn dense(_seq: Oid) -> Option<Self> {
		None
	}

	fn into_data(values: Vec<Self>) -> ColumnData;

	/// The in-band form of a scalar; `None` when the value has another type.
	fn from_value(value: &Value) -> Option<Self>;

	fn into_value(self) -> Value;

	/// Total order with NIL first.
	fn atom_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_element_number {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn slice(data: &ColumnData) -> Option<&[Self]> {
                    match data {
                        ColumnData::$variant(container) => Some(container.as_slice()),
                        _ => None,
                    }
                }

                fn into_data(values: Vec<Self>) -> ColumnData {
                    ColumnData::$variant(NumberContainer::new(values))
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        Value::Nil(ty) if *ty == <$t>::get_type() => Some(<$t>::NIL),
                        _ => None,
                    }
                }

                fn into_value(self) -> Value {
                    Value::from(self)
                }

                #[inline]
                fn atom_cmp(&self, other: &Self) -> Ordering {
                    match (self.is_nil(), other.is_nil()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

impl_element_number!(
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	f32 => Float4,
	f64 => Float8,
);

#[cfg(feature = "hge")]
impl_element_number!(i128 => Int16);

impl Element for Oid {
	#[inline]
	fn slice(data: &ColumnData) -> Option<&[Self]> {
		match data {
			ColumnData::Oid(container) => Some(container.as_slice()),
			_ => None,
		}
	}

	#[inline]
	fn dense(seq: Oid) -> Option<Self> {
		Some(seq)
	}

	fn into_data(values: Vec<Self>) -> ColumnData {
		ColumnData::Oid(NumberContainer::new(values))
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Oid(v) => Some(*v),
			Value::Nil(batcalc_type::Type::Oid) => Some(Oid::NIL),
			_ => None,
		}
	}

	fn into_value(self) -> Value {
		Value::from(self)
	}

	#[inline]
	fn atom_cmp(&self, other: &Self) -> Ordering {
		match (self.is_nil(), other.is_nil()) {
			(true, true) => Ordering::Equal,
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			(false, false) => self.cmp(other),
		}
	}
}

impl Element for Bit {
	#[inline]
	fn slice(data: &ColumnData) -> Option<&[Self]> {
		data.as_bits()
	}

	fn into_data(values: Vec<Self>) -> ColumnData {
		ColumnData::Bit(BitContainer::new(values))
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Bit(v) => Some(Bit::from(*v)),
			Value::Nil(batcalc_type::Type::Bit) => Some(Bit::UNKNOWN),
			_ => None,
		}
	}

	fn into_value(self) -> Value {
		Value::from(self)
	}

	#[inline]
	fn atom_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

#[cfg(test)]
mod tests {
	use batcalc_type::Type;

	use super::*;

	#[test]
	fn test_slice_matches_variant() {
		let data = ColumnData::int4([1, 2]);
		assert_eq!(i32::slice(&data), Some(&[1, 2][..]));
		assert_eq!(i64::slice(&data), None);
	}

	#[test]
	fn test_from_value() {
		assert_eq!(i16::from_value(&Value::Int2(7)), Some(7));
		assert_eq!(i16::from_value(&Value::Nil(Type::Int2)), Some(i16::MIN));
		assert_eq!(i16::from_value(&Value::Int4(7)), None);
		assert!(f32::from_value(&Value::Nil(Type::Float4)).unwrap().is_nan());
		assert_eq!(Bit::from_value(&Value::Bit(true)), Some(Bit::TRUE));
	}

	#[test]
	fn test_atom_cmp_places_nil_first() {
		assert_eq!(i8::MIN.atom_cmp(&-127), Ordering::Less);
		assert_eq!(f64::NAN.atom_cmp(&f64::MIN), Ordering::Less);
		assert_eq!(Oid::NIL.atom_cmp(&0), Ordering::Less);
		assert_eq!(Bit::UNKNOWN.atom_cmp(&Bit::FALSE), Ordering::Less);
	}
}
