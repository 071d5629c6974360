// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod bit;
pub mod is;
pub mod nil;
pub mod number;
pub mod oid;
pub mod r#type;

use crate::{Bit, Nil, Oid, Type};

/// A single typed atom, used wherever an operand is a constant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// The unknown value of the given type
	Nil(Type),
	/// A known boolean
	Bit(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	#[cfg(feature = "hge")]
	Int16(i128),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// An object identifier
	Oid(Oid),
	/// A UTF-8 encoded text
	Utf8(String),
}

impl Value {
	pub fn nil(ty: Type) -> Self {
		Value::Nil(ty)
	}

	pub fn bit(v: impl Into<Bit>) -> Self {
		match v.into().to_bool() {
			Some(value) => Value::Bit(value),
			None => Value::Nil(Type::Bit),
		}
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Self::from_sentinel(v.into(), Value::Int1)
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Self::from_sentinel(v.into(), Value::Int2)
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Self::from_sentinel(v.into(), Value::Int4)
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Self::from_sentinel(v.into(), Value::Int8)
	}

	#[cfg(feature = "hge")]
	pub fn int16(v: impl Into<i128>) -> Self {
		Self::from_sentinel(v.into(), Value::Int16)
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		Self::from_sentinel(v.into(), Value::Float4)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Self::from_sentinel(v.into(), Value::Float8)
	}

	pub fn oid(v: impl Into<Oid>) -> Self {
		Self::from_sentinel(v.into(), Value::Oid)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	/// Maps the in-band NIL pattern to [`Value::Nil`].
	fn from_sentinel<T: Nil + crate::GetType>(value: T, wrap: fn(T) -> Value) -> Self {
		if value.is_nil() {
			Value::Nil(T::get_type())
		} else {
			wrap(value)
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Nil(ty) => *ty,
			Value::Bit(_) => Type::Bit,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			#[cfg(feature = "hge")]
			Value::Int16(_) => Type::Int16,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Oid(_) => Type::Oid,
			Value::Utf8(_) => Type::Utf8,
		}
	}

	/// True for [`Value::Nil`] and for payloads holding the type's NIL pattern.
	pub fn is_nil(&self) -> bool {
		match self {
			Value::Nil(_) => true,
			Value::Bit(_) | Value::Utf8(_) => false,
			Value::Int1(v) => v.is_nil(),
			Value::Int2(v) => v.is_nil(),
			Value::Int4(v) => v.is_nil(),
			Value::Int8(v) => v.is_nil(),
			#[cfg(feature = "hge")]
			Value::Int16(v) => v.is_nil(),
			Value::Float4(v) => v.is_nil(),
			Value::Float8(v) => v.is_nil(),
			Value::Oid(v) => v.is_nil(),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bit(value)
	}
}

impl From<Bit> for Value {
	fn from(value: Bit) -> Self {
		Value::bit(value)
	}
}

impl From<i8> for Value {
	fn from(value: i8) -> Self {
		Value::int1(value)
	}
}

impl From<i16> for Value {
	fn from(value: i16) -> Self {
		Value::int2(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::int4(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::int8(value)
	}
}

#[cfg(feature = "hge")]
impl From<i128> for Value {
	fn from(value: i128) -> Self {
		Value::int16(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::float4(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::float8(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::oid(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Nil(_) => f.write_str("nil"),
			Value::Bit(true) => f.write_str("true"),
			Value::Bit(false) => f.write_str("false"),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			#[cfg(feature = "hge")]
			Value::Int16(value) => Display::fmt(value, f),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Oid(value) => write!(f, "{value}@0"),
			Value::Utf8(value) => f.write_str(value),
		}
	}
}
