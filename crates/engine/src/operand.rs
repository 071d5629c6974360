// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use batcalc_column::{CandidateIterator, CandidateList, Column, ColumnData, Element, Properties, container::Utf8Container};
use batcalc_type::{
	Oid, Result, Type, Value,
	diagnostic::operator::{inputs_not_same_size, unsupported_type},
	return_error,
};

/// One input of an operator: a (possibly filtered) column or a constant.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
	Column {
		column: &'a Column,
		candidates: Option<&'a CandidateList>,
	},
	Scalar(&'a Value),
}

impl<'a> Operand<'a> {
	pub fn column(column: &'a Column) -> Self {
		Operand::Column {
			column,
			candidates: None,
		}
	}

	pub fn selected(column: &'a Column, candidates: &'a CandidateList) -> Self {
		Operand::Column {
			column,
			candidates: Some(candidates),
		}
	}

	pub fn scalar(value: &'a Value) -> Self {
		Operand::Scalar(value)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Operand::Column {
				column,
				..
			} => column.get_type(),
			Operand::Scalar(value) => value.get_type(),
		}
	}

	pub fn is_scalar(&self) -> bool {
		matches!(self, Operand::Scalar(_))
	}

	/// Flags of the column input; `None` for a constant.
	pub(crate) fn properties(&self) -> Option<Properties> {
		match self {
			Operand::Column {
				column,
				..
			} => Some(column.properties),
			Operand::Scalar(_) => None,
		}
	}

	pub(crate) fn scalar_value(&self) -> Option<&'a Value> {
		match self {
			Operand::Scalar(value) => Some(value),
			Operand::Column {
				..
			} => None,
		}
	}

	fn iterator(&self) -> Option<CandidateIterator<'a>> {
		match *self {
			Operand::Column {
				column,
				candidates,
			} => Some(CandidateIterator::new(column, candidates)),
			Operand::Scalar(_) => None,
		}
	}
}

impl<'a> From<&'a Column> for Operand<'a> {
	fn from(column: &'a Column) -> Self {
		Operand::column(column)
	}
}

impl<'a> From<&'a Value> for Operand<'a> {
	fn from(value: &'a Value) -> Self {
		Operand::Scalar(value)
	}
}

/// Output shape shared by all operands of one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Alignment {
	pub(crate) count: usize,
	pub(crate) hseq: Oid,
}

/// Checks that every column operand selects the same number of candidates
/// over the same head sequence. Constants adapt to any shape; an all-constant
/// call produces a single value.
pub(crate) fn align(operator: &str, operands: &[&Operand<'_>]) -> Result<Alignment> {
	let mut shape: Option<Alignment> = None;
	for iter in operands.iter().filter_map(|o| o.iterator()) {
		let next = Alignment {
			count: iter.ncand(),
			hseq: iter.hseq(),
		};
		match shape {
			Some(existing) if existing != next => return_error!(inputs_not_same_size(operator)),
			_ => shape = Some(next),
		}
	}
	Ok(shape.unwrap_or(Alignment {
		count: 1,
		hseq: 0,
	}))
}

/// Next candidate, taking the unit-stride path when the range is dense.
#[inline]
fn advance(iter: &mut CandidateIterator<'_>) -> Option<Oid> {
	if iter.is_dense() {
		(iter.len() > 0).then(|| iter.next_dense())
	} else {
		iter.next()
	}
}

/// Sequential reader of one operand's fixed-width values, NIL in-band.
pub(crate) enum Lane<'a, T> {
	Values {
		values: &'a [T],
		iter: CandidateIterator<'a>,
	},
	Dense {
		seqbase: Oid,
		iter: CandidateIterator<'a>,
	},
	Constant(T),
}

impl<'a, T: Element> Lane<'a, T> {
	pub(crate) fn new(operator: &str, operand: &Operand<'a>) -> Result<Self> {
		match *operand {
			Operand::Scalar(value) => match T::from_value(value) {
				Some(constant) => Ok(Lane::Constant(constant)),
				None => return_error!(unsupported_type(operator, value.get_type())),
			},
			Operand::Column {
				column,
				candidates,
			} => {
				let iter = CandidateIterator::new(column, candidates);
				if let ColumnData::DenseOid {
					seqbase,
					..
				} = column.data
				{
					if T::dense(seqbase).is_some() {
						return Ok(Lane::Dense {
							seqbase,
							iter,
						});
					}
				}
				match T::slice(&column.data) {
					Some(values) => Ok(Lane::Values {
						values,
						iter,
					}),
					None => return_error!(unsupported_type(operator, column.get_type())),
				}
			}
		}
	}

	#[inline]
	pub(crate) fn next(&mut self) -> T {
		match self {
			Lane::Values {
				values,
				iter,
			} => match advance(iter) {
				Some(oid) => values[iter.offset(oid)],
				None => T::NIL,
			},
			Lane::Dense {
				seqbase,
				iter,
			} => match advance(iter) {
				Some(oid) => T::dense(*seqbase + iter.offset(oid) as Oid).unwrap_or(T::NIL),
				None => T::NIL,
			},
			Lane::Constant(value) => *value,
		}
	}
}

/// Sequential reader of one string operand; `None` is NIL.
pub(crate) enum TextLane<'a> {
	Values {
		container: &'a Utf8Container,
		iter: CandidateIterator<'a>,
	},
	Constant(Option<&'a str>),
}

impl<'a> TextLane<'a> {
	pub(crate) fn new(operator: &str, operand: &Operand<'a>) -> Result<Self> {
		match *operand {
			Operand::Scalar(Value::Utf8(text)) => Ok(TextLane::Constant(Some(text.as_str()))),
			Operand::Scalar(Value::Nil(Type::Utf8)) => Ok(TextLane::Constant(None)),
			Operand::Scalar(value) => return_error!(unsupported_type(operator, value.get_type())),
			Operand::Column {
				column,
				candidates,
			} => match column.data.as_utf8() {
				Some(container) => Ok(TextLane::Values {
					container,
					iter: CandidateIterator::new(column, candidates),
				}),
				None => return_error!(unsupported_type(operator, column.get_type())),
			},
		}
	}

	#[inline]
	pub(crate) fn next(&mut self) -> Option<&'a str> {
		match self {
			TextLane::Values {
				container,
				iter,
			} => {
				let oid = advance(iter)?;
				container.get(iter.offset(oid))
			}
			TextLane::Constant(value) => *value,
		}
	}
}
