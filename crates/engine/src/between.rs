// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use batcalc_column::{Column, Element};
use batcalc_type::{Bit, Nil, Result, Type, diagnostic::operator::unsupported_types, return_error};
use tracing::instrument;

use crate::{
	BetweenOptions, CalcOptions, Operand,
	context::EvaluationContext,
	dispatch::with_fixed,
	operand::{Lane, TextLane, align},
	property::{Order, derive},
};

const NAME: &str = "between";

impl BetweenOptions {
	/// Three-valued range test of one position; `None` is NIL.
	pub(crate) fn test<T>(&self, value: Option<T>, lo: Option<T>, hi: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Bit {
		let Some(value) = value else {
			return if self.nils_as_false { Bit::FALSE } else { Bit::UNKNOWN };
		};
		let above = |bound: &Option<T>, inclusive: bool| match bound {
			Some(bound) => Bit::from(reaches(cmp(&value, bound), Ordering::Greater, inclusive)),
			None => Bit::UNKNOWN,
		};
		let below = |bound: &Option<T>, inclusive: bool| match bound {
			Some(bound) => Bit::from(reaches(cmp(&value, bound), Ordering::Less, inclusive)),
			None => Bit::UNKNOWN,
		};

		let mut outcome = above(&lo, self.lo_inclusive).and3(below(&hi, self.hi_inclusive));
		if self.symmetric {
			outcome = outcome.or3(above(&hi, self.hi_inclusive).and3(below(&lo, self.lo_inclusive)));
		}
		if self.anti {
			outcome = outcome.not3();
		}
		outcome
	}
}

fn reaches(ordering: Ordering, side: Ordering, inclusive: bool) -> bool {
	ordering == side || (inclusive && ordering == Ordering::Equal)
}

/// Whether `value` lies between `lo` and `hi`, as a `bit` column.
#[instrument(name = "calc::between", level = "trace", skip_all)]
pub fn between(value: Operand<'_>, lo: Operand<'_>, hi: Operand<'_>, options: &BetweenOptions) -> Result<Column> {
	let (vt, lt, ht) = (value.get_type(), lo.get_type(), hi.get_type());
	if vt != lt || vt != ht {
		return_error!(unsupported_types(NAME, vt, if vt != lt { lt } else { ht }, Type::Bit));
	}
	let shape = align(NAME, &[&value, &lo, &hi])?;
	let mut ctx = EvaluationContext::new(NAME, &CalcOptions::default());

	let mut result = Vec::with_capacity(shape.count);
	if vt == Type::Utf8 {
		let (mut v, mut l, mut h) =
			(TextLane::new(NAME, &value)?, TextLane::new(NAME, &lo)?, TextLane::new(NAME, &hi)?);
		for _ in 0..shape.count {
			let bit = options.test(v.next(), l.next(), h.next(), |a, b| a.as_bytes().cmp(b.as_bytes()));
			result.push(ctx.count(bit));
		}
	} else {
		with_fixed!(vt, T => {
			let (mut v, mut l, mut h) =
				(Lane::<T>::new(NAME, &value)?, Lane::<T>::new(NAME, &lo)?, Lane::<T>::new(NAME, &hi)?);
			for _ in 0..shape.count {
				let bit = options.test(v.next().to_option(), l.next().to_option(), h.next().to_option(), T::atom_cmp);
				result.push(ctx.count(bit));
			}
		}, return_error!(unsupported_types(NAME, vt, lt, Type::Bit)))
	}

	let properties = derive(Order::None, shape.count, ctx.nils, true);
	ctx.finish(format_args!("between({},{},{})->bit", vt, lt, ht), shape.count);
	Ok(Column::from_parts(shape.hseq, Bit::into_data(result), properties))
}

#[cfg(test)]
mod tests {
	use batcalc_column::ColumnData;
	use batcalc_type::Value;

	use super::*;

	fn int4(values: &[i32]) -> Column {
		Column::new(ColumnData::int4(values.iter().copied()))
	}

	#[test]
	fn test_inclusive_bounds() {
		let v = int4(&[0, 1, 5, 10, 11, i32::MIN]);
		let (lo, hi) = (Value::Int4(1), Value::Int4(10));
		let result = between((&v).into(), (&lo).into(), (&hi).into(), &BetweenOptions::default()).unwrap();
		assert_eq!(
			result.data,
			ColumnData::bit([Some(false), Some(true), Some(true), Some(true), Some(false), None])
		);
	}

	#[test]
	fn test_exclusive_bounds() {
		let v = int4(&[1, 5, 10]);
		let (lo, hi) = (Value::Int4(1), Value::Int4(10));
		let options = BetweenOptions::new().lo_inclusive(false).hi_inclusive(false);
		let result = between((&v).into(), (&lo).into(), (&hi).into(), &options).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(false), Some(true), Some(false)]));
	}

	#[test]
	fn test_anti() {
		let (v, lo, hi) = (Value::Int4(5), Value::Int4(1), Value::Int4(10));
		let result = between((&v).into(), (&lo).into(), (&hi).into(), &BetweenOptions::new().anti(true)).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(false)]));
	}

	#[test]
	fn test_symmetric_swapped_bounds() {
		let v = int4(&[5]);
		let (lo, hi) = (Value::Int4(10), Value::Int4(1));
		let plain = between((&v).into(), (&lo).into(), (&hi).into(), &BetweenOptions::default()).unwrap();
		assert_eq!(plain.data, ColumnData::bit([Some(false)]));
		let symmetric =
			between((&v).into(), (&lo).into(), (&hi).into(), &BetweenOptions::new().symmetric(true)).unwrap();
		assert_eq!(symmetric.data, ColumnData::bit([Some(true)]));
	}

	#[test]
	fn test_nil_bound_is_kleene() {
		let v = int4(&[0, 5]);
		let (lo, hi) = (Value::Int4(1), Value::Nil(Type::Int4));
		let result = between((&v).into(), (&lo).into(), (&hi).into(), &BetweenOptions::default()).unwrap();
		// below the low bound is false whatever the high bound
		assert_eq!(result.data, ColumnData::bit([Some(false), None]));
	}

	#[test]
	fn test_nils_as_false_only_for_nil_value() {
		let v = int4(&[i32::MIN, 5]);
		let (lo, hi) = (Value::Int4(1), Value::Nil(Type::Int4));
		let options = BetweenOptions::new().nils_as_false(true);
		let result = between((&v).into(), (&lo).into(), (&hi).into(), &options).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(false), None]));
		let anti = between((&v).into(), (&lo).into(), (&hi).into(), &options.anti(true)).unwrap();
		assert_eq!(anti.data, ColumnData::bit([Some(false), None]));
	}

	#[test]
	fn test_anti_negates_with_nil_bounds() {
		let v = int4(&[-3, 0, 1, 5, 10, 11, 20]);
		let bounds = [Value::Int4(1), Value::Int4(10), Value::Nil(Type::Int4)];
		for lo in &bounds {
			for hi in &bounds {
				for options in [
					BetweenOptions::default(),
					BetweenOptions::new().nils_as_false(true),
					BetweenOptions::new().symmetric(true),
					BetweenOptions::new().lo_inclusive(false).hi_inclusive(false),
				] {
					let plain = between((&v).into(), lo.into(), hi.into(), &options).unwrap();
					let anti = between((&v).into(), lo.into(), hi.into(), &options.anti(true)).unwrap();
					let plain = plain.data.as_bits().unwrap().to_vec();
					let anti = anti.data.as_bits().unwrap().to_vec();
					let negated: Vec<Bit> = plain.iter().map(|b| b.not3()).collect();
					assert_eq!(anti, negated, "lo={lo} hi={hi} {options:?}");
				}
			}
		}
	}

	#[test]
	fn test_strings() {
		let v = Column::new(ColumnData::utf8([Some("b"), Some("z"), None]));
		let (lo, hi) = (Value::utf8("a"), Value::utf8("c"));
		let result = between((&v).into(), (&lo).into(), (&hi).into(), &BetweenOptions::default()).unwrap();
		assert_eq!(result.data, ColumnData::bit([Some(true), Some(false), None]));
	}

	#[test]
	fn test_mixed_types_rejected() {
		let v = int4(&[1]);
		let (lo, hi) = (Value::Int8(0), Value::Int4(2));
		let err = between((&v).into(), (&lo).into(), (&hi).into(), &BetweenOptions::default()).unwrap_err();
		assert_eq!(err.code(), "CALC_002");
	}
}
