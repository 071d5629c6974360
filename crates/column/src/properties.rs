// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{ColumnData, Element};

/// Facts about a column that the optimizer may rely on.
///
/// A flag that is `false` means "not known", never "known not to hold".
/// NIL orders before every other value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
	/// Ascending, duplicates allowed
	pub sorted: bool,
	/// Descending, duplicates allowed
	pub revsorted: bool,
	/// All values distinct
	pub key: bool,
	/// Proven free of NIL
	pub nonil: bool,
	/// Proven to contain at least one NIL
	pub nil: bool,
}

impl Properties {
	/// What is known for free about a column of `count` elements holding
	/// `nils` NILs: a column that is empty, a singleton or all-NIL is
	/// trivially ordered both ways.
	pub fn trivial(count: usize, nils: usize) -> Self {
		let ordered = count <= 1 || nils == count;
		Properties {
			sorted: ordered,
			revsorted: ordered,
			key: count <= 1,
			nonil: nils == 0,
			nil: nils > 0,
		}
	}

	/// Scans `data` and computes every flag exactly.
	pub fn analyze(data: &ColumnData) -> Self {
		match data {
			ColumnData::Bit(c) => analyze_atoms(c.as_slice()),
			ColumnData::Int1(c) => analyze_atoms(c.as_slice()),
			ColumnData::Int2(c) => analyze_atoms(c.as_slice()),
			ColumnData::Int4(c) => analyze_atoms(c.as_slice()),
			ColumnData::Int8(c) => analyze_atoms(c.as_slice()),
			#[cfg(feature = "hge")]
			ColumnData::Int16(c) => analyze_atoms(c.as_slice()),
			ColumnData::Float4(c) => analyze_atoms(c.as_slice()),
			ColumnData::Float8(c) => analyze_atoms(c.as_slice()),
			ColumnData::Oid(c) => analyze_atoms(c.as_slice()),
			ColumnData::DenseOid {
				len,
				..
			} => Properties {
				sorted: true,
				revsorted: *len <= 1,
				key: true,
				nonil: true,
				nil: false,
			},
			ColumnData::Utf8(c) => {
				let values: Vec<Option<&str>> = c.iter().collect();
				analyze_by(&values, |l, r| l.cmp(r), |v| v.is_none())
			}
		}
	}
}

fn analyze_atoms<T: Element>(values: &[T]) -> Properties {
	analyze_by(values, T::atom_cmp, |v| v.is_nil())
}

fn analyze_by<T>(values: &[T], cmp: impl Fn(&T, &T) -> Ordering, is_nil: impl Fn(&T) -> bool) -> Properties {
	let mut sorted = true;
	let mut revsorted = true;
	let mut strictly = true;
	for pair in values.windows(2) {
		match cmp(&pair[0], &pair[1]) {
			Ordering::Less => revsorted = false,
			Ordering::Greater => sorted = false,
			Ordering::Equal => strictly = false,
		}
	}
	let key = if sorted || revsorted {
		strictly
	} else {
		let mut ordered: Vec<&T> = values.iter().collect();
		ordered.sort_by(|l, r| cmp(l, r));
		ordered.windows(2).all(|pair| cmp(pair[0], pair[1]) != Ordering::Equal)
	};
	let nils = values.iter().filter(|v| is_nil(v)).count();
	Properties {
		sorted,
		revsorted,
		key,
		nonil: nils == 0,
		nil: nils > 0,
	}
}
