// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use batcalc_type::Oid;

use crate::{CandidateList, Column};

#[derive(Clone, Debug)]
enum Positions<'a> {
	Dense(Oid),
	List(&'a [Oid]),
}

/// Walks the candidates of one column, clipped to the column's range.
///
/// Yields object identifiers; [`CandidateIterator::offset`] turns one into
/// an index into the column's storage.
#[derive(Clone, Debug)]
pub struct CandidateIterator<'a> {
	positions: Positions<'a>,
	hseq: Oid,
	ncand: usize,
	next: usize,
}

impl<'a> CandidateIterator<'a> {
	pub fn new(column: &Column, candidates: Option<&'a CandidateList>) -> Self {
		Self::from_parts(column.hseqbase, column.len(), candidates)
	}

	/// Iterator over a column of `count` elements starting at `hseq`.
	fn from_parts(hseq: Oid, count: usize, candidates: Option<&'a CandidateList>) -> Self {
		let end = hseq.saturating_add(count as Oid);
		let (positions, ncand) = match candidates {
			None => (Positions::Dense(hseq), count),
			Some(CandidateList::Dense {
				seq,
				len,
			}) => {
				let lo = (*seq).max(hseq);
				let hi = seq.saturating_add(*len as Oid).min(end);
				(Positions::Dense(lo), hi.saturating_sub(lo) as usize)
			}
			Some(CandidateList::List(list)) => {
				let start = list.partition_point(|&o| o < hseq);
				let stop = list.partition_point(|&o| o < end);
				let clipped = &list[start..stop];
				(Positions::List(clipped), clipped.len())
			}
		};
		Self {
			positions,
			hseq,
			ncand,
			next: 0,
		}
	}

	/// Number of candidates.
	pub fn ncand(&self) -> usize {
		self.ncand
	}

	/// Head sequence base of the underlying column.
	pub fn hseq(&self) -> Oid {
		self.hseq
	}

	pub fn is_dense(&self) -> bool {
		matches!(self.positions, Positions::Dense(_))
	}

	/// Next candidate assuming unit stride; only valid on a dense iterator
	/// with candidates remaining.
	#[inline]
	pub fn next_dense(&mut self) -> Oid {
		debug_assert!(self.is_dense() && self.next < self.ncand);
		let oid = match self.positions {
			Positions::Dense(seq) => seq + self.next as Oid,
			Positions::List(list) => list[self.next],
		};
		self.next += 1;
		oid
	}

	/// Storage index of a candidate identifier.
	#[inline]
	pub fn offset(&self, oid: Oid) -> usize {
		(oid - self.hseq) as usize
	}

	/// The `index`-th candidate without advancing.
	pub fn get(&self, index: usize) -> Option<Oid> {
		if index >= self.ncand {
			return None;
		}
		match self.positions {
			Positions::Dense(seq) => Some(seq + index as Oid),
			Positions::List(list) => Some(list[index]),
		}
	}
}

impl Iterator for CandidateIterator<'_> {
	type Item = Oid;

	#[inline]
	fn next(&mut self) -> Option<Oid> {
		let oid = self.get(self.next)?;
		self.next += 1;
		Some(oid)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.ncand - self.next;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for CandidateIterator<'_> {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ColumnData;

	fn column(hseqbase: Oid, len: usize) -> Column {
		Column::with_hseqbase(hseqbase, ColumnData::int4(0..len as i32))
	}

	#[test]
	fn test_no_candidates_covers_column() {
		let column = column(10, 3);
		let iter = CandidateIterator::new(&column, None);
		assert_eq!(iter.ncand(), 3);
		assert!(iter.is_dense());
		assert_eq!(iter.collect::<Vec<_>>(), vec![10, 11, 12]);
	}

	#[test]
	fn test_dense_candidates_clipped() {
		let column = column(10, 5);
		let candidates = CandidateList::dense(8, 4);
		let mut iter = CandidateIterator::new(&column, Some(&candidates));
		assert_eq!(iter.ncand(), 2);
		assert_eq!(iter.next_dense(), 10);
		assert_eq!(iter.next_dense(), 11);
	}

	#[test]
	fn test_dense_candidates_outside() {
		let column = column(10, 5);
		let candidates = CandidateList::dense(0, 4);
		assert_eq!(CandidateIterator::new(&column, Some(&candidates)).ncand(), 0);
	}

	#[test]
	fn test_dense_candidates_near_oid_max() {
		let column = column(0, 3);
		let candidates = CandidateList::dense(Oid::MAX - 1, 5);
		assert_eq!(CandidateIterator::new(&column, Some(&candidates)).ncand(), 0);

		let column = self::column(Oid::MAX - 4, 3);
		let candidates = CandidateList::dense(Oid::MAX - 3, 10);
		let iter = CandidateIterator::new(&column, Some(&candidates));
		assert_eq!(iter.collect::<Vec<_>>(), vec![Oid::MAX - 3, Oid::MAX - 2]);
	}

	#[test]
	fn test_list_candidates_clipped() {
		let column = column(0, 3);
		let candidates = CandidateList::list(vec![0, 2, 7]).unwrap();
		let iter = CandidateIterator::new(&column, Some(&candidates));
		assert!(!iter.is_dense());
		assert_eq!(iter.ncand(), 2);
		assert_eq!(iter.map(|o| o as usize).collect::<Vec<_>>(), vec![0, 2]);
	}

	#[test]
	fn test_offset_and_get() {
		let column = column(100, 4);
		let candidates = CandidateList::list(vec![101, 103]).unwrap();
		let iter = CandidateIterator::new(&column, Some(&candidates));
		assert_eq!(iter.get(1), Some(103));
		assert_eq!(iter.offset(103), 3);
		assert_eq!(iter.get(2), None);
		assert_eq!(iter.hseq(), 100);
	}
}
