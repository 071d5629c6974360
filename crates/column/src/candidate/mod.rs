// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod iterator;

use batcalc_type::{Oid, Result, diagnostic::column::candidates_not_sorted, return_error};
use serde::{Deserialize, Serialize};

pub use iterator::CandidateIterator;

/// A read-only selection over a column's object identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateList {
	/// Every identifier in `[seq, seq + len)`
	Dense {
		seq: Oid,
		len: usize,
	},
	/// Strictly increasing identifiers
	List(Vec<Oid>),
}

impl CandidateList {
	pub fn dense(seq: Oid, len: usize) -> Self {
		CandidateList::Dense {
			seq,
			len,
		}
	}

	/// Validates ordering and collapses a gap-free list into a dense range.
	pub fn list(positions: Vec<Oid>) -> Result<Self> {
		for pair in positions.windows(2) {
			if pair[0] >= pair[1] {
				return_error!(candidates_not_sorted(pair[0], pair[1]));
			}
		}
		match (positions.first(), positions.last()) {
			(Some(&first), Some(&last)) if (last - first) as usize + 1 == positions.len() => {
				Ok(CandidateList::dense(first, positions.len()))
			}
			(None, _) => Ok(CandidateList::dense(0, 0)),
			_ => Ok(CandidateList::List(positions)),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			CandidateList::Dense {
				len,
				..
			} => *len,
			CandidateList::List(positions) => positions.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_dense(&self) -> bool {
		matches!(self, CandidateList::Dense { .. })
	}
}
