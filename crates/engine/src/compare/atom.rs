// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use batcalc_type::{Bit, Result, diagnostic::operator::inputs_not_same_size, return_error};
use tracing::instrument;

use super::{Comparison, Outcome};

/// Compares two equally long sequences of an arbitrary ordered atom with a
/// caller-supplied comparator; `None` is NIL.
#[instrument(name = "calc::compare_atoms", level = "trace", skip_all)]
pub fn compare_atoms<T>(
	op: Comparison,
	lhs: impl IntoIterator<Item = Option<T>>,
	rhs: impl IntoIterator<Item = Option<T>>,
	nil_matches: bool,
	cmp: impl Fn(&T, &T) -> Ordering,
) -> Result<Vec<Bit>> {
	let (mut lhs, mut rhs) = (lhs.into_iter(), rhs.into_iter());
	let mut result = Vec::with_capacity(lhs.size_hint().0);
	loop {
		match (lhs.next(), rhs.next()) {
			(Some(l), Some(r)) => result.push(op.resolve(Outcome::of(l, r, &cmp), nil_matches)),
			(None, None) => return Ok(result),
			_ => return_error!(inputs_not_same_size(op.name())),
		}
	}
}
