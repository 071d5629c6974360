// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Output flags from input flags and the operator's effect on order.

use batcalc_column::Properties;

/// How an operator maps the order of its column input(s) onto its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
	/// Nothing beyond the trivial flags
	None,
	/// Non-decreasing in the input; `keep_key` when also injective
	Preserve {
		input: Properties,
		keep_key: bool,
	},
	/// Non-increasing in the input; `keep_key` when also injective
	Reverse {
		input: Properties,
		keep_key: bool,
	},
	/// Non-decreasing in both inputs, or in the left and non-increasing in
	/// the right when `flip_rhs`
	Pairwise {
		lhs: Properties,
		rhs: Properties,
		flip_rhs: bool,
	},
	/// Every non-NIL output equal
	Constant,
}

impl Order {
	/// Preserving when `input` is known, nothing for a constant operand.
	pub(crate) fn preserve(input: Option<Properties>, keep_key: bool) -> Order {
		match input {
			Some(input) => Order::Preserve {
				input,
				keep_key,
			},
			None => Order::None,
		}
	}

	pub(crate) fn reverse(input: Option<Properties>, keep_key: bool) -> Order {
		match input {
			Some(input) => Order::Reverse {
				input,
				keep_key,
			},
			None => Order::None,
		}
	}
}

/// Flags of an output of `count` values of which `nils` are NIL.
///
/// NIL orders first, so it can only be carried through an order-preserving
/// map if every NIL came from a NIL input: that is guaranteed when no
/// overflow could be turned into NIL, i.e. under `abort_on_error` or when
/// no NIL was produced at all. Reversal moves NILs to the end and needs a
/// NIL-free output.
pub(crate) fn derive(order: Order, count: usize, nils: usize, abort_on_error: bool) -> Properties {
	let mut properties = Properties::trivial(count, nils);
	let no_overflow_nil = abort_on_error || nils == 0;
	match order {
		Order::None => {}
		Order::Preserve {
			input,
			keep_key,
		} => {
			if no_overflow_nil {
				properties.sorted |= input.sorted;
				properties.revsorted |= input.revsorted;
			}
			properties.key |= keep_key && input.key && nils <= 1;
		}
		Order::Reverse {
			input,
			keep_key,
		} => {
			if nils == 0 {
				properties.sorted |= input.revsorted;
				properties.revsorted |= input.sorted;
			}
			properties.key |= keep_key && input.key && nils <= 1;
		}
		Order::Pairwise {
			lhs,
			rhs,
			flip_rhs,
		} => {
			if nils == 0 {
				let (rhs_up, rhs_down) = if flip_rhs {
					(rhs.revsorted, rhs.sorted)
				} else {
					(rhs.sorted, rhs.revsorted)
				};
				properties.sorted |= lhs.sorted && rhs_up;
				properties.revsorted |= lhs.revsorted && rhs_down;
			}
		}
		Order::Constant => {
			if nils == 0 {
				properties.sorted = true;
				properties.revsorted = true;
			}
		}
	}
	properties
}
