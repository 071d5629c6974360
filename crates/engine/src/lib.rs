// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Vectorized calculation kernels over typed columns.
//!
//! Every operator accepts each input either as a column, optionally
//! restricted by a candidate list, or as a single [`Value`]; mixing the two
//! shapes is allowed. NIL inputs produce NIL outputs (the NIL tests and the
//! `nil_matches` comparisons aside), arithmetic failures follow the
//! caller's [`OverflowPolicy`], and the result carries the order and
//! uniqueness flags that follow from those of the inputs.
//!
//! [`Value`]: batcalc_type::Value

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod arith;
mod between;
mod cast;
mod compare;
mod context;
mod dispatch;
mod ifthenelse;
mod logic;
mod minmax;
mod operand;
mod options;
mod property;
pub mod scalar;
mod unary;

pub use arith::{add, div, lsh, modulo, mul, rsh, sub};
pub use batcalc_type::Result;
pub use between::between;
pub use cast::{convert, reduces};
pub use compare::{Comparison, cmp, compare, compare_atoms, eq, ge, gt, le, lt, ne};
pub use ifthenelse::{Condition, ifthenelse};
pub use logic::{and, or, xor};
pub use minmax::{max, max_no_nil, min, min_no_nil};
pub use operand::Operand;
pub use options::{BetweenOptions, CalcOptions, ConvertOptions, OverflowPolicy};
pub use unary::{absolute, decr, incr, iszero, isnil, isnotnil, negate, not, sign};
