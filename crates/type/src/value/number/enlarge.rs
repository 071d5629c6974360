// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::marker::PhantomData;

use crate::IsNumber;

/// Compile-time proof that `L op R` cannot overflow `T`.
///
/// `|l + r| < 2^(max(L, R) + 1)` and `|l * r| < 2^(L + R)` in magnitude bits,
/// so when `T` can hold that bound the runtime range check is dead and the
/// primitives skip it.
pub struct Enlarge<L, R, T>(PhantomData<(L, R, T)>);

impl<L: IsNumber, R: IsNumber, T: IsNumber> Enlarge<L, R, T> {
	pub const ADDITIVE: bool = max(L::MAGNITUDE_BITS, R::MAGNITUDE_BITS) < T::CAPACITY_BITS;

	pub const MULTIPLICATIVE: bool = L::MAGNITUDE_BITS + R::MAGNITUDE_BITS <= T::CAPACITY_BITS;
}

const fn max(l: u32, r: u32) -> u32 {
	if l > r { l } else { r }
}
