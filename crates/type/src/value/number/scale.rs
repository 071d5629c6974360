// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Widest integer used for decimal scale factors.
#[cfg(feature = "hge")]
pub type Wide = i128;
#[cfg(not(feature = "hge"))]
pub type Wide = i64;

#[cfg(feature = "hge")]
pub const MAX_SCALE: usize = 38;
#[cfg(not(feature = "hge"))]
pub const MAX_SCALE: usize = 18;

/// `SCALES[n] == 10^n`.
pub const SCALES: [Wide; MAX_SCALE + 1] = powers_of_ten();

const fn powers_of_ten() -> [Wide; MAX_SCALE + 1] {
	let mut table = [1 as Wide; MAX_SCALE + 1];
	let mut i = 1;
	while i <= MAX_SCALE {
		table[i] = table[i - 1] * 10;
		i += 1;
	}
	table
}

#[inline]
pub fn scale_factor(digits: u8) -> Option<i128> {
	SCALES.get(digits as usize).map(|factor| i128::from(*factor))
}

/// Integer division rounding half away from zero.
#[inline]
pub fn divide_round(value: i128, divisor: i128) -> i128 {
	debug_assert!(divisor > 0);
	let divisor = divisor.unsigned_abs();
	let quotient = ((value.unsigned_abs() + (divisor >> 1)) / divisor) as i128;
	if value < 0 { -quotient } else { quotient }
}
