// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod bit;
mod number;
mod utf8;

pub use bit::BitContainer;
pub use number::NumberContainer;
pub use utf8::Utf8Container;
