// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Object identifier: a row position within a column's head sequence.
pub type Oid = u64;

/// Largest legal object identifier; `1 << 63` is reserved for NIL.
pub const OID_MAX: Oid = (1 << 63) - 1;
