// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use candidate::{CandidateIterator, CandidateList};
pub use column::Column;
pub use data::ColumnData;
pub use element::Element;
pub use properties::Properties;

pub mod candidate;
mod column;
pub mod container;
mod data;
mod element;
mod properties;
