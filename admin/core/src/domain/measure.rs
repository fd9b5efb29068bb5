// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Units of measure. The base units are chosen in `MeasureSettings`; every
//! other unit's `ratio` is relative to its base.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureDimension {
    pub id: i32,
    pub name: String,
    pub system_keyword: String,
    pub ratio: f64,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureWeight {
    pub id: i32,
    pub name: String,
    pub system_keyword: String,
    pub ratio: f64,
    #[serde(default)]
    pub display_order: i32,
}
