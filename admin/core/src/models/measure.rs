// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Models of the measures screen: one page hosting a dimension grid and a
//! weight grid.

use serde::{Deserialize, Serialize};

use crate::models::common::{impl_search_model, PagingParams};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureSearchModel {
    pub measure_dimension_search_model: MeasureDimensionSearchModel,
    pub measure_weight_search_model: MeasureWeightSearchModel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureDimensionSearchModel {
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureWeightSearchModel {
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureDimensionModel {
    pub id: i32,
    pub name: String,
    pub system_keyword: String,
    pub ratio: f64,
    pub display_order: i32,
    /// Whether this is the base dimension every ratio is relative to
    pub is_primary_dimension: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureWeightModel {
    pub id: i32,
    pub name: String,
    pub system_keyword: String,
    pub ratio: f64,
    pub display_order: i32,
    pub is_primary_weight: bool,
}

impl_search_model!(MeasureDimensionSearchModel, MeasureWeightSearchModel);
