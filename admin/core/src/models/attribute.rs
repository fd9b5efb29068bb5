// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Models of the customer and vendor attribute screens. Both families share
//! these shapes; only the factory knows which kind it serves.

use serde::{Deserialize, Serialize};

use crate::domain::attribute::AttributeControlType;
use crate::models::common::{impl_search_model, LocalizedModel, PagingParams};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSearchModel {
    pub paging: PagingParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeModel {
    pub id: i32,
    pub name: String,
    pub is_required: bool,
    pub attribute_control_type: AttributeControlType,
    /// Localized label of the control type, filled on grid rows
    pub attribute_control_type_name: String,
    pub display_order: i32,
    pub locales: Vec<AttributeLocalizedModel>,
    pub attribute_value_search_model: AttributeValueSearchModel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeLocalizedModel {
    pub language_id: i32,
    pub name: String,
}

impl LocalizedModel for AttributeLocalizedModel {
    fn for_language(language_id: i32) -> Self {
        Self {
            language_id,
            ..Default::default()
        }
    }

    fn language_id(&self) -> i32 {
        self.language_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValueSearchModel {
    pub attribute_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValueModel {
    pub id: i32,
    /// Owning attribute
    pub attribute_id: i32,
    pub name: String,
    pub is_pre_selected: bool,
    pub display_order: i32,
    pub locales: Vec<AttributeValueLocalizedModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValueLocalizedModel {
    pub language_id: i32,
    pub name: String,
}

impl LocalizedModel for AttributeValueLocalizedModel {
    fn for_language(language_id: i32) -> Self {
        Self {
            language_id,
            ..Default::default()
        }
    }

    fn language_id(&self) -> i32 {
        self.language_id
    }
}

impl_search_model!(AttributeSearchModel, AttributeValueSearchModel);
