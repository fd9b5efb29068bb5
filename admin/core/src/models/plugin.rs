// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Models of the local plugin list and the official feed browser.

use serde::{Deserialize, Serialize};

use crate::models::common::{impl_search_model, LocalizedModel, PagingParams, SelectListItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSearchModel {
    /// Id of a `LoadPluginsMode`
    pub search_load_mode_id: i32,
    /// Group name; empty or `"0"` means all groups
    pub search_group: String,
    pub available_load_modes: Vec<SelectListItem>,
    pub available_groups: Vec<SelectListItem>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginModel {
    pub group: String,
    pub friendly_name: String,
    pub system_name: String,
    pub version: String,
    pub supported_versions: String,
    pub author: String,
    pub description: String,
    pub display_order: i32,
    pub installed: bool,
    pub configuration_url: Option<String>,
    pub logo_url: Option<String>,
    /// Whether the administrator may toggle the plugin
    pub can_change_enabled: bool,
    pub is_enabled: bool,
    pub locales: Vec<PluginLocalizedModel>,
    pub selected_store_ids: Vec<i32>,
    pub available_stores: Vec<SelectListItem>,
    pub selected_customer_role_ids: Vec<i32>,
    pub available_customer_roles: Vec<SelectListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginLocalizedModel {
    pub language_id: i32,
    pub friendly_name: String,
}

impl LocalizedModel for PluginLocalizedModel {
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
pub struct OfficialFeedPluginSearchModel {
    pub search_name: String,
    pub search_version_id: i32,
    pub search_category_id: i32,
    pub search_price_id: i32,
    pub available_versions: Vec<SelectListItem>,
    pub available_categories: Vec<SelectListItem>,
    pub available_prices: Vec<SelectListItem>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialFeedPluginModel {
    pub url: String,
    pub name: String,
    pub category_name: String,
    pub supported_versions: String,
    pub picture_url: String,
    pub price: String,
}

impl_search_model!(PluginSearchModel, OfficialFeedPluginSearchModel);
