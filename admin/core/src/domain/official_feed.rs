// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Records served by the remote catalog of officially published plugins.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category of the remote catalog; categories form a tree via `parent_category_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialFeedCategory {
    pub id: i32,
    /// 0 for root categories
    #[serde(default)]
    pub parent_category_id: i32,
    pub name: String,
}

/// Separator between category names in a breadcrumb
pub const BREADCRUMB_SEPARATOR: &str = " >> ";

/// Path of `category` from its root, e.g. `"Payment >> Gateways"`.
///
/// The walk follows parent ids through `categories` and stops at a parent
/// that is missing or was already visited.
pub fn category_breadcrumb(categories: &[OfficialFeedCategory], category: &OfficialFeedCategory) -> String {
    let mut names = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Some(category);

    while let Some(node) = current {
        if !visited.insert(node.id) {
            tracing::warn!(category_id = node.id, "Cycle in official feed category tree");
            break;
        }
        names.push(node.name.as_str());
        current = categories.iter().find(|parent| parent.id == node.parent_category_id);
    }

    names.reverse();
    names.join(BREADCRUMB_SEPARATOR)
}

/// Platform version the remote catalog tracks compatibility against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialFeedVersion {
    pub id: i32,
    /// Display name, e.g. `"nopCommerce 4.10"`
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialFeedPlugin {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub picture_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub supported_versions: String,
    #[serde(default)]
    pub price: String,
}

/// Price tier filter understood by the remote catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficialFeedPrice {
    #[default]
    All = 0,
    Free = 10,
    Commercial = 20,
}

impl OfficialFeedPrice {
    pub fn id(&self) -> i32 {
        *self as i32
    }

    pub fn from_id(id: i32) -> Self {
        match id {
            10 => Self::Free,
            20 => Self::Commercial,
            _ => Self::All,
        }
    }
}

/// Filter and page of a remote plugin search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialFeedQuery {
    /// 0 means all categories
    pub category_id: i32,
    /// 0 means all versions
    pub version_id: i32,
    pub price: i32,
    pub search_term: String,
    /// 0-based
    pub page_index: u32,
    pub page_size: u32,
}

/// One page of remote plugins plus the total count across all pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialFeedPluginPage {
    pub plugins: Vec<OfficialFeedPlugin>,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i32, parent_category_id: i32, name: &str) -> OfficialFeedCategory {
        OfficialFeedCategory {
            id,
            parent_category_id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_breadcrumb_runs_root_to_child() {
        let categories = vec![
            category(1, 0, "Payment"),
            category(2, 1, "Gateways"),
            category(3, 2, "Cards"),
        ];

        assert_eq!(category_breadcrumb(&categories, &categories[2]), "Payment >> Gateways >> Cards");
        assert_eq!(category_breadcrumb(&categories, &categories[0]), "Payment");
    }

    #[test]
    fn test_breadcrumb_stops_on_missing_parent_and_cycles() {
        let orphan = vec![category(5, 42, "Orphan")];
        assert_eq!(category_breadcrumb(&orphan, &orphan[0]), "Orphan");

        let cyclic = vec![category(1, 2, "A"), category(2, 1, "B")];
        assert_eq!(category_breadcrumb(&cyclic, &cyclic[0]), "B >> A");
    }

    #[test]
    fn test_price_from_id() {
        assert_eq!(OfficialFeedPrice::from_id(20), OfficialFeedPrice::Commercial);
        assert_eq!(OfficialFeedPrice::from_id(7), OfficialFeedPrice::All);
    }
}
