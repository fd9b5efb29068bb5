// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Building blocks shared by every grid and form model.

use serde::{Deserialize, Serialize};

/// Paging state of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingParams {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Comma-separated page sizes offered by the grid
    pub available_page_sizes: String,
}

impl Default for PagingParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 15,
            available_page_sizes: String::new(),
        }
    }
}

impl PagingParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }
}

/// A filter + paging input of a grid screen.
pub trait SearchModel {
    fn paging(&self) -> &PagingParams;
    fn paging_mut(&mut self) -> &mut PagingParams;
}

/// Implements [`SearchModel`] for structs carrying a `paging` field.
macro_rules! impl_search_model {
    ($($model:ty),+ $(,)?) => {
        $(
            impl $crate::models::common::SearchModel for $model {
                fn paging(&self) -> &$crate::models::common::PagingParams {
                    &self.paging
                }

                fn paging_mut(&mut self) -> &mut $crate::models::common::PagingParams {
                    &mut self.paging
                }
            }
        )+
    };
}

pub(crate) use impl_search_model;

/// One page of grid rows plus the unpaginated row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModel<T> {
    pub data: Vec<T>,
    pub total: usize,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// Option of a drop-down or multi-select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectListItem {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

impl SelectListItem {
    pub fn new(text: impl Into<String>, value: impl ToString) -> Self {
        Self {
            text: text.into(),
            value: value.to_string(),
            selected: false,
        }
    }
}

/// Per-language overlay of a detail model's translatable fields.
pub trait LocalizedModel {
    /// Empty overlay for `language_id`
    fn for_language(language_id: i32) -> Self
    where
        Self: Sized;

    fn language_id(&self) -> i32;
}
