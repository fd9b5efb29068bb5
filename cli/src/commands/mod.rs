// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for bazaar-admin

pub mod affiliate;
pub mod attribute;
pub mod config;
pub mod feed;
pub mod measure;
pub mod plugin;
pub mod product;

pub use self::affiliate::AffiliateCommand;
pub use self::attribute::AttributeCommand;
pub use self::config::ConfigCommand;
pub use self::feed::FeedCommand;
pub use self::measure::MeasureCommand;
pub use self::plugin::PluginCommand;
pub use self::product::ProductCommand;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use bazaar_admin_core::models::common::PagingParams;

/// Grid page selection shared by list commands
#[derive(Args, Debug, Clone)]
pub struct PagingArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page (default: configured grid page size)
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl PagingArgs {
    /// Apply to paging already prepared by a search-model factory
    pub fn apply(&self, paging: &mut PagingParams) {
        paging.page = self.page.max(1);
        if let Some(page_size) = self.page_size {
            paging.page_size = page_size;
        }
    }
}

pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize model")
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_args_keep_prepared_size_when_unset() {
        let mut paging = PagingParams {
            page: 1,
            page_size: 15,
            available_page_sizes: "7, 15".to_string(),
        };
        PagingArgs { page: 0, page_size: None }.apply(&mut paging);
        assert_eq!(paging.page, 1);
        assert_eq!(paging.page_size, 15);

        PagingArgs { page: 3, page_size: Some(7) }.apply(&mut paging);
        assert_eq!((paging.page, paging.page_size), (3, 7));
        assert_eq!(paging.available_page_sizes, "7, 15");
    }

    #[test]
    fn test_pretty_json_uses_camel_case_models() {
        let json = to_pretty_json(&PagingParams::new(2, 20)).unwrap();
        assert!(json.contains("\"pageSize\": 20"));
        assert!(json.contains("\"availablePageSizes\""));
    }
}
