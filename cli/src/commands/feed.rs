// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Official plugin feed commands
//!
//! These contact the configured `official_feed.endpoint`.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use bazaar_admin_core::application::plugin::PluginModelFactory;
use bazaar_admin_core::models::common::ListModel;
use bazaar_admin_core::models::plugin::{OfficialFeedPluginModel, OfficialFeedPluginSearchModel};

use super::print_json;
use crate::embedded::{AdminServices, ServicePaths};

#[derive(Subcommand)]
pub enum FeedCommand {
    /// Search the official plugin feed
    Search {
        /// Name contains
        #[arg(long, default_value = "")]
        name: String,

        /// Version id (default: the running platform version)
        #[arg(long)]
        version_id: Option<i32>,

        /// Category id (0: all)
        #[arg(long, default_value_t = 0)]
        category_id: i32,

        /// 0 all, 10 free, 20 commercial
        #[arg(long, default_value_t = 0)]
        price_id: i32,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedSearchOutput {
    search: OfficialFeedPluginSearchModel,
    plugins: ListModel<OfficialFeedPluginModel>,
}

pub async fn handle_command(command: FeedCommand, paths: &ServicePaths) -> Result<()> {
    let services = AdminServices::load(paths)?;
    let factory = services.plugin_factory()?;

    match command {
        FeedCommand::Search {
            name,
            version_id,
            category_id,
            price_id,
            page,
        } => {
            let mut search = factory
                .prepare_official_feed_plugin_search_model(OfficialFeedPluginSearchModel::default())
                .await?;
            search.search_name = name;
            search.search_category_id = category_id;
            search.search_price_id = price_id;
            if let Some(version_id) = version_id {
                search.search_version_id = version_id;
            }
            search.paging.page = page.max(1);

            let plugins = factory.prepare_official_feed_plugin_list_model(&search).await?;
            print_json(&FeedSearchOutput { search, plugins })
        }
    }
}
