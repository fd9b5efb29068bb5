// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Local plugin commands

use anyhow::Result;
use clap::Subcommand;

use bazaar_admin_core::application::plugin::PluginModelFactory;
use bazaar_admin_core::models::plugin::PluginSearchModel;

use super::{print_json, PagingArgs};
use crate::embedded::{AdminServices, ServicePaths};

#[derive(Subcommand)]
pub enum PluginCommand {
    /// List plugins with their capability state
    List {
        /// Group name (default: all groups)
        #[arg(long, default_value = "")]
        group: String,

        /// 0 all, 10 installed only, 20 not installed only
        #[arg(long, default_value_t = 0)]
        load_mode: i32,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show the detail model of one plugin
    Show {
        /// System name, matched case-insensitively
        #[arg(value_name = "SYSTEM_NAME")]
        system_name: String,
    },
}

pub async fn handle_command(command: PluginCommand, paths: &ServicePaths) -> Result<()> {
    let services = AdminServices::load(paths)?;
    let factory = services.plugin_factory()?;

    match command {
        PluginCommand::List {
            group,
            load_mode,
            paging,
        } => {
            let mut search = factory
                .prepare_plugin_search_model(PluginSearchModel {
                    search_group: group,
                    search_load_mode_id: load_mode,
                    ..Default::default()
                })
                .await?;
            paging.apply(&mut search.paging);

            print_json(&factory.prepare_plugin_list_model(&search).await?)
        }
        PluginCommand::Show { system_name } => {
            let descriptor = services.plugin_finder().descriptor(&system_name);
            if descriptor.is_none() {
                tracing::warn!(%system_name, "Plugin not found");
            }
            print_json(&factory.prepare_plugin_model(None, descriptor.as_ref(), false).await?)
        }
    }
}
