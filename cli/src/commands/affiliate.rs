// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Affiliate commands

use anyhow::Result;
use clap::Subcommand;

use bazaar_admin_core::application::affiliate::AffiliateModelFactory;
use bazaar_admin_core::models::affiliate::AffiliateSearchModel;

use super::{print_json, PagingArgs};
use crate::embedded::{AdminServices, ServicePaths};

#[derive(Subcommand)]
pub enum AffiliateCommand {
    /// List affiliates matching the filters
    List {
        /// Friendly URL name contains
        #[arg(long, default_value = "")]
        friendly_url_name: String,

        /// Address first name contains
        #[arg(long, default_value = "")]
        first_name: String,

        /// Address last name contains
        #[arg(long, default_value = "")]
        last_name: String,

        /// Only affiliates with at least one order
        #[arg(long)]
        with_orders: bool,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show the detail model of one affiliate
    Show {
        #[arg(long)]
        id: i32,
    },
}

pub async fn handle_command(command: AffiliateCommand, paths: &ServicePaths) -> Result<()> {
    let services = AdminServices::load(paths)?;
    let factory = services.affiliate_factory();

    match command {
        AffiliateCommand::List {
            friendly_url_name,
            first_name,
            last_name,
            with_orders,
            paging,
        } => {
            let mut search = factory
                .prepare_affiliate_search_model(AffiliateSearchModel {
                    search_friendly_url_name: friendly_url_name,
                    search_first_name: first_name,
                    search_last_name: last_name,
                    load_only_with_orders: with_orders,
                    ..Default::default()
                })
                .await?;
            paging.apply(&mut search.paging);

            print_json(&factory.prepare_affiliate_list_model(&search).await?)
        }
        AffiliateCommand::Show { id } => {
            let affiliate = services.catalog().affiliate(id);
            let model = factory.prepare_affiliate_model(None, affiliate.as_ref(), false).await?;
            print_json(&model)
        }
    }
}
