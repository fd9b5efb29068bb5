// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Product commands
//!
//! Commands: list, show, tags, low-stock

use anyhow::Result;
use clap::Subcommand;

use bazaar_admin_core::application::product::ProductModelFactory;
use bazaar_admin_core::models::product::{LowStockProductSearchModel, ProductSearchModel, ProductTagSearchModel};

use super::{print_json, PagingArgs};
use crate::embedded::{AdminServices, ServicePaths};

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List products with their default thumbnail
    List {
        /// Name contains
        #[arg(long, default_value = "")]
        name: String,

        /// Product type id (0: all)
        #[arg(long, default_value_t = 0)]
        product_type_id: i32,

        /// 0 all, 1 published only, 2 unpublished only
        #[arg(long, default_value_t = 0)]
        published: i32,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show the detail model of one product
    Show {
        #[arg(long)]
        id: i32,
    },

    /// List product tags with their usage count
    Tags {
        /// Tag name contains
        #[arg(long, default_value = "")]
        name: String,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List products at or below their minimum stock
    LowStock {
        /// 0 all, 1 published only, 2 unpublished only
        #[arg(long, default_value_t = 0)]
        published: i32,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

pub async fn handle_command(command: ProductCommand, paths: &ServicePaths) -> Result<()> {
    let services = AdminServices::load(paths)?;
    let factory = services.product_factory();

    match command {
        ProductCommand::List {
            name,
            product_type_id,
            published,
            paging,
        } => {
            let mut search = factory
                .prepare_product_search_model(ProductSearchModel {
                    search_product_name: name,
                    search_product_type_id: product_type_id,
                    search_published_id: published,
                    ..Default::default()
                })
                .await?;
            paging.apply(&mut search.paging);

            print_json(&factory.prepare_product_list_model(&search).await?)
        }
        ProductCommand::Show { id } => {
            let product = services.catalog().product(id);
            print_json(&factory.prepare_product_model(None, product.as_ref(), false).await?)
        }
        ProductCommand::Tags { name, paging } => {
            let mut search = factory
                .prepare_product_tag_search_model(ProductTagSearchModel {
                    search_tag_name: name,
                    ..Default::default()
                })
                .await?;
            paging.apply(&mut search.paging);

            print_json(&factory.prepare_product_tag_list_model(&search).await?)
        }
        ProductCommand::LowStock { published, paging } => {
            let mut search = factory
                .prepare_low_stock_product_search_model(LowStockProductSearchModel {
                    search_published_id: published,
                    ..Default::default()
                })
                .await?;
            paging.apply(&mut search.paging);

            print_json(&factory.prepare_low_stock_product_list_model(&search).await?)
        }
    }
}
