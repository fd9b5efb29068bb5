// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Customer and vendor attribute commands

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use bazaar_admin_core::application::attribute::AttributeModelFactory;
use bazaar_admin_core::attribute::{Attribute, AttributeKind};
use bazaar_admin_core::models::attribute::{AttributeSearchModel, AttributeValueSearchModel};

use super::{print_json, PagingArgs};
use crate::embedded::{AdminServices, ServicePaths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AttributeFamily {
    Customer,
    Vendor,
}

#[derive(Subcommand)]
pub enum AttributeCommand {
    /// List attributes with their localized control type
    List {
        #[arg(value_enum)]
        kind: AttributeFamily,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List the predefined values of one attribute
    Values {
        #[arg(value_enum)]
        kind: AttributeFamily,

        /// Owning attribute
        #[arg(long)]
        attribute_id: i32,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

pub async fn handle_command(command: AttributeCommand, paths: &ServicePaths) -> Result<()> {
    let services = AdminServices::load(paths)?;

    match command {
        AttributeCommand::List { kind, paging } => match kind {
            AttributeFamily::Customer => list(&services.customer_attribute_factory(), &paging).await,
            AttributeFamily::Vendor => list(&services.vendor_attribute_factory(), &paging).await,
        },
        AttributeCommand::Values {
            kind,
            attribute_id,
            paging,
        } => match kind {
            AttributeFamily::Customer => {
                let attribute = services.catalog().customer_attribute(attribute_id);
                values(&services.customer_attribute_factory(), attribute.as_ref(), &paging).await
            }
            AttributeFamily::Vendor => {
                let attribute = services.catalog().vendor_attribute(attribute_id);
                values(&services.vendor_attribute_factory(), attribute.as_ref(), &paging).await
            }
        },
    }
}

async fn list<K: AttributeKind>(factory: &dyn AttributeModelFactory<K>, paging: &PagingArgs) -> Result<()> {
    let mut search = factory
        .prepare_attribute_search_model(AttributeSearchModel::default())
        .await?;
    paging.apply(&mut search.paging);

    print_json(&factory.prepare_attribute_list_model(&search).await?)
}

async fn values<K: AttributeKind>(
    factory: &dyn AttributeModelFactory<K>,
    attribute: Option<&Attribute<K>>,
    paging: &PagingArgs,
) -> Result<()> {
    let mut search = factory
        .prepare_attribute_value_search_model(AttributeValueSearchModel::default(), attribute)
        .await?;
    paging.apply(&mut search.paging);

    print_json(&factory.prepare_attribute_value_list_model(&search, attribute).await?)
}
