// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Measure commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use bazaar_admin_core::application::measure::MeasureModelFactory;
use bazaar_admin_core::models::common::ListModel;
use bazaar_admin_core::models::measure::{MeasureDimensionModel, MeasureSearchModel, MeasureWeightModel};

use super::{print_json, PagingArgs};
use crate::embedded::{AdminServices, ServicePaths};

#[derive(Subcommand)]
pub enum MeasureCommand {
    /// List dimensions and weights, base units flagged
    List {
        #[command(flatten)]
        paging: PagingArgs,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeasureListOutput {
    dimensions: ListModel<MeasureDimensionModel>,
    weights: ListModel<MeasureWeightModel>,
}

pub async fn handle_command(command: MeasureCommand, paths: &ServicePaths) -> Result<()> {
    let services = AdminServices::load(paths)?;
    let factory = services.measure_factory();

    match command {
        MeasureCommand::List { paging } => {
            let mut search = factory.prepare_measure_search_model(MeasureSearchModel::default()).await?;
            paging.apply(&mut search.measure_dimension_search_model.paging);
            paging.apply(&mut search.measure_weight_search_model.paging);

            let output = MeasureListOutput {
                dimensions: factory
                    .prepare_measure_dimension_list_model(&search.measure_dimension_search_model)
                    .await?,
                weights: factory
                    .prepare_measure_weight_list_model(&search.measure_weight_search_model)
                    .await?,
            };
            print_json(&output)
        }
    }
}
