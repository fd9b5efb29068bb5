// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Measure Model Factory
//!
//! The measures page hosts a dimension grid and a weight grid. Rows flag the
//! base unit configured in [`MeasureSettings`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::error::{require, FactoryResult};
use crate::application::paging::{paginate_by_request, set_grid_page_size};
use crate::domain::admin_config::{AdminAreaSettings, MeasureSettings};
use crate::domain::measure::{MeasureDimension, MeasureWeight};
use crate::domain::repository::MeasureService;
use crate::models::common::ListModel;
use crate::models::measure::{
    MeasureDimensionModel, MeasureDimensionSearchModel, MeasureSearchModel, MeasureWeightModel,
    MeasureWeightSearchModel,
};

#[async_trait]
pub trait MeasureModelFactory: Send + Sync {
    /// Prepares both nested grid search models
    async fn prepare_measure_search_model(&self, model: MeasureSearchModel) -> FactoryResult<MeasureSearchModel>;

    async fn prepare_measure_dimension_search_model(
        &self,
        model: MeasureDimensionSearchModel,
    ) -> FactoryResult<MeasureDimensionSearchModel>;

    async fn prepare_measure_dimension_list_model(
        &self,
        search: &MeasureDimensionSearchModel,
    ) -> FactoryResult<ListModel<MeasureDimensionModel>>;

    async fn prepare_measure_dimension_model(
        &self,
        model: Option<MeasureDimensionModel>,
        dimension: Option<&MeasureDimension>,
    ) -> FactoryResult<MeasureDimensionModel>;

    async fn prepare_measure_weight_search_model(
        &self,
        model: MeasureWeightSearchModel,
    ) -> FactoryResult<MeasureWeightSearchModel>;

    async fn prepare_measure_weight_list_model(
        &self,
        search: &MeasureWeightSearchModel,
    ) -> FactoryResult<ListModel<MeasureWeightModel>>;

    async fn prepare_measure_weight_model(
        &self,
        model: Option<MeasureWeightModel>,
        weight: Option<&MeasureWeight>,
    ) -> FactoryResult<MeasureWeightModel>;
}

pub struct StandardMeasureModelFactory {
    measures: Arc<dyn MeasureService>,
    measure_settings: MeasureSettings,
    admin_area: AdminAreaSettings,
}

impl StandardMeasureModelFactory {
    pub fn new(
        measures: Arc<dyn MeasureService>,
        measure_settings: MeasureSettings,
        admin_area: AdminAreaSettings,
    ) -> Self {
        Self {
            measures,
            measure_settings,
            admin_area,
        }
    }

    fn to_dimension_model(&self, dimension: &MeasureDimension) -> MeasureDimensionModel {
        MeasureDimensionModel {
            id: dimension.id,
            name: dimension.name.clone(),
            system_keyword: dimension.system_keyword.clone(),
            ratio: dimension.ratio,
            display_order: dimension.display_order,
            is_primary_dimension: dimension.id == self.measure_settings.base_dimension_id,
        }
    }

    fn to_weight_model(&self, weight: &MeasureWeight) -> MeasureWeightModel {
        MeasureWeightModel {
            id: weight.id,
            name: weight.name.clone(),
            system_keyword: weight.system_keyword.clone(),
            ratio: weight.ratio,
            display_order: weight.display_order,
            is_primary_weight: weight.id == self.measure_settings.base_weight_id,
        }
    }
}

#[async_trait]
impl MeasureModelFactory for StandardMeasureModelFactory {
    async fn prepare_measure_search_model(&self, mut model: MeasureSearchModel) -> FactoryResult<MeasureSearchModel> {
        model.measure_dimension_search_model = self
            .prepare_measure_dimension_search_model(model.measure_dimension_search_model)
            .await?;
        model.measure_weight_search_model = self
            .prepare_measure_weight_search_model(model.measure_weight_search_model)
            .await?;
        Ok(model)
    }

    async fn prepare_measure_dimension_search_model(
        &self,
        mut model: MeasureDimensionSearchModel,
    ) -> FactoryResult<MeasureDimensionSearchModel> {
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_measure_dimension_list_model(
        &self,
        search: &MeasureDimensionSearchModel,
    ) -> FactoryResult<ListModel<MeasureDimensionModel>> {
        let dimensions = self.measures.get_all_measure_dimensions().await?;
        tracing::debug!(count = dimensions.len(), "Preparing measure dimension list");

        Ok(paginate_by_request(dimensions, search)
            .into_list_model(|dimension| self.to_dimension_model(&dimension)))
    }

    async fn prepare_measure_dimension_model(
        &self,
        model: Option<MeasureDimensionModel>,
        dimension: Option<&MeasureDimension>,
    ) -> FactoryResult<MeasureDimensionModel> {
        match dimension {
            Some(dimension) => Ok(model.unwrap_or_else(|| self.to_dimension_model(dimension))),
            None => require(model, "model"),
        }
    }

    async fn prepare_measure_weight_search_model(
        &self,
        mut model: MeasureWeightSearchModel,
    ) -> FactoryResult<MeasureWeightSearchModel> {
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_measure_weight_list_model(
        &self,
        search: &MeasureWeightSearchModel,
    ) -> FactoryResult<ListModel<MeasureWeightModel>> {
        let weights = self.measures.get_all_measure_weights().await?;
        tracing::debug!(count = weights.len(), "Preparing measure weight list");

        Ok(paginate_by_request(weights, search).into_list_model(|weight| self.to_weight_model(&weight)))
    }

    async fn prepare_measure_weight_model(
        &self,
        model: Option<MeasureWeightModel>,
        weight: Option<&MeasureWeight>,
    ) -> FactoryResult<MeasureWeightModel> {
        match weight {
            Some(weight) => Ok(model.unwrap_or_else(|| self.to_weight_model(weight))),
            None => require(model, "model"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryCatalog;
    use crate::models::common::PagingParams;

    fn dimension(id: i32, name: &str, ratio: f64) -> MeasureDimension {
        MeasureDimension {
            id,
            name: name.to_string(),
            system_keyword: name.to_lowercase(),
            ratio,
            display_order: id,
        }
    }

    fn factory() -> StandardMeasureModelFactory {
        let catalog = InMemoryCatalog::with_default_language();
        catalog.add_measure_dimension(dimension(1, "Inches", 1.0));
        catalog.add_measure_dimension(dimension(2, "Feet", 0.08333333));
        catalog.add_measure_dimension(dimension(3, "Meters", 0.0254));
        catalog.add_measure_weight(MeasureWeight {
            id: 2,
            name: "Pounds".to_string(),
            system_keyword: "lb".to_string(),
            ratio: 1.0,
            display_order: 1,
        });

        StandardMeasureModelFactory::new(
            Arc::new(catalog),
            MeasureSettings {
                base_dimension_id: 3,
                base_weight_id: 2,
            },
            AdminAreaSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_only_base_dimension_is_primary() {
        let search = MeasureDimensionSearchModel {
            paging: PagingParams::new(1, 10),
        };
        let list = factory().prepare_measure_dimension_list_model(&search).await.unwrap();

        assert_eq!(list.total, 3);
        for row in &list.data {
            assert_eq!(row.is_primary_dimension, row.id == 3, "dimension {}", row.id);
        }
    }

    #[tokio::test]
    async fn test_weight_list_flags_base_weight() {
        let list = factory()
            .prepare_measure_weight_list_model(&MeasureWeightSearchModel::default())
            .await
            .unwrap();

        assert_eq!(list.total, 1);
        assert!(list.data[0].is_primary_weight);
    }

    #[tokio::test]
    async fn test_search_model_prepares_both_grids() {
        let model = factory()
            .prepare_measure_search_model(MeasureSearchModel::default())
            .await
            .unwrap();

        assert_eq!(model.measure_dimension_search_model.paging.page_size, 15);
        assert_eq!(
            model.measure_weight_search_model.paging.available_page_sizes,
            "7, 15, 20, 50, 100"
        );
    }

    #[tokio::test]
    async fn test_dimension_detail_requires_model_or_entity() {
        let factory = factory();
        assert!(factory.prepare_measure_dimension_model(None, None).await.is_err());

        let meters = dimension(3, "Meters", 0.0254);
        let model = factory.prepare_measure_dimension_model(None, Some(&meters)).await.unwrap();
        assert_eq!(model.name, "Meters");
        assert!(model.is_primary_dimension);
    }
}
