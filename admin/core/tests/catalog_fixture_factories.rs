// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Factories wired the way the CLI wires them: settings from an
//! `AdminConfig` manifest, entities from a catalog fixture.

use std::sync::Arc;

use bazaar_admin_core::admin_config::AdminConfigManifest;
use bazaar_admin_core::application::attribute::{
    AttributeModelFactory, CustomerAttributeModelFactory, VendorAttributeModelFactory,
};
use bazaar_admin_core::application::error::FactoryError;
use bazaar_admin_core::application::measure::{MeasureModelFactory, StandardMeasureModelFactory};
use bazaar_admin_core::infrastructure::fixture::CatalogFixture;
use bazaar_admin_core::infrastructure::memory::{InMemoryCatalog, InMemoryPluginFinder};
use bazaar_admin_core::models::attribute::{AttributeSearchModel, AttributeValueModel, AttributeValueSearchModel};
use bazaar_admin_core::models::common::PagingParams;
use bazaar_admin_core::models::measure::{MeasureDimensionSearchModel, MeasureSearchModel};

const CONFIG: &str = r#"
apiVersion: bazaar.dev/v1
kind: AdminConfig
metadata:
  name: test-admin
spec:
  admin_area:
    default_grid_page_size: 20
    grid_page_sizes: "10, 20, 40"
  measure:
    base_dimension_id: 3
    base_weight_id: 1
"#;

const FIXTURE: &str = r#"
languages:
  - { id: 1, name: English, language_culture: en-US, display_order: 1 }
  - { id: 2, name: Deutsch, language_culture: de-DE, display_order: 2 }
working_language_id: 1
localized_properties:
  - { key_group: CustomerAttributeValue, entity_id: 2, key: Name, language_id: 2, value: Blau }
  - { key_group: VendorAttribute, entity_id: 1, key: Name, language_id: 2, value: Steuernummer }
customer_attributes:
  - { id: 5, name: Favourite colour, attribute_control_type: DropdownList }
customer_attribute_values:
  - { id: 1, attribute_id: 5, name: Red }
  - { id: 2, attribute_id: 5, name: Blue, display_order: 1 }
vendor_attributes:
  - { id: 1, name: Tax number, attribute_control_type: TextBox, is_required: true }
measure_dimensions:
  - { id: 1, name: "inch(es)", system_keyword: inches, ratio: 1.0, display_order: 1 }
  - { id: 2, name: "feet", system_keyword: feet, ratio: 0.08333333, display_order: 2 }
  - { id: 3, name: "meter(s)", system_keyword: meters, ratio: 0.0254, display_order: 3 }
  - { id: 4, name: "millimetre(s)", system_keyword: millimetres, ratio: 25.4, display_order: 4 }
measure_weights:
  - { id: 1, name: "ounce(s)", system_keyword: ounce, ratio: 16.0, display_order: 1 }
  - { id: 2, name: "lb(s)", system_keyword: lb, ratio: 1.0, display_order: 2 }
"#;

struct Harness {
    config: AdminConfigManifest,
    catalog: Arc<InMemoryCatalog>,
    #[allow(dead_code)]
    plugin_finder: Arc<InMemoryPluginFinder>,
}

fn harness() -> Harness {
    let config = AdminConfigManifest::from_yaml_str(CONFIG).unwrap();
    config.validate().unwrap();
    let (catalog, plugin_finder) = CatalogFixture::from_yaml_str(FIXTURE).unwrap().into_services();
    Harness {
        config,
        catalog,
        plugin_finder,
    }
}

fn customer_attributes(harness: &Harness) -> CustomerAttributeModelFactory {
    CustomerAttributeModelFactory::new(
        harness.catalog.clone(),
        harness.catalog.localized_model_factory(),
        harness.config.spec.admin_area.clone(),
    )
}

#[tokio::test]
async fn test_attribute_value_rows_carry_owning_attribute() {
    let harness = harness();
    let factory = customer_attributes(&harness);
    let attribute = harness.catalog.customer_attribute(5).unwrap();
    let search = AttributeValueSearchModel {
        attribute_id: 5,
        paging: PagingParams::new(1, 10),
    };

    let list = factory
        .prepare_attribute_value_list_model(&search, Some(&attribute))
        .await
        .unwrap();

    assert_eq!(list.total, 2);
    let rows: Vec<(i32, &str, i32)> = list
        .data
        .iter()
        .map(|row| (row.id, row.name.as_str(), row.attribute_id))
        .collect();
    assert_eq!(rows, vec![(1, "Red", 5), (2, "Blue", 5)]);
}

#[tokio::test]
async fn test_search_model_uses_configured_grid_sizes() {
    let harness = harness();
    let model = customer_attributes(&harness)
        .prepare_attribute_search_model(AttributeSearchModel::default())
        .await
        .unwrap();

    assert_eq!(model.paging.page_size, 20);
    assert_eq!(model.paging.available_page_sizes, "10, 20, 40");
}

#[tokio::test]
async fn test_value_model_locales_follow_language_order() {
    let harness = harness();
    let factory = customer_attributes(&harness);
    let attribute = harness.catalog.customer_attribute(5).unwrap();
    let blue = harness.catalog.customer_attribute_value(2).unwrap();

    let model = factory
        .prepare_attribute_value_model(None, Some(&attribute), Some(&blue), false)
        .await
        .unwrap();

    assert_eq!(model.attribute_id, 5);
    let locales: Vec<(i32, &str)> = model
        .locales
        .iter()
        .map(|locale| (locale.language_id, locale.name.as_str()))
        .collect();
    assert_eq!(locales, vec![(1, ""), (2, "Blau")]);
}

#[tokio::test]
async fn test_new_value_model_gets_blank_locales_and_parent_id() {
    let harness = harness();
    let factory = customer_attributes(&harness);
    let attribute = harness.catalog.customer_attribute(5).unwrap();

    let model = factory
        .prepare_attribute_value_model(Some(AttributeValueModel::default()), Some(&attribute), None, false)
        .await
        .unwrap();

    assert_eq!(model.attribute_id, 5);
    assert_eq!(model.locales.len(), 2);
    assert!(model.locales.iter().all(|locale| locale.name.is_empty()));

    let missing = factory
        .prepare_attribute_value_model(None, None, None, false)
        .await;
    assert!(matches!(missing, Err(FactoryError::MissingArgument("attribute"))));
}

#[tokio::test]
async fn test_vendor_attributes_use_their_own_key_group() {
    let harness = harness();
    let factory = VendorAttributeModelFactory::new(
        harness.catalog.clone(),
        harness.catalog.localized_model_factory(),
        harness.config.spec.admin_area.clone(),
    );
    let tax_number = harness.catalog.vendor_attribute(1).unwrap();

    let list = factory
        .prepare_attribute_list_model(&AttributeSearchModel::default())
        .await
        .unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.data[0].attribute_control_type_name, "Text Box");
    assert!(list.data[0].is_required);

    let model = factory.new_attribute_model(&tax_number).await.unwrap();
    assert_eq!(model.locales[1].name, "Steuernummer");
    assert_eq!(model.attribute_value_search_model.attribute_id, 1);
}

#[tokio::test]
async fn test_measure_rows_flag_base_units() {
    let harness = harness();
    let factory = StandardMeasureModelFactory::new(
        harness.catalog.clone(),
        harness.config.spec.measure.clone(),
        harness.config.spec.admin_area.clone(),
    );

    let search = factory
        .prepare_measure_search_model(MeasureSearchModel::default())
        .await
        .unwrap();
    assert_eq!(search.measure_dimension_search_model.paging.page_size, 20);

    let dimensions = factory
        .prepare_measure_dimension_list_model(&MeasureDimensionSearchModel {
            paging: PagingParams::new(1, 10),
        })
        .await
        .unwrap();
    assert_eq!(dimensions.total, 4);
    let primary: Vec<(i32, bool)> = dimensions
        .data
        .iter()
        .map(|row| (row.id, row.is_primary_dimension))
        .collect();
    assert_eq!(primary, vec![(1, false), (2, false), (3, true), (4, false)]);

    let weights = factory
        .prepare_measure_weight_list_model(&search.measure_weight_search_model)
        .await
        .unwrap();
    assert!(weights.data[0].is_primary_weight);
    assert!(!weights.data[1].is_primary_weight);
}

#[tokio::test]
async fn test_second_page_keeps_unpaginated_total() {
    let harness = harness();
    let factory = StandardMeasureModelFactory::new(
        harness.catalog.clone(),
        harness.config.spec.measure.clone(),
        harness.config.spec.admin_area.clone(),
    );

    let page = factory
        .prepare_measure_dimension_list_model(&MeasureDimensionSearchModel {
            paging: PagingParams::new(2, 3),
        })
        .await
        .unwrap();

    assert_eq!(page.total, 4);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, 4);
}
