// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! The shipped sample catalog renders through every local factory.

use std::path::PathBuf;

use bazaar_admin::embedded::{AdminServices, ServicePaths};
use bazaar_admin_core::application::affiliate::AffiliateModelFactory;
use bazaar_admin_core::application::attribute::AttributeModelFactory;
use bazaar_admin_core::application::plugin::PluginModelFactory;
use bazaar_admin_core::application::product::ProductModelFactory;
use bazaar_admin_core::models::affiliate::AffiliateSearchModel;
use bazaar_admin_core::models::attribute::AttributeSearchModel;
use bazaar_admin_core::models::plugin::PluginSearchModel;
use bazaar_admin_core::models::product::{LowStockProductSearchModel, ProductTagSearchModel};

fn template(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates").join(name)
}

fn services() -> AdminServices {
    AdminServices::load(&ServicePaths {
        config: Some(template("admin-config-with-examples.yaml")),
        catalog: Some(template("catalog-sample.yaml")),
    })
    .unwrap()
}

#[tokio::test]
async fn test_sample_plugins_report_enabled_state() {
    let services = services();
    let factory = services.plugin_factory().unwrap();

    let search = factory
        .prepare_plugin_search_model(PluginSearchModel::default())
        .await
        .unwrap();
    let list = factory.prepare_plugin_list_model(&search).await.unwrap();

    assert_eq!(list.total, 3);
    let payment = list
        .data
        .iter()
        .find(|row| row.system_name == "Payments.Manual")
        .unwrap();
    assert!(payment.can_change_enabled);
    assert!(payment.is_enabled);

    let slider = list
        .data
        .iter()
        .find(|row| row.system_name == "Widgets.NivoSlider")
        .unwrap();
    assert!(!slider.installed);
    assert!(!slider.can_change_enabled);
}

#[tokio::test]
async fn test_sample_products_and_tags() {
    let services = services();
    let factory = services.product_factory();

    let low_stock = factory
        .prepare_low_stock_product_search_model(LowStockProductSearchModel::default())
        .await
        .unwrap();
    let low_stock = factory
        .prepare_low_stock_product_list_model(&low_stock)
        .await
        .unwrap();
    assert_eq!(low_stock.total, 1);
    assert_eq!(low_stock.data[0].name, "Camera");

    let tags = factory
        .prepare_product_tag_search_model(ProductTagSearchModel::default())
        .await
        .unwrap();
    let tags = factory.prepare_product_tag_list_model(&tags).await.unwrap();
    assert_eq!(tags.data[0].name, "photo");
    assert_eq!(tags.data[0].product_count, 2);

    let camera = services.catalog().product(1).unwrap();
    let model = factory.prepare_product_model(None, Some(&camera), false).await.unwrap();
    assert_eq!(model.locales[1].name, "Kamera");
}

#[tokio::test]
async fn test_sample_affiliate_and_attributes() {
    let services = services();

    let affiliates = services.affiliate_factory();
    let search = affiliates
        .prepare_affiliate_search_model(AffiliateSearchModel {
            search_first_name: "ada".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let list = affiliates.prepare_affiliate_list_model(&search).await.unwrap();
    assert_eq!(list.total, 1);
    assert!(list.data[0].url.contains("affiliate=spring-promo"));

    let attributes = services.customer_attribute_factory();
    let list = attributes
        .prepare_attribute_list_model(&AttributeSearchModel::default())
        .await
        .unwrap();
    assert_eq!(list.data[0].attribute_control_type_name, "Dropdown List");
}
