// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Plugin grid, plugin form and the official feed browser, exercised over the
//! in-memory ports and a mocked remote catalog.

use std::sync::Arc;

use bazaar_admin_core::admin_config::{
    AdminAreaSettings, OfficialFeedSettings, PaymentSettings, SystemSettings, TaxSettings,
};
use bazaar_admin_core::application::error::FactoryError;
use bazaar_admin_core::application::plugin::{PluginModelFactory, StandardPluginModelFactory};
use bazaar_admin_core::infrastructure::memory::{InMemoryCatalog, InMemoryPluginFinder, StaticPlugin};
use bazaar_admin_core::infrastructure::official_feed_client::HttpOfficialFeedClient;
use bazaar_admin_core::models::common::PagingParams;
use bazaar_admin_core::models::plugin::{OfficialFeedPluginSearchModel, PluginSearchModel};
use bazaar_admin_core::plugin::{CapabilitySettings, LoadPluginsMode, PluginCapability, PluginDescriptor};
use mockito::Matcher;

fn descriptor(system_name: &str, group: &str, installed: bool) -> PluginDescriptor {
    PluginDescriptor {
        system_name: system_name.to_string(),
        friendly_name: format!("{} plugin", system_name),
        group: group.to_string(),
        version: "1.00".to_string(),
        supported_versions: vec!["4.00".to_string(), "4.10".to_string()],
        author: "Bazaar team".to_string(),
        description: String::new(),
        display_order: 1,
        installed,
        plugin_folder: system_name.to_string(),
        logo_file_name: Some("logo.png".to_string()),
        limited_to_stores: vec![2],
        limited_to_customer_roles: Vec::new(),
    }
}

fn capability_settings() -> CapabilitySettings {
    CapabilitySettings {
        payment: PaymentSettings {
            active_payment_method_system_names: vec!["Payments.Manual".to_string()],
        },
        tax: TaxSettings {
            active_tax_provider_system_name: Some("tax.fixedrate".to_string()),
        },
        ..Default::default()
    }
}

fn plugin_finder() -> Arc<InMemoryPluginFinder> {
    let finder = InMemoryPluginFinder::new();
    finder.add_plugin(Arc::new(
        StaticPlugin::new(descriptor("Payments.Manual", "Payment methods", true))
            .with_capability(PluginCapability::PaymentMethod)
            .with_configuration_url("Admin/PaymentManual/Configure"),
    ));
    finder.add_plugin(Arc::new(
        StaticPlugin::new(descriptor("Tax.FixedRate", "Tax providers", true))
            .with_capability(PluginCapability::TaxProvider),
    ));
    finder.add_plugin(Arc::new(StaticPlugin::new(descriptor("Misc.Sitemap", "Misc", true))));
    finder.add_descriptor(descriptor("Widgets.Slider", "Widgets", false));
    Arc::new(finder)
}

fn factory_with(
    catalog: &Arc<InMemoryCatalog>,
    finder: Arc<InMemoryPluginFinder>,
    feed_url: &str,
) -> StandardPluginModelFactory {
    StandardPluginModelFactory::new(
        finder.clone(),
        Arc::new(HttpOfficialFeedClient::new(feed_url).unwrap()),
        catalog.base_admin_model_factory(finder),
        capability_settings(),
        AdminAreaSettings::default(),
        SystemSettings {
            current_version: "4.10".to_string(),
            store_location: "https://shop.example/".to_string(),
        },
        OfficialFeedSettings {
            endpoint: feed_url.to_string(),
            timeout_secs: 5,
            page_size: 15,
        },
    )
}

fn catalog() -> Arc<InMemoryCatalog> {
    let catalog = InMemoryCatalog::with_default_language();
    catalog.add_language(2, "Deutsch", "de-DE", 2);
    catalog.set_resource("Plugins.FriendlyName.Payments.Manual", 2, "Manuelle Zahlung");
    Arc::new(catalog)
}

fn factory() -> StandardPluginModelFactory {
    factory_with(&catalog(), plugin_finder(), "http://127.0.0.1:9")
}

#[tokio::test]
async fn test_search_model_offers_groups_and_load_modes() {
    let model = factory()
        .prepare_plugin_search_model(PluginSearchModel::default())
        .await
        .unwrap();

    assert_eq!(model.available_load_modes.len(), LoadPluginsMode::ALL.len());
    let groups: Vec<&str> = model.available_groups.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(
        groups,
        vec!["Admin.Common.All", "Misc", "Payment methods", "Tax providers", "Widgets"]
    );
    assert_eq!(model.available_groups[0].value, "0");
    assert_eq!(model.paging.page_size, 15);
}

#[tokio::test]
async fn test_list_resolves_capabilities_per_row() {
    let search = PluginSearchModel {
        paging: PagingParams::new(1, 10),
        ..Default::default()
    };

    let list = factory().prepare_plugin_list_model(&search).await.unwrap();
    assert_eq!(list.total, 4);

    let groups: Vec<&str> = list.data.iter().map(|row| row.group.as_str()).collect();
    assert_eq!(groups, vec!["Misc", "Payment methods", "Tax providers", "Widgets"]);

    let sitemap = &list.data[0];
    assert!(!sitemap.can_change_enabled);
    assert!(!sitemap.is_enabled);

    let manual = &list.data[1];
    assert!(manual.can_change_enabled);
    assert!(manual.is_enabled);
    assert_eq!(manual.configuration_url.as_deref(), Some("Admin/PaymentManual/Configure"));
    assert_eq!(
        manual.logo_url.as_deref(),
        Some("https://shop.example/Plugins/Payments.Manual/logo.png")
    );
    assert_eq!(manual.supported_versions, "4.00, 4.10");

    // Active tax provider is matched case-insensitively
    assert!(list.data[2].is_enabled);

    let slider = &list.data[3];
    assert!(!slider.installed);
    assert!(!slider.can_change_enabled);
    assert_eq!(slider.configuration_url, None);
}

#[tokio::test]
async fn test_list_filters_by_group_and_install_state() {
    let factory = factory();
    let search = PluginSearchModel {
        search_group: "payment METHODS".to_string(),
        search_load_mode_id: LoadPluginsMode::InstalledOnly.id(),
        paging: PagingParams::new(1, 10),
        ..Default::default()
    };
    let list = factory.prepare_plugin_list_model(&search).await.unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.data[0].system_name, "Payments.Manual");

    let not_installed = PluginSearchModel {
        search_group: "0".to_string(),
        search_load_mode_id: LoadPluginsMode::NotInstalledOnly.id(),
        paging: PagingParams::new(1, 10),
        ..Default::default()
    };
    let list = factory.prepare_plugin_list_model(&not_installed).await.unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.data[0].system_name, "Widgets.Slider");
}

#[tokio::test]
async fn test_installed_plugin_without_instance_aborts_list() {
    let finder = InMemoryPluginFinder::new();
    finder.add_descriptor(descriptor("Shipping.Broken", "Shipping rate computation", true));
    let factory = factory_with(&catalog(), Arc::new(finder), "http://127.0.0.1:9");

    let result = factory
        .prepare_plugin_list_model(&PluginSearchModel::default())
        .await;
    assert!(matches!(result, Err(FactoryError::MissingArgument("plugin"))));
}

#[tokio::test]
async fn test_detail_model_locales_and_store_mapping() {
    let catalog = catalog();
    catalog.add_store(bazaar_admin_core::store::Store {
        id: 1,
        name: "Main".to_string(),
        url: "https://shop.example/".to_string(),
        display_order: 1,
    });
    catalog.add_store(bazaar_admin_core::store::Store {
        id: 2,
        name: "Outlet".to_string(),
        url: "https://outlet.example/".to_string(),
        display_order: 2,
    });
    let finder = plugin_finder();
    let manual = finder.descriptor("Payments.Manual").unwrap();
    let factory = factory_with(&catalog, finder, "http://127.0.0.1:9");

    let model = factory.prepare_plugin_model(None, Some(&manual), false).await.unwrap();

    assert_eq!(model.friendly_name, "Payments.Manual plugin");
    assert!(model.is_enabled);
    assert_eq!(model.locales.len(), 2);
    assert_eq!(model.locales[0].friendly_name, "");
    assert_eq!(model.locales[1].friendly_name, "Manuelle Zahlung");
    assert_eq!(model.selected_store_ids, vec![2]);
    let selected: Vec<bool> = model.available_stores.iter().map(|item| item.selected).collect();
    assert_eq!(selected, vec![false, true]);

    let excluded = factory.prepare_plugin_model(None, Some(&manual), true).await.unwrap();
    assert!(excluded.locales.is_empty());
}

#[tokio::test]
async fn test_detail_model_requires_model_or_descriptor() {
    let result = factory().prepare_plugin_model(None, None, false).await;
    assert!(matches!(result, Err(FactoryError::MissingArgument("model"))));
}

#[tokio::test]
async fn test_official_feed_search_model() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/versions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 3, "name": "Bazaar 4.00"}, {"id": 4, "name": "Bazaar 4.10"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/categories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id": 1, "parentCategoryId": 0, "name": "Payment"},
                {"id": 2, "parentCategoryId": 1, "name": "Gateways"}]"#,
        )
        .create_async()
        .await;

    let catalog = catalog();
    catalog.set_resource("Admin.Common.All", 1, "All");
    catalog.set_resource("Admin.Configuration.Plugins.OfficialFeed.Price.Free", 1, "Free");
    let factory = factory_with(&catalog, plugin_finder(), &server.url());

    let model = factory
        .prepare_official_feed_plugin_search_model(OfficialFeedPluginSearchModel::default())
        .await
        .unwrap();

    assert_eq!(model.search_version_id, 4);
    assert!(model.available_versions[2].selected);
    assert_eq!(model.available_versions[0].text, "All");

    let categories: Vec<&str> = model.available_categories.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(categories, vec!["All", "Payment", "Payment >> Gateways"]);

    let prices: Vec<(&str, &str)> = model
        .available_prices
        .iter()
        .map(|item| (item.text.as_str(), item.value.as_str()))
        .collect();
    assert_eq!(
        prices,
        vec![
            ("All", "0"),
            ("Free", "10"),
            ("Admin.Configuration.Plugins.OfficialFeed.Price.Commercial", "20"),
        ]
    );

    assert_eq!(model.paging.page_size, 15);
    assert_eq!(model.paging.available_page_sizes, "15");
}

#[tokio::test]
async fn test_official_feed_list_model_passes_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/plugins")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("categoryId".into(), "2".into()),
            Matcher::UrlEncoded("versionId".into(), "4".into()),
            Matcher::UrlEncoded("price".into(), "10".into()),
            Matcher::UrlEncoded("pageIndex".into(), "1".into()),
            Matcher::UrlEncoded("pageSize".into(), "15".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"plugins": [{"name": "Stripe", "url": "https://feed.example/stripe",
                "pictureUrl": "https://feed.example/stripe.png", "category": "Payment >> Gateways",
                "supportedVersions": "4.00, 4.10", "price": "Free"}],
                "totalCount": 17}"#,
        )
        .create_async()
        .await;

    let factory = factory_with(&catalog(), plugin_finder(), &server.url());
    let search = OfficialFeedPluginSearchModel {
        search_category_id: 2,
        search_version_id: 4,
        search_price_id: 10,
        paging: PagingParams::new(2, 15),
        ..Default::default()
    };

    let list = factory.prepare_official_feed_plugin_list_model(&search).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.total, 17);
    assert_eq!(list.data[0].category_name, "Payment >> Gateways");
    assert_eq!(list.data[0].picture_url, "https://feed.example/stripe.png");
}
