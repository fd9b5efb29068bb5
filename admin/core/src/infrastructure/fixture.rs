// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Catalog Fixture Loader
//!
//! Seeds an [`InMemoryCatalog`] and an [`InMemoryPluginFinder`] from a YAML
//! document, so the CLI can render admin models without a database.
//!
//! # Example
//!
//! ```yaml
//! languages:
//!   - { id: 1, name: English, language_culture: en-US }
//! working_language_id: 1
//! resources:
//!   - { name: Admin.Common.All, language_id: 1, value: All }
//! measure_dimensions:
//!   - { id: 1, name: inch(es), system_keyword: inches, ratio: 1.0 }
//! plugins:
//!   - system_name: Payments.Manual
//!     friendly_name: Manual processing
//!     group: Payment methods
//!     version: "1.00"
//!     plugin_folder: Payments.Manual
//!     installed: true
//!     capabilities: [PaymentMethod]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::domain::affiliate::{Affiliate, Customer, Order};
use crate::domain::attribute::{
    CustomerAttribute, CustomerAttributeValue, VendorAttribute, VendorAttributeValue,
};
use crate::domain::localization::Language;
use crate::domain::measure::{MeasureDimension, MeasureWeight};
use crate::domain::plugin::{PluginCapability, PluginDescriptor};
use crate::domain::product::{
    CrossSellProduct, Picture, Product, ProductAttribute, ProductAttributeMapping,
    ProductAttributeValue, ProductPicture, ProductSpecificationAttribute, ProductTag, RelatedProduct,
    SpecificationAttribute, SpecificationAttributeOption, StockQuantityHistory, TierPrice, Warehouse,
};
use crate::domain::store::{CustomerRole, Store};
use crate::infrastructure::memory::{InMemoryCatalog, InMemoryPluginFinder, StaticPlugin, DEFAULT_MEDIA_URL};

/// Translated string resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub language_id: i32,
    pub value: String,
}

/// Translated entity field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedPropertyEntry {
    pub key_group: String,
    pub entity_id: i32,
    pub key: String,
    pub language_id: i32,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTagMappingEntry {
    pub product_id: i32,
    pub product_tag_id: i32,
}

/// Plugin descriptor plus the capability roles of its running instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginFixture {
    #[serde(flatten)]
    pub descriptor: PluginDescriptor,
    #[serde(default)]
    pub capabilities: Vec<PluginCapability>,
    #[serde(default)]
    pub configuration_url: Option<String>,
}

/// Whole-catalog YAML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFixture {
    /// Base URL picture links are generated under
    pub media_url: Option<String>,
    pub languages: Vec<Language>,
    pub working_language_id: Option<i32>,
    pub resources: Vec<ResourceEntry>,
    pub localized_properties: Vec<LocalizedPropertyEntry>,

    pub customer_attributes: Vec<CustomerAttribute>,
    pub customer_attribute_values: Vec<CustomerAttributeValue>,
    pub vendor_attributes: Vec<VendorAttribute>,
    pub vendor_attribute_values: Vec<VendorAttributeValue>,

    pub affiliates: Vec<Affiliate>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,

    pub products: Vec<Product>,
    pub related_products: Vec<RelatedProduct>,
    pub cross_sell_products: Vec<CrossSellProduct>,
    pub pictures: Vec<Picture>,
    pub product_pictures: Vec<ProductPicture>,
    pub product_tags: Vec<ProductTag>,
    pub product_tag_mappings: Vec<ProductTagMappingEntry>,
    pub tier_prices: Vec<TierPrice>,
    pub stock_quantity_history: Vec<StockQuantityHistory>,
    pub warehouses: Vec<Warehouse>,
    pub product_attributes: Vec<ProductAttribute>,
    pub product_attribute_mappings: Vec<ProductAttributeMapping>,
    pub product_attribute_values: Vec<ProductAttributeValue>,
    pub specification_attributes: Vec<SpecificationAttribute>,
    pub specification_attribute_options: Vec<SpecificationAttributeOption>,
    pub product_specification_attributes: Vec<ProductSpecificationAttribute>,

    pub measure_dimensions: Vec<MeasureDimension>,
    pub measure_weights: Vec<MeasureWeight>,

    pub stores: Vec<Store>,
    pub customer_roles: Vec<CustomerRole>,

    pub plugins: Vec<PluginFixture>,
}

impl CatalogFixture {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog fixture: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse catalog fixture: {}", path.display()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let fixture: Self = serde_yaml::from_str(yaml).context("Invalid catalog fixture YAML")?;
        Ok(fixture)
    }

    /// Build the in-memory ports seeded with this fixture
    pub fn into_services(self) -> (Arc<InMemoryCatalog>, Arc<InMemoryPluginFinder>) {
        let catalog = InMemoryCatalog::with_media_url(self.media_url.unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string()));

        for language in self.languages {
            catalog.insert_language(language);
        }
        if let Some(language_id) = self.working_language_id {
            catalog.set_working_language(language_id);
        }
        for resource in self.resources {
            catalog.set_resource(&resource.name, resource.language_id, &resource.value);
        }
        for property in self.localized_properties {
            catalog.set_localized_property(
                &property.key_group,
                property.entity_id,
                &property.key,
                property.language_id,
                &property.value,
            );
        }

        self.customer_attributes.into_iter().for_each(|a| catalog.add_customer_attribute(a));
        self.customer_attribute_values.into_iter().for_each(|v| catalog.add_customer_attribute_value(v));
        self.vendor_attributes.into_iter().for_each(|a| catalog.add_vendor_attribute(a));
        self.vendor_attribute_values.into_iter().for_each(|v| catalog.add_vendor_attribute_value(v));

        self.affiliates.into_iter().for_each(|a| catalog.add_affiliate(a));
        self.orders.into_iter().for_each(|o| catalog.add_order(o));
        self.customers.into_iter().for_each(|c| catalog.add_customer(c));

        self.products.into_iter().for_each(|p| catalog.add_product(p));
        self.related_products.into_iter().for_each(|r| catalog.add_related_product(r));
        self.cross_sell_products.into_iter().for_each(|c| catalog.add_cross_sell_product(c));
        self.pictures.into_iter().for_each(|p| catalog.add_picture(p));
        self.product_pictures.into_iter().for_each(|p| catalog.add_product_picture(p));
        self.product_tags.into_iter().for_each(|t| catalog.add_product_tag(t));
        for mapping in self.product_tag_mappings {
            catalog.tag_product(mapping.product_id, mapping.product_tag_id);
        }
        self.tier_prices.into_iter().for_each(|t| catalog.add_tier_price(t));
        self.stock_quantity_history.into_iter().for_each(|h| catalog.add_stock_quantity_history(h));
        self.warehouses.into_iter().for_each(|w| catalog.add_warehouse(w));
        self.product_attributes.into_iter().for_each(|a| catalog.add_product_attribute(a));
        self.product_attribute_mappings.into_iter().for_each(|m| catalog.add_product_attribute_mapping(m));
        self.product_attribute_values.into_iter().for_each(|v| catalog.add_product_attribute_value(v));
        self.specification_attributes.into_iter().for_each(|a| catalog.add_specification_attribute(a));
        self.specification_attribute_options
            .into_iter()
            .for_each(|o| catalog.add_specification_attribute_option(o));
        self.product_specification_attributes
            .into_iter()
            .for_each(|a| catalog.add_product_specification_attribute(a));

        self.measure_dimensions.into_iter().for_each(|d| catalog.add_measure_dimension(d));
        self.measure_weights.into_iter().for_each(|w| catalog.add_measure_weight(w));

        self.stores.into_iter().for_each(|s| catalog.add_store(s));
        self.customer_roles.into_iter().for_each(|r| catalog.add_customer_role(r));

        let plugin_finder = InMemoryPluginFinder::new();
        for plugin in self.plugins {
            if !plugin.descriptor.installed {
                plugin_finder.add_descriptor(plugin.descriptor);
                continue;
            }
            let mut instance = StaticPlugin::new(plugin.descriptor);
            for capability in plugin.capabilities {
                instance = instance.with_capability(capability);
            }
            if let Some(url) = plugin.configuration_url {
                instance = instance.with_configuration_url(url);
            }
            plugin_finder.add_plugin(Arc::new(instance));
        }

        tracing::debug!("Catalog fixture loaded");
        (Arc::new(catalog), Arc::new(plugin_finder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plugin::{LoadPluginsMode, Plugin};
    use crate::domain::product::SpecificationAttributeType;
    use crate::domain::repository::{LocalizationService, MeasureService, PluginFinder, ProductService, WorkContext};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE: &str = r#"
languages:
  - { id: 1, name: English, language_culture: en-US, display_order: 1 }
  - { id: 2, name: Deutsch, language_culture: de-DE, display_order: 2 }
working_language_id: 2
resources:
  - { name: Admin.Common.All, language_id: 2, value: Alle }
measure_dimensions:
  - { id: 1, name: "inch(es)", system_keyword: inches, ratio: 1.0, display_order: 1 }
  - { id: 2, name: "meter(s)", system_keyword: meters, ratio: 0.0254, display_order: 2 }
specification_attributes:
  - { id: 1, name: Material }
specification_attribute_options:
  - { id: 1, specification_attribute_id: 1, name: Steel }
product_specification_attributes:
  - { id: 1, product_id: 5, specification_attribute_option_id: 1, allow_filtering: true }
orders:
  - id: 1
    custom_order_number: "1001"
    order_status: Complete
    payment_status: Paid
    shipping_status: Delivered
    order_total: 25.0
    items: [{ product_id: 5 }]
    created_on_utc: "2026-05-01T10:00:00Z"
plugins:
  - system_name: Payments.Manual
    friendly_name: Manual processing
    group: Payment methods
    version: "1.00"
    plugin_folder: Payments.Manual
    installed: true
    capabilities: [PaymentMethod]
    configuration_url: Admin/PaymentManual/Configure
  - system_name: Widgets.Slider
    friendly_name: Slider
    group: Widgets
    version: "1.02"
    plugin_folder: Widgets.Slider
"#;

    #[tokio::test]
    async fn test_fixture_seeds_services() {
        let (catalog, plugin_finder) = CatalogFixture::from_yaml_str(FIXTURE).unwrap().into_services();

        assert_eq!(catalog.working_language().await.unwrap().name, "Deutsch");
        assert_eq!(
            catalog.get_resource("Admin.Common.All", 2).await.unwrap().as_deref(),
            Some("Alle")
        );
        assert_eq!(catalog.get_all_measure_dimensions().await.unwrap().len(), 2);

        let specifications = catalog.get_product_specification_attributes(5).await.unwrap();
        assert_eq!(specifications[0].attribute_type, SpecificationAttributeType::Option);
        let orders = catalog.get_orders_by_product(5).await.unwrap();
        assert_eq!(orders[0].items[0].quantity, 1);
        assert_eq!(orders[0].affiliate_id, 0);

        let installed = plugin_finder
            .get_plugin_descriptors(LoadPluginsMode::InstalledOnly, None)
            .await
            .unwrap();
        assert_eq!(installed.len(), 1);
        let instance = plugin_finder.get_plugin_instance("Payments.Manual").await.unwrap().unwrap();
        assert!(instance.is_payment_method());
        assert_eq!(
            instance.configuration_page_url().as_deref(),
            Some("Admin/PaymentManual/Configure")
        );
    }

    #[test]
    fn test_fixture_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let fixture = CatalogFixture::from_yaml_file(file.path()).unwrap();
        assert_eq!(fixture.languages.len(), 2);
        assert!(!fixture.plugins[1].descriptor.installed);
    }

    #[test]
    fn test_invalid_fixture_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"languages: 12").unwrap();

        let err = CatalogFixture::from_yaml_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog fixture"));
    }
}
