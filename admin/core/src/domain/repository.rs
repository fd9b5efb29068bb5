// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Service Ports
//!
//! Read-only contracts the model factories are injected with. Persistence,
//! localization storage and the remote plugin catalog live behind these
//! traits; implementations are in `crate::infrastructure`.
//!
//! | Trait | Serves | Implementations |
//! |-------|--------|----------------|
//! | `LanguageService` | display languages | `InMemoryCatalog` |
//! | `LocalizationService` | string resources, localized properties | `InMemoryCatalog` |
//! | `WorkContext` | working language of the current admin | `InMemoryCatalog` |
//! | `AttributeService<K>` | customer / vendor attributes | `InMemoryCatalog` |
//! | `AffiliateService` | affiliates, affiliated orders and customers | `InMemoryCatalog` |
//! | `ProductService` | products, their satellite records and orders | `InMemoryCatalog` |
//! | `ProductTagService` | product tags | `InMemoryCatalog` |
//! | `ProductAttributeService` | attribute mappings and values | `InMemoryCatalog` |
//! | `PictureService` | pictures and their public URLs | `InMemoryCatalog` |
//! | `MeasureService` | dimensions and weights | `InMemoryCatalog` |
//! | `StoreService`, `CustomerRoleService` | ACL and store-mapping axes | `InMemoryCatalog` |
//! | `PluginFinder` | plugin descriptors and instances | `InMemoryPluginFinder` |
//! | `OfficialFeedClient` | remote plugin catalog | `HttpOfficialFeedClient` |

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::affiliate::{Affiliate, AffiliateFilter, AffiliatedOrderFilter, Customer, Order};
use crate::domain::attribute::{Attribute, AttributeKind, AttributeValue};
use crate::domain::localization::Language;
use crate::domain::measure::{MeasureDimension, MeasureWeight};
use crate::domain::official_feed::{
    OfficialFeedCategory, OfficialFeedPluginPage, OfficialFeedQuery, OfficialFeedVersion,
};
use crate::domain::plugin::{LoadPluginsMode, Plugin, PluginDescriptor};
use crate::domain::product::{
    CrossSellProduct, Picture, Product, ProductAttribute, ProductAttributeMapping,
    ProductAttributeValue, ProductFilter, ProductPicture, ProductSpecificationAttribute, ProductTag,
    RelatedProduct, SpecificationAttribute, SpecificationAttributeOption, StockQuantityHistory,
    TierPrice, Warehouse,
};
use crate::domain::store::{CustomerRole, Store};

#[async_trait]
pub trait LanguageService: Send + Sync {
    /// Languages ordered by display order then id; hidden (unpublished)
    /// languages only when `show_hidden`
    async fn get_all_languages(&self, show_hidden: bool) -> Result<Vec<Language>, ServiceError>;
}

#[async_trait]
pub trait LocalizationService: Send + Sync {
    /// String resource `name` in `language_id`, if translated
    async fn get_resource(&self, name: &str, language_id: i32) -> Result<Option<String>, ServiceError>;

    /// Stored translation of one entity field, if any
    async fn get_localized_property(
        &self,
        key_group: &str,
        entity_id: i32,
        key: &str,
        language_id: i32,
    ) -> Result<Option<String>, ServiceError>;
}

#[async_trait]
pub trait WorkContext: Send + Sync {
    /// Language the current administrator works in
    async fn working_language(&self) -> Result<Language, ServiceError>;
}

#[async_trait]
pub trait AttributeService<K: AttributeKind>: Send + Sync {
    /// All attributes ordered by display order
    async fn get_all_attributes(&self) -> Result<Vec<Attribute<K>>, ServiceError>;

    async fn get_attribute_by_id(&self, id: i32) -> Result<Option<Attribute<K>>, ServiceError>;

    /// Values of one attribute ordered by display order
    async fn get_attribute_values(
        &self,
        attribute_id: i32,
    ) -> Result<Vec<AttributeValue<K>>, ServiceError>;

    async fn get_attribute_value_by_id(
        &self,
        id: i32,
    ) -> Result<Option<AttributeValue<K>>, ServiceError>;
}

#[async_trait]
pub trait AffiliateService: Send + Sync {
    async fn get_all_affiliates(&self, filter: &AffiliateFilter) -> Result<Vec<Affiliate>, ServiceError>;

    async fn get_affiliate_by_id(&self, id: i32) -> Result<Option<Affiliate>, ServiceError>;

    /// Orders attributed to the affiliate, newest first
    async fn get_affiliated_orders(
        &self,
        affiliate_id: i32,
        filter: &AffiliatedOrderFilter,
    ) -> Result<Vec<Order>, ServiceError>;

    async fn get_affiliated_customers(&self, affiliate_id: i32) -> Result<Vec<Customer>, ServiceError>;
}

#[async_trait]
pub trait ProductService: Send + Sync {
    /// Products matching `filter`, ordered by display order then name
    async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError>;

    async fn get_product_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError>;

    /// Children of a grouped product
    async fn get_associated_products(&self, parent_grouped_product_id: i32) -> Result<Vec<Product>, ServiceError>;

    async fn get_related_products(&self, product_id: i32) -> Result<Vec<RelatedProduct>, ServiceError>;

    async fn get_cross_sell_products(&self, product_id: i32) -> Result<Vec<CrossSellProduct>, ServiceError>;

    async fn get_product_pictures(&self, product_id: i32) -> Result<Vec<ProductPicture>, ServiceError>;

    async fn get_tier_prices(&self, product_id: i32) -> Result<Vec<TierPrice>, ServiceError>;

    /// Products with tracked stock below their minimum
    async fn get_low_stock_products(&self, published: Option<bool>) -> Result<Vec<Product>, ServiceError>;

    /// Stock changes of a product, newest first
    async fn get_stock_quantity_history(
        &self,
        product_id: i32,
        warehouse_id: Option<i32>,
    ) -> Result<Vec<StockQuantityHistory>, ServiceError>;

    async fn get_all_warehouses(&self) -> Result<Vec<Warehouse>, ServiceError>;

    /// Orders with at least one line of the product, newest first
    async fn get_orders_by_product(&self, product_id: i32) -> Result<Vec<Order>, ServiceError>;

    /// Specification options assigned to the product, by display order
    async fn get_product_specification_attributes(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductSpecificationAttribute>, ServiceError>;

    async fn get_specification_attribute_by_id(&self, id: i32)
        -> Result<Option<SpecificationAttribute>, ServiceError>;

    async fn get_specification_attribute_option_by_id(
        &self,
        id: i32,
    ) -> Result<Option<SpecificationAttributeOption>, ServiceError>;
}

#[async_trait]
pub trait ProductTagService: Send + Sync {
    /// Tags whose name contains `name` (case-insensitive); all when empty
    async fn get_all_product_tags(&self, name: &str) -> Result<Vec<ProductTag>, ServiceError>;

    async fn get_product_tag_by_id(&self, id: i32) -> Result<Option<ProductTag>, ServiceError>;

    /// Number of products carrying the tag
    async fn get_product_count(&self, product_tag_id: i32) -> Result<usize, ServiceError>;
}

#[async_trait]
pub trait ProductAttributeService: Send + Sync {
    async fn get_all_product_attributes(&self) -> Result<Vec<ProductAttribute>, ServiceError>;

    async fn get_product_attribute_by_id(&self, id: i32) -> Result<Option<ProductAttribute>, ServiceError>;

    async fn get_product_attribute_mappings(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductAttributeMapping>, ServiceError>;

    async fn get_product_attribute_values(
        &self,
        product_attribute_mapping_id: i32,
    ) -> Result<Vec<ProductAttributeValue>, ServiceError>;
}

#[async_trait]
pub trait PictureService: Send + Sync {
    async fn get_picture_by_id(&self, id: i32) -> Result<Option<Picture>, ServiceError>;

    /// Public URL of the picture scaled to `target_size` pixels (0 keeps the
    /// original size); the placeholder image URL when `picture` is `None`
    async fn get_picture_url(&self, picture: Option<&Picture>, target_size: u32) -> Result<String, ServiceError>;
}

#[async_trait]
pub trait MeasureService: Send + Sync {
    async fn get_all_measure_dimensions(&self) -> Result<Vec<MeasureDimension>, ServiceError>;

    async fn get_all_measure_weights(&self) -> Result<Vec<MeasureWeight>, ServiceError>;
}

#[async_trait]
pub trait StoreService: Send + Sync {
    async fn get_all_stores(&self) -> Result<Vec<Store>, ServiceError>;
}

#[async_trait]
pub trait CustomerRoleService: Send + Sync {
    async fn get_all_customer_roles(&self, show_hidden: bool) -> Result<Vec<CustomerRole>, ServiceError>;
}

#[async_trait]
pub trait PluginFinder: Send + Sync {
    /// Descriptors selected by install state and, when `group` is `Some`,
    /// by group name (case-insensitive)
    async fn get_plugin_descriptors(
        &self,
        load_mode: LoadPluginsMode,
        group: Option<&str>,
    ) -> Result<Vec<PluginDescriptor>, ServiceError>;

    /// Distinct group names in alphabetical order
    async fn get_plugin_groups(&self) -> Result<Vec<String>, ServiceError>;

    /// Running instance of an installed plugin
    async fn get_plugin_instance(&self, system_name: &str) -> Result<Option<Arc<dyn Plugin>>, ServiceError>;
}

#[async_trait]
pub trait OfficialFeedClient: Send + Sync {
    async fn get_categories(&self) -> Result<Vec<OfficialFeedCategory>, ServiceError>;

    async fn get_versions(&self) -> Result<Vec<OfficialFeedVersion>, ServiceError>;

    async fn get_all_plugins(&self, query: &OfficialFeedQuery) -> Result<OfficialFeedPluginPage, ServiceError>;
}

/// Failure of an injected service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Remote catalog error: {0}")]
    Remote(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Serialization(err.to_string())
        } else {
            ServiceError::Remote(err.to_string())
        }
    }
}
