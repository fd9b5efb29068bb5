// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! In-Memory Service Ports
//!
//! Lightweight implementations of the service ports for tests, demos and the
//! CLI's fixture mode.
//!
//! # Architecture
//!
//! - **Layer:** Infrastructure
//! - **Purpose:** Serve catalog entities, translations and plugins from memory
//! - **Pattern:** Adapter (Hexagonal Architecture)
//!
//! # Available Implementations
//!
//! - **InMemoryCatalog** - every catalog, localization and settings-axis port
//!   backed by one `parking_lot::RwLock`ed state
//! - **InMemoryPluginFinder** - descriptors plus their running instances
//! - **StaticPlugin** - a plugin instance whose capability roles are fixed
//!   at construction

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::base_admin::BaseAdminModelFactory;
use crate::application::localized::LocalizedModelFactory;
use crate::domain::affiliate::{Affiliate, AffiliateFilter, AffiliatedOrderFilter, Customer, Order};
use crate::domain::attribute::{
    Attribute, AttributeValue, CustomerAttribute, CustomerAttributeValue,
    CustomerAttributes, VendorAttribute, VendorAttributeValue, VendorAttributes,
};
use crate::domain::localization::Language;
use crate::domain::measure::{MeasureDimension, MeasureWeight};
use crate::domain::plugin::{LoadPluginsMode, Plugin, PluginCapability, PluginDescriptor};
use crate::domain::product::{
    CrossSellProduct, Picture, Product, ProductAttribute, ProductAttributeMapping,
    ProductAttributeValue, ProductFilter, ProductPicture, ProductSpecificationAttribute, ProductTag,
    RelatedProduct, SpecificationAttribute, SpecificationAttributeOption, StockQuantityHistory,
    TierPrice, Warehouse,
};
use crate::domain::repository::{
    AffiliateService, AttributeService, CustomerRoleService, LanguageService, LocalizationService,
    MeasureService, PictureService, PluginFinder, ProductAttributeService, ProductService,
    ProductTagService, ServiceError, StoreService, WorkContext,
};
use crate::domain::store::{CustomerRole, Store};

/// Base URL pictures are served from when none is configured
pub const DEFAULT_MEDIA_URL: &str = "http://localhost:5000/";

#[derive(Debug, Default)]
struct CatalogState {
    languages: Vec<Language>,
    working_language_id: Option<i32>,
    /// Keyed by lowercased resource name
    resources: HashMap<(String, i32), String>,
    localized_properties: HashMap<(String, i32, String, i32), String>,

    customer_attributes: Vec<CustomerAttribute>,
    customer_attribute_values: Vec<CustomerAttributeValue>,
    vendor_attributes: Vec<VendorAttribute>,
    vendor_attribute_values: Vec<VendorAttributeValue>,

    affiliates: Vec<Affiliate>,
    orders: Vec<Order>,
    customers: Vec<Customer>,

    products: Vec<Product>,
    related_products: Vec<RelatedProduct>,
    cross_sell_products: Vec<CrossSellProduct>,
    pictures: Vec<Picture>,
    product_pictures: Vec<ProductPicture>,
    product_tags: Vec<ProductTag>,
    /// `(product_id, product_tag_id)`
    product_tag_mappings: Vec<(i32, i32)>,
    tier_prices: Vec<TierPrice>,
    stock_quantity_history: Vec<StockQuantityHistory>,
    warehouses: Vec<Warehouse>,
    product_attributes: Vec<ProductAttribute>,
    product_attribute_mappings: Vec<ProductAttributeMapping>,
    product_attribute_values: Vec<ProductAttributeValue>,
    specification_attributes: Vec<SpecificationAttribute>,
    specification_attribute_options: Vec<SpecificationAttributeOption>,
    product_specification_attributes: Vec<ProductSpecificationAttribute>,

    measure_dimensions: Vec<MeasureDimension>,
    measure_weights: Vec<MeasureWeight>,

    stores: Vec<Store>,
    customer_roles: Vec<CustomerRole>,
}

/// Thread-safe, memory-backed catalog serving every entity port.
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
    media_url: String,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::with_media_url(DEFAULT_MEDIA_URL)
    }

    /// Empty catalog serving picture URLs under `media_url`
    pub fn with_media_url(media_url: impl Into<String>) -> Self {
        let mut media_url = media_url.into();
        if !media_url.ends_with('/') {
            media_url.push('/');
        }
        Self {
            state: RwLock::new(CatalogState::default()),
            media_url,
        }
    }

    /// Catalog with a single published "English" language (id 1), which is
    /// also the working language.
    pub fn with_default_language() -> Self {
        let catalog = Self::new();
        catalog.add_language(1, "English", "en-US", 1);
        catalog.set_working_language(1);
        catalog
    }

    /// Locale composer reading languages and translations from this catalog
    pub fn localized_model_factory(self: &Arc<Self>) -> LocalizedModelFactory {
        LocalizedModelFactory::new(self.clone(), self.clone(), self.clone())
    }

    /// Shared select-list factory over this catalog and `plugin_finder`
    pub fn base_admin_model_factory(self: &Arc<Self>, plugin_finder: Arc<dyn PluginFinder>) -> BaseAdminModelFactory {
        BaseAdminModelFactory::new(
            self.localized_model_factory(),
            self.clone(),
            self.clone(),
            plugin_finder,
            self.clone(),
        )
    }

    // ========================================================================
    // Localization
    // ========================================================================

    pub fn add_language(&self, id: i32, name: &str, culture: &str, display_order: i32) {
        self.state.write().languages.push(Language {
            id,
            name: name.to_string(),
            language_culture: culture.to_string(),
            display_order,
            published: true,
        });
    }

    pub fn insert_language(&self, language: Language) {
        self.state.write().languages.push(language);
    }

    pub fn set_working_language(&self, language_id: i32) {
        self.state.write().working_language_id = Some(language_id);
    }

    pub fn set_resource(&self, name: &str, language_id: i32, value: &str) {
        self.state
            .write()
            .resources
            .insert((name.to_lowercase(), language_id), value.to_string());
    }

    pub fn set_localized_property(&self, key_group: &str, entity_id: i32, key: &str, language_id: i32, value: &str) {
        self.state.write().localized_properties.insert(
            (key_group.to_string(), entity_id, key.to_string(), language_id),
            value.to_string(),
        );
    }

    // ========================================================================
    // Custom Attributes
    // ========================================================================

    pub fn add_customer_attribute(&self, attribute: CustomerAttribute) {
        self.state.write().customer_attributes.push(attribute);
    }

    pub fn add_customer_attribute_value(&self, value: CustomerAttributeValue) {
        self.state.write().customer_attribute_values.push(value);
    }

    pub fn add_vendor_attribute(&self, attribute: VendorAttribute) {
        self.state.write().vendor_attributes.push(attribute);
    }

    pub fn add_vendor_attribute_value(&self, value: VendorAttributeValue) {
        self.state.write().vendor_attribute_values.push(value);
    }

    pub fn customer_attribute(&self, id: i32) -> Option<CustomerAttribute> {
        self.state.read().customer_attributes.iter().find(|a| a.id == id).cloned()
    }

    pub fn customer_attribute_value(&self, id: i32) -> Option<CustomerAttributeValue> {
        self.state.read().customer_attribute_values.iter().find(|v| v.id == id).cloned()
    }

    pub fn vendor_attribute(&self, id: i32) -> Option<VendorAttribute> {
        self.state.read().vendor_attributes.iter().find(|a| a.id == id).cloned()
    }

    pub fn vendor_attribute_value(&self, id: i32) -> Option<VendorAttributeValue> {
        self.state.read().vendor_attribute_values.iter().find(|v| v.id == id).cloned()
    }

    // ========================================================================
    // Affiliates
    // ========================================================================

    pub fn add_affiliate(&self, affiliate: Affiliate) {
        self.state.write().affiliates.push(affiliate);
    }

    pub fn add_order(&self, order: Order) {
        self.state.write().orders.push(order);
    }

    pub fn add_customer(&self, customer: Customer) {
        self.state.write().customers.push(customer);
    }

    pub fn affiliate(&self, id: i32) -> Option<Affiliate> {
        self.state.read().affiliates.iter().find(|a| a.id == id).cloned()
    }

    // ========================================================================
    // Products
    // ========================================================================

    pub fn add_product(&self, product: Product) {
        self.state.write().products.push(product);
    }

    pub fn add_related_product(&self, related: RelatedProduct) {
        self.state.write().related_products.push(related);
    }

    pub fn add_cross_sell_product(&self, cross_sell: CrossSellProduct) {
        self.state.write().cross_sell_products.push(cross_sell);
    }

    pub fn add_picture(&self, picture: Picture) {
        self.state.write().pictures.push(picture);
    }

    pub fn add_product_picture(&self, product_picture: ProductPicture) {
        self.state.write().product_pictures.push(product_picture);
    }

    pub fn add_product_tag(&self, tag: ProductTag) {
        self.state.write().product_tags.push(tag);
    }

    /// Attach tag `product_tag_id` to product `product_id`
    pub fn tag_product(&self, product_id: i32, product_tag_id: i32) {
        let mut state = self.state.write();
        if !state.product_tag_mappings.contains(&(product_id, product_tag_id)) {
            state.product_tag_mappings.push((product_id, product_tag_id));
        }
    }

    pub fn add_tier_price(&self, tier_price: TierPrice) {
        self.state.write().tier_prices.push(tier_price);
    }

    pub fn add_stock_quantity_history(&self, entry: StockQuantityHistory) {
        self.state.write().stock_quantity_history.push(entry);
    }

    pub fn add_warehouse(&self, warehouse: Warehouse) {
        self.state.write().warehouses.push(warehouse);
    }

    pub fn add_product_attribute(&self, attribute: ProductAttribute) {
        self.state.write().product_attributes.push(attribute);
    }

    pub fn add_product_attribute_mapping(&self, mapping: ProductAttributeMapping) {
        self.state.write().product_attribute_mappings.push(mapping);
    }

    pub fn add_product_attribute_value(&self, value: ProductAttributeValue) {
        self.state.write().product_attribute_values.push(value);
    }

    pub fn add_specification_attribute(&self, attribute: SpecificationAttribute) {
        self.state.write().specification_attributes.push(attribute);
    }

    pub fn add_specification_attribute_option(&self, option: SpecificationAttributeOption) {
        self.state.write().specification_attribute_options.push(option);
    }

    pub fn add_product_specification_attribute(&self, attribute: ProductSpecificationAttribute) {
        self.state.write().product_specification_attributes.push(attribute);
    }

    pub fn product(&self, id: i32) -> Option<Product> {
        self.state.read().products.iter().find(|p| p.id == id).cloned()
    }

    pub fn product_tag(&self, id: i32) -> Option<ProductTag> {
        self.state.read().product_tags.iter().find(|t| t.id == id).cloned()
    }

    pub fn tier_price(&self, id: i32) -> Option<TierPrice> {
        self.state.read().tier_prices.iter().find(|t| t.id == id).cloned()
    }

    pub fn product_attribute_mapping(&self, id: i32) -> Option<ProductAttributeMapping> {
        self.state
            .read()
            .product_attribute_mappings
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    pub fn product_attribute_value(&self, id: i32) -> Option<ProductAttributeValue> {
        self.state
            .read()
            .product_attribute_values
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    // ========================================================================
    // Measures, Stores, Customer Roles
    // ========================================================================

    pub fn add_measure_dimension(&self, dimension: MeasureDimension) {
        self.state.write().measure_dimensions.push(dimension);
    }

    pub fn add_measure_weight(&self, weight: MeasureWeight) {
        self.state.write().measure_weights.push(weight);
    }

    pub fn add_store(&self, store: Store) {
        self.state.write().stores.push(store);
    }

    pub fn add_customer_role(&self, role: CustomerRole) {
        self.state.write().customer_roles.push(role);
    }

    fn picture_file_extension(mime_type: &str) -> &str {
        match mime_type.rsplit('/').next() {
            Some("jpeg") | Some("pjpeg") => "jpeg",
            Some("") | None => "jpeg",
            Some(other) => other,
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl LanguageService for InMemoryCatalog {
    async fn get_all_languages(&self, show_hidden: bool) -> Result<Vec<Language>, ServiceError> {
        let state = self.state.read();
        let mut languages: Vec<Language> = state
            .languages
            .iter()
            .filter(|language| show_hidden || language.published)
            .cloned()
            .collect();
        languages.sort_by_key(|language| (language.display_order, language.id));
        Ok(languages)
    }
}

#[async_trait]
impl LocalizationService for InMemoryCatalog {
    async fn get_resource(&self, name: &str, language_id: i32) -> Result<Option<String>, ServiceError> {
        let state = self.state.read();
        Ok(state.resources.get(&(name.to_lowercase(), language_id)).cloned())
    }

    async fn get_localized_property(
        &self,
        key_group: &str,
        entity_id: i32,
        key: &str,
        language_id: i32,
    ) -> Result<Option<String>, ServiceError> {
        let state = self.state.read();
        Ok(state
            .localized_properties
            .get(&(key_group.to_string(), entity_id, key.to_string(), language_id))
            .cloned())
    }
}

#[async_trait]
impl WorkContext for InMemoryCatalog {
    async fn working_language(&self) -> Result<Language, ServiceError> {
        let state = self.state.read();
        let selected = state
            .working_language_id
            .and_then(|id| state.languages.iter().find(|language| language.id == id));

        selected
            .or_else(|| {
                state
                    .languages
                    .iter()
                    .filter(|language| language.published)
                    .min_by_key(|language| (language.display_order, language.id))
            })
            .cloned()
            .ok_or_else(|| ServiceError::NotFound("working language".to_string()))
    }
}

/// Implements `AttributeService<$kind>` over the `$attributes` / `$values`
/// state tables.
macro_rules! impl_attribute_service {
    ($kind:ty, $attributes:ident, $values:ident) => {
        #[async_trait]
        impl AttributeService<$kind> for InMemoryCatalog {
            async fn get_all_attributes(&self) -> Result<Vec<Attribute<$kind>>, ServiceError> {
                let state = self.state.read();
                let mut attributes = state.$attributes.clone();
                attributes.sort_by_key(|attribute| (attribute.display_order, attribute.id));
                Ok(attributes)
            }

            async fn get_attribute_by_id(&self, id: i32) -> Result<Option<Attribute<$kind>>, ServiceError> {
                let state = self.state.read();
                Ok(state.$attributes.iter().find(|attribute| attribute.id == id).cloned())
            }

            async fn get_attribute_values(
                &self,
                attribute_id: i32,
            ) -> Result<Vec<AttributeValue<$kind>>, ServiceError> {
                let state = self.state.read();
                let mut values: Vec<AttributeValue<$kind>> = state
                    .$values
                    .iter()
                    .filter(|value| value.attribute_id == attribute_id)
                    .cloned()
                    .collect();
                values.sort_by_key(|value| (value.display_order, value.id));
                Ok(values)
            }

            async fn get_attribute_value_by_id(
                &self,
                id: i32,
            ) -> Result<Option<AttributeValue<$kind>>, ServiceError> {
                let state = self.state.read();
                Ok(state.$values.iter().find(|value| value.id == id).cloned())
            }
        }
    };
}

impl_attribute_service!(CustomerAttributes, customer_attributes, customer_attribute_values);
impl_attribute_service!(VendorAttributes, vendor_attributes, vendor_attribute_values);

#[async_trait]
impl AffiliateService for InMemoryCatalog {
    async fn get_all_affiliates(&self, filter: &AffiliateFilter) -> Result<Vec<Affiliate>, ServiceError> {
        let state = self.state.read();
        let order_filter = AffiliatedOrderFilter {
            created_from_utc: filter.orders_created_from_utc,
            created_to_utc: filter.orders_created_to_utc,
            ..Default::default()
        };

        let mut affiliates: Vec<Affiliate> = state
            .affiliates
            .iter()
            .filter(|affiliate| !affiliate.deleted && (filter.show_hidden || affiliate.active))
            .filter(|affiliate| contains_ignore_case(&affiliate.friendly_url_name, &filter.friendly_url_name))
            .filter(|affiliate| contains_ignore_case(&affiliate.address.first_name, &filter.first_name))
            .filter(|affiliate| contains_ignore_case(&affiliate.address.last_name, &filter.last_name))
            .filter(|affiliate| {
                !filter.load_only_with_orders
                    || state
                        .orders
                        .iter()
                        .any(|order| order.affiliate_id == affiliate.id && order_filter.matches(order))
            })
            .cloned()
            .collect();
        affiliates.sort_by_key(|affiliate| affiliate.id);
        Ok(affiliates)
    }

    async fn get_affiliate_by_id(&self, id: i32) -> Result<Option<Affiliate>, ServiceError> {
        Ok(self.affiliate(id))
    }

    async fn get_affiliated_orders(
        &self,
        affiliate_id: i32,
        filter: &AffiliatedOrderFilter,
    ) -> Result<Vec<Order>, ServiceError> {
        let state = self.state.read();
        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|order| order.affiliate_id == affiliate_id && filter.matches(order))
            .cloned()
            .collect();
        orders.sort_by(|left, right| {
            right
                .created_on_utc
                .cmp(&left.created_on_utc)
                .then(right.id.cmp(&left.id))
        });
        Ok(orders)
    }

    async fn get_affiliated_customers(&self, affiliate_id: i32) -> Result<Vec<Customer>, ServiceError> {
        let state = self.state.read();
        let mut customers: Vec<Customer> = state
            .customers
            .iter()
            .filter(|customer| customer.affiliate_id == affiliate_id)
            .cloned()
            .collect();
        customers.sort_by(|left, right| right.created_on_utc.cmp(&left.created_on_utc));
        Ok(customers)
    }
}

#[async_trait]
impl ProductService for InMemoryCatalog {
    async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError> {
        let state = self.state.read();
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect();
        products.sort_by(|left, right| {
            left.display_order
                .cmp(&right.display_order)
                .then_with(|| left.name.cmp(&right.name))
        });
        Ok(products)
    }

    async fn get_product_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
        Ok(self.product(id))
    }

    async fn get_associated_products(&self, parent_grouped_product_id: i32) -> Result<Vec<Product>, ServiceError> {
        let state = self.state.read();
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|product| !product.deleted && product.parent_grouped_product_id == parent_grouped_product_id)
            .cloned()
            .collect();
        products.sort_by_key(|product| (product.display_order, product.id));
        Ok(products)
    }

    async fn get_related_products(&self, product_id: i32) -> Result<Vec<RelatedProduct>, ServiceError> {
        let state = self.state.read();
        let mut related: Vec<RelatedProduct> = state
            .related_products
            .iter()
            .filter(|related| related.product_id1 == product_id)
            .cloned()
            .collect();
        related.sort_by_key(|related| (related.display_order, related.id));
        Ok(related)
    }

    async fn get_cross_sell_products(&self, product_id: i32) -> Result<Vec<CrossSellProduct>, ServiceError> {
        let state = self.state.read();
        Ok(state
            .cross_sell_products
            .iter()
            .filter(|cross_sell| cross_sell.product_id1 == product_id)
            .cloned()
            .collect())
    }

    async fn get_product_pictures(&self, product_id: i32) -> Result<Vec<ProductPicture>, ServiceError> {
        let state = self.state.read();
        let mut pictures: Vec<ProductPicture> = state
            .product_pictures
            .iter()
            .filter(|picture| picture.product_id == product_id)
            .cloned()
            .collect();
        pictures.sort_by_key(|picture| (picture.display_order, picture.id));
        Ok(pictures)
    }

    async fn get_tier_prices(&self, product_id: i32) -> Result<Vec<TierPrice>, ServiceError> {
        let state = self.state.read();
        let mut tier_prices: Vec<TierPrice> = state
            .tier_prices
            .iter()
            .filter(|tier_price| tier_price.product_id == product_id)
            .cloned()
            .collect();
        tier_prices.sort_by_key(|tier_price| (tier_price.quantity, tier_price.store_id, tier_price.id));
        Ok(tier_prices)
    }

    async fn get_low_stock_products(&self, published: Option<bool>) -> Result<Vec<Product>, ServiceError> {
        let state = self.state.read();
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|product| !product.deleted && product.is_low_stock())
            .filter(|product| published.is_none_or(|published| product.published == published))
            .cloned()
            .collect();
        products.sort_by_key(|product| product.id);
        Ok(products)
    }

    async fn get_stock_quantity_history(
        &self,
        product_id: i32,
        warehouse_id: Option<i32>,
    ) -> Result<Vec<StockQuantityHistory>, ServiceError> {
        let state = self.state.read();
        let mut history: Vec<StockQuantityHistory> = state
            .stock_quantity_history
            .iter()
            .filter(|entry| entry.product_id == product_id)
            .filter(|entry| warehouse_id.is_none_or(|id| entry.warehouse_id == Some(id)))
            .cloned()
            .collect();
        history.sort_by(|left, right| {
            right
                .created_on_utc
                .cmp(&left.created_on_utc)
                .then(right.id.cmp(&left.id))
        });
        Ok(history)
    }

    async fn get_all_warehouses(&self) -> Result<Vec<Warehouse>, ServiceError> {
        let state = self.state.read();
        let mut warehouses = state.warehouses.clone();
        warehouses.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(warehouses)
    }

    async fn get_orders_by_product(&self, product_id: i32) -> Result<Vec<Order>, ServiceError> {
        let state = self.state.read();
        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|order| order.contains_product(product_id))
            .cloned()
            .collect();
        orders.sort_by(|left, right| {
            right
                .created_on_utc
                .cmp(&left.created_on_utc)
                .then(right.id.cmp(&left.id))
        });
        Ok(orders)
    }

    async fn get_product_specification_attributes(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductSpecificationAttribute>, ServiceError> {
        let state = self.state.read();
        let mut attributes: Vec<ProductSpecificationAttribute> = state
            .product_specification_attributes
            .iter()
            .filter(|attribute| attribute.product_id == product_id)
            .cloned()
            .collect();
        attributes.sort_by_key(|attribute| (attribute.display_order, attribute.id));
        Ok(attributes)
    }

    async fn get_specification_attribute_by_id(
        &self,
        id: i32,
    ) -> Result<Option<SpecificationAttribute>, ServiceError> {
        let state = self.state.read();
        Ok(state.specification_attributes.iter().find(|a| a.id == id).cloned())
    }

    async fn get_specification_attribute_option_by_id(
        &self,
        id: i32,
    ) -> Result<Option<SpecificationAttributeOption>, ServiceError> {
        let state = self.state.read();
        Ok(state.specification_attribute_options.iter().find(|o| o.id == id).cloned())
    }
}

#[async_trait]
impl ProductTagService for InMemoryCatalog {
    async fn get_all_product_tags(&self, name: &str) -> Result<Vec<ProductTag>, ServiceError> {
        let state = self.state.read();
        let mut tags: Vec<ProductTag> = state
            .product_tags
            .iter()
            .filter(|tag| contains_ignore_case(&tag.name, name))
            .cloned()
            .collect();
        tags.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(tags)
    }

    async fn get_product_tag_by_id(&self, id: i32) -> Result<Option<ProductTag>, ServiceError> {
        Ok(self.product_tag(id))
    }

    async fn get_product_count(&self, product_tag_id: i32) -> Result<usize, ServiceError> {
        let state = self.state.read();
        Ok(state
            .product_tag_mappings
            .iter()
            .filter(|(_, tag_id)| *tag_id == product_tag_id)
            .filter(|(product_id, _)| {
                state
                    .products
                    .iter()
                    .any(|product| product.id == *product_id && !product.deleted)
            })
            .count())
    }
}

#[async_trait]
impl ProductAttributeService for InMemoryCatalog {
    async fn get_all_product_attributes(&self) -> Result<Vec<ProductAttribute>, ServiceError> {
        let state = self.state.read();
        let mut attributes = state.product_attributes.clone();
        attributes.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(attributes)
    }

    async fn get_product_attribute_by_id(&self, id: i32) -> Result<Option<ProductAttribute>, ServiceError> {
        let state = self.state.read();
        Ok(state.product_attributes.iter().find(|attribute| attribute.id == id).cloned())
    }

    async fn get_product_attribute_mappings(&self, product_id: i32) -> Result<Vec<ProductAttributeMapping>, ServiceError> {
        let state = self.state.read();
        let mut mappings: Vec<ProductAttributeMapping> = state
            .product_attribute_mappings
            .iter()
            .filter(|mapping| mapping.product_id == product_id)
            .cloned()
            .collect();
        mappings.sort_by_key(|mapping| (mapping.display_order, mapping.id));
        Ok(mappings)
    }

    async fn get_product_attribute_values(
        &self,
        product_attribute_mapping_id: i32,
    ) -> Result<Vec<ProductAttributeValue>, ServiceError> {
        let state = self.state.read();
        let mut values: Vec<ProductAttributeValue> = state
            .product_attribute_values
            .iter()
            .filter(|value| value.product_attribute_mapping_id == product_attribute_mapping_id)
            .cloned()
            .collect();
        values.sort_by_key(|value| (value.display_order, value.id));
        Ok(values)
    }
}

#[async_trait]
impl PictureService for InMemoryCatalog {
    async fn get_picture_by_id(&self, id: i32) -> Result<Option<Picture>, ServiceError> {
        let state = self.state.read();
        Ok(state.pictures.iter().find(|picture| picture.id == id).cloned())
    }

    async fn get_picture_url(&self, picture: Option<&Picture>, target_size: u32) -> Result<String, ServiceError> {
        let size_suffix = if target_size == 0 {
            String::new()
        } else {
            format!("_{}", target_size)
        };

        let Some(picture) = picture else {
            return Ok(format!("{}images/thumbs/default-image{}.png", self.media_url, size_suffix));
        };

        let seo_suffix = if picture.seo_filename.is_empty() {
            String::new()
        } else {
            format!("_{}", picture.seo_filename)
        };
        Ok(format!(
            "{}images/thumbs/{:07}{}{}.{}",
            self.media_url,
            picture.id,
            seo_suffix,
            size_suffix,
            Self::picture_file_extension(&picture.mime_type)
        ))
    }
}

#[async_trait]
impl MeasureService for InMemoryCatalog {
    async fn get_all_measure_dimensions(&self) -> Result<Vec<MeasureDimension>, ServiceError> {
        let state = self.state.read();
        let mut dimensions = state.measure_dimensions.clone();
        dimensions.sort_by_key(|dimension| (dimension.display_order, dimension.id));
        Ok(dimensions)
    }

    async fn get_all_measure_weights(&self) -> Result<Vec<MeasureWeight>, ServiceError> {
        let state = self.state.read();
        let mut weights = state.measure_weights.clone();
        weights.sort_by_key(|weight| (weight.display_order, weight.id));
        Ok(weights)
    }
}

#[async_trait]
impl StoreService for InMemoryCatalog {
    async fn get_all_stores(&self) -> Result<Vec<Store>, ServiceError> {
        let state = self.state.read();
        let mut stores = state.stores.clone();
        stores.sort_by_key(|store| (store.display_order, store.id));
        Ok(stores)
    }
}

#[async_trait]
impl CustomerRoleService for InMemoryCatalog {
    async fn get_all_customer_roles(&self, show_hidden: bool) -> Result<Vec<CustomerRole>, ServiceError> {
        let state = self.state.read();
        let mut roles: Vec<CustomerRole> = state
            .customer_roles
            .iter()
            .filter(|role| show_hidden || role.active)
            .cloned()
            .collect();
        roles.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(roles)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Plugin instance whose capability roles are fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticPlugin {
    descriptor: PluginDescriptor,
    capabilities: Vec<PluginCapability>,
    configuration_url: Option<String>,
}

impl StaticPlugin {
    pub fn new(descriptor: PluginDescriptor) -> Self {
        Self {
            descriptor,
            capabilities: Vec::new(),
            configuration_url: None,
        }
    }

    pub fn with_capability(mut self, capability: PluginCapability) -> Self {
        if capability != PluginCapability::Unmanaged && !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    pub fn with_configuration_url(mut self, url: impl Into<String>) -> Self {
        self.configuration_url = Some(url.into());
        self
    }

    fn fills(&self, capability: PluginCapability) -> bool {
        self.capabilities.contains(&capability)
    }
}

impl Plugin for StaticPlugin {
    fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    fn configuration_page_url(&self) -> Option<String> {
        self.configuration_url.clone()
    }

    fn is_payment_method(&self) -> bool {
        self.fills(PluginCapability::PaymentMethod)
    }

    fn is_shipping_rate_computation_method(&self) -> bool {
        self.fills(PluginCapability::ShippingRateComputationMethod)
    }

    fn is_pickup_point_provider(&self) -> bool {
        self.fills(PluginCapability::PickupPointProvider)
    }

    fn is_tax_provider(&self) -> bool {
        self.fills(PluginCapability::TaxProvider)
    }

    fn is_external_authentication_method(&self) -> bool {
        self.fills(PluginCapability::ExternalAuthenticationMethod)
    }

    fn is_widget(&self) -> bool {
        self.fills(PluginCapability::Widget)
    }
}

struct PluginEntry {
    descriptor: PluginDescriptor,
    instance: Option<Arc<dyn Plugin>>,
}

/// Plugin finder over a fixed set of descriptors.
///
/// Instances are only handed out for descriptors marked installed.
#[derive(Default)]
pub struct InMemoryPluginFinder {
    plugins: RwLock<Vec<PluginEntry>>,
}

impl InMemoryPluginFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor without a running instance
    pub fn add_descriptor(&self, descriptor: PluginDescriptor) {
        self.plugins.write().push(PluginEntry {
            descriptor,
            instance: None,
        });
    }

    /// Register a plugin instance under its own descriptor
    pub fn add_plugin(&self, plugin: Arc<dyn Plugin>) {
        self.plugins.write().push(PluginEntry {
            descriptor: plugin.descriptor().clone(),
            instance: Some(plugin),
        });
    }

    pub fn descriptor(&self, system_name: &str) -> Option<PluginDescriptor> {
        self.plugins
            .read()
            .iter()
            .find(|entry| entry.descriptor.system_name.eq_ignore_ascii_case(system_name))
            .map(|entry| entry.descriptor.clone())
    }
}

#[async_trait]
impl PluginFinder for InMemoryPluginFinder {
    async fn get_plugin_descriptors(
        &self,
        load_mode: LoadPluginsMode,
        group: Option<&str>,
    ) -> Result<Vec<PluginDescriptor>, ServiceError> {
        let plugins = self.plugins.read();
        let mut descriptors: Vec<PluginDescriptor> = plugins
            .iter()
            .map(|entry| &entry.descriptor)
            .filter(|descriptor| load_mode.includes(descriptor.installed))
            .filter(|descriptor| group.is_none_or(|group| descriptor.group.eq_ignore_ascii_case(group)))
            .cloned()
            .collect();
        descriptors.sort_by(|left, right| {
            left.display_order
                .cmp(&right.display_order)
                .then_with(|| left.friendly_name.cmp(&right.friendly_name))
        });
        Ok(descriptors)
    }

    async fn get_plugin_groups(&self) -> Result<Vec<String>, ServiceError> {
        let plugins = self.plugins.read();
        let mut groups: Vec<String> = plugins.iter().map(|entry| entry.descriptor.group.clone()).collect();
        groups.sort();
        groups.dedup();
        Ok(groups)
    }

    async fn get_plugin_instance(&self, system_name: &str) -> Result<Option<Arc<dyn Plugin>>, ServiceError> {
        let plugins = self.plugins.read();
        Ok(plugins
            .iter()
            .find(|entry| entry.descriptor.installed && entry.descriptor.system_name.eq_ignore_ascii_case(system_name))
            .and_then(|entry| entry.instance.clone()))
    }
}
