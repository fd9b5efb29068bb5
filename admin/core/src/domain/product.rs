// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Catalog Products
//!
//! The product aggregate and the satellite records the administration area
//! edits on the product page: associations, pictures, tags, tier prices,
//! stock history, specification attributes and attribute mappings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::attribute::AttributeControlType;
use crate::domain::localization::{LocalizedEntity, LocalizedEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[default]
    SimpleProduct = 5,
    GroupedProduct = 10,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [Self::SimpleProduct, Self::GroupedProduct];
}

impl LocalizedEnum for ProductType {
    const TYPE_NAME: &'static str = "ProductType";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::SimpleProduct => "SimpleProduct",
            Self::GroupedProduct => "GroupedProduct",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManageInventoryMethod {
    #[default]
    DontManageStock = 0,
    ManageStock = 1,
    ManageStockByAttributes = 2,
}

impl LocalizedEnum for ManageInventoryMethod {
    const TYPE_NAME: &'static str = "ManageInventoryMethod";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::DontManageStock => "DontManageStock",
            Self::ManageStock => "ManageStock",
            Self::ManageStockByAttributes => "ManageStockByAttributes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i32,
    pub product_type: ProductType,
    /// Owning grouped product, 0 when standalone
    pub parent_grouped_product_id: i32,
    pub visible_individually: bool,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub admin_comment: String,
    pub meta_keywords: String,
    pub meta_description: String,
    pub meta_title: String,
    pub sku: String,
    pub vendor_id: i32,
    pub published: bool,
    pub deleted: bool,
    pub price: f64,
    pub old_price: f64,
    pub product_cost: f64,
    pub manage_inventory_method: ManageInventoryMethod,
    pub stock_quantity: i32,
    pub min_stock_quantity: i32,
    pub display_order: i32,
    pub created_on_utc: Option<DateTime<Utc>>,
    pub updated_on_utc: Option<DateTime<Utc>>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: 0,
            product_type: ProductType::SimpleProduct,
            parent_grouped_product_id: 0,
            visible_individually: true,
            name: String::new(),
            short_description: String::new(),
            full_description: String::new(),
            admin_comment: String::new(),
            meta_keywords: String::new(),
            meta_description: String::new(),
            meta_title: String::new(),
            sku: String::new(),
            vendor_id: 0,
            published: true,
            deleted: false,
            price: 0.0,
            old_price: 0.0,
            product_cost: 0.0,
            manage_inventory_method: ManageInventoryMethod::DontManageStock,
            stock_quantity: 0,
            min_stock_quantity: 0,
            display_order: 0,
            created_on_utc: None,
            updated_on_utc: None,
        }
    }
}

impl Product {
    /// Whether tracked stock fell below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.manage_inventory_method == ManageInventoryMethod::ManageStock
            && self.stock_quantity < self.min_stock_quantity
    }
}

impl LocalizedEntity for Product {
    fn key_group(&self) -> &'static str {
        "Product"
    }

    fn entity_id(&self) -> i32 {
        self.id
    }
}

/// Criteria for the product grid; `None`/empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub keywords: String,
    pub product_type: Option<ProductType>,
    pub published: Option<bool>,
    pub vendor_id: Option<i32>,
    pub ids: Vec<i32>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let keywords = self.keywords.trim().to_lowercase();
        !product.deleted
            && (keywords.is_empty()
                || product.name.to_lowercase().contains(&keywords)
                || product.sku.to_lowercase() == keywords)
            && self.product_type.is_none_or(|kind| product.product_type == kind)
            && self.published.is_none_or(|published| product.published == published)
            && self.vendor_id.is_none_or(|vendor_id| product.vendor_id == vendor_id)
            && (self.ids.is_empty() || self.ids.contains(&product.id))
    }
}

/// Directed "customers also looked at" association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedProduct {
    pub id: i32,
    pub product_id1: i32,
    pub product_id2: i32,
    #[serde(default)]
    pub display_order: i32,
}

/// Directed cart cross-sell association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSellProduct {
    pub id: i32,
    pub product_id1: i32,
    pub product_id2: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub id: i32,
    pub mime_type: String,
    #[serde(default)]
    pub seo_filename: String,
    #[serde(default)]
    pub alt_attribute: String,
    #[serde(default)]
    pub title_attribute: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPicture {
    pub id: i32,
    pub product_id: i32,
    pub picture_id: i32,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTag {
    pub id: i32,
    pub name: String,
}

impl LocalizedEntity for ProductTag {
    fn key_group(&self) -> &'static str {
        "ProductTag"
    }

    fn entity_id(&self) -> i32 {
        self.id
    }
}

/// Quantity break price, optionally limited to a store and a customer role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPrice {
    pub id: i32,
    pub product_id: i32,
    /// 0 means all stores
    #[serde(default)]
    pub store_id: i32,
    #[serde(default)]
    pub customer_role_id: Option<i32>,
    pub quantity: i32,
    pub price: f64,
    #[serde(default)]
    pub start_date_time_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date_time_utc: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuantityHistory {
    pub id: i32,
    pub product_id: i32,
    #[serde(default)]
    pub combination_id: Option<i32>,
    #[serde(default)]
    pub warehouse_id: Option<i32>,
    pub quantity_adjustment: i32,
    pub stock_quantity: i32,
    #[serde(default)]
    pub message: String,
    pub created_on_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i32,
    pub name: String,
}

/// Filterable characteristic shown in the product's specification table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationAttribute {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationAttributeOption {
    pub id: i32,
    pub specification_attribute_id: i32,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecificationAttributeType {
    #[default]
    Option = 0,
    CustomText = 10,
    CustomHtmlText = 20,
    Hyperlink = 30,
}

impl LocalizedEnum for SpecificationAttributeType {
    const TYPE_NAME: &'static str = "SpecificationAttributeType";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Option => "Option",
            Self::CustomText => "CustomText",
            Self::CustomHtmlText => "CustomHtmlText",
            Self::Hyperlink => "Hyperlink",
        }
    }
}

/// Specification option assigned to a product. Every type references an
/// option for its attribute; the custom types display `custom_value` instead
/// of the option name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpecificationAttribute {
    pub id: i32,
    pub product_id: i32,
    #[serde(default)]
    pub attribute_type: SpecificationAttributeType,
    pub specification_attribute_option_id: i32,
    #[serde(default)]
    pub custom_value: String,
    #[serde(default)]
    pub allow_filtering: bool,
    #[serde(default)]
    pub show_on_product_page: bool,
    #[serde(default)]
    pub display_order: i32,
}

/// Reusable attribute definition (e.g. "Color") mapped onto products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributeMapping {
    pub id: i32,
    pub product_id: i32,
    pub product_attribute_id: i32,
    #[serde(default)]
    pub text_prompt: String,
    #[serde(default)]
    pub is_required: bool,
    pub attribute_control_type: AttributeControlType,
    #[serde(default)]
    pub display_order: i32,
}

impl LocalizedEntity for ProductAttributeMapping {
    fn key_group(&self) -> &'static str {
        "ProductAttributeMapping"
    }

    fn entity_id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValueType {
    #[default]
    Simple = 0,
    AssociatedToProduct = 10,
}

impl LocalizedEnum for AttributeValueType {
    const TYPE_NAME: &'static str = "AttributeValueType";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::AssociatedToProduct => "AssociatedToProduct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttributeValue {
    pub id: i32,
    pub product_attribute_mapping_id: i32,
    pub attribute_value_type: AttributeValueType,
    pub associated_product_id: i32,
    pub name: String,
    pub color_squares_rgb: String,
    pub price_adjustment: f64,
    pub price_adjustment_use_percentage: bool,
    pub weight_adjustment: f64,
    pub cost: f64,
    pub quantity: i32,
    pub is_pre_selected: bool,
    pub display_order: i32,
    pub picture_id: i32,
}

impl Default for ProductAttributeValue {
    fn default() -> Self {
        Self {
            id: 0,
            product_attribute_mapping_id: 0,
            attribute_value_type: AttributeValueType::Simple,
            associated_product_id: 0,
            name: String::new(),
            color_squares_rgb: String::new(),
            price_adjustment: 0.0,
            price_adjustment_use_percentage: false,
            weight_adjustment: 0.0,
            cost: 0.0,
            quantity: 1,
            is_pre_selected: false,
            display_order: 0,
            picture_id: 0,
        }
    }
}

impl LocalizedEntity for ProductAttributeValue {
    fn key_group(&self) -> &'static str {
        "ProductAttributeValue"
    }

    fn entity_id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_requires_tracked_inventory() {
        let mut product = Product {
            manage_inventory_method: ManageInventoryMethod::ManageStock,
            stock_quantity: 1,
            min_stock_quantity: 5,
            ..Default::default()
        };
        assert!(product.is_low_stock());

        product.manage_inventory_method = ManageInventoryMethod::DontManageStock;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_product_filter_keywords_and_sku() {
        let product = Product {
            id: 3,
            name: "Apple iCam".to_string(),
            sku: "APPLE_CAM".to_string(),
            ..Default::default()
        };

        let by_name = ProductFilter { keywords: "icam".to_string(), ..Default::default() };
        let by_sku = ProductFilter { keywords: "apple_cam".to_string(), ..Default::default() };
        let other = ProductFilter { keywords: "lens".to_string(), ..Default::default() };

        assert!(by_name.matches(&product));
        assert!(by_sku.matches(&product));
        assert!(!other.matches(&product));
    }
}
