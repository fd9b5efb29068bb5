// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Models of the product grid, the product form and its sub-grids
//! (associations, pictures, tier prices, stock history, specification
//! attributes, attribute mappings, orders), plus the product tag and
//! low-stock screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::attribute::AttributeControlType;
use crate::domain::product::{AttributeValueType, ManageInventoryMethod, ProductType, SpecificationAttributeType};
use crate::models::common::{impl_search_model, LocalizedModel, PagingParams, SelectListItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchModel {
    pub search_product_name: String,
    /// 0 means all types
    pub search_product_type_id: i32,
    /// 0 all, 1 published only, 2 unpublished only
    pub search_published_id: i32,
    pub available_product_types: Vec<SelectListItem>,
    pub available_published_options: Vec<SelectListItem>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductModel {
    pub id: i32,
    pub product_type: ProductType,
    pub product_type_name: String,
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
    pub price: f64,
    pub old_price: f64,
    pub product_cost: f64,
    pub manage_inventory_method: ManageInventoryMethod,
    pub stock_quantity: i32,
    /// Stock as shown in the grid; empty when inventory is not tracked
    pub stock_quantity_str: String,
    pub min_stock_quantity: i32,
    pub display_order: i32,
    pub picture_thumbnail_url: String,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
    pub locales: Vec<ProductLocalizedModel>,
    pub related_product_search_model: RelatedProductSearchModel,
    pub cross_sell_product_search_model: CrossSellProductSearchModel,
    pub associated_product_search_model: AssociatedProductSearchModel,
    pub product_picture_search_model: ProductPictureSearchModel,
    pub tier_price_search_model: TierPriceSearchModel,
    pub stock_quantity_history_search_model: StockQuantityHistorySearchModel,
    pub product_attribute_mapping_search_model: ProductAttributeMappingSearchModel,
    pub product_specification_attribute_search_model: ProductSpecificationAttributeSearchModel,
    pub product_order_search_model: ProductOrderSearchModel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocalizedModel {
    pub language_id: i32,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub meta_keywords: String,
    pub meta_description: String,
    pub meta_title: String,
}

impl LocalizedModel for ProductLocalizedModel {
    fn for_language(language_id: i32) -> Self {
        Self {
            language_id,
            ..Default::default()
        }
    }

    fn language_id(&self) -> i32 {
        self.language_id
    }
}

/// Search of the "add product" popup shared by every product picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductSearchModel {
    pub search_product_name: String,
    pub search_product_type_id: i32,
    pub available_product_types: Vec<SelectListItem>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPickerModel {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProductSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProductModel {
    pub id: i32,
    pub product_id2: i32,
    pub product2_name: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossSellProductSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossSellProductModel {
    pub id: i32,
    pub product_id2: i32,
    pub product2_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedProductSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedProductModel {
    pub id: i32,
    pub product_name: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPictureSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPictureModel {
    pub id: i32,
    pub product_id: i32,
    pub picture_id: i32,
    pub picture_url: String,
    pub display_order: i32,
    pub override_alt_attribute: String,
    pub override_title_attribute: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTagSearchModel {
    pub search_tag_name: String,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTagModel {
    pub id: i32,
    pub name: String,
    pub product_count: usize,
    pub locales: Vec<ProductTagLocalizedModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTagLocalizedModel {
    pub language_id: i32,
    pub name: String,
}

impl LocalizedModel for ProductTagLocalizedModel {
    fn for_language(language_id: i32) -> Self {
        Self {
            language_id,
            ..Default::default()
        }
    }

    fn language_id(&self) -> i32 {
        self.language_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPriceSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPriceModel {
    pub id: i32,
    pub product_id: i32,
    pub store_id: i32,
    pub store: String,
    pub customer_role_id: i32,
    pub customer_role: String,
    pub quantity: i32,
    pub price: f64,
    pub start_date_time_utc: Option<DateTime<Utc>>,
    pub end_date_time_utc: Option<DateTime<Utc>>,
    pub available_stores: Vec<SelectListItem>,
    pub available_customer_roles: Vec<SelectListItem>,
}

impl TierPriceModel {
    /// Create form defaults: a single unit for all stores and roles
    pub fn blank() -> Self {
        Self {
            quantity: 1,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockProductSearchModel {
    /// 0 all, 1 published only, 2 unpublished only
    pub search_published_id: i32,
    pub available_published_options: Vec<SelectListItem>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockProductModel {
    pub id: i32,
    pub name: String,
    pub manage_inventory_method: String,
    pub stock_quantity: i32,
    pub published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuantityHistorySearchModel {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub available_warehouses: Vec<SelectListItem>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuantityHistoryModel {
    pub id: i32,
    pub product_id: i32,
    pub warehouse_name: String,
    pub quantity_adjustment: i32,
    pub stock_quantity: i32,
    pub message: String,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecificationAttributeSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecificationAttributeModel {
    pub id: i32,
    pub product_id: i32,
    pub attribute_type: SpecificationAttributeType,
    pub attribute_type_name: String,
    pub attribute_id: i32,
    pub attribute_name: String,
    /// Option name, custom text or hyperlink markup, by attribute type
    pub value_raw: String,
    pub allow_filtering: bool,
    pub show_on_product_page: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOrderSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOrderModel {
    pub id: i32,
    pub custom_order_number: String,
    pub customer_email: String,
    pub store_name: String,
    pub order_status: String,
    pub order_status_id: i32,
    pub payment_status: String,
    pub shipping_status: String,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeMappingSearchModel {
    pub product_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeMappingModel {
    pub id: i32,
    pub product_id: i32,
    pub product_attribute_id: i32,
    pub product_attribute: String,
    pub text_prompt: String,
    pub is_required: bool,
    pub attribute_control_type: AttributeControlType,
    pub attribute_control_type_name: String,
    pub display_order: i32,
    /// Whether the value grid applies to this control type
    pub should_have_values: bool,
    pub locales: Vec<ProductAttributeMappingLocalizedModel>,
    pub available_product_attributes: Vec<SelectListItem>,
    pub product_attribute_value_search_model: ProductAttributeValueSearchModel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeMappingLocalizedModel {
    pub language_id: i32,
    pub text_prompt: String,
}

impl LocalizedModel for ProductAttributeMappingLocalizedModel {
    fn for_language(language_id: i32) -> Self {
        Self {
            language_id,
            ..Default::default()
        }
    }

    fn language_id(&self) -> i32 {
        self.language_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeValueSearchModel {
    pub product_attribute_mapping_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeValueModel {
    pub id: i32,
    /// Owning mapping
    pub product_attribute_mapping_id: i32,
    pub attribute_value_type: AttributeValueType,
    pub attribute_value_type_name: String,
    pub associated_product_id: i32,
    pub name: String,
    pub color_squares_rgb: String,
    pub price_adjustment: f64,
    pub price_adjustment_use_percentage: bool,
    /// `"+5%"` / `"+2.50"`; empty when there is no adjustment
    pub price_adjustment_str: String,
    pub weight_adjustment: f64,
    pub weight_adjustment_str: String,
    pub cost: f64,
    pub quantity: i32,
    pub is_pre_selected: bool,
    pub display_order: i32,
    pub picture_id: i32,
    pub picture_thumbnail_url: String,
    pub locales: Vec<ProductAttributeValueLocalizedModel>,
}

impl ProductAttributeValueModel {
    pub fn blank() -> Self {
        Self {
            quantity: 1,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeValueLocalizedModel {
    pub language_id: i32,
    pub name: String,
}

impl LocalizedModel for ProductAttributeValueLocalizedModel {
    fn for_language(language_id: i32) -> Self {
        Self {
            language_id,
            ..Default::default()
        }
    }

    fn language_id(&self) -> i32 {
        self.language_id
    }
}

impl_search_model!(
    ProductSearchModel,
    AddProductSearchModel,
    RelatedProductSearchModel,
    CrossSellProductSearchModel,
    AssociatedProductSearchModel,
    ProductPictureSearchModel,
    ProductTagSearchModel,
    TierPriceSearchModel,
    LowStockProductSearchModel,
    StockQuantityHistorySearchModel,
    ProductAttributeMappingSearchModel,
    ProductAttributeValueSearchModel,
    ProductSpecificationAttributeSearchModel,
    ProductOrderSearchModel,
);
