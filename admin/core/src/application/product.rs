// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Product Model Factory
//!
//! Product grid and form, the sub-grids hosted on the product form
//! (including specification attributes and the orders that bought the
//! product), the shared "add product" picker, product tags and the
//! low-stock report.
//!
//! Sub-grids are parent-scoped: their search and list preparers fail with
//! [`FactoryError::MissingArgument`](crate::application::error::FactoryError)
//! when the owning product (or attribute mapping) is absent.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::base_admin::{published_filter, BaseAdminModelFactory};
use crate::application::error::{require, FactoryResult};
use crate::application::localized::LocalizedModelFactory;
use crate::application::paging::{paginate_by_request, set_grid_page_size};
use crate::domain::admin_config::AdminAreaSettings;
use crate::domain::product::{
    AttributeValueType, ManageInventoryMethod, Product, ProductAttributeMapping, ProductAttributeValue,
    ProductFilter, ProductSpecificationAttribute, ProductTag, ProductType, SpecificationAttributeType,
    TierPrice,
};
use crate::domain::repository::{PictureService, ProductAttributeService, ProductService, ProductTagService};
use crate::models::common::{ListModel, SelectListItem};
use crate::models::product::*;

/// Edge length of grid thumbnails in pixels
pub const THUMBNAIL_SIZE: u32 = 75;

const ALL_STORES_RESOURCE: &str = "Admin.Catalog.Products.TierPrices.Fields.Store.All";
const ALL_CUSTOMER_ROLES_RESOURCE: &str = "Admin.Catalog.Products.TierPrices.Fields.CustomerRole.All";
const DELETED_STORE_RESOURCE: &str = "Admin.Catalog.Products.TierPrices.Fields.Store.Deleted";

#[async_trait]
pub trait ProductModelFactory: Send + Sync {
    async fn prepare_product_search_model(&self, model: ProductSearchModel) -> FactoryResult<ProductSearchModel>;

    async fn prepare_product_list_model(&self, search: &ProductSearchModel) -> FactoryResult<ListModel<ProductModel>>;

    async fn new_product_model(&self, product: &Product) -> FactoryResult<ProductModel>;

    async fn populate_product_locales(&self, model: &mut ProductModel, product: Option<&Product>) -> FactoryResult<()>;

    async fn prepare_product_model(
        &self,
        model: Option<ProductModel>,
        product: Option<&Product>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductModel>;

    async fn prepare_add_product_search_model(
        &self,
        model: AddProductSearchModel,
    ) -> FactoryResult<AddProductSearchModel>;

    async fn prepare_add_product_list_model(
        &self,
        search: &AddProductSearchModel,
    ) -> FactoryResult<ListModel<ProductPickerModel>>;

    async fn prepare_related_product_search_model(
        &self,
        model: RelatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<RelatedProductSearchModel>;

    async fn prepare_related_product_list_model(
        &self,
        search: &RelatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<RelatedProductModel>>;

    async fn prepare_cross_sell_product_search_model(
        &self,
        model: CrossSellProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<CrossSellProductSearchModel>;

    async fn prepare_cross_sell_product_list_model(
        &self,
        search: &CrossSellProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<CrossSellProductModel>>;

    async fn prepare_associated_product_search_model(
        &self,
        model: AssociatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<AssociatedProductSearchModel>;

    async fn prepare_associated_product_list_model(
        &self,
        search: &AssociatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<AssociatedProductModel>>;

    async fn prepare_product_picture_search_model(
        &self,
        model: ProductPictureSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductPictureSearchModel>;

    async fn prepare_product_picture_list_model(
        &self,
        search: &ProductPictureSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductPictureModel>>;

    async fn prepare_product_tag_search_model(&self, model: ProductTagSearchModel) -> FactoryResult<ProductTagSearchModel>;

    async fn prepare_product_tag_list_model(
        &self,
        search: &ProductTagSearchModel,
    ) -> FactoryResult<ListModel<ProductTagModel>>;

    async fn prepare_product_tag_model(
        &self,
        model: Option<ProductTagModel>,
        tag: Option<&ProductTag>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductTagModel>;

    async fn prepare_tier_price_search_model(
        &self,
        model: TierPriceSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<TierPriceSearchModel>;

    async fn prepare_tier_price_list_model(
        &self,
        search: &TierPriceSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<TierPriceModel>>;

    /// Stamps the product id and offers store and customer role pickers.
    /// A supplied model is kept as edited; when neither the model nor the
    /// tier price is given, fails with `MissingArgument("model")`
    /// (start from [`TierPriceModel::blank`] to render a create form).
    async fn prepare_tier_price_model(
        &self,
        model: Option<TierPriceModel>,
        product: Option<&Product>,
        tier_price: Option<&TierPrice>,
        exclude_properties: bool,
    ) -> FactoryResult<TierPriceModel>;

    async fn prepare_low_stock_product_search_model(
        &self,
        model: LowStockProductSearchModel,
    ) -> FactoryResult<LowStockProductSearchModel>;

    async fn prepare_low_stock_product_list_model(
        &self,
        search: &LowStockProductSearchModel,
    ) -> FactoryResult<ListModel<LowStockProductModel>>;

    async fn prepare_stock_quantity_history_search_model(
        &self,
        model: StockQuantityHistorySearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<StockQuantityHistorySearchModel>;

    async fn prepare_stock_quantity_history_list_model(
        &self,
        search: &StockQuantityHistorySearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<StockQuantityHistoryModel>>;

    async fn prepare_product_specification_attribute_search_model(
        &self,
        model: ProductSpecificationAttributeSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductSpecificationAttributeSearchModel>;

    async fn prepare_product_specification_attribute_list_model(
        &self,
        search: &ProductSpecificationAttributeSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductSpecificationAttributeModel>>;

    async fn prepare_product_order_search_model(
        &self,
        model: ProductOrderSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductOrderSearchModel>;

    /// Orders containing the product, newest first
    async fn prepare_product_order_list_model(
        &self,
        search: &ProductOrderSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductOrderModel>>;

    async fn prepare_product_attribute_mapping_search_model(
        &self,
        model: ProductAttributeMappingSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductAttributeMappingSearchModel>;

    async fn prepare_product_attribute_mapping_list_model(
        &self,
        search: &ProductAttributeMappingSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductAttributeMappingModel>>;

    async fn prepare_product_attribute_mapping_model(
        &self,
        model: Option<ProductAttributeMappingModel>,
        product: Option<&Product>,
        mapping: Option<&ProductAttributeMapping>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductAttributeMappingModel>;

    async fn prepare_product_attribute_value_search_model(
        &self,
        model: ProductAttributeValueSearchModel,
        mapping: Option<&ProductAttributeMapping>,
    ) -> FactoryResult<ProductAttributeValueSearchModel>;

    async fn prepare_product_attribute_value_list_model(
        &self,
        search: &ProductAttributeValueSearchModel,
        mapping: Option<&ProductAttributeMapping>,
    ) -> FactoryResult<ListModel<ProductAttributeValueModel>>;

    /// Create forms start from [`ProductAttributeValueModel::blank`]
    async fn prepare_product_attribute_value_model(
        &self,
        model: Option<ProductAttributeValueModel>,
        mapping: Option<&ProductAttributeMapping>,
        value: Option<&ProductAttributeValue>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductAttributeValueModel>;
}

pub struct StandardProductModelFactory {
    products: Arc<dyn ProductService>,
    tags: Arc<dyn ProductTagService>,
    product_attributes: Arc<dyn ProductAttributeService>,
    pictures: Arc<dyn PictureService>,
    base: BaseAdminModelFactory,
    admin_area: AdminAreaSettings,
}

impl StandardProductModelFactory {
    pub fn new(
        products: Arc<dyn ProductService>,
        tags: Arc<dyn ProductTagService>,
        product_attributes: Arc<dyn ProductAttributeService>,
        pictures: Arc<dyn PictureService>,
        base: BaseAdminModelFactory,
        admin_area: AdminAreaSettings,
    ) -> Self {
        Self {
            products,
            tags,
            product_attributes,
            pictures,
            base,
            admin_area,
        }
    }

    fn localized(&self) -> &LocalizedModelFactory {
        self.base.localized()
    }

    fn to_model(product: &Product) -> ProductModel {
        ProductModel {
            id: product.id,
            product_type: product.product_type,
            parent_grouped_product_id: product.parent_grouped_product_id,
            visible_individually: product.visible_individually,
            name: product.name.clone(),
            short_description: product.short_description.clone(),
            full_description: product.full_description.clone(),
            admin_comment: product.admin_comment.clone(),
            meta_keywords: product.meta_keywords.clone(),
            meta_description: product.meta_description.clone(),
            meta_title: product.meta_title.clone(),
            sku: product.sku.clone(),
            vendor_id: product.vendor_id,
            published: product.published,
            price: product.price,
            old_price: product.old_price,
            product_cost: product.product_cost,
            manage_inventory_method: product.manage_inventory_method,
            stock_quantity: product.stock_quantity,
            stock_quantity_str: stock_quantity_str(product),
            min_stock_quantity: product.min_stock_quantity,
            display_order: product.display_order,
            created_on: product.created_on_utc,
            updated_on: product.updated_on_utc,
            ..Default::default()
        }
    }

    fn to_tier_price_model(tier_price: &TierPrice) -> TierPriceModel {
        TierPriceModel {
            id: tier_price.id,
            product_id: tier_price.product_id,
            store_id: tier_price.store_id,
            customer_role_id: tier_price.customer_role_id.unwrap_or_default(),
            quantity: tier_price.quantity,
            price: tier_price.price,
            start_date_time_utc: tier_price.start_date_time_utc,
            end_date_time_utc: tier_price.end_date_time_utc,
            ..Default::default()
        }
    }

    fn to_mapping_model(mapping: &ProductAttributeMapping) -> ProductAttributeMappingModel {
        ProductAttributeMappingModel {
            id: mapping.id,
            product_id: mapping.product_id,
            product_attribute_id: mapping.product_attribute_id,
            product_attribute: String::new(),
            text_prompt: mapping.text_prompt.clone(),
            is_required: mapping.is_required,
            attribute_control_type: mapping.attribute_control_type,
            attribute_control_type_name: String::new(),
            display_order: mapping.display_order,
            should_have_values: mapping.attribute_control_type.should_have_values(),
            locales: Vec::new(),
            available_product_attributes: Vec::new(),
            product_attribute_value_search_model: ProductAttributeValueSearchModel::default(),
        }
    }

    fn to_value_model(value: &ProductAttributeValue) -> ProductAttributeValueModel {
        ProductAttributeValueModel {
            id: value.id,
            product_attribute_mapping_id: value.product_attribute_mapping_id,
            attribute_value_type: value.attribute_value_type,
            associated_product_id: value.associated_product_id,
            name: value.name.clone(),
            color_squares_rgb: value.color_squares_rgb.clone(),
            price_adjustment: value.price_adjustment,
            price_adjustment_use_percentage: value.price_adjustment_use_percentage,
            price_adjustment_str: price_adjustment_str(value),
            weight_adjustment: value.weight_adjustment,
            weight_adjustment_str: weight_adjustment_str(value),
            cost: value.cost,
            quantity: value.quantity,
            is_pre_selected: value.is_pre_selected,
            display_order: value.display_order,
            picture_id: value.picture_id,
            ..Default::default()
        }
    }

    /// Thumbnail of a picture id; the placeholder when the picture is missing
    async fn thumbnail_url(&self, picture_id: i32) -> FactoryResult<String> {
        let picture = self.pictures.get_picture_by_id(picture_id).await?;
        Ok(self.pictures.get_picture_url(picture.as_ref(), THUMBNAIL_SIZE).await?)
    }

    async fn product_name(&self, product_id: i32) -> FactoryResult<String> {
        let product = self.products.get_product_by_id(product_id).await?;
        Ok(product.map(|product| product.name).unwrap_or_default())
    }

    async fn product_locales(&self, product: Option<&Product>) -> FactoryResult<Vec<ProductLocalizedModel>> {
        let Some(product) = product else {
            return self.localized().prepare_blank_localized_models().await;
        };

        let localized = self.localized();
        localized
            .prepare_localized_models(move |language_id| async move {
                Ok(ProductLocalizedModel {
                    language_id,
                    name: localized.localized_property(product, "Name", language_id).await?,
                    short_description: localized
                        .localized_property(product, "ShortDescription", language_id)
                        .await?,
                    full_description: localized
                        .localized_property(product, "FullDescription", language_id)
                        .await?,
                    meta_keywords: localized.localized_property(product, "MetaKeywords", language_id).await?,
                    meta_description: localized
                        .localized_property(product, "MetaDescription", language_id)
                        .await?,
                    meta_title: localized.localized_property(product, "MetaTitle", language_id).await?,
                })
            })
            .await
    }

    async fn tag_locales(&self, tag: Option<&ProductTag>) -> FactoryResult<Vec<ProductTagLocalizedModel>> {
        let Some(tag) = tag else {
            return self.localized().prepare_blank_localized_models().await;
        };

        let localized = self.localized();
        localized
            .prepare_localized_models(move |language_id| async move {
                Ok(ProductTagLocalizedModel {
                    language_id,
                    name: localized.localized_property(tag, "Name", language_id).await?,
                })
            })
            .await
    }

    async fn mapping_locales(
        &self,
        mapping: Option<&ProductAttributeMapping>,
    ) -> FactoryResult<Vec<ProductAttributeMappingLocalizedModel>> {
        let Some(mapping) = mapping else {
            return self.localized().prepare_blank_localized_models().await;
        };

        let localized = self.localized();
        localized
            .prepare_localized_models(move |language_id| async move {
                Ok(ProductAttributeMappingLocalizedModel {
                    language_id,
                    text_prompt: localized.localized_property(mapping, "TextPrompt", language_id).await?,
                })
            })
            .await
    }

    async fn value_locales(
        &self,
        value: Option<&ProductAttributeValue>,
    ) -> FactoryResult<Vec<ProductAttributeValueLocalizedModel>> {
        let Some(value) = value else {
            return self.localized().prepare_blank_localized_models().await;
        };

        let localized = self.localized();
        localized
            .prepare_localized_models(move |language_id| async move {
                Ok(ProductAttributeValueLocalizedModel {
                    language_id,
                    name: localized.localized_property(value, "Name", language_id).await?,
                })
            })
            .await
    }

    async fn to_specification_attribute_model(
        &self,
        attribute: ProductSpecificationAttribute,
    ) -> FactoryResult<ProductSpecificationAttributeModel> {
        let option = self
            .products
            .get_specification_attribute_option_by_id(attribute.specification_attribute_option_id)
            .await?;
        let (attribute_id, attribute_name) = match &option {
            Some(option) => {
                let name = self
                    .products
                    .get_specification_attribute_by_id(option.specification_attribute_id)
                    .await?
                    .map(|specification| specification.name)
                    .unwrap_or_default();
                (option.specification_attribute_id, name)
            }
            None => (0, String::new()),
        };

        Ok(ProductSpecificationAttributeModel {
            id: attribute.id,
            product_id: attribute.product_id,
            attribute_type: attribute.attribute_type,
            attribute_type_name: self.localized().localized_enum(&attribute.attribute_type).await?,
            attribute_id,
            attribute_name,
            value_raw: specification_value(&attribute, option.map(|option| option.name)),
            allow_filtering: attribute.allow_filtering,
            show_on_product_page: attribute.show_on_product_page,
            display_order: attribute.display_order,
        })
    }

    async fn product_attribute_names(&self) -> FactoryResult<HashMap<i32, String>> {
        let attributes = self.product_attributes.get_all_product_attributes().await?;
        Ok(attributes
            .into_iter()
            .map(|attribute| (attribute.id, attribute.name))
            .collect())
    }

    async fn product_type_items(&self, items: &mut Vec<SelectListItem>) -> FactoryResult<()> {
        items.clear();
        self.base
            .prepare_enum_items(items, &ProductType::ALL, |kind| *kind as i32, true)
            .await
    }
}

fn product_type_from_id(id: i32) -> Option<ProductType> {
    ProductType::ALL.into_iter().find(|kind| *kind as i32 == id)
}

fn specification_value(attribute: &ProductSpecificationAttribute, option_name: Option<String>) -> String {
    match attribute.attribute_type {
        SpecificationAttributeType::Option => option_name.unwrap_or_default(),
        SpecificationAttributeType::CustomText | SpecificationAttributeType::CustomHtmlText => {
            attribute.custom_value.clone()
        }
        SpecificationAttributeType::Hyperlink => format!(
            "<a href='{0}' target='_blank'>{0}</a>",
            attribute.custom_value
        ),
    }
}

fn stock_quantity_str(product: &Product) -> String {
    if product.manage_inventory_method == ManageInventoryMethod::ManageStock {
        product.stock_quantity.to_string()
    } else {
        String::new()
    }
}

fn price_adjustment_str(value: &ProductAttributeValue) -> String {
    if value.attribute_value_type != AttributeValueType::Simple || value.price_adjustment == 0.0 {
        return String::new();
    }
    if value.price_adjustment_use_percentage {
        format!("{:+}%", value.price_adjustment)
    } else {
        format!("{:+}", value.price_adjustment)
    }
}

fn weight_adjustment_str(value: &ProductAttributeValue) -> String {
    if value.attribute_value_type != AttributeValueType::Simple || value.weight_adjustment == 0.0 {
        return String::new();
    }
    format!("{:+}", value.weight_adjustment)
}

#[async_trait]
impl ProductModelFactory for StandardProductModelFactory {
    async fn prepare_product_search_model(&self, mut model: ProductSearchModel) -> FactoryResult<ProductSearchModel> {
        self.product_type_items(&mut model.available_product_types).await?;
        model.available_published_options.clear();
        self.base
            .prepare_published_options(&mut model.available_published_options)
            .await?;

        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_product_list_model(&self, search: &ProductSearchModel) -> FactoryResult<ListModel<ProductModel>> {
        let filter = ProductFilter {
            keywords: search.search_product_name.clone(),
            product_type: product_type_from_id(search.search_product_type_id),
            published: published_filter(search.search_published_id),
            ..Default::default()
        };
        let products = self.products.search_products(&filter).await?;
        tracing::debug!(count = products.len(), page = search.paging.page, "Preparing product list");

        let page = paginate_by_request(products, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for product in page.into_items() {
            let mut row = Self::to_model(&product);
            row.product_type_name = self.localized().localized_enum(&product.product_type).await?;

            let default_picture = self
                .products
                .get_product_pictures(product.id)
                .await?
                .into_iter()
                .next();
            row.picture_thumbnail_url = match default_picture {
                Some(product_picture) => self.thumbnail_url(product_picture.picture_id).await?,
                None => self.pictures.get_picture_url(None, THUMBNAIL_SIZE).await?,
            };
            data.push(row);
        }

        Ok(ListModel { data, total })
    }

    async fn new_product_model(&self, product: &Product) -> FactoryResult<ProductModel> {
        self.prepare_product_model(None, Some(product), false).await
    }

    async fn populate_product_locales(&self, model: &mut ProductModel, product: Option<&Product>) -> FactoryResult<()> {
        model.locales = self.product_locales(product).await?;
        Ok(())
    }

    async fn prepare_product_model(
        &self,
        model: Option<ProductModel>,
        product: Option<&Product>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductModel> {
        let mut model = match product {
            Some(product) => {
                let mut model = model.unwrap_or_else(|| Self::to_model(product));
                model.product_type_name = self.localized().localized_enum(&product.product_type).await?;

                let related = std::mem::take(&mut model.related_product_search_model);
                model.related_product_search_model =
                    self.prepare_related_product_search_model(related, Some(product)).await?;
                let cross_sell = std::mem::take(&mut model.cross_sell_product_search_model);
                model.cross_sell_product_search_model =
                    self.prepare_cross_sell_product_search_model(cross_sell, Some(product)).await?;
                let associated = std::mem::take(&mut model.associated_product_search_model);
                model.associated_product_search_model =
                    self.prepare_associated_product_search_model(associated, Some(product)).await?;
                let pictures = std::mem::take(&mut model.product_picture_search_model);
                model.product_picture_search_model =
                    self.prepare_product_picture_search_model(pictures, Some(product)).await?;
                let tier_prices = std::mem::take(&mut model.tier_price_search_model);
                model.tier_price_search_model =
                    self.prepare_tier_price_search_model(tier_prices, Some(product)).await?;
                let history = std::mem::take(&mut model.stock_quantity_history_search_model);
                model.stock_quantity_history_search_model =
                    self.prepare_stock_quantity_history_search_model(history, Some(product)).await?;
                let mappings = std::mem::take(&mut model.product_attribute_mapping_search_model);
                model.product_attribute_mapping_search_model = self
                    .prepare_product_attribute_mapping_search_model(mappings, Some(product))
                    .await?;
                let specifications = std::mem::take(&mut model.product_specification_attribute_search_model);
                model.product_specification_attribute_search_model = self
                    .prepare_product_specification_attribute_search_model(specifications, Some(product))
                    .await?;
                let orders = std::mem::take(&mut model.product_order_search_model);
                model.product_order_search_model =
                    self.prepare_product_order_search_model(orders, Some(product)).await?;
                model
            }
            None => require(model, "model")?,
        };

        if !exclude_properties {
            self.populate_product_locales(&mut model, product).await?;
        }

        Ok(model)
    }

    async fn prepare_add_product_search_model(
        &self,
        mut model: AddProductSearchModel,
    ) -> FactoryResult<AddProductSearchModel> {
        self.product_type_items(&mut model.available_product_types).await?;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_add_product_list_model(
        &self,
        search: &AddProductSearchModel,
    ) -> FactoryResult<ListModel<ProductPickerModel>> {
        let filter = ProductFilter {
            keywords: search.search_product_name.clone(),
            product_type: product_type_from_id(search.search_product_type_id),
            ..Default::default()
        };
        let products = self.products.search_products(&filter).await?;

        Ok(paginate_by_request(products, search).into_list_model(|product| ProductPickerModel {
            id: product.id,
            name: product.name,
            sku: product.sku,
            published: product.published,
        }))
    }

    async fn prepare_related_product_search_model(
        &self,
        mut model: RelatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<RelatedProductSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_related_product_list_model(
        &self,
        search: &RelatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<RelatedProductModel>> {
        let product = require(product, "product")?;

        let related = self.products.get_related_products(product.id).await?;
        let page = paginate_by_request(related, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for related in page.into_items() {
            data.push(RelatedProductModel {
                id: related.id,
                product_id2: related.product_id2,
                product2_name: self.product_name(related.product_id2).await?,
                display_order: related.display_order,
            });
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_cross_sell_product_search_model(
        &self,
        mut model: CrossSellProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<CrossSellProductSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_cross_sell_product_list_model(
        &self,
        search: &CrossSellProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<CrossSellProductModel>> {
        let product = require(product, "product")?;

        let cross_sells = self.products.get_cross_sell_products(product.id).await?;
        let page = paginate_by_request(cross_sells, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for cross_sell in page.into_items() {
            data.push(CrossSellProductModel {
                id: cross_sell.id,
                product_id2: cross_sell.product_id2,
                product2_name: self.product_name(cross_sell.product_id2).await?,
            });
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_associated_product_search_model(
        &self,
        mut model: AssociatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<AssociatedProductSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_associated_product_list_model(
        &self,
        search: &AssociatedProductSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<AssociatedProductModel>> {
        let product = require(product, "product")?;

        let associated = self.products.get_associated_products(product.id).await?;
        Ok(paginate_by_request(associated, search).into_list_model(|child| AssociatedProductModel {
            id: child.id,
            product_name: child.name,
            display_order: child.display_order,
        }))
    }

    async fn prepare_product_picture_search_model(
        &self,
        mut model: ProductPictureSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductPictureSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_product_picture_list_model(
        &self,
        search: &ProductPictureSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductPictureModel>> {
        let product = require(product, "product")?;

        let product_pictures = self.products.get_product_pictures(product.id).await?;
        let page = paginate_by_request(product_pictures, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for product_picture in page.into_items() {
            let picture = self.pictures.get_picture_by_id(product_picture.picture_id).await?;
            let picture_url = self.pictures.get_picture_url(picture.as_ref(), 0).await?;
            let (alt, title) = picture
                .map(|picture| (picture.alt_attribute, picture.title_attribute))
                .unwrap_or_default();

            data.push(ProductPictureModel {
                id: product_picture.id,
                product_id: product_picture.product_id,
                picture_id: product_picture.picture_id,
                picture_url,
                display_order: product_picture.display_order,
                override_alt_attribute: alt,
                override_title_attribute: title,
            });
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_product_tag_search_model(
        &self,
        mut model: ProductTagSearchModel,
    ) -> FactoryResult<ProductTagSearchModel> {
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_product_tag_list_model(
        &self,
        search: &ProductTagSearchModel,
    ) -> FactoryResult<ListModel<ProductTagModel>> {
        let tags = self.tags.get_all_product_tags(&search.search_tag_name).await?;
        tracing::debug!(count = tags.len(), "Preparing product tag list");

        let page = paginate_by_request(tags, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for tag in page.into_items() {
            data.push(ProductTagModel {
                id: tag.id,
                product_count: self.tags.get_product_count(tag.id).await?,
                name: tag.name,
                locales: Vec::new(),
            });
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_product_tag_model(
        &self,
        model: Option<ProductTagModel>,
        tag: Option<&ProductTag>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductTagModel> {
        let mut model = match tag {
            Some(tag) => {
                let mut model = model.unwrap_or_else(|| ProductTagModel {
                    id: tag.id,
                    name: tag.name.clone(),
                    ..Default::default()
                });
                model.product_count = self.tags.get_product_count(tag.id).await?;
                model
            }
            None => require(model, "model")?,
        };

        if !exclude_properties {
            model.locales = self.tag_locales(tag).await?;
        }

        Ok(model)
    }

    async fn prepare_tier_price_search_model(
        &self,
        mut model: TierPriceSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<TierPriceSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_tier_price_list_model(
        &self,
        search: &TierPriceSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<TierPriceModel>> {
        let product = require(product, "product")?;

        let tier_prices = self.products.get_tier_prices(product.id).await?;
        let stores: HashMap<i32, String> = self
            .base
            .prepare_model_stores(&[])
            .await?
            .into_iter()
            .filter_map(|item| item.value.parse().ok().map(|id| (id, item.text)))
            .collect();
        let roles: HashMap<i32, String> = self
            .base
            .prepare_model_customer_roles(&[])
            .await?
            .into_iter()
            .filter_map(|item| item.value.parse().ok().map(|id| (id, item.text)))
            .collect();
        let all_stores = self.localized().resource(ALL_STORES_RESOURCE).await?;
        let all_roles = self.localized().resource(ALL_CUSTOMER_ROLES_RESOURCE).await?;
        let deleted_store = self.localized().resource(DELETED_STORE_RESOURCE).await?;

        Ok(paginate_by_request(tier_prices, search).into_list_model(|tier_price| {
            let mut row = Self::to_tier_price_model(&tier_price);
            row.store = match tier_price.store_id {
                0 => all_stores.clone(),
                id => stores.get(&id).cloned().unwrap_or_else(|| deleted_store.clone()),
            };
            row.customer_role = match tier_price.customer_role_id {
                None => all_roles.clone(),
                Some(id) => roles.get(&id).cloned().unwrap_or_default(),
            };
            row
        }))
    }

    async fn prepare_tier_price_model(
        &self,
        model: Option<TierPriceModel>,
        product: Option<&Product>,
        tier_price: Option<&TierPrice>,
        _exclude_properties: bool,
    ) -> FactoryResult<TierPriceModel> {
        let product = require(product, "product")?;

        let mut model = match tier_price {
            Some(tier_price) => model.unwrap_or_else(|| Self::to_tier_price_model(tier_price)),
            None => require(model, "model")?,
        };
        model.product_id = product.id;

        model.available_stores.clear();
        self.base.prepare_stores(&mut model.available_stores, true).await?;
        model.available_customer_roles.clear();
        self.base
            .prepare_customer_roles(&mut model.available_customer_roles, true)
            .await?;

        Ok(model)
    }

    async fn prepare_low_stock_product_search_model(
        &self,
        mut model: LowStockProductSearchModel,
    ) -> FactoryResult<LowStockProductSearchModel> {
        model.available_published_options.clear();
        self.base
            .prepare_published_options(&mut model.available_published_options)
            .await?;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_low_stock_product_list_model(
        &self,
        search: &LowStockProductSearchModel,
    ) -> FactoryResult<ListModel<LowStockProductModel>> {
        let products = self
            .products
            .get_low_stock_products(published_filter(search.search_published_id))
            .await?;
        tracing::debug!(count = products.len(), "Preparing low stock product list");

        let page = paginate_by_request(products, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for product in page.into_items() {
            data.push(LowStockProductModel {
                id: product.id,
                manage_inventory_method: self
                    .localized()
                    .localized_enum(&product.manage_inventory_method)
                    .await?,
                name: product.name,
                stock_quantity: product.stock_quantity,
                published: product.published,
            });
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_stock_quantity_history_search_model(
        &self,
        mut model: StockQuantityHistorySearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<StockQuantityHistorySearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;

        model.available_warehouses.clear();
        self.base.prepare_warehouses(&mut model.available_warehouses, true).await?;

        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_stock_quantity_history_list_model(
        &self,
        search: &StockQuantityHistorySearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<StockQuantityHistoryModel>> {
        let product = require(product, "product")?;

        let warehouse_id = (search.warehouse_id > 0).then_some(search.warehouse_id);
        let history = self
            .products
            .get_stock_quantity_history(product.id, warehouse_id)
            .await?;
        let warehouses: HashMap<i32, String> = self
            .products
            .get_all_warehouses()
            .await?
            .into_iter()
            .map(|warehouse| (warehouse.id, warehouse.name))
            .collect();

        Ok(paginate_by_request(history, search).into_list_model(|entry| StockQuantityHistoryModel {
            id: entry.id,
            product_id: entry.product_id,
            warehouse_name: entry
                .warehouse_id
                .and_then(|id| warehouses.get(&id).cloned())
                .unwrap_or_default(),
            quantity_adjustment: entry.quantity_adjustment,
            stock_quantity: entry.stock_quantity,
            message: entry.message,
            created_on: entry.created_on_utc,
        }))
    }

    async fn prepare_product_specification_attribute_search_model(
        &self,
        mut model: ProductSpecificationAttributeSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductSpecificationAttributeSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_product_specification_attribute_list_model(
        &self,
        search: &ProductSpecificationAttributeSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductSpecificationAttributeModel>> {
        let product = require(product, "product")?;

        let attributes = self.products.get_product_specification_attributes(product.id).await?;
        let page = paginate_by_request(attributes, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for attribute in page.into_items() {
            data.push(self.to_specification_attribute_model(attribute).await?);
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_product_order_search_model(
        &self,
        mut model: ProductOrderSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductOrderSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_product_order_list_model(
        &self,
        search: &ProductOrderSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductOrderModel>> {
        let product = require(product, "product")?;

        let orders = self.products.get_orders_by_product(product.id).await?;
        tracing::debug!(product_id = product.id, count = orders.len(), "Preparing product order list");
        let stores: HashMap<i32, String> = self
            .base
            .prepare_model_stores(&[])
            .await?
            .into_iter()
            .filter_map(|item| item.value.parse().ok().map(|id| (id, item.text)))
            .collect();

        let page = paginate_by_request(orders, search);
        let total = page.total_count();
        let localized = self.localized();
        let mut data = Vec::with_capacity(page.items().len());
        for order in page.into_items() {
            data.push(ProductOrderModel {
                id: order.id,
                custom_order_number: order.custom_order_number,
                customer_email: order.customer_email,
                store_name: stores.get(&order.store_id).cloned().unwrap_or_default(),
                order_status: localized.localized_enum(&order.order_status).await?,
                order_status_id: order.order_status as i32,
                payment_status: localized.localized_enum(&order.payment_status).await?,
                shipping_status: localized.localized_enum(&order.shipping_status).await?,
                created_on: order.created_on_utc,
            });
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_product_attribute_mapping_search_model(
        &self,
        mut model: ProductAttributeMappingSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ProductAttributeMappingSearchModel> {
        let product = require(product, "product")?;
        model.product_id = product.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_product_attribute_mapping_list_model(
        &self,
        search: &ProductAttributeMappingSearchModel,
        product: Option<&Product>,
    ) -> FactoryResult<ListModel<ProductAttributeMappingModel>> {
        let product = require(product, "product")?;

        let mappings = self
            .product_attributes
            .get_product_attribute_mappings(product.id)
            .await?;
        let names = self.product_attribute_names().await?;

        let page = paginate_by_request(mappings, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for mapping in page.into_items() {
            let mut row = Self::to_mapping_model(&mapping);
            row.product_attribute = names.get(&mapping.product_attribute_id).cloned().unwrap_or_default();
            row.attribute_control_type_name = self
                .localized()
                .localized_enum(&mapping.attribute_control_type)
                .await?;
            data.push(row);
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_product_attribute_mapping_model(
        &self,
        model: Option<ProductAttributeMappingModel>,
        product: Option<&Product>,
        mapping: Option<&ProductAttributeMapping>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductAttributeMappingModel> {
        let product = require(product, "product")?;

        let mut model = match mapping {
            Some(mapping) => {
                let mut model = model.unwrap_or_else(|| Self::to_mapping_model(mapping));
                let values = std::mem::take(&mut model.product_attribute_value_search_model);
                model.product_attribute_value_search_model = self
                    .prepare_product_attribute_value_search_model(values, Some(mapping))
                    .await?;
                model
            }
            None => require(model, "model")?,
        };
        model.product_id = product.id;
        model.should_have_values = model.attribute_control_type.should_have_values();

        let names = self.product_attribute_names().await?;
        model.product_attribute = names.get(&model.product_attribute_id).cloned().unwrap_or_default();
        let mut attributes: Vec<(i32, String)> = names.into_iter().collect();
        attributes.sort();
        model.available_product_attributes = attributes
            .into_iter()
            .map(|(id, name)| SelectListItem::new(name, id))
            .collect();

        if !exclude_properties {
            model.locales = self.mapping_locales(mapping).await?;
        }

        Ok(model)
    }

    async fn prepare_product_attribute_value_search_model(
        &self,
        mut model: ProductAttributeValueSearchModel,
        mapping: Option<&ProductAttributeMapping>,
    ) -> FactoryResult<ProductAttributeValueSearchModel> {
        let mapping = require(mapping, "product_attribute_mapping")?;
        model.product_attribute_mapping_id = mapping.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_product_attribute_value_list_model(
        &self,
        search: &ProductAttributeValueSearchModel,
        mapping: Option<&ProductAttributeMapping>,
    ) -> FactoryResult<ListModel<ProductAttributeValueModel>> {
        let mapping = require(mapping, "product_attribute_mapping")?;

        let values = self
            .product_attributes
            .get_product_attribute_values(mapping.id)
            .await?;
        let page = paginate_by_request(values, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for value in page.into_items() {
            let mut row = Self::to_value_model(&value);
            row.attribute_value_type_name = self
                .localized()
                .localized_enum(&value.attribute_value_type)
                .await?;
            if value.picture_id > 0 {
                row.picture_thumbnail_url = self.thumbnail_url(value.picture_id).await?;
            }
            data.push(row);
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_product_attribute_value_model(
        &self,
        model: Option<ProductAttributeValueModel>,
        mapping: Option<&ProductAttributeMapping>,
        value: Option<&ProductAttributeValue>,
        exclude_properties: bool,
    ) -> FactoryResult<ProductAttributeValueModel> {
        let mapping = require(mapping, "product_attribute_mapping")?;

        let mut model = match value {
            Some(value) => model.unwrap_or_else(|| Self::to_value_model(value)),
            None => require(model, "model")?,
        };
        model.product_attribute_mapping_id = mapping.id;

        if !exclude_properties {
            model.locales = self.value_locales(value).await?;
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_strings() {
        let mut value = ProductAttributeValue {
            price_adjustment: 5.0,
            price_adjustment_use_percentage: true,
            weight_adjustment: -0.5,
            ..Default::default()
        };
        assert_eq!(price_adjustment_str(&value), "+5%");
        assert_eq!(weight_adjustment_str(&value), "-0.5");

        value.price_adjustment_use_percentage = false;
        value.price_adjustment = 2.5;
        assert_eq!(price_adjustment_str(&value), "+2.5");

        value.attribute_value_type = AttributeValueType::AssociatedToProduct;
        assert_eq!(price_adjustment_str(&value), "");
    }

    #[test]
    fn test_stock_shown_only_when_tracked() {
        let mut product = Product {
            stock_quantity: 12,
            ..Default::default()
        };
        assert_eq!(stock_quantity_str(&product), "");

        product.manage_inventory_method = ManageInventoryMethod::ManageStock;
        assert_eq!(stock_quantity_str(&product), "12");
    }

    #[test]
    fn test_specification_value_by_type() {
        let mut attribute = ProductSpecificationAttribute {
            id: 1,
            product_id: 1,
            attribute_type: SpecificationAttributeType::Option,
            specification_attribute_option_id: 3,
            custom_value: "https://maker.example/".to_string(),
            allow_filtering: true,
            show_on_product_page: true,
            display_order: 0,
        };
        assert_eq!(specification_value(&attribute, Some("Metal".to_string())), "Metal");
        assert_eq!(specification_value(&attribute, None), "");

        attribute.attribute_type = SpecificationAttributeType::Hyperlink;
        assert_eq!(
            specification_value(&attribute, Some("Metal".to_string())),
            "<a href='https://maker.example/' target='_blank'>https://maker.example/</a>"
        );

        attribute.attribute_type = SpecificationAttributeType::CustomText;
        assert_eq!(specification_value(&attribute, None), "https://maker.example/");
    }

    #[test]
    fn test_product_type_from_id() {
        assert_eq!(product_type_from_id(10), Some(ProductType::GroupedProduct));
        assert_eq!(product_type_from_id(0), None);
    }
}
