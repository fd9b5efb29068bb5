// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Attribute Model Factory
//!
//! Customer and vendor attribute screens share one generic factory,
//! parameterised by the attribute kind. The kind decides the service the
//! factory reads from and the key groups translations are filed under.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::error::{require, FactoryResult};
use crate::application::localized::LocalizedModelFactory;
use crate::application::paging::{paginate_by_request, set_grid_page_size};
use crate::domain::admin_config::AdminAreaSettings;
use crate::domain::attribute::{Attribute, AttributeKind, AttributeValue, CustomerAttributes, VendorAttributes};
use crate::domain::repository::AttributeService;
use crate::models::attribute::{
    AttributeLocalizedModel, AttributeModel, AttributeSearchModel, AttributeValueLocalizedModel,
    AttributeValueModel, AttributeValueSearchModel,
};
use crate::models::common::ListModel;

#[async_trait]
pub trait AttributeModelFactory<K: AttributeKind>: Send + Sync {
    async fn prepare_attribute_search_model(
        &self,
        model: AttributeSearchModel,
    ) -> FactoryResult<AttributeSearchModel>;

    async fn prepare_attribute_list_model(
        &self,
        search: &AttributeSearchModel,
    ) -> FactoryResult<ListModel<AttributeModel>>;

    /// Detail model built from the attribute, locales included
    async fn new_attribute_model(&self, attribute: &Attribute<K>) -> FactoryResult<AttributeModel>;

    /// Rebuilds only the locale overlays of `model`
    async fn populate_attribute_locales(
        &self,
        model: &mut AttributeModel,
        attribute: Option<&Attribute<K>>,
    ) -> FactoryResult<()>;

    /// A supplied model wins over the attribute's fields; locales are left
    /// untouched when `exclude_properties` is set.
    async fn prepare_attribute_model(
        &self,
        model: Option<AttributeModel>,
        attribute: Option<&Attribute<K>>,
        exclude_properties: bool,
    ) -> FactoryResult<AttributeModel>;

    async fn prepare_attribute_value_search_model(
        &self,
        model: AttributeValueSearchModel,
        attribute: Option<&Attribute<K>>,
    ) -> FactoryResult<AttributeValueSearchModel>;

    async fn prepare_attribute_value_list_model(
        &self,
        search: &AttributeValueSearchModel,
        attribute: Option<&Attribute<K>>,
    ) -> FactoryResult<ListModel<AttributeValueModel>>;

    async fn new_attribute_value_model(
        &self,
        value: &AttributeValue<K>,
    ) -> FactoryResult<AttributeValueModel>;

    async fn populate_attribute_value_locales(
        &self,
        model: &mut AttributeValueModel,
        value: Option<&AttributeValue<K>>,
    ) -> FactoryResult<()>;

    /// Always stamps the owning attribute's id onto the model
    async fn prepare_attribute_value_model(
        &self,
        model: Option<AttributeValueModel>,
        attribute: Option<&Attribute<K>>,
        value: Option<&AttributeValue<K>>,
        exclude_properties: bool,
    ) -> FactoryResult<AttributeValueModel>;
}

pub struct StandardAttributeModelFactory<K: AttributeKind> {
    attributes: Arc<dyn AttributeService<K>>,
    localized: LocalizedModelFactory,
    admin_area: AdminAreaSettings,
    kind: PhantomData<K>,
}

pub type CustomerAttributeModelFactory = StandardAttributeModelFactory<CustomerAttributes>;
pub type VendorAttributeModelFactory = StandardAttributeModelFactory<VendorAttributes>;

impl<K: AttributeKind> StandardAttributeModelFactory<K> {
    pub fn new(
        attributes: Arc<dyn AttributeService<K>>,
        localized: LocalizedModelFactory,
        admin_area: AdminAreaSettings,
    ) -> Self {
        Self {
            attributes,
            localized,
            admin_area,
            kind: PhantomData,
        }
    }

    fn to_model(attribute: &Attribute<K>) -> AttributeModel {
        AttributeModel {
            id: attribute.id,
            name: attribute.name.clone(),
            is_required: attribute.is_required,
            attribute_control_type: attribute.attribute_control_type,
            attribute_control_type_name: String::new(),
            display_order: attribute.display_order,
            locales: Vec::new(),
            attribute_value_search_model: AttributeValueSearchModel::default(),
        }
    }

    fn to_value_model(value: &AttributeValue<K>) -> AttributeValueModel {
        AttributeValueModel {
            id: value.id,
            attribute_id: value.attribute_id,
            name: value.name.clone(),
            is_pre_selected: value.is_pre_selected,
            display_order: value.display_order,
            locales: Vec::new(),
        }
    }

    async fn attribute_locales(&self, attribute: Option<&Attribute<K>>) -> FactoryResult<Vec<AttributeLocalizedModel>> {
        let Some(attribute) = attribute else {
            return self.localized.prepare_blank_localized_models().await;
        };

        let localized = &self.localized;
        localized
            .prepare_localized_models(move |language_id| async move {
                Ok(AttributeLocalizedModel {
                    language_id,
                    name: localized.localized_property(attribute, "Name", language_id).await?,
                })
            })
            .await
    }

    async fn value_locales(
        &self,
        value: Option<&AttributeValue<K>>,
    ) -> FactoryResult<Vec<AttributeValueLocalizedModel>> {
        let Some(value) = value else {
            return self.localized.prepare_blank_localized_models().await;
        };

        let localized = &self.localized;
        localized
            .prepare_localized_models(move |language_id| async move {
                Ok(AttributeValueLocalizedModel {
                    language_id,
                    name: localized.localized_property(value, "Name", language_id).await?,
                })
            })
            .await
    }
}

#[async_trait]
impl<K: AttributeKind> AttributeModelFactory<K> for StandardAttributeModelFactory<K> {
    async fn prepare_attribute_search_model(
        &self,
        mut model: AttributeSearchModel,
    ) -> FactoryResult<AttributeSearchModel> {
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_attribute_list_model(
        &self,
        search: &AttributeSearchModel,
    ) -> FactoryResult<ListModel<AttributeModel>> {
        let attributes = self.attributes.get_all_attributes().await?;
        tracing::debug!(
            key_group = K::ATTRIBUTE_KEY_GROUP,
            count = attributes.len(),
            page = search.paging.page,
            "Preparing attribute list"
        );

        let page = paginate_by_request(attributes, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for attribute in page.into_items() {
            let mut row = Self::to_model(&attribute);
            row.attribute_control_type_name = self
                .localized
                .localized_enum(&attribute.attribute_control_type)
                .await?;
            data.push(row);
        }

        Ok(ListModel { data, total })
    }

    async fn new_attribute_model(&self, attribute: &Attribute<K>) -> FactoryResult<AttributeModel> {
        self.prepare_attribute_model(None, Some(attribute), false).await
    }

    async fn populate_attribute_locales(
        &self,
        model: &mut AttributeModel,
        attribute: Option<&Attribute<K>>,
    ) -> FactoryResult<()> {
        model.locales = self.attribute_locales(attribute).await?;
        Ok(())
    }

    async fn prepare_attribute_model(
        &self,
        model: Option<AttributeModel>,
        attribute: Option<&Attribute<K>>,
        exclude_properties: bool,
    ) -> FactoryResult<AttributeModel> {
        let mut model = match attribute {
            Some(attribute) => {
                let mut model = model.unwrap_or_else(|| Self::to_model(attribute));
                let search = std::mem::take(&mut model.attribute_value_search_model);
                model.attribute_value_search_model = self
                    .prepare_attribute_value_search_model(search, Some(attribute))
                    .await?;
                model
            }
            None => require(model, "model")?,
        };

        if !exclude_properties {
            self.populate_attribute_locales(&mut model, attribute).await?;
        }

        Ok(model)
    }

    async fn prepare_attribute_value_search_model(
        &self,
        mut model: AttributeValueSearchModel,
        attribute: Option<&Attribute<K>>,
    ) -> FactoryResult<AttributeValueSearchModel> {
        let attribute = require(attribute, "attribute")?;

        model.attribute_id = attribute.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_attribute_value_list_model(
        &self,
        search: &AttributeValueSearchModel,
        attribute: Option<&Attribute<K>>,
    ) -> FactoryResult<ListModel<AttributeValueModel>> {
        let attribute = require(attribute, "attribute")?;

        let values = self.attributes.get_attribute_values(attribute.id).await?;
        tracing::debug!(
            key_group = K::VALUE_KEY_GROUP,
            attribute_id = attribute.id,
            count = values.len(),
            "Preparing attribute value list"
        );

        Ok(paginate_by_request(values, search).into_list_model(|value| Self::to_value_model(&value)))
    }

    async fn new_attribute_value_model(
        &self,
        value: &AttributeValue<K>,
    ) -> FactoryResult<AttributeValueModel> {
        let mut model = Self::to_value_model(value);
        self.populate_attribute_value_locales(&mut model, Some(value)).await?;
        Ok(model)
    }

    async fn populate_attribute_value_locales(
        &self,
        model: &mut AttributeValueModel,
        value: Option<&AttributeValue<K>>,
    ) -> FactoryResult<()> {
        model.locales = self.value_locales(value).await?;
        Ok(())
    }

    async fn prepare_attribute_value_model(
        &self,
        model: Option<AttributeValueModel>,
        attribute: Option<&Attribute<K>>,
        value: Option<&AttributeValue<K>>,
        exclude_properties: bool,
    ) -> FactoryResult<AttributeValueModel> {
        let attribute = require(attribute, "attribute")?;

        let mut model = match value {
            Some(value) => model.unwrap_or_else(|| Self::to_value_model(value)),
            None => require(model, "model")?,
        };
        model.attribute_id = attribute.id;

        if !exclude_properties {
            self.populate_attribute_value_locales(&mut model, value).await?;
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::FactoryError;
    use crate::domain::attribute::{AttributeControlType, CustomerAttribute, CustomerAttributeValue};
    use crate::infrastructure::memory::InMemoryCatalog;
    use crate::models::common::PagingParams;

    fn catalog() -> Arc<InMemoryCatalog> {
        let catalog = InMemoryCatalog::with_default_language();
        catalog.add_language(2, "Deutsch", "de-DE", 2);
        catalog.add_customer_attribute(CustomerAttribute::new(5, "Favourite colour", AttributeControlType::DropdownList));
        catalog.add_customer_attribute_value(CustomerAttributeValue::new(1, 5, "Red"));
        catalog.add_customer_attribute_value(CustomerAttributeValue::new(2, 5, "Blue"));
        catalog.set_localized_property("CustomerAttribute", 5, "Name", 2, "Lieblingsfarbe");
        Arc::new(catalog)
    }

    fn factory(catalog: &Arc<InMemoryCatalog>) -> CustomerAttributeModelFactory {
        CustomerAttributeModelFactory::new(
            catalog.clone(),
            catalog.localized_model_factory(),
            AdminAreaSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_value_list_carries_attribute_id() {
        let catalog = catalog();
        let factory = factory(&catalog);
        let attribute = catalog.customer_attribute(5).unwrap();
        let search = AttributeValueSearchModel {
            attribute_id: 5,
            paging: PagingParams::new(1, 10),
        };

        let list = factory
            .prepare_attribute_value_list_model(&search, Some(&attribute))
            .await
            .unwrap();

        assert_eq!(list.total, 2);
        assert_eq!(list.data.len(), 2);
        assert!(list.data.iter().all(|row| row.attribute_id == 5));
        assert_eq!(list.data[0].name, "Red");
    }

    #[tokio::test]
    async fn test_list_rows_carry_control_type_label() {
        let catalog = catalog();
        catalog.set_resource("Enums.AttributeControlType.DropdownList", 1, "Drop-down list");
        let factory = factory(&catalog);

        let list = factory
            .prepare_attribute_list_model(&AttributeSearchModel::default())
            .await
            .unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.data[0].attribute_control_type_name, "Drop-down list");
    }

    #[tokio::test]
    async fn test_new_model_has_one_locale_per_language() {
        let catalog = catalog();
        let factory = factory(&catalog);
        let attribute = catalog.customer_attribute(5).unwrap();

        let model = factory.new_attribute_model(&attribute).await.unwrap();

        assert_eq!(model.name, "Favourite colour");
        assert_eq!(model.attribute_value_search_model.attribute_id, 5);
        assert_eq!(model.attribute_value_search_model.paging.page_size, 15);
        let languages: Vec<i32> = model.locales.iter().map(|locale| locale.language_id).collect();
        assert_eq!(languages, vec![1, 2]);
        assert_eq!(model.locales[0].name, "");
        assert_eq!(model.locales[1].name, "Lieblingsfarbe");
    }

    #[tokio::test]
    async fn test_supplied_model_wins_and_exclude_skips_locales() {
        let catalog = catalog();
        let factory = factory(&catalog);
        let attribute = catalog.customer_attribute(5).unwrap();
        let mut submitted = CustomerAttributeModelFactory::to_model(&attribute);
        submitted.name = "Edited".to_string();

        let model = factory
            .prepare_attribute_model(Some(submitted), Some(&attribute), true)
            .await
            .unwrap();

        assert_eq!(model.name, "Edited");
        assert!(model.locales.is_empty());
    }

    #[tokio::test]
    async fn test_missing_arguments() {
        let catalog = catalog();
        let factory = factory(&catalog);

        let result = factory.prepare_attribute_model(None, None, false).await;
        assert!(matches!(result, Err(FactoryError::MissingArgument("model"))));

        let result = factory
            .prepare_attribute_value_list_model(&AttributeValueSearchModel::default(), None)
            .await;
        assert!(matches!(result, Err(FactoryError::MissingArgument("attribute"))));
    }

    #[tokio::test]
    async fn test_value_model_stamps_parent_id() {
        let catalog = catalog();
        let factory = factory(&catalog);
        let attribute = catalog.customer_attribute(5).unwrap();

        let model = factory
            .prepare_attribute_value_model(Some(AttributeValueModel::default()), Some(&attribute), None, false)
            .await
            .unwrap();

        assert_eq!(model.attribute_id, 5);
        assert_eq!(model.locales.len(), 2);
        assert!(model.locales.iter().all(|locale| locale.name.is_empty()));
    }
}
