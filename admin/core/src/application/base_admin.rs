// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Select lists shared by several screens, and the store / customer role
//! pickers of store-mapped and ACL-limited entities.

use std::sync::Arc;

use crate::application::error::FactoryResult;
use crate::application::localized::{LocalizedModelFactory, ALL_ITEMS_RESOURCE};
use crate::domain::localization::LocalizedEnum;
use crate::domain::plugin::LoadPluginsMode;
use crate::domain::repository::{CustomerRoleService, PluginFinder, ProductService, StoreService};
use crate::models::common::SelectListItem;

/// Value of the special "All" item
pub const DEFAULT_ITEM_VALUE: &str = "0";

#[derive(Clone)]
pub struct BaseAdminModelFactory {
    localized: LocalizedModelFactory,
    stores: Arc<dyn StoreService>,
    customer_roles: Arc<dyn CustomerRoleService>,
    plugin_finder: Arc<dyn PluginFinder>,
    products: Arc<dyn ProductService>,
}

impl BaseAdminModelFactory {
    pub fn new(
        localized: LocalizedModelFactory,
        stores: Arc<dyn StoreService>,
        customer_roles: Arc<dyn CustomerRoleService>,
        plugin_finder: Arc<dyn PluginFinder>,
        products: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            localized,
            stores,
            customer_roles,
            plugin_finder,
            products,
        }
    }

    pub fn localized(&self) -> &LocalizedModelFactory {
        &self.localized
    }

    /// Inserts the "All" item with value `0` in front of `items`
    pub async fn prepare_default_item(&self, items: &mut Vec<SelectListItem>) -> FactoryResult<()> {
        let text = self.localized.resource(ALL_ITEMS_RESOURCE).await?;
        items.insert(0, SelectListItem::new(text, DEFAULT_ITEM_VALUE));
        Ok(())
    }

    /// Appends one item per enum value, labelled in the working language
    pub async fn prepare_enum_items<E>(
        &self,
        items: &mut Vec<SelectListItem>,
        values: &[E],
        id: fn(&E) -> i32,
        with_special_default_item: bool,
    ) -> FactoryResult<()>
    where
        E: LocalizedEnum + Sync,
    {
        for value in values {
            let text = self.localized.localized_enum(value).await?;
            items.push(SelectListItem::new(text, id(value)));
        }

        if with_special_default_item {
            self.prepare_default_item(items).await?;
        }
        Ok(())
    }

    pub async fn prepare_load_plugin_modes(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
    ) -> FactoryResult<()> {
        self.prepare_enum_items(items, &LoadPluginsMode::ALL, LoadPluginsMode::id, with_special_default_item)
            .await
    }

    pub async fn prepare_plugin_groups(&self, items: &mut Vec<SelectListItem>) -> FactoryResult<()> {
        for group in self.plugin_finder.get_plugin_groups().await? {
            items.push(SelectListItem::new(group.clone(), group));
        }
        self.prepare_default_item(items).await
    }

    pub async fn prepare_stores(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
    ) -> FactoryResult<()> {
        for store in self.stores.get_all_stores().await? {
            items.push(SelectListItem::new(store.name, store.id));
        }

        if with_special_default_item {
            self.prepare_default_item(items).await?;
        }
        Ok(())
    }

    pub async fn prepare_customer_roles(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
    ) -> FactoryResult<()> {
        for role in self.customer_roles.get_all_customer_roles(false).await? {
            items.push(SelectListItem::new(role.name, role.id));
        }

        if with_special_default_item {
            self.prepare_default_item(items).await?;
        }
        Ok(())
    }

    pub async fn prepare_warehouses(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
    ) -> FactoryResult<()> {
        for warehouse in self.products.get_all_warehouses().await? {
            items.push(SelectListItem::new(warehouse.name, warehouse.id));
        }

        if with_special_default_item {
            self.prepare_default_item(items).await?;
        }
        Ok(())
    }

    /// All / published only / unpublished only, valued 0 / 1 / 2
    pub async fn prepare_published_options(&self, items: &mut Vec<SelectListItem>) -> FactoryResult<()> {
        const OPTIONS: [(&str, i32); 3] = [
            ("Admin.Catalog.Products.List.SearchPublished.All", 0),
            ("Admin.Catalog.Products.List.SearchPublished.PublishedOnly", 1),
            ("Admin.Catalog.Products.List.SearchPublished.UnpublishedOnly", 2),
        ];

        for (resource, value) in OPTIONS {
            let text = self.localized.resource(resource).await?;
            items.push(SelectListItem::new(text, value));
        }
        Ok(())
    }

    /// Every store, selected when its id is in `selected_store_ids`
    pub async fn prepare_model_stores(&self, selected_store_ids: &[i32]) -> FactoryResult<Vec<SelectListItem>> {
        let stores = self.stores.get_all_stores().await?;
        Ok(stores
            .into_iter()
            .map(|store| SelectListItem {
                selected: selected_store_ids.contains(&store.id),
                text: store.name,
                value: store.id.to_string(),
            })
            .collect())
    }

    /// Every visible customer role, selected when its id is in
    /// `selected_role_ids`
    pub async fn prepare_model_customer_roles(
        &self,
        selected_role_ids: &[i32],
    ) -> FactoryResult<Vec<SelectListItem>> {
        let roles = self.customer_roles.get_all_customer_roles(false).await?;
        Ok(roles
            .into_iter()
            .map(|role| SelectListItem {
                selected: selected_role_ids.contains(&role.id),
                text: role.name,
                value: role.id.to_string(),
            })
            .collect())
    }
}

/// Maps the published option of a search model to a filter value
pub fn published_filter(search_published_id: i32) -> Option<bool> {
    match search_published_id {
        1 => Some(true),
        2 => Some(false),
        _ => None,
    }
}
