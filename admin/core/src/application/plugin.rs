// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Plugin Model Factory
//!
//! Local plugin grid and form, and the browser over the remote catalog of
//! officially published plugins.
//!
//! Installed plugins resolve to a running instance whose governing
//! [`PluginCapability`] decides whether the administrator may toggle it and
//! whether it is enabled. Feed lookups are best effort: failures of the
//! remote catalog surface as [`ServiceError::Remote`](crate::domain::repository::ServiceError)
//! and are not retried here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::base_admin::{BaseAdminModelFactory, DEFAULT_ITEM_VALUE};
use crate::application::error::{require, FactoryResult};
use crate::application::localized::ALL_ITEMS_RESOURCE;
use crate::application::paging::{paginate_by_request, set_grid_page_size, set_grid_page_size_with};
use crate::domain::admin_config::{AdminAreaSettings, OfficialFeedSettings, SystemSettings};
use crate::domain::official_feed::{category_breadcrumb, OfficialFeedPrice, OfficialFeedQuery};
use crate::domain::plugin::{CapabilitySettings, LoadPluginsMode, Plugin, PluginCapability, PluginDescriptor};
use crate::domain::repository::{OfficialFeedClient, PluginFinder};
use crate::models::common::{ListModel, SelectListItem};
use crate::models::plugin::{
    OfficialFeedPluginModel, OfficialFeedPluginSearchModel, PluginLocalizedModel, PluginModel, PluginSearchModel,
};

const FREE_PRICE_RESOURCE: &str = "Admin.Configuration.Plugins.OfficialFeed.Price.Free";
const COMMERCIAL_PRICE_RESOURCE: &str = "Admin.Configuration.Plugins.OfficialFeed.Price.Commercial";

#[async_trait]
pub trait PluginModelFactory: Send + Sync {
    async fn prepare_plugin_search_model(&self, model: PluginSearchModel) -> FactoryResult<PluginSearchModel>;

    async fn prepare_plugin_list_model(&self, search: &PluginSearchModel) -> FactoryResult<ListModel<PluginModel>>;

    async fn new_plugin_model(&self, descriptor: &PluginDescriptor) -> FactoryResult<PluginModel>;

    async fn populate_plugin_locales(
        &self,
        model: &mut PluginModel,
        descriptor: Option<&PluginDescriptor>,
    ) -> FactoryResult<()>;

    async fn prepare_plugin_model(
        &self,
        model: Option<PluginModel>,
        descriptor: Option<&PluginDescriptor>,
        exclude_properties: bool,
    ) -> FactoryResult<PluginModel>;

    async fn prepare_official_feed_plugin_search_model(
        &self,
        model: OfficialFeedPluginSearchModel,
    ) -> FactoryResult<OfficialFeedPluginSearchModel>;

    async fn prepare_official_feed_plugin_list_model(
        &self,
        search: &OfficialFeedPluginSearchModel,
    ) -> FactoryResult<ListModel<OfficialFeedPluginModel>>;
}

pub struct StandardPluginModelFactory {
    plugin_finder: Arc<dyn PluginFinder>,
    official_feed: Arc<dyn OfficialFeedClient>,
    base: BaseAdminModelFactory,
    capability_settings: CapabilitySettings,
    admin_area: AdminAreaSettings,
    system: SystemSettings,
    feed_settings: OfficialFeedSettings,
}

impl StandardPluginModelFactory {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        plugin_finder: Arc<dyn PluginFinder>,
        official_feed: Arc<dyn OfficialFeedClient>,
        base: BaseAdminModelFactory,
        capability_settings: CapabilitySettings,
        admin_area: AdminAreaSettings,
        system: SystemSettings,
        feed_settings: OfficialFeedSettings,
    ) -> Self {
        Self {
            plugin_finder,
            official_feed,
            base,
            capability_settings,
            admin_area,
            system,
            feed_settings,
        }
    }

    fn to_model(descriptor: &PluginDescriptor) -> PluginModel {
        PluginModel {
            group: descriptor.group.clone(),
            friendly_name: descriptor.friendly_name.clone(),
            system_name: descriptor.system_name.clone(),
            version: descriptor.version.clone(),
            supported_versions: descriptor.supported_versions.join(", "),
            author: descriptor.author.clone(),
            description: descriptor.description.clone(),
            display_order: descriptor.display_order,
            installed: descriptor.installed,
            ..Default::default()
        }
    }

    /// Configuration URL and toggle state of an installed plugin
    fn prepare_installed_plugin_model(&self, model: &mut PluginModel, plugin: Option<&dyn Plugin>) -> FactoryResult<()> {
        let plugin = require(plugin, "plugin")?;

        model.configuration_url = plugin.configuration_page_url();

        let capability = PluginCapability::detect(plugin);
        model.can_change_enabled = capability.can_change_enabled();
        model.is_enabled = capability.is_enabled(&plugin.descriptor().system_name, &self.capability_settings);
        tracing::debug!(
            system_name = %plugin.descriptor().system_name,
            ?capability,
            enabled = model.is_enabled,
            "Resolved plugin capability"
        );
        Ok(())
    }

    async fn plugin_instance(&self, descriptor: &PluginDescriptor) -> FactoryResult<Option<Arc<dyn Plugin>>> {
        Ok(self
            .plugin_finder
            .get_plugin_instance(&descriptor.system_name)
            .await?)
    }

    async fn plugin_locales(&self, descriptor: Option<&PluginDescriptor>) -> FactoryResult<Vec<PluginLocalizedModel>> {
        let Some(descriptor) = descriptor else {
            return self.base.localized().prepare_blank_localized_models().await;
        };

        let localized = self.base.localized();
        localized
            .prepare_localized_models(move |language_id| async move {
                Ok(PluginLocalizedModel {
                    language_id,
                    friendly_name: localized
                        .localized_friendly_name(descriptor, language_id, false)
                        .await?,
                })
            })
            .await
    }
}

#[async_trait]
impl PluginModelFactory for StandardPluginModelFactory {
    async fn prepare_plugin_search_model(&self, mut model: PluginSearchModel) -> FactoryResult<PluginSearchModel> {
        model.available_load_modes.clear();
        self.base
            .prepare_load_plugin_modes(&mut model.available_load_modes, false)
            .await?;
        model.available_groups.clear();
        self.base.prepare_plugin_groups(&mut model.available_groups).await?;

        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_plugin_list_model(&self, search: &PluginSearchModel) -> FactoryResult<ListModel<PluginModel>> {
        let group = match search.search_group.as_str() {
            "" | DEFAULT_ITEM_VALUE => None,
            group => Some(group),
        };
        let load_mode = LoadPluginsMode::from_id(search.search_load_mode_id);

        let mut descriptors = self.plugin_finder.get_plugin_descriptors(load_mode, group).await?;
        descriptors.sort_by(|left, right| left.group.cmp(&right.group));
        tracing::debug!(count = descriptors.len(), ?load_mode, ?group, "Preparing plugin list");

        let page = paginate_by_request(descriptors, search);
        let total = page.total_count();
        let mut data = Vec::with_capacity(page.items().len());
        for descriptor in page.into_items() {
            let mut row = Self::to_model(&descriptor);
            row.logo_url = descriptor.logo_url(&self.system.store_location);
            if descriptor.installed {
                let instance = self.plugin_instance(&descriptor).await?;
                self.prepare_installed_plugin_model(&mut row, instance.as_deref())?;
            }
            data.push(row);
        }

        Ok(ListModel { data, total })
    }

    async fn new_plugin_model(&self, descriptor: &PluginDescriptor) -> FactoryResult<PluginModel> {
        self.prepare_plugin_model(None, Some(descriptor), false).await
    }

    async fn populate_plugin_locales(
        &self,
        model: &mut PluginModel,
        descriptor: Option<&PluginDescriptor>,
    ) -> FactoryResult<()> {
        model.locales = self.plugin_locales(descriptor).await?;
        Ok(())
    }

    async fn prepare_plugin_model(
        &self,
        model: Option<PluginModel>,
        descriptor: Option<&PluginDescriptor>,
        exclude_properties: bool,
    ) -> FactoryResult<PluginModel> {
        let mut model = match descriptor {
            Some(descriptor) => {
                let mut model = model.unwrap_or_else(|| Self::to_model(descriptor));
                model.logo_url = descriptor.logo_url(&self.system.store_location);
                model.selected_store_ids = descriptor.limited_to_stores.clone();
                model.selected_customer_role_ids = descriptor.limited_to_customer_roles.clone();
                if descriptor.installed {
                    let instance = self.plugin_instance(descriptor).await?;
                    self.prepare_installed_plugin_model(&mut model, instance.as_deref())?;
                }
                model
            }
            None => require(model, "model")?,
        };

        if !exclude_properties {
            self.populate_plugin_locales(&mut model, descriptor).await?;
        }

        model.available_customer_roles = self
            .base
            .prepare_model_customer_roles(&model.selected_customer_role_ids)
            .await?;
        model.available_stores = self.base.prepare_model_stores(&model.selected_store_ids).await?;

        Ok(model)
    }

    async fn prepare_official_feed_plugin_search_model(
        &self,
        mut model: OfficialFeedPluginSearchModel,
    ) -> FactoryResult<OfficialFeedPluginSearchModel> {
        let localized = self.base.localized();
        let all = localized.resource(ALL_ITEMS_RESOURCE).await?;

        model.available_versions = vec![SelectListItem::new(all.clone(), DEFAULT_ITEM_VALUE)];
        for version in self.official_feed.get_versions().await? {
            model.available_versions.push(SelectListItem::new(version.name, version.id));
        }

        // Remote version names only contain the running version string
        let current_version = self.system.current_version.as_str();
        if let Some(item) = model
            .available_versions
            .iter_mut()
            .find(|item| item.text.contains(current_version))
        {
            item.selected = true;
            model.search_version_id = item.value.parse().unwrap_or_default();
        }

        let categories = self.official_feed.get_categories().await?;
        model.available_categories = vec![SelectListItem::new(all.clone(), DEFAULT_ITEM_VALUE)];
        for category in &categories {
            model.available_categories.push(SelectListItem::new(
                category_breadcrumb(&categories, category),
                category.id,
            ));
        }

        model.available_prices = vec![
            SelectListItem::new(all, OfficialFeedPrice::All.id()),
            SelectListItem::new(localized.resource(FREE_PRICE_RESOURCE).await?, OfficialFeedPrice::Free.id()),
            SelectListItem::new(
                localized.resource(COMMERCIAL_PRICE_RESOURCE).await?,
                OfficialFeedPrice::Commercial.id(),
            ),
        ];

        let page_size = self.feed_settings.page_size;
        set_grid_page_size_with(&mut model.paging, page_size, &page_size.to_string());
        Ok(model)
    }

    async fn prepare_official_feed_plugin_list_model(
        &self,
        search: &OfficialFeedPluginSearchModel,
    ) -> FactoryResult<ListModel<OfficialFeedPluginModel>> {
        let query = OfficialFeedQuery {
            category_id: search.search_category_id,
            version_id: search.search_version_id,
            price: search.search_price_id,
            search_term: search.search_name.clone(),
            page_index: search.paging.page.saturating_sub(1),
            page_size: search.paging.page_size,
        };
        let page = self.official_feed.get_all_plugins(&query).await?;
        tracing::debug!(
            total = page.total_count,
            page_index = query.page_index,
            "Fetched official feed plugins"
        );

        Ok(ListModel {
            total: page.total_count,
            data: page
                .plugins
                .into_iter()
                .map(|plugin| OfficialFeedPluginModel {
                    url: plugin.url,
                    name: plugin.name,
                    category_name: plugin.category,
                    supported_versions: plugin.supported_versions,
                    picture_url: plugin.picture_url,
                    price: plugin.price,
                })
                .collect(),
        })
    }
}
