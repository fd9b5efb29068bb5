// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! In-process service wiring
//!
//! Loads the configuration manifest and the catalog fixture, then builds
//! the model factories over the in-memory ports.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use bazaar_admin_core::{
    admin_config::AdminConfigManifest,
    application::{
        affiliate::StandardAffiliateModelFactory,
        attribute::{CustomerAttributeModelFactory, VendorAttributeModelFactory},
        measure::StandardMeasureModelFactory,
        plugin::StandardPluginModelFactory,
        product::StandardProductModelFactory,
    },
    infrastructure::{
        fixture::CatalogFixture,
        memory::{InMemoryCatalog, InMemoryPluginFinder},
        official_feed_client::HttpOfficialFeedClient,
    },
};

/// File locations given on the command line
#[derive(Debug, Clone, Default)]
pub struct ServicePaths {
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

pub struct AdminServices {
    config: AdminConfigManifest,
    catalog: Arc<InMemoryCatalog>,
    plugin_finder: Arc<InMemoryPluginFinder>,
}

impl AdminServices {
    pub fn load(paths: &ServicePaths) -> Result<Self> {
        let config = AdminConfigManifest::load_or_default(paths.config.clone())
            .context("Failed to load configuration")?;
        config.validate().context("Configuration validation failed")?;

        let (catalog, plugin_finder) = match &paths.catalog {
            Some(path) => {
                tracing::info!("Loading catalog fixture from {:?}", path);
                CatalogFixture::from_yaml_file(path)?.into_services()
            }
            None => {
                tracing::info!("No catalog fixture given. Using an empty catalog.");
                (
                    Arc::new(InMemoryCatalog::with_default_language()),
                    Arc::new(InMemoryPluginFinder::new()),
                )
            }
        };

        Ok(Self::from_parts(config, catalog, plugin_finder))
    }

    pub fn from_parts(
        config: AdminConfigManifest,
        catalog: Arc<InMemoryCatalog>,
        plugin_finder: Arc<InMemoryPluginFinder>,
    ) -> Self {
        Self {
            config,
            catalog,
            plugin_finder,
        }
    }

    pub fn config(&self) -> &AdminConfigManifest {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<InMemoryCatalog> {
        &self.catalog
    }

    pub fn plugin_finder(&self) -> &Arc<InMemoryPluginFinder> {
        &self.plugin_finder
    }

    pub fn measure_factory(&self) -> StandardMeasureModelFactory {
        StandardMeasureModelFactory::new(
            self.catalog.clone(),
            self.config.spec.measure.clone(),
            self.config.spec.admin_area.clone(),
        )
    }

    pub fn customer_attribute_factory(&self) -> CustomerAttributeModelFactory {
        CustomerAttributeModelFactory::new(
            self.catalog.clone(),
            self.catalog.localized_model_factory(),
            self.config.spec.admin_area.clone(),
        )
    }

    pub fn vendor_attribute_factory(&self) -> VendorAttributeModelFactory {
        VendorAttributeModelFactory::new(
            self.catalog.clone(),
            self.catalog.localized_model_factory(),
            self.config.spec.admin_area.clone(),
        )
    }

    pub fn affiliate_factory(&self) -> StandardAffiliateModelFactory {
        StandardAffiliateModelFactory::new(
            self.catalog.clone(),
            self.catalog.base_admin_model_factory(self.plugin_finder.clone()),
            self.config.spec.admin_area.clone(),
            self.config.spec.system.clone(),
        )
    }

    pub fn product_factory(&self) -> StandardProductModelFactory {
        StandardProductModelFactory::new(
            self.catalog.clone(),
            self.catalog.clone(),
            self.catalog.clone(),
            self.catalog.clone(),
            self.catalog.base_admin_model_factory(self.plugin_finder.clone()),
            self.config.spec.admin_area.clone(),
        )
    }

    /// Plugin factory; the feed client is only contacted by feed commands
    pub fn plugin_factory(&self) -> Result<StandardPluginModelFactory> {
        let feed_client = HttpOfficialFeedClient::from_settings(&self.config.spec.official_feed)
            .context("Failed to create official feed client")?;

        Ok(StandardPluginModelFactory::new(
            self.plugin_finder.clone(),
            Arc::new(feed_client),
            self.catalog.base_admin_model_factory(self.plugin_finder.clone()),
            self.config.spec.capability_settings(),
            self.config.spec.admin_area.clone(),
            self.config.spec.system.clone(),
            self.config.spec.official_feed.clone(),
        ))
    }
}
