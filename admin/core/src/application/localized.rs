// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Locale Overlay Composer
//!
//! Builds the per-language overlays of detail models and resolves the
//! localized labels shown on grids. Overlays come out one per published
//! display language, in the language order returned by the
//! [`LanguageService`].

use std::future::Future;
use std::sync::Arc;

use futures::future::try_join_all;

use crate::application::error::FactoryResult;
use crate::domain::localization::{humanize_variant, LocalizedEntity, LocalizedEnum};
use crate::domain::plugin::PluginDescriptor;
use crate::domain::repository::{LanguageService, LocalizationService, WorkContext};
use crate::models::common::LocalizedModel;

pub const ALL_ITEMS_RESOURCE: &str = "Admin.Common.All";

#[derive(Clone)]
pub struct LocalizedModelFactory {
    languages: Arc<dyn LanguageService>,
    localization: Arc<dyn LocalizationService>,
    work_context: Arc<dyn WorkContext>,
}

impl LocalizedModelFactory {
    pub fn new(
        languages: Arc<dyn LanguageService>,
        localization: Arc<dyn LocalizationService>,
        work_context: Arc<dyn WorkContext>,
    ) -> Self {
        Self {
            languages,
            localization,
            work_context,
        }
    }

    /// Calls `projection` once per display language and returns the
    /// overlays in language order.
    pub async fn prepare_localized_models<L, F, Fut>(&self, projection: F) -> FactoryResult<Vec<L>>
    where
        F: Fn(i32) -> Fut,
        Fut: Future<Output = FactoryResult<L>>,
    {
        let languages = self.languages.get_all_languages(false).await?;
        tracing::debug!(languages = languages.len(), "Preparing localized models");

        try_join_all(languages.iter().map(|language| projection(language.id))).await
    }

    /// One empty overlay per display language
    pub async fn prepare_blank_localized_models<L: LocalizedModel>(&self) -> FactoryResult<Vec<L>> {
        let languages = self.languages.get_all_languages(false).await?;
        Ok(languages
            .iter()
            .map(|language| L::for_language(language.id))
            .collect())
    }

    /// Stored translation of `entity.<key>`; empty when not translated
    pub async fn localized_property<E>(&self, entity: &E, key: &str, language_id: i32) -> FactoryResult<String>
    where
        E: LocalizedEntity + ?Sized,
    {
        let value = self
            .localization
            .get_localized_property(entity.key_group(), entity.entity_id(), key, language_id)
            .await?;
        Ok(value.unwrap_or_default())
    }

    pub async fn working_language_id(&self) -> FactoryResult<i32> {
        Ok(self.work_context.working_language().await?.id)
    }

    /// String resource in the working language; the resource name itself
    /// when it is not translated
    pub async fn resource(&self, name: &str) -> FactoryResult<String> {
        let language_id = self.working_language_id().await?;
        let value = self.localization.get_resource(name, language_id).await?;
        Ok(value.unwrap_or_else(|| name.to_string()))
    }

    /// Label of an enum value in the working language, falling back to the
    /// humanized variant name
    pub async fn localized_enum<E: LocalizedEnum>(&self, value: &E) -> FactoryResult<String> {
        let language_id = self.working_language_id().await?;
        let label = self
            .localization
            .get_resource(&value.resource_name(), language_id)
            .await?;
        Ok(label.unwrap_or_else(|| humanize_variant(value.variant_name())))
    }

    /// Translated friendly name of a plugin.
    ///
    /// When not translated, falls back to the descriptor's friendly name if
    /// `return_default` is set and to an empty string otherwise.
    pub async fn localized_friendly_name(
        &self,
        descriptor: &PluginDescriptor,
        language_id: i32,
        return_default: bool,
    ) -> FactoryResult<String> {
        let resource = format!("Plugins.FriendlyName.{}", descriptor.system_name);
        let value = self
            .localization
            .get_resource(&resource, language_id)
            .await?
            .filter(|name| !name.is_empty());

        Ok(match value {
            Some(name) => name,
            None if return_default => descriptor.friendly_name.clone(),
            None => String::new(),
        })
    }
}
