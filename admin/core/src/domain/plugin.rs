// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Plugins and Their Capabilities
//!
//! A [`PluginDescriptor`] is the static manifest of a plugin; once installed it
//! resolves to a runtime [`Plugin`] instance. An instance may fill one or more
//! capability roles (payment method, tax provider, widget, ...). Whether the
//! administrator can toggle the plugin, and whether it is currently enabled,
//! depends on which role it fills and is never stored on the descriptor.
//!
//! ## Capability Resolution
//!
//! [`PluginCapability::detect`] probes the instance once per known role in
//! the fixed order of [`PluginCapability::PROBE_ORDER`]:
//!
//! 1. payment method
//! 2. shipping rate computation method
//! 3. pickup point provider
//! 4. tax provider
//! 5. external authentication method
//! 6. widget
//!
//! The first role that matches wins. An instance matching none resolves to
//! [`PluginCapability::Unmanaged`] and cannot be toggled.
//!
//! Tax providers are singletons: "enabled" means the plugin is the one active
//! tax provider, compared case-insensitively by system name.

use serde::{Deserialize, Serialize};

use crate::domain::admin_config::{
    ExternalAuthenticationSettings, PaymentSettings, ShippingSettings, TaxSettings, WidgetSettings,
};
use crate::domain::localization::LocalizedEnum;

/// Which descriptors a plugin listing loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadPluginsMode {
    #[default]
    All = 0,
    InstalledOnly = 10,
    NotInstalledOnly = 20,
}

impl LoadPluginsMode {
    pub const ALL: [LoadPluginsMode; 3] = [Self::All, Self::InstalledOnly, Self::NotInstalledOnly];

    pub fn id(&self) -> i32 {
        *self as i32
    }

    /// Unknown ids fall back to [`LoadPluginsMode::All`]
    pub fn from_id(id: i32) -> Self {
        match id {
            10 => Self::InstalledOnly,
            20 => Self::NotInstalledOnly,
            _ => Self::All,
        }
    }

    pub fn includes(&self, installed: bool) -> bool {
        match self {
            Self::All => true,
            Self::InstalledOnly => installed,
            Self::NotInstalledOnly => !installed,
        }
    }
}

impl LocalizedEnum for LoadPluginsMode {
    const TYPE_NAME: &'static str = "LoadPluginsMode";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::InstalledOnly => "InstalledOnly",
            Self::NotInstalledOnly => "NotInstalledOnly",
        }
    }
}

/// Static manifest of a plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub system_name: String,
    pub friendly_name: String,
    pub group: String,
    pub version: String,
    #[serde(default)]
    pub supported_versions: Vec<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub installed: bool,
    /// Directory the plugin is deployed to, relative to `Plugins/`
    pub plugin_folder: String,
    /// Logo file inside the plugin folder, if the plugin ships one
    #[serde(default)]
    pub logo_file_name: Option<String>,
    /// Store ids the plugin is limited to; empty means all stores
    #[serde(default)]
    pub limited_to_stores: Vec<i32>,
    /// Customer role ids the plugin is limited to; empty means all roles
    #[serde(default)]
    pub limited_to_customer_roles: Vec<i32>,
}

impl PluginDescriptor {
    /// Public URL of the plugin logo.
    pub fn logo_url(&self, store_location: &str) -> Option<String> {
        self.logo_file_name.as_ref().map(|logo| {
            format!("{}Plugins/{}/{}", store_location, self.plugin_folder, logo)
        })
    }
}

/// A resolved, running plugin instance.
///
/// The capability probes default to `false`; implementations override the
/// ones for the roles they fill.
pub trait Plugin: Send + Sync {
    fn descriptor(&self) -> &PluginDescriptor;

    /// Relative URL of the plugin's configuration page
    fn configuration_page_url(&self) -> Option<String> {
        None
    }

    fn is_payment_method(&self) -> bool {
        false
    }

    fn is_shipping_rate_computation_method(&self) -> bool {
        false
    }

    fn is_pickup_point_provider(&self) -> bool {
        false
    }

    fn is_tax_provider(&self) -> bool {
        false
    }

    fn is_external_authentication_method(&self) -> bool {
        false
    }

    fn is_widget(&self) -> bool {
        false
    }
}

/// Settings stores consulted to derive a plugin's enabled state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilitySettings {
    pub payment: PaymentSettings,
    pub shipping: ShippingSettings,
    pub tax: TaxSettings,
    pub external_authentication: ExternalAuthenticationSettings,
    pub widget: WidgetSettings,
}

/// The single role that governs how a plugin is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginCapability {
    PaymentMethod,
    ShippingRateComputationMethod,
    PickupPointProvider,
    TaxProvider,
    ExternalAuthenticationMethod,
    Widget,
    /// Matches none of the known roles; not toggleable
    Unmanaged,
}

impl PluginCapability {
    /// Order in which roles are probed; the first match wins
    pub const PROBE_ORDER: [PluginCapability; 6] = [
        Self::PaymentMethod,
        Self::ShippingRateComputationMethod,
        Self::PickupPointProvider,
        Self::TaxProvider,
        Self::ExternalAuthenticationMethod,
        Self::Widget,
    ];

    /// Resolve the governing role of a plugin instance.
    pub fn detect(plugin: &dyn Plugin) -> Self {
        Self::PROBE_ORDER
            .into_iter()
            .find(|capability| capability.probe(plugin))
            .unwrap_or(Self::Unmanaged)
    }

    /// Whether `plugin` fills this role
    pub fn probe(&self, plugin: &dyn Plugin) -> bool {
        match self {
            Self::PaymentMethod => plugin.is_payment_method(),
            Self::ShippingRateComputationMethod => plugin.is_shipping_rate_computation_method(),
            Self::PickupPointProvider => plugin.is_pickup_point_provider(),
            Self::TaxProvider => plugin.is_tax_provider(),
            Self::ExternalAuthenticationMethod => plugin.is_external_authentication_method(),
            Self::Widget => plugin.is_widget(),
            Self::Unmanaged => false,
        }
    }

    pub fn can_change_enabled(&self) -> bool {
        !matches!(self, Self::Unmanaged)
    }

    /// Enabled state of the plugin named `system_name` under this role.
    ///
    /// Always `false` for [`PluginCapability::Unmanaged`].
    pub fn is_enabled(&self, system_name: &str, settings: &CapabilitySettings) -> bool {
        match self {
            Self::PaymentMethod => {
                contains_system_name(&settings.payment.active_payment_method_system_names, system_name)
            }
            Self::ShippingRateComputationMethod => contains_system_name(
                &settings.shipping.active_shipping_rate_computation_method_system_names,
                system_name,
            ),
            Self::PickupPointProvider => contains_system_name(
                &settings.shipping.active_pickup_point_provider_system_names,
                system_name,
            ),
            Self::TaxProvider => settings
                .tax
                .active_tax_provider_system_name
                .as_deref()
                .is_some_and(|active| system_names_equal(active, system_name)),
            Self::ExternalAuthenticationMethod => contains_system_name(
                &settings.external_authentication.active_authentication_method_system_names,
                system_name,
            ),
            Self::Widget => {
                contains_system_name(&settings.widget.active_widget_system_names, system_name)
            }
            Self::Unmanaged => false,
        }
    }
}

/// Case-insensitive system name comparison
pub fn system_names_equal(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

fn contains_system_name(active: &[String], system_name: &str) -> bool {
    active.iter().any(|name| system_names_equal(name, system_name))
}
