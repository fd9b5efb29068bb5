// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Administration Area Configuration
//
// Defines the configuration manifest for the administration area, including:
// - Kubernetes-style manifest format (apiVersion/kind/metadata/spec)
// - Grid paging defaults
// - Base units of measure
// - Capability settings (payment, shipping, tax, widgets, external auth)
// - Running platform version and store location
// - Official plugin feed endpoint

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::plugin::CapabilitySettings;

pub const API_VERSION: &str = "bazaar.dev/v1";
pub const KIND: &str = "AdminConfig";

/// Top-level Kubernetes-style administration configuration manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfigManifest {
    /// API version (must be "bazaar.dev/v1")
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Resource kind (must be "AdminConfig")
    pub kind: String,

    /// Manifest metadata (name, labels, version)
    pub metadata: ManifestMetadata,

    /// Settings read by the model factories
    #[serde(default)]
    pub spec: AdminConfigSpec,
}

/// Manifest metadata (Kubernetes-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Human-readable deployment name
    pub name: String,

    /// Optional: Configuration version for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Optional: Labels for categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Settings content under `spec:`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfigSpec {
    #[serde(default)]
    pub admin_area: AdminAreaSettings,

    #[serde(default)]
    pub measure: MeasureSettings,

    #[serde(default)]
    pub payment: PaymentSettings,

    #[serde(default)]
    pub shipping: ShippingSettings,

    #[serde(default)]
    pub tax: TaxSettings,

    #[serde(default)]
    pub widget: WidgetSettings,

    #[serde(default)]
    pub external_authentication: ExternalAuthenticationSettings,

    #[serde(default)]
    pub system: SystemSettings,

    #[serde(default)]
    pub official_feed: OfficialFeedSettings,
}

impl AdminConfigSpec {
    /// Settings stores that decide plugin enabled state
    pub fn capability_settings(&self) -> CapabilitySettings {
        CapabilitySettings {
            payment: self.payment.clone(),
            shipping: self.shipping.clone(),
            tax: self.tax.clone(),
            external_authentication: self.external_authentication.clone(),
            widget: self.widget.clone(),
        }
    }
}

/// Grid defaults of the administration area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAreaSettings {
    /// Page size a grid opens with
    #[serde(default = "default_grid_page_size")]
    pub default_grid_page_size: u32,

    /// Comma-separated page sizes offered by grids
    #[serde(default = "default_grid_page_sizes")]
    pub grid_page_sizes: String,
}

impl AdminAreaSettings {
    /// Parsed `grid_page_sizes`; unparsable entries are skipped
    pub fn page_sizes(&self) -> Vec<u32> {
        self.grid_page_sizes
            .split(',')
            .filter_map(|size| size.trim().parse().ok())
            .collect()
    }
}

/// Base units every other unit's ratio is relative to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSettings {
    #[serde(default)]
    pub base_dimension_id: i32,

    #[serde(default)]
    pub base_weight_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSettings {
    #[serde(default)]
    pub active_payment_method_system_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingSettings {
    #[serde(default)]
    pub active_shipping_rate_computation_method_system_names: Vec<String>,

    #[serde(default)]
    pub active_pickup_point_provider_system_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSettings {
    /// The one tax provider in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tax_provider_system_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    #[serde(default)]
    pub active_widget_system_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalAuthenticationSettings {
    #[serde(default)]
    pub active_authentication_method_system_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Version of the running platform, matched against feed version names
    #[serde(default = "default_current_version")]
    pub current_version: String,

    /// Store base URL with trailing slash
    #[serde(default = "default_store_location")]
    pub store_location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialFeedSettings {
    /// Base URL of the remote plugin catalog API
    #[serde(default = "default_feed_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,

    /// Rows per page of the feed browser grid
    #[serde(default = "default_feed_page_size")]
    pub page_size: u32,
}

fn default_grid_page_size() -> u32 {
    15
}

fn default_grid_page_sizes() -> String {
    "7, 15, 20, 50, 100".to_string()
}

fn default_current_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_store_location() -> String {
    "http://localhost:5000/".to_string()
}

fn default_feed_endpoint() -> String {
    "https://feed.bazaar.dev/api".to_string()
}

fn default_feed_timeout() -> u64 {
    10
}

fn default_feed_page_size() -> u32 {
    15
}

impl Default for AdminAreaSettings {
    fn default() -> Self {
        Self {
            default_grid_page_size: default_grid_page_size(),
            grid_page_sizes: default_grid_page_sizes(),
        }
    }
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            current_version: default_current_version(),
            store_location: default_store_location(),
        }
    }
}

impl Default for OfficialFeedSettings {
    fn default() -> Self {
        Self {
            endpoint: default_feed_endpoint(),
            timeout_secs: default_feed_timeout(),
            page_size: default_feed_page_size(),
        }
    }
}

impl Default for AdminConfigManifest {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: ManifestMetadata {
                name: "bazaar-admin".to_string(),
                version: Some("1.0.0".to_string()),
                labels: None,
            },
            spec: AdminConfigSpec::default(),
        }
    }
}

impl AdminConfigManifest {
    /// Load configuration from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Parse configuration from YAML string
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml).context("Invalid config YAML")?;
        Ok(config)
    }

    /// Discover configuration file using precedence order
    /// 1. BAZAAR_CONFIG_PATH environment variable
    /// 2. ./bazaar-admin.yaml (working directory)
    /// 3. ~/.bazaar/admin.yaml (user home)
    /// 4. /etc/bazaar/admin.yaml (system, Unix) or C:\ProgramData\Bazaar\admin.yaml (Windows)
    pub fn discover_config() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("BAZAAR_CONFIG_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let cwd = PathBuf::from("./bazaar-admin.yaml");
        if cwd.exists() {
            return Some(cwd);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".bazaar").join("admin.yaml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        #[cfg(unix)]
        let system_config = PathBuf::from("/etc/bazaar/admin.yaml");
        #[cfg(windows)]
        let system_config = PathBuf::from("C:\\ProgramData\\Bazaar\\admin.yaml");

        if system_config.exists() {
            return Some(system_config);
        }

        None
    }

    /// Load configuration with discovery, fallback to default
    pub fn load_or_default(cli_path: Option<PathBuf>) -> anyhow::Result<Self> {
        // Explicit CLI path must exist and parse
        if let Some(path) = cli_path {
            tracing::info!("Loading configuration from explicit path: {:?}", path);
            let mut config = Self::from_yaml_file(&path)
                .with_context(|| format!("Failed to load config at {:?}", path))?;
            config.apply_env_overrides();
            return Ok(config);
        }

        if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading configuration from discovered path: {:?}", config_path);
            let mut config = Self::from_yaml_file(config_path)?;
            config.apply_env_overrides();
            Ok(config)
        } else {
            tracing::warn!("No configuration file found in standard locations. Using defaults.");
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("BAZAAR_OFFICIAL_FEED_URL") {
            tracing::info!("Environment override: BAZAAR_OFFICIAL_FEED_URL={}", endpoint);
            self.spec.official_feed.endpoint = endpoint;
        }

        if let Ok(version) = std::env::var("BAZAAR_CURRENT_VERSION") {
            tracing::info!("Environment override: BAZAAR_CURRENT_VERSION={}", version);
            self.spec.system.current_version = version;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_version != API_VERSION {
            anyhow::bail!(
                "Invalid apiVersion: '{}'. Must be '{}'",
                self.api_version,
                API_VERSION
            );
        }

        if self.kind != KIND {
            anyhow::bail!("Invalid kind: '{}'. Must be '{}'", self.kind, KIND);
        }

        if self.metadata.name.is_empty() {
            anyhow::bail!("metadata.name cannot be empty");
        }

        let admin_area = &self.spec.admin_area;
        if admin_area.default_grid_page_size == 0 {
            anyhow::bail!("spec.admin_area.default_grid_page_size must be greater than zero");
        }

        if !admin_area.page_sizes().contains(&admin_area.default_grid_page_size) {
            anyhow::bail!(
                "spec.admin_area.default_grid_page_size {} is not one of grid_page_sizes '{}'",
                admin_area.default_grid_page_size,
                admin_area.grid_page_sizes
            );
        }

        if self.spec.official_feed.page_size == 0 {
            anyhow::bail!("spec.official_feed.page_size must be greater than zero");
        }

        if self.spec.official_feed.endpoint.is_empty() {
            anyhow::bail!("spec.official_feed.endpoint cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let manifest = AdminConfigManifest::default();
        assert_eq!(manifest.api_version, "bazaar.dev/v1");
        assert_eq!(manifest.kind, "AdminConfig");
        assert_eq!(manifest.spec.admin_area.default_grid_page_size, 15);
        assert_eq!(manifest.spec.admin_area.page_sizes(), vec![7, 15, 20, 50, 100]);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
apiVersion: bazaar.dev/v1
kind: AdminConfig
metadata:
  name: staging-admin
spec:
  measure:
    base_dimension_id: 3
    base_weight_id: 2
  tax:
    active_tax_provider_system_name: Tax.FixedRate
"#;
        let manifest = AdminConfigManifest::from_yaml_str(yaml).unwrap();

        assert_eq!(manifest.metadata.name, "staging-admin");
        assert_eq!(manifest.spec.measure.base_dimension_id, 3);
        assert_eq!(manifest.spec.admin_area.default_grid_page_size, 15);
        assert_eq!(
            manifest.spec.capability_settings().tax.active_tax_provider_system_name.as_deref(),
            Some("Tax.FixedRate")
        );
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bazaar-admin.yaml");

        let mut manifest = AdminConfigManifest::default();
        manifest.spec.widget.active_widget_system_names = vec!["Widgets.NivoSlider".to_string()];
        manifest.to_yaml_file(&path).unwrap();

        let loaded = AdminConfigManifest::load_or_default(Some(path)).unwrap();
        assert_eq!(
            loaded.spec.widget.active_widget_system_names,
            vec!["Widgets.NivoSlider".to_string()]
        );
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = AdminConfigManifest::load_or_default(Some(dir.path().join("missing.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bazaar-admin.yaml");
        std::fs::write(&path, "spec: [not, a, mapping").unwrap();

        let err = AdminConfigManifest::load_or_default(Some(path.clone())).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to load config at"));
        assert!(chain.contains(&format!("Failed to parse config file: {}", path.display())));

        let err = AdminConfigManifest::from_yaml_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn test_validation() {
        let mut manifest = AdminConfigManifest::default();
        assert!(manifest.validate().is_ok());

        manifest.api_version = "wrong/v1".to_string();
        assert!(manifest.validate().is_err());
        manifest.api_version = API_VERSION.to_string();

        manifest.kind = "NodeConfig".to_string();
        assert!(manifest.validate().is_err());
        manifest.kind = KIND.to_string();

        manifest.spec.admin_area.default_grid_page_size = 25;
        assert!(manifest.validate().is_err());
        manifest.spec.admin_area.default_grid_page_size = 15;

        manifest.spec.official_feed.endpoint = String::new();
        assert!(manifest.validate().is_err());
    }
}
