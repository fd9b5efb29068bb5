// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Configuration management commands
//!
//! Commands: show, validate, generate

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

use bazaar_admin_core::admin_config::AdminConfigManifest;

const MINIMAL_TEMPLATE: &str = include_str!("../../templates/admin-config-minimal.yaml");
const EXAMPLES_TEMPLATE: &str = include_str!("../../templates/admin-config-with-examples.yaml");

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show config file paths checked
        #[arg(long)]
        paths: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to config file (default: discover)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Generate sample configuration
    Generate {
        /// Output path (default: ./bazaar-admin.yaml)
        #[arg(short, long, default_value = "./bazaar-admin.yaml")]
        output: PathBuf,

        /// Include examples and comments
        #[arg(long)]
        examples: bool,
    },
}

pub async fn handle_command(command: ConfigCommand, config_override: Option<PathBuf>) -> Result<()> {
    match command {
        ConfigCommand::Show { paths } => show(config_override, paths).await,
        ConfigCommand::Validate { file } => validate(file.or(config_override)).await,
        ConfigCommand::Generate { output, examples } => generate(output, examples).await,
    }
}

async fn show(config_override: Option<PathBuf>, show_paths: bool) -> Result<()> {
    let config = AdminConfigManifest::load_or_default(config_override.clone())
        .context("Failed to load configuration")?;

    if show_paths {
        println!("{}", "Configuration discovery paths:".bold());
        if let Some(path) = &config_override {
            println!("  1. --config flag: {}", path.display());
        } else {
            println!("  1. --config flag: {}", "(not set)".dimmed());
        }
        println!(
            "  2. BAZAAR_CONFIG_PATH: {}",
            std::env::var("BAZAAR_CONFIG_PATH")
                .unwrap_or_else(|_| "(not set)".to_string())
                .dimmed()
        );
        println!("  3. ./bazaar-admin.yaml");
        println!("  4. ~/.bazaar/admin.yaml");
        println!("  5. /etc/bazaar/admin.yaml");
        println!();
    }

    println!("{}", "Current configuration:".bold());
    println!("  Name: {}", config.metadata.name);
    println!();

    let spec = &config.spec;
    println!("{}", "Grids:".bold());
    println!("  Default page size: {}", spec.admin_area.default_grid_page_size);
    println!("  Page sizes: {}", spec.admin_area.grid_page_sizes);
    println!();

    println!("{}", "Measures:".bold());
    println!("  Base dimension id: {}", spec.measure.base_dimension_id);
    println!("  Base weight id: {}", spec.measure.base_weight_id);
    println!();

    println!("{}", "Plugins:".bold());
    print_active("Payment methods", &spec.payment.active_payment_method_system_names);
    print_active("Shipping rate methods", &spec.shipping.active_shipping_rate_computation_method_system_names);
    print_active("Pickup point providers", &spec.shipping.active_pickup_point_provider_system_names);
    println!(
        "  Tax provider: {}",
        spec.tax.active_tax_provider_system_name.as_deref().unwrap_or("(none)")
    );
    print_active(
        "External auth methods",
        &spec.external_authentication.active_authentication_method_system_names,
    );
    print_active("Widgets", &spec.widget.active_widget_system_names);
    println!();

    println!("{}", "System:".bold());
    println!("  Running version: {}", spec.system.current_version);
    println!("  Store location: {}", spec.system.store_location);
    println!("  Official feed: {}", spec.official_feed.endpoint);
    println!();

    Ok(())
}

fn print_active(label: &str, system_names: &[String]) {
    if system_names.is_empty() {
        println!("  {}: {}", label, "(none)".dimmed());
    } else {
        println!("  {}: {}", label, system_names.join(", "));
    }
}

async fn validate(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration...");

    let config = AdminConfigManifest::load_or_default(config_path)
        .context("Failed to load configuration")?;

    config
        .validate()
        .context("Configuration validation failed")?;

    println!("{}", "✓ Configuration is valid".green());

    Ok(())
}

async fn generate(output: PathBuf, with_examples: bool) -> Result<()> {
    let sample = if with_examples {
        EXAMPLES_TEMPLATE
    } else {
        MINIMAL_TEMPLATE
    };

    std::fs::write(&output, sample)
        .with_context(|| format!("Failed to write config to {:?}", output))?;

    println!(
        "{}",
        format!("✓ Configuration generated: {}", output.display()).green()
    );

    Ok(())
}
