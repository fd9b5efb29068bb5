// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # bazaar-admin
//!
//! Renders administration-area models from a catalog fixture without a
//! running store.
//!
//! ## Commands
//!
//! - `bazaar-admin config show|validate|generate` - Configuration management
//! - `bazaar-admin measure list` - Dimension and weight grids
//! - `bazaar-admin attribute list|values <kind>` - Customer/vendor attributes
//! - `bazaar-admin affiliate list` - Affiliate grid
//! - `bazaar-admin product list|tags|low-stock` - Product grids
//! - `bazaar-admin plugin list|show` - Local plugins
//! - `bazaar-admin feed search` - Official plugin feed (network)
//!
//! Every model command prints the prepared model as pretty JSON on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use bazaar_admin::commands::{
    self, AffiliateCommand, AttributeCommand, ConfigCommand, FeedCommand, MeasureCommand,
    PluginCommand, ProductCommand,
};
use bazaar_admin::embedded::ServicePaths;

/// bazaar-admin - Administration model factories on the command line
#[derive(Parser)]
#[command(name = "bazaar-admin")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(
        short,
        long,
        global = true,
        env = "BAZAAR_CONFIG_PATH",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// Path to a catalog fixture (default: empty catalog)
    #[arg(long, global = true, env = "BAZAAR_CATALOG_PATH", value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "BAZAAR_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Measure dimensions and weights
    #[command(name = "measure")]
    Measure {
        #[command(subcommand)]
        command: MeasureCommand,
    },

    /// Customer and vendor attributes
    #[command(name = "attribute")]
    Attribute {
        #[command(subcommand)]
        command: AttributeCommand,
    },

    /// Affiliates
    #[command(name = "affiliate")]
    Affiliate {
        #[command(subcommand)]
        command: AffiliateCommand,
    },

    /// Products, tags and stock
    #[command(name = "product")]
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },

    /// Locally known plugins
    #[command(name = "plugin")]
    Plugin {
        #[command(subcommand)]
        command: PluginCommand,
    },

    /// Official plugin feed
    #[command(name = "feed")]
    Feed {
        #[command(subcommand)]
        command: FeedCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    let paths = ServicePaths {
        config: cli.config,
        catalog: cli.catalog,
    };

    match cli.command {
        Some(Commands::Config { command }) => commands::config::handle_command(command, paths.config).await,
        Some(Commands::Measure { command }) => commands::measure::handle_command(command, &paths).await,
        Some(Commands::Attribute { command }) => commands::attribute::handle_command(command, &paths).await,
        Some(Commands::Affiliate { command }) => commands::affiliate::handle_command(command, &paths).await,
        Some(Commands::Product { command }) => commands::product::handle_command(command, &paths).await,
        Some(Commands::Plugin { command }) => commands::plugin::handle_command(command, &paths).await,
        Some(Commands::Feed { command }) => commands::feed::handle_command(command, &paths).await,
        None => {
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    // stdout carries the JSON models
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}
