//! Process arguments and configuration resolution.
//!
//! Precedence, lowest first: built-in defaults, `--config` file, flags (or
//! their environment variables).

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use stockroom_core::Category;
use stockroom_inventory::InventoryConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about = "In-memory inventory tracker")]
pub struct Args {
    /// Quantity below which a stored item raises a restock notice.
    #[arg(long, env = "STOCKROOM_RESTOCK_THRESHOLD")]
    pub restock_threshold: Option<u64>,

    /// Recognized category, in menu order (repeatable or comma separated).
    #[arg(long = "category", env = "STOCKROOM_CATEGORIES", value_delimiter = ',')]
    pub categories: Vec<String>,

    /// JSON file with `restock_threshold` and/or `categories`.
    #[arg(long, env = "STOCKROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with empty inventories instead of the sample items.
    #[arg(long)]
    pub no_seed: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn resolve_config(&self) -> anyhow::Result<InventoryConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => InventoryConfig::default(),
        };

        if let Some(threshold) = self.restock_threshold {
            config.restock_threshold = threshold;
        }

        if !self.categories.is_empty() {
            config.categories = self
                .categories
                .iter()
                .map(|name| Category::parse(name.as_str()))
                .collect::<Result<Vec<_>, _>>()
                .context("invalid --category value")?;
        }

        config
            .validate()
            .context("invalid inventory configuration")?;

        Ok(config)
    }
}

pub fn load_config_file(path: &Path) -> anyhow::Result<InventoryConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {:?}", path))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config file at {:?}", path))
}
