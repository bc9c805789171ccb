//! Store configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stockroom_core::{Category, DomainError, DomainResult};

pub const DEFAULT_RESTOCK_THRESHOLD: u64 = 10;

pub const DEFAULT_CATEGORIES: [&str; 3] = ["Electronics", "Furniture", "Groceries"];

/// Per-store constants, fixed at construction.
///
/// `categories` is the ordered list the driver presents and validates menu
/// choices against. The store itself accepts any non-blank category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryConfig {
    #[serde(default = "default_restock_threshold")]
    pub restock_threshold: u64,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

fn default_restock_threshold() -> u64 {
    DEFAULT_RESTOCK_THRESHOLD
}

fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .filter_map(|name| Category::parse(*name).ok())
        .collect()
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            restock_threshold: default_restock_threshold(),
            categories: default_categories(),
        }
    }
}

impl InventoryConfig {
    pub fn with_restock_threshold(mut self, restock_threshold: u64) -> Self {
        self.restock_threshold = restock_threshold;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Category list must be non-empty and free of duplicates.
    pub fn validate(&self) -> DomainResult<()> {
        if self.categories.is_empty() {
            return Err(DomainError::invalid_argument(
                "at least one category is required",
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.as_str()) {
                return Err(DomainError::invalid_argument(format!(
                    "duplicate category: {category}"
                )));
            }
        }

        Ok(())
    }
}
