//! Inventory domain module.
//!
//! An in-memory, dual-indexed store of items: a primary index by id and a
//! per-category view ordered by descending quantity. Pure domain logic; the
//! only side channel is `tracing`.

pub mod config;
pub mod item;
pub mod notice;
pub mod ordering;
pub mod store;

pub use config::{DEFAULT_CATEGORIES, DEFAULT_RESTOCK_THRESHOLD, InventoryConfig};
pub use item::Item;
pub use notice::RestockNotice;
pub use ordering::{RankKey, by_rank};
pub use store::InventoryStore;
