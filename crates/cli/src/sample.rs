//! Demo data loaded at startup.

use stockroom_core::DomainResult;
use stockroom_inventory::{InventoryStore, RestockNotice};

/// `(id, name, category, quantity)`
pub const SAMPLE_ITEMS: [(&str, &str, &str, i64); 5] = [
    ("101", "Laptop", "Electronics", 50),
    ("102", "Phone", "Electronics", 30),
    ("103", "Table", "Furniture", 20),
    ("104", "Chair", "Furniture", 5),
    ("105", "Rice", "Groceries", 100),
];

/// Threshold of the secondary `warehouse` inventory.
pub const WAREHOUSE_RESTOCK_THRESHOLD: u64 = 5;

/// Load the sample items, returning the restock notices they raise.
pub fn seed(store: &mut InventoryStore) -> DomainResult<Vec<RestockNotice>> {
    let mut notices = Vec::new();
    for (id, name, category, quantity) in SAMPLE_ITEMS {
        notices.extend(store.add_or_update(id, name, category, quantity)?);
    }
    Ok(notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::InventoryConfig;

    #[test]
    fn seed_loads_all_items_and_flags_the_chair() {
        let mut store = InventoryStore::new(InventoryConfig::default()).unwrap();
        let notices = seed(&mut store).unwrap();

        assert_eq!(store.len(), SAMPLE_ITEMS.len());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].item_id.as_str(), "104");
    }

    #[test]
    fn seed_under_warehouse_threshold_is_quiet() {
        let config = InventoryConfig::default().with_restock_threshold(WAREHOUSE_RESTOCK_THRESHOLD);
        let mut store = InventoryStore::new(config).unwrap();
        assert!(seed(&mut store).unwrap().is_empty());
    }
}
