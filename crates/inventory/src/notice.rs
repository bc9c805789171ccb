use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::item::Item;

/// Informational signal: an item was stored with a quantity strictly below
/// the store's restock threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockNotice {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u64,
    pub threshold: u64,
}

impl RestockNotice {
    /// Stable notice type identifier (used as a structured log field).
    pub const EVENT_TYPE: &'static str = "inventory.item.restock_needed";

    /// Returns a notice if `item` is below `threshold`.
    pub fn check(item: &Item, threshold: u64) -> Option<Self> {
        (item.quantity() < threshold).then(|| Self {
            item_id: item.id().clone(),
            name: item.name().to_string(),
            quantity: item.quantity(),
            threshold,
        })
    }
}

impl core::fmt::Display for RestockNotice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Restock Notification: Item {} ({}) is below the threshold!",
            self.item_id, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_raises_notice() {
        let chair = Item::new("104", "Chair", "Furniture", 5).unwrap();
        let notice = RestockNotice::check(&chair, 10).unwrap();
        assert_eq!(notice.item_id.as_str(), "104");
        assert_eq!(notice.quantity, 5);
        assert_eq!(
            notice.to_string(),
            "Restock Notification: Item 104 (Chair) is below the threshold!"
        );
    }

    #[test]
    fn at_threshold_is_not_below() {
        let item = Item::new("1", "Lamp", "Furniture", 10).unwrap();
        assert_eq!(RestockNotice::check(&item, 10), None);
    }

    #[test]
    fn zero_threshold_never_notifies() {
        let empty = Item::new("1", "Lamp", "Furniture", 0).unwrap();
        assert_eq!(RestockNotice::check(&empty, 0), None);
    }
}
