//! Deterministic ranking: quantity descending, then id ascending.

use core::cmp::{Ordering, Reverse};

use stockroom_core::{Entity, ItemId};

use crate::item::Item;

/// Ordering key of an item inside a category bucket.
///
/// Field order matters: the derived `Ord` compares `quantity` (reversed)
/// first and falls back to `id`, so two items never compare equal unless they
/// share an id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankKey {
    quantity: Reverse<u64>,
    id: ItemId,
}

impl RankKey {
    pub fn of(item: &Item) -> Self {
        Self {
            quantity: Reverse(item.quantity()),
            id: item.id().clone(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity.0
    }
}

/// Comparator equivalent to comparing `RankKey::of(a)` with `RankKey::of(b)`,
/// without cloning ids.
pub fn by_rank(a: &Item, b: &Item) -> Ordering {
    b.quantity()
        .cmp(&a.quantity())
        .then_with(|| a.id().cmp(b.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn item(id: &str, quantity: i64) -> Item {
        Item::new(id, id, "Electronics", quantity).unwrap()
    }

    #[test]
    fn higher_quantity_ranks_first() {
        assert!(RankKey::of(&item("2", 50)) < RankKey::of(&item("1", 30)));
        assert_eq!(by_rank(&item("2", 50), &item("1", 30)), Ordering::Less);
    }

    #[test]
    fn ties_break_by_id_ascending() {
        let set: BTreeSet<_> = [item("b", 7), item("c", 7), item("a", 7)]
            .iter()
            .map(RankKey::of)
            .collect();
        let ids: Vec<_> = set.iter().map(|k| k.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn comparator_agrees_with_key() {
        let pairs = [(item("x", 1), item("y", 1)), (item("y", 9), item("x", 1))];
        for (a, b) in &pairs {
            assert_eq!(by_rank(a, b), RankKey::of(a).cmp(&RankKey::of(b)));
        }
    }
}
