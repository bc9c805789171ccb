use std::collections::{BTreeMap, BTreeSet, HashMap};

use stockroom_core::{Category, DomainError, DomainResult, Entity, ItemId};

use crate::config::InventoryConfig;
use crate::item::{Item, checked_quantity};
use crate::notice::RestockNotice;
use crate::ordering::{RankKey, by_rank};

type Buckets = HashMap<Category, BTreeSet<RankKey>>;

/// Dual-indexed in-memory inventory.
///
/// - `by_id` is the source of truth.
/// - `by_category` holds one rank key per item, in the bucket of the item's
///   category, ordered by quantity descending then id ascending.
///
/// Both indexes are private; every mutation goes through `put` / `remove`, so
/// a bucket never holds an id missing from `by_id` and an id never sits in two
/// buckets. Buckets are dropped once empty.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    config: InventoryConfig,
    by_id: BTreeMap<ItemId, Item>,
    by_category: Buckets,
}

impl InventoryStore {
    pub fn new(config: InventoryConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            by_id: BTreeMap::new(),
            by_category: HashMap::new(),
        })
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn restock_threshold(&self) -> u64 {
        self.config.restock_threshold
    }

    /// Recognized categories, in presentation order.
    pub fn categories(&self) -> &[Category] {
        &self.config.categories
    }

    pub fn is_recognized_category(&self, category: &str) -> bool {
        self.config
            .categories
            .iter()
            .any(|c| c.as_str() == category)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Insert a new item or replace the one stored under `id`.
    ///
    /// Input is validated before anything is touched. Returns a restock notice
    /// when `quantity` is below the configured threshold.
    pub fn add_or_update(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
    ) -> DomainResult<Option<RestockNotice>> {
        let item = Item::new(id, name, category, quantity)?;
        Ok(self.put(item))
    }

    /// Set a new quantity on an existing item, keeping its name and category.
    pub fn update_quantity(
        &mut self,
        id: &str,
        quantity: i64,
    ) -> DomainResult<Option<RestockNotice>> {
        let existing = self.by_id.get(id).ok_or_else(|| DomainError::not_found(id))?;
        let item = existing.with_quantity(checked_quantity(quantity)?);
        Ok(self.put(item))
    }

    /// Remove an item from both indexes, returning it.
    pub fn remove(&mut self, id: &str) -> DomainResult<Item> {
        let item = self.by_id.remove(id).ok_or_else(|| DomainError::not_found(id))?;
        unlink(&mut self.by_category, &item);

        tracing::debug!(item_id = %item.id(), category = %item.category(), "item removed");

        Ok(item)
    }

    /// Snapshot of one category bucket, quantity descending, id ascending.
    ///
    /// Unknown categories yield an empty list.
    pub fn items_by_category(&self, category: &str) -> Vec<Item> {
        let Some(bucket) = self.by_category.get(category) else {
            return vec![];
        };

        bucket
            .iter()
            .filter_map(|key| self.by_id.get(key.id()))
            .cloned()
            .collect()
    }

    /// Up to `k` items across the whole inventory, quantity descending, id
    /// ascending.
    ///
    /// Scans `by_id`; per-category ordering says nothing about global order.
    pub fn top_k(&self, k: usize) -> Vec<Item> {
        if k == 0 {
            return vec![];
        }

        let mut items: Vec<&Item> = self.by_id.values().collect();
        if k < items.len() {
            // Partition so the first k are the k best, then order only those.
            items.select_nth_unstable_by(k - 1, |a, b| by_rank(a, b));
            items.truncate(k);
        }
        items.sort_unstable_by(|a, b| by_rank(a, b));

        items.into_iter().cloned().collect()
    }

    /// One-directional merge: per id, keep whichever record has the higher
    /// quantity; on a tie, keep ours.
    ///
    /// Items taken from `other` are fully replaced (name and category too) and
    /// checked against this store's threshold.
    pub fn merge_from(&mut self, other: &InventoryStore) -> Vec<RestockNotice> {
        let mut notices = Vec::new();
        let (mut added, mut replaced, mut kept) = (0usize, 0usize, 0usize);

        for incoming in other.by_id.values() {
            match self.by_id.get(incoming.id()) {
                Some(existing) if incoming.quantity() <= existing.quantity() => {
                    kept += 1;
                    continue;
                }
                Some(_) => replaced += 1,
                None => added += 1,
            }
            notices.extend(self.put(incoming.clone()));
        }

        tracing::info!(
            added,
            replaced,
            kept,
            notices = notices.len(),
            "inventories merged"
        );

        notices
    }

    /// All items, id ascending.
    pub fn all_items(&self) -> Vec<Item> {
        self.by_id.values().cloned().collect()
    }

    /// Single write path for both indexes.
    fn put(&mut self, item: Item) -> Option<RestockNotice> {
        let notice = RestockNotice::check(&item, self.config.restock_threshold);
        let key = RankKey::of(&item);
        let category = item.category().clone();

        let previous = self.by_id.insert(item.id().clone(), item);
        if let Some(previous) = &previous {
            unlink(&mut self.by_category, previous);
        }
        self.by_category.entry(category.clone()).or_default().insert(key.clone());

        tracing::debug!(
            item_id = %key.id(),
            category = %category,
            quantity = key.quantity(),
            replaced = previous.is_some(),
            "item stored"
        );

        if let Some(notice) = &notice {
            tracing::info!(
                event_type = RestockNotice::EVENT_TYPE,
                item_id = %notice.item_id,
                name = %notice.name,
                quantity = notice.quantity,
                threshold = notice.threshold,
                "restock needed"
            );
        }

        notice
    }

    #[cfg(test)]
    fn assert_indexes_consistent(&self) {
        let mut seen = 0usize;
        for (category, bucket) in &self.by_category {
            assert!(!bucket.is_empty(), "empty bucket left for {category}");
            for key in bucket {
                let item = self
                    .by_id
                    .get(key.id())
                    .unwrap_or_else(|| panic!("bucket {category} holds unknown id {}", key.id()));
                assert_eq!(item.category(), category);
                assert_eq!(item.quantity(), key.quantity());
                seen += 1;
            }
        }
        assert_eq!(seen, self.by_id.len(), "every item must sit in exactly one bucket");
    }
}

fn unlink(by_category: &mut Buckets, item: &Item) {
    let category = item.category().as_str();
    if let Some(bucket) = by_category.get_mut(category) {
        bucket.remove(&RankKey::of(item));
        if bucket.is_empty() {
            by_category.remove(category);
        }
    }
}
