use serde::{Deserialize, Serialize};

use stockroom_core::{Category, DomainError, DomainResult, Entity, ItemId};

/// One stock-keeping unit.
///
/// Items are immutable: an update builds a new `Item` that replaces the old
/// one under the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    quantity: u64,
}

impl Item {
    /// Validate raw input and build an item.
    ///
    /// Rejects a blank id or category and a negative quantity. The name is
    /// free-form.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: ItemId::parse(id)?,
            name: name.into(),
            category: Category::parse(category)?,
            quantity: checked_quantity(quantity)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Same item, new stock level.
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Category: {}, Quantity: {}",
            self.id, self.name, self.category, self.quantity
        )
    }
}

/// Convert a caller-supplied quantity, rejecting negatives.
pub(crate) fn checked_quantity(quantity: i64) -> DomainResult<u64> {
    u64::try_from(quantity).map_err(|_| {
        DomainError::invalid_argument(format!("quantity cannot be negative (got {quantity})"))
    })
}
