use super::{ConsumeAmount, FillStatus, Gtin};
use crate::shared::error::InventoryError;
use chrono::{Days, NaiveDate};

/// Row id of an item (`items.id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle stage derived from the fill status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// 100%, original best-before still in effect
    Unopened,
    /// 1..=99%, best-before counted from the opening day
    Opened,
    /// 0%, hidden from listings and never consumed again
    Depleted,
}

/// One physical unit of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    gtin: Gtin,
    original_best_before: NaiveDate,
    best_before: NaiveDate,
    fill_status: FillStatus,
}

impl Item {
    pub fn new(
        id: ItemId,
        gtin: Gtin,
        original_best_before: NaiveDate,
        best_before: NaiveDate,
        fill_status: FillStatus,
    ) -> Self {
        Self {
            id,
            gtin,
            original_best_before,
            best_before,
            fill_status,
        }
    }

    /// A freshly stocked, unopened item.
    pub fn unopened(id: ItemId, gtin: Gtin, best_before: NaiveDate) -> Self {
        Self::new(id, gtin, best_before, best_before, FillStatus::FULL)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn gtin(&self) -> Gtin {
        self.gtin
    }

    pub fn original_best_before(&self) -> NaiveDate {
        self.original_best_before
    }

    pub fn best_before(&self) -> NaiveDate {
        self.best_before
    }

    pub fn fill_status(&self) -> FillStatus {
        self.fill_status
    }

    pub fn state(&self) -> ItemState {
        if self.fill_status.is_full() {
            ItemState::Unopened
        } else if self.fill_status.is_empty() {
            ItemState::Depleted
        } else {
            ItemState::Opened
        }
    }

    /// Applies a consumption and returns the resulting item.
    ///
    /// The first consumption opens the item: its best-before becomes
    /// `today + valid_days_after_opening`. Without a known shelf life the date
    /// is kept. `self` is never modified, so a rejected consumption has no effect.
    ///
    /// # Errors
    /// - `UnknownItem` if the item is already depleted
    /// - `ItemUnderflow` if less than `amount` is left
    pub fn consume(
        &self,
        amount: ConsumeAmount,
        today: NaiveDate,
        valid_days_after_opening: Option<u32>,
    ) -> Result<Item, InventoryError> {
        if self.state() == ItemState::Depleted {
            return Err(InventoryError::UnknownItem {
                gtin: self.gtin.value(),
            });
        }

        let fill_status =
            self.fill_status
                .checked_sub(amount)
                .ok_or(InventoryError::ItemUnderflow {
                    gtin: self.gtin.value(),
                    requested: amount.percent(),
                    remaining: self.fill_status.percent(),
                })?;

        let best_before = match (self.state(), valid_days_after_opening) {
            (ItemState::Unopened, Some(days)) => today
                .checked_add_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MAX),
            _ => self.best_before,
        };

        Ok(Item {
            best_before,
            fill_status,
            ..self.clone()
        })
    }
}
