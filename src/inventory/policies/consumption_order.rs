use crate::inventory::domain::{Item, ItemState};

/// ConsumptionOrder policy for choosing which item a consumption applies to
///
/// Priority order among non-depleted items of one product:
/// 1. lowest fill status (finish an opened item before opening a new one)
/// 2. earliest best-before date
/// 3. lowest item id, so the choice is stable
pub struct ConsumptionOrder;

impl ConsumptionOrder {
    /// Selects the consumption target, or None if nothing is left.
    pub fn select(items: &[Item]) -> Option<&Item> {
        items
            .iter()
            .filter(|item| item.state() != ItemState::Depleted)
            .min_by_key(|item| (item.fill_status(), item.best_before(), item.id()))
    }
}
