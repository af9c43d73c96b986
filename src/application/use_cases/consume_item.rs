use crate::application::dto::ConsumeRequest;
use crate::inventory::domain::{ConsumeAmount, Gtin, Item};
use crate::ports::outbound::{Clock, InventoryRepository};
use crate::shared::Result;

/// ConsumeItemUseCase - takes an amount out of the best matching item
///
/// The opening date of a fresh item comes from the injected clock.
///
/// # Type Parameters
/// * `R` - InventoryRepository implementation
/// * `C` - Clock implementation
pub struct ConsumeItemUseCase<'a, R, C> {
    repository: &'a R,
    clock: &'a C,
}

impl<'a, R, C> ConsumeItemUseCase<'a, R, C>
where
    R: InventoryRepository,
    C: Clock,
{
    pub fn new(repository: &'a R, clock: &'a C) -> Self {
        Self { repository, clock }
    }

    /// # Errors
    /// - `InvalidGtin` if the code is malformed
    /// - `InvalidAmount` if the amount is outside 1..=100
    /// - `UnknownItem` / `ItemUnderflow` from the store
    pub async fn execute(&self, request: ConsumeRequest) -> Result<Item> {
        let gtin = Gtin::parse(request.code.trim())?;
        let amount = ConsumeAmount::new(request.amount)?;
        let today = self.clock.today();

        tracing::debug!(gtin = %gtin, amount = amount.percent(), %today, "consuming");
        self.repository.consume(gtin, amount, today).await
    }
}
