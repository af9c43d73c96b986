use crate::application::dto::{AddItemRequest, StockedItem};
use crate::inventory::domain::{parse_best_before, Gtin};
use crate::ports::outbound::InventoryRepository;
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// AddItemUseCase - stocks one unopened item of a registered product
pub struct AddItemUseCase<'a, R> {
    repository: &'a R,
}

impl<'a, R> AddItemUseCase<'a, R>
where
    R: InventoryRepository,
{
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Parses the code and date, then stocks the item
    ///
    /// # Errors
    /// - `InvalidGtin` if the code is malformed
    /// - `UnknownProduct` if the code is not registered
    /// - `InvalidDate` if the best-before date cannot be parsed
    pub async fn execute(&self, request: AddItemRequest) -> Result<StockedItem> {
        let gtin = Gtin::parse(request.code.trim())?;

        // Report an unknown product before complaining about the date.
        let product = self
            .repository
            .find_product(gtin)
            .await?
            .ok_or(InventoryError::UnknownProduct { gtin: gtin.value() })?;

        let best_before = parse_best_before(&request.best_before)?;
        let item = self.repository.add_item(gtin, best_before).await?;

        Ok(StockedItem {
            item,
            product_name: product.name().to_string(),
        })
    }
}
