use crate::application::dto::RegisterProductRequest;
use crate::inventory::domain::{Gtin, Product};
use crate::ports::outbound::InventoryRepository;
use crate::shared::Result;

/// RegisterProductUseCase - adds a product to the catalog
///
/// # Type Parameters
/// * `R` - InventoryRepository implementation
pub struct RegisterProductUseCase<'a, R> {
    repository: &'a R,
}

impl<'a, R> RegisterProductUseCase<'a, R>
where
    R: InventoryRepository,
{
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Validates the request and registers the product
    ///
    /// # Errors
    /// - `InvalidGtin` / `InvalidProduct` for malformed input
    /// - `DuplicateProduct` if the code is taken
    pub async fn execute(&self, request: RegisterProductRequest) -> Result<Product> {
        let gtin = Gtin::parse(request.code.trim())?;
        let product = Product::new(
            gtin,
            request.name,
            request.size,
            request.valid_days_after_opening,
        )?;

        self.repository.register_product(&product).await?;
        Ok(product)
    }
}
