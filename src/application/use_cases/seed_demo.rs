use crate::application::dto::{AddItemRequest, RegisterProductRequest};
use crate::application::use_cases::{AddItemUseCase, RegisterProductUseCase};
use crate::ports::outbound::InventoryRepository;
use crate::shared::error::InventoryError;
use crate::shared::Result;

const DEMO_CODE: &str = "4029764001807";
const DEMO_BEST_BEFORE: [&str; 2] = ["2016-06-16", "2016-06-23"];

/// SeedDemoUseCase - fills an empty database with sample stock
///
/// Registers Club Mate (0,5 L, keeps 5 days once opened) and stocks two
/// bottles. Running it again adds two more bottles.
pub struct SeedDemoUseCase<'a, R> {
    repository: &'a R,
}

impl<'a, R> SeedDemoUseCase<'a, R>
where
    R: InventoryRepository,
{
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Returns the number of items stocked.
    pub async fn execute(&self) -> Result<usize> {
        let request =
            RegisterProductRequest::new(DEMO_CODE, "Club Mate", Some("0,5 L".to_string()), 5);

        match RegisterProductUseCase::new(self.repository)
            .execute(request)
            .await
        {
            Ok(_) => {}
            Err(e) if matches!(
                e.downcast_ref::<InventoryError>(),
                Some(InventoryError::DuplicateProduct { .. })
            ) =>
            {
                tracing::debug!("demo product already registered");
            }
            Err(e) => return Err(e),
        }

        let add_item = AddItemUseCase::new(self.repository);
        for best_before in DEMO_BEST_BEFORE {
            add_item
                .execute(AddItemRequest::new(DEMO_CODE, best_before))
                .await?;
        }

        Ok(DEMO_BEST_BEFORE.len())
    }
}
