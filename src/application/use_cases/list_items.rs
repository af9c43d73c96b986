use crate::application::dto::ListItemsRequest;
use crate::inventory::domain::{ItemListing, ListingQuery, SortDirection, SortKey};
use crate::ports::outbound::InventoryRepository;
use crate::shared::Result;

/// ListItemsUseCase - reads the items still in stock
pub struct ListItemsUseCase<'a, R> {
    repository: &'a R,
}

impl<'a, R> ListItemsUseCase<'a, R>
where
    R: InventoryRepository,
{
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// # Errors
    /// - `InvalidSortKey` if the sort key is not recognised
    pub async fn execute(&self, request: ListItemsRequest) -> Result<Vec<ItemListing>> {
        let sort_key = match request.sort_key.as_deref() {
            Some(key) => key.parse::<SortKey>()?,
            None => SortKey::Default,
        };
        let query = ListingQuery::new(
            sort_key,
            SortDirection::from_ascending(!request.descending),
            request.max_count,
        );

        self.repository.list_items(&query).await
    }
}
