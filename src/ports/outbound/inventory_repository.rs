use crate::inventory::domain::{
    ConsumeAmount, Gtin, Item, ItemListing, ListingQuery, Product,
};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// InventoryRepository port for the persistent product catalog and item stock
///
/// Every method is one logical transaction: it either commits completely or
/// leaves the store untouched. Rejections are returned as
/// `InventoryError` values inside the anyhow error.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Registers a new product
    ///
    /// # Errors
    /// - `DuplicateProduct` if the code is already registered
    async fn register_product(&self, product: &Product) -> Result<()>;

    /// Looks up a product by code
    async fn find_product(&self, gtin: Gtin) -> Result<Option<Product>>;

    /// Stocks one unopened item with the given best-before date
    ///
    /// # Errors
    /// - `UnknownProduct` if no product has this code; no row is created
    async fn add_item(&self, gtin: Gtin, best_before: NaiveDate) -> Result<Item>;

    /// Consumes `amount` from the item selected by `ConsumptionOrder`
    ///
    /// # Arguments
    /// * `gtin` - Product code of the item to consume
    /// * `amount` - Percentage points to take out
    /// * `today` - Opening date used when the selected item is unopened
    ///
    /// # Returns
    /// The item after consumption
    ///
    /// # Errors
    /// - `UnknownItem` if no non-depleted item has this code
    /// - `ItemUnderflow` if the selected item has less than `amount` left
    async fn consume(&self, gtin: Gtin, amount: ConsumeAmount, today: NaiveDate) -> Result<Item>;

    /// Lists non-depleted items joined with their product's name and size
    async fn list_items(&self, query: &ListingQuery) -> Result<Vec<ItemListing>>;
}
