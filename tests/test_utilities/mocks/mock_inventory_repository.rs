use async_trait::async_trait;
use chrono::NaiveDate;
use freezer::prelude::*;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    products: Vec<Product>,
    items: Vec<Item>,
}

/// In-memory InventoryRepository for testing
///
/// Applies the same domain rules as the SQLite store, without SQL ordering.
#[derive(Default)]
pub struct MockInventoryRepository {
    state: Mutex<State>,
    pub should_fail: bool,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the database had gone away.
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.lock().unwrap().items.clone()
    }

    pub fn product_count(&self) -> usize {
        self.state.lock().unwrap().products.len()
    }

    fn check_available(&self) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock storage failure");
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn register_product(&self, product: &Product) -> Result<()> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        if state.products.iter().any(|p| p.gtin() == product.gtin()) {
            return Err(InventoryError::DuplicateProduct {
                gtin: product.gtin().value(),
            }
            .into());
        }
        state.products.push(product.clone());
        Ok(())
    }

    async fn find_product(&self, gtin: Gtin) -> Result<Option<Product>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state.products.iter().find(|p| p.gtin() == gtin).cloned())
    }

    async fn add_item(&self, gtin: Gtin, best_before: NaiveDate) -> Result<Item> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        if !state.products.iter().any(|p| p.gtin() == gtin) {
            return Err(InventoryError::UnknownProduct { gtin: gtin.value() }.into());
        }
        let id = ItemId(state.items.len() as i64 + 1);
        let item = Item::unopened(id, gtin, best_before);
        state.items.push(item.clone());
        Ok(item)
    }

    async fn consume(&self, gtin: Gtin, amount: ConsumeAmount, today: NaiveDate) -> Result<Item> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();

        let candidates: Vec<Item> = state
            .items
            .iter()
            .filter(|item| item.gtin() == gtin)
            .cloned()
            .collect();
        let selected = ConsumptionOrder::select(&candidates)
            .ok_or(InventoryError::UnknownItem { gtin: gtin.value() })?;

        let valid_days = state
            .products
            .iter()
            .find(|p| p.gtin() == gtin)
            .and_then(|p| p.valid_days_after_opening());
        let consumed = selected.consume(amount, today, valid_days)?;

        if let Some(slot) = state.items.iter_mut().find(|i| i.id() == consumed.id()) {
            *slot = consumed.clone();
        }
        Ok(consumed)
    }

    async fn list_items(&self, query: &ListingQuery) -> Result<Vec<ItemListing>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();

        let mut rows: Vec<(ItemId, ItemListing)> = state
            .items
            .iter()
            .filter(|item| !item.fill_status().is_empty())
            .filter_map(|item| {
                let product = state.products.iter().find(|p| p.gtin() == item.gtin())?;
                Some((
                    item.id(),
                    ItemListing {
                        name: product.name().to_string(),
                        size: product.size().map(String::from),
                        fill_status: item.fill_status(),
                        best_before: item.best_before(),
                    },
                ))
            })
            .collect();

        rows.sort_by(|(a_id, a), (b_id, b)| {
            let primary = match query.sort_key {
                SortKey::Default => std::cmp::Ordering::Equal,
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::FillStatus => a.fill_status.cmp(&b.fill_status),
                SortKey::BestBefore => a.best_before.cmp(&b.best_before),
            };
            let primary = match (query.sort_key, query.direction) {
                (SortKey::Default, _) | (_, SortDirection::Ascending) => primary,
                (_, SortDirection::Descending) => primary.reverse(),
            };
            primary
                .then(a.best_before.cmp(&b.best_before))
                .then(a_id.0.cmp(&b_id.0))
        });

        let rows = rows.into_iter().map(|(_, listing)| listing);
        Ok(match query.limit() {
            Some(limit) => rows.take(limit).collect(),
            None => rows.collect(),
        })
    }
}
