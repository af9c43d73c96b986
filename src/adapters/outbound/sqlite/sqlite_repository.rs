use super::rows::{item_from_row, listing_from_row, product_from_row};
use super::schema::{CREATE_ITEMS_SQL, CREATE_PRODUCTS_SQL, VERIFY_SQL};
use crate::inventory::domain::{
    format_date, ConsumeAmount, Gtin, Item, ItemId, ItemListing, ListingQuery, Product,
    SortDirection, SortKey,
};
use crate::inventory::policies::ConsumptionOrder;
use crate::ports::outbound::InventoryRepository;
use crate::shared::error::{InventoryError, StoreError};
use crate::shared::security::validate_database_path;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::path::Path;
use std::str::FromStr;

/// SqliteInventoryRepository adapter backed by a single SQLite connection
///
/// The pool holds exactly one connection for the lifetime of the session.
/// Call [`close`](Self::close) when done so the file is released cleanly.
#[derive(Debug)]
pub struct SqliteInventoryRepository {
    pool: SqlitePool,
}

impl SqliteInventoryRepository {
    /// Opens (or creates) the database file and makes sure both tables exist.
    ///
    /// # Errors
    /// Returns `StoreError::DatabaseOpen` if the path is unusable or the file
    /// is not a compatible SQLite database.
    pub async fn open(path: &Path) -> Result<Self> {
        let open_error = |details: String| StoreError::DatabaseOpen {
            path: path.to_path_buf(),
            details,
        };

        validate_database_path(path).map_err(|e| open_error(e.to_string()))?;

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let repository = Self::connect(options)
            .await
            .map_err(|e| open_error(format!("{:#}", e)))?;

        tracing::debug!(path = %path.display(), "opened inventory database");
        Ok(repository)
    }

    /// Opens a private in-memory database, mostly for tests and dry runs.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory database URL")?;
        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self> {
        // One connection that never expires: an in-memory database lives
        // exactly as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to connect to SQLite")?;

        let repository = Self { pool };
        repository.setup_schema().await?;
        Ok(repository)
    }

    /// Creates missing tables and checks that existing ones have the expected columns.
    async fn setup_schema(&self) -> Result<()> {
        for sql in [CREATE_PRODUCTS_SQL, CREATE_ITEMS_SQL] {
            sqlx::query(sql)
                .execute(&self.pool)
                .await
                .context("Failed to create inventory tables")?;
        }
        for sql in VERIFY_SQL {
            sqlx::query(sql)
                .fetch_all(&self.pool)
                .await
                .with_context(|| format!("Unexpected table layout ({})", sql))?;
        }
        Ok(())
    }

    /// Closes the connection. Every operation has already committed.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::debug!("closed inventory database");
    }

    async fn begin(&self) -> Result<Transaction<'_, Sqlite>> {
        self.pool
            .begin()
            .await
            .context("Failed to begin transaction")
    }

    async fn product_exists(tx: &mut Transaction<'_, Sqlite>, gtin: Gtin) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE gtin = ?1")
            .bind(gtin.as_i64())
            .fetch_one(&mut **tx)
            .await
            .context("Failed to look up product")?;
        Ok(count > 0)
    }

    fn order_clause(query: &ListingQuery) -> &'static str {
        use SortDirection::{Ascending, Descending};

        // Unqualified `bestBefore` is the listing's COALESCE column.
        match (query.sort_key, query.direction) {
            (SortKey::Default, _) => "bestBefore ASC, i.id ASC",
            (SortKey::Name, Ascending) => "p.name ASC, bestBefore ASC, i.id ASC",
            (SortKey::Name, Descending) => "p.name DESC, bestBefore ASC, i.id ASC",
            (SortKey::FillStatus, Ascending) => "i.fillStatus ASC, bestBefore ASC, i.id ASC",
            (SortKey::FillStatus, Descending) => "i.fillStatus DESC, bestBefore ASC, i.id ASC",
            (SortKey::BestBefore, Ascending) => "bestBefore ASC, i.id ASC",
            (SortKey::BestBefore, Descending) => "bestBefore DESC, i.id ASC",
        }
    }
}

#[async_trait]
impl InventoryRepository for SqliteInventoryRepository {
    async fn register_product(&self, product: &Product) -> Result<()> {
        let mut tx = self.begin().await?;

        if Self::product_exists(&mut tx, product.gtin()).await? {
            return Err(InventoryError::DuplicateProduct {
                gtin: product.gtin().value(),
            }
            .into());
        }

        sqlx::query(
            "INSERT INTO products (gtin, name, size, validDaysAfterOpening) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(product.gtin().as_i64())
        .bind(product.name())
        .bind(product.size())
        .bind(product.valid_days_after_opening().map(i64::from))
        .execute(&mut *tx)
        .await
        .context("Failed to insert product")?;

        tx.commit().await.context("Failed to commit product")?;
        tracing::info!(gtin = %product.gtin(), name = product.name(), "registered product");
        Ok(())
    }

    async fn find_product(&self, gtin: Gtin) -> Result<Option<Product>> {
        let row = sqlx::query(
            "SELECT rowid, gtin, name, size, validDaysAfterOpening \
             FROM products WHERE gtin = ?1 ORDER BY rowid LIMIT 1",
        )
        .bind(gtin.as_i64())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up product")?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn add_item(&self, gtin: Gtin, best_before: NaiveDate) -> Result<Item> {
        let mut tx = self.begin().await?;

        if !Self::product_exists(&mut tx, gtin).await? {
            return Err(InventoryError::UnknownProduct { gtin: gtin.value() }.into());
        }

        let date = format_date(best_before);
        let result = sqlx::query(
            "INSERT INTO items (gtin, origBestBefore, bestBefore, fillStatus) VALUES (?1, ?2, ?3, 100)",
        )
        .bind(gtin.as_i64())
        .bind(&date)
        .bind(&date)
        .execute(&mut *tx)
        .await
        .context("Failed to insert item")?;

        tx.commit().await.context("Failed to commit item")?;

        let item = Item::unopened(ItemId(result.last_insert_rowid()), gtin, best_before);
        tracing::info!(gtin = %gtin, item = %item.id(), best_before = %date, "stocked item");
        Ok(item)
    }

    async fn consume(&self, gtin: Gtin, amount: ConsumeAmount, today: NaiveDate) -> Result<Item> {
        let mut tx = self.begin().await?;

        let rows = sqlx::query(
            "SELECT i.id, i.gtin, i.origBestBefore, i.bestBefore, i.fillStatus \
             FROM items i \
             WHERE i.gtin = ?1 AND i.fillStatus > 0 \
               AND EXISTS (SELECT 1 FROM products p WHERE p.gtin = i.gtin)",
        )
        .bind(gtin.as_i64())
        .fetch_all(&mut *tx)
        .await
        .context("Failed to load items")?;

        let candidates = rows.iter().map(item_from_row).collect::<Result<Vec<_>>>()?;
        let target = ConsumptionOrder::select(&candidates)
            .ok_or(InventoryError::UnknownItem { gtin: gtin.value() })?;

        let product_row = sqlx::query(
            "SELECT rowid, gtin, name, size, validDaysAfterOpening \
             FROM products WHERE gtin = ?1 ORDER BY rowid LIMIT 1",
        )
        .bind(gtin.as_i64())
        .fetch_one(&mut *tx)
        .await
        .context("Failed to load product")?;
        let shelf_life = product_from_row(&product_row)?.valid_days_after_opening();

        let consumed = target.consume(amount, today, shelf_life)?;

        sqlx::query("UPDATE items SET fillStatus = ?1, bestBefore = ?2 WHERE id = ?3")
            .bind(i64::from(consumed.fill_status().percent()))
            .bind(format_date(consumed.best_before()))
            .bind(consumed.id().0)
            .execute(&mut *tx)
            .await
            .context("Failed to update item")?;

        tx.commit().await.context("Failed to commit consumption")?;

        tracing::info!(
            gtin = %gtin,
            item = %consumed.id(),
            fill_status = %consumed.fill_status(),
            best_before = %consumed.best_before(),
            opened = target.fill_status().is_full(),
            "consumed item"
        );
        Ok(consumed)
    }

    async fn list_items(&self, query: &ListingQuery) -> Result<Vec<ItemListing>> {
        let sql = format!(
            "SELECT i.id, p.name, p.size, i.fillStatus, i.origBestBefore, \
                    COALESCE(i.bestBefore, i.origBestBefore) AS bestBefore \
             FROM items i JOIN products p ON i.gtin = p.gtin \
             WHERE i.fillStatus > 0 \
             ORDER BY {} \
             LIMIT ?1",
            Self::order_clause(query)
        );
        // A negative LIMIT means "no limit" in SQLite.
        let limit = query
            .limit()
            .map(|n| i64::try_from(n).unwrap_or(i64::MAX))
            .unwrap_or(-1);

        tracing::debug!(?query, "listing items");
        let rows = sqlx::query(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list items")?;

        rows.iter().map(listing_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{FillStatus, ItemState};
    use chrono::Days;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn gtin(code: &str) -> Gtin {
        Gtin::parse(code).unwrap()
    }

    fn amount(p: i64) -> ConsumeAmount {
        ConsumeAmount::new(p).unwrap()
    }

    const CLUB_MATE: &str = "4029764001807";
    const MILK: &str = "4008452011004";

    async fn repository_with(products: &[(&str, &str, u32)]) -> SqliteInventoryRepository {
        let repo = SqliteInventoryRepository::in_memory().await.unwrap();
        for (code, name, days) in products {
            let product = Product::new(gtin(code), name.to_string(), Some("1 L".into()), *days)
                .unwrap();
            repo.register_product(&product).await.unwrap();
        }
        repo
    }

    fn inventory_error(err: &anyhow::Error) -> Option<&InventoryError> {
        err.downcast_ref::<InventoryError>()
    }

    #[tokio::test]
    async fn test_club_mate_scenario() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;
        repo.add_item(gtin(CLUB_MATE), date(2016, 6, 16)).await.unwrap();
        repo.add_item(gtin(CLUB_MATE), date(2016, 6, 23)).await.unwrap();
        let today = date(2024, 5, 1);

        let consumed = repo.consume(gtin(CLUB_MATE), amount(25), today).await.unwrap();

        assert_eq!(consumed.original_best_before(), date(2016, 6, 16));
        assert_eq!(consumed.best_before(), today.checked_add_days(Days::new(5)).unwrap());
        assert_eq!(consumed.fill_status().percent(), 75);

        let listing = repo
            .list_items(&ListingQuery::new(SortKey::FillStatus, SortDirection::Ascending, 0))
            .await
            .unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].fill_status.percent(), 75);
        assert_eq!(listing[0].best_before, date(2024, 5, 6));
        assert_eq!(listing[1].fill_status, FillStatus::FULL);
        assert_eq!(listing[1].best_before, date(2016, 6, 23));
    }

    #[tokio::test]
    async fn test_opened_item_keeps_recomputed_date() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;
        repo.add_item(gtin(CLUB_MATE), date(2016, 6, 16)).await.unwrap();

        let first = repo
            .consume(gtin(CLUB_MATE), amount(25), date(2024, 5, 1))
            .await
            .unwrap();
        let second = repo
            .consume(gtin(CLUB_MATE), amount(25), date(2024, 5, 4))
            .await
            .unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(second.fill_status().percent(), 50);
        assert_eq!(second.best_before(), date(2024, 5, 6));
    }

    #[tokio::test]
    async fn test_consume_prefers_opened_item() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;
        repo.add_item(gtin(CLUB_MATE), date(2016, 6, 16)).await.unwrap();
        let later = repo.add_item(gtin(CLUB_MATE), date(2030, 1, 1)).await.unwrap();
        // Deplete the earlier item so the next consumption opens the later one.
        repo.consume(gtin(CLUB_MATE), amount(100), date(2024, 1, 1))
            .await
            .unwrap();
        let opened = repo
            .consume(gtin(CLUB_MATE), amount(20), date(2024, 1, 2))
            .await
            .unwrap();
        assert_eq!(opened.id(), later.id());

        repo.add_item(gtin(CLUB_MATE), date(2020, 1, 1)).await.unwrap();
        let next = repo
            .consume(gtin(CLUB_MATE), amount(10), date(2024, 1, 3))
            .await
            .unwrap();
        assert_eq!(next.id(), later.id());
        assert_eq!(next.fill_status().percent(), 70);
    }

    #[tokio::test]
    async fn test_underflow_leaves_store_unchanged() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;
        repo.add_item(gtin(CLUB_MATE), date(2016, 6, 16)).await.unwrap();
        repo.consume(gtin(CLUB_MATE), amount(90), date(2024, 5, 1))
            .await
            .unwrap();

        let err = repo
            .consume(gtin(CLUB_MATE), amount(25), date(2024, 5, 2))
            .await
            .unwrap_err();

        assert_eq!(
            inventory_error(&err),
            Some(&InventoryError::ItemUnderflow {
                gtin: 4029764001807,
                requested: 25,
                remaining: 10
            })
        );
        let listing = repo.list_items(&ListingQuery::default()).await.unwrap();
        assert_eq!(listing[0].fill_status.percent(), 10);
        assert_eq!(listing[0].best_before, date(2024, 5, 6));
    }

    #[tokio::test]
    async fn test_depleted_item_not_consumable() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;
        repo.add_item(gtin(CLUB_MATE), date(2016, 6, 16)).await.unwrap();
        repo.consume(gtin(CLUB_MATE), amount(100), date(2024, 5, 1))
            .await
            .unwrap();
        let err = repo
            .consume(gtin(CLUB_MATE), amount(1), date(2024, 5, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            inventory_error(&err),
            Some(InventoryError::UnknownItem { .. })
        ));
    }

    #[tokio::test]
    async fn test_consume_unknown_item() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;
        let err = repo
            .consume(gtin(MILK), amount(25), date(2024, 5, 1))
            .await
            .unwrap_err();
        assert_eq!(
            inventory_error(&err),
            Some(&InventoryError::UnknownItem {
                gtin: 4008452011004
            })
        );
    }

    #[tokio::test]
    async fn test_add_item_unknown_product_creates_nothing() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;

        let err = repo.add_item(gtin(MILK), date(2024, 3, 1)).await.unwrap_err();

        assert_eq!(
            inventory_error(&err),
            Some(&InventoryError::UnknownProduct {
                gtin: 4008452011004
            })
        );
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_add_item_stores_dates_as_text() {
        let repo = repository_with(&[(MILK, "Milk", 3)]).await;
        let item = repo.add_item(gtin(MILK), date(2024, 3, 1)).await.unwrap();
        assert_eq!(item.state(), ItemState::Unopened);

        let (orig, best, fill): (String, String, i64) = sqlx::query_as(
            "SELECT origBestBefore, bestBefore, fillStatus FROM items WHERE id = ?1",
        )
        .bind(item.id().0)
        .fetch_one(&repo.pool)
        .await
        .unwrap();
        assert_eq!(orig, "2024-03-01");
        assert_eq!(best, "2024-03-01");
        assert_eq!(fill, 100);

        let listing = repo
            .list_items(&ListingQuery::new(SortKey::BestBefore, SortDirection::Ascending, 0))
            .await
            .unwrap();
        assert_eq!(format_date(listing[0].best_before), "2024-03-01");
    }

    #[tokio::test]
    async fn test_duplicate_product_rejected() {
        let repo = repository_with(&[(CLUB_MATE, "Club Mate", 5)]).await;
        let again = Product::new(gtin(CLUB_MATE), "Mate".to_string(), None, 3).unwrap();

        let err = repo.register_product(&again).await.unwrap_err();

        assert_eq!(
            inventory_error(&err),
            Some(&InventoryError::DuplicateProduct {
                gtin: 4029764001807
            })
        );
        let product = repo.find_product(gtin(CLUB_MATE)).await.unwrap().unwrap();
        assert_eq!(product.name(), "Club Mate");
    }

    #[tokio::test]
    async fn test_find_product_missing() {
        let repo = repository_with(&[]).await;
        assert!(repo.find_product(gtin(MILK)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_excludes_depleted_items() {
        let repo = repository_with(&[(MILK, "Milk", 3)]).await;
        repo.add_item(gtin(MILK), date(2024, 3, 1)).await.unwrap();
        repo.add_item(gtin(MILK), date(2024, 3, 2)).await.unwrap();
        repo.consume(gtin(MILK), amount(100), date(2024, 2, 1))
            .await
            .unwrap();

        let listing = repo.list_items(&ListingQuery::default()).await.unwrap();

        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].best_before, date(2024, 3, 2));
    }

    #[tokio::test]
    async fn test_list_sort_orders_and_limit() {
        let repo = repository_with(&[(MILK, "Milk", 3), (CLUB_MATE, "Club Mate", 5)]).await;
        repo.add_item(gtin(MILK), date(2024, 3, 10)).await.unwrap();
        repo.add_item(gtin(CLUB_MATE), date(2024, 3, 20)).await.unwrap();
        repo.add_item(gtin(CLUB_MATE), date(2024, 3, 5)).await.unwrap();
        repo.consume(gtin(MILK), amount(40), date(2024, 3, 1))
            .await
            .unwrap();

        let names = |rows: Vec<ItemListing>| -> Vec<(String, NaiveDate)> {
            rows.into_iter().map(|r| (r.name, r.best_before)).collect()
        };

        let by_default = repo.list_items(&ListingQuery::default()).await.unwrap();
        assert_eq!(
            names(by_default),
            vec![
                ("Milk".to_string(), date(2024, 3, 4)),
                ("Club Mate".to_string(), date(2024, 3, 5)),
                ("Club Mate".to_string(), date(2024, 3, 20)),
            ]
        );

        let by_name_desc = repo
            .list_items(&ListingQuery::new(SortKey::Name, SortDirection::Descending, 0))
            .await
            .unwrap();
        assert_eq!(
            names(by_name_desc),
            vec![
                ("Milk".to_string(), date(2024, 3, 4)),
                ("Club Mate".to_string(), date(2024, 3, 5)),
                ("Club Mate".to_string(), date(2024, 3, 20)),
            ]
        );

        let by_fill = repo
            .list_items(&ListingQuery::new(SortKey::FillStatus, SortDirection::Descending, 0))
            .await
            .unwrap();
        assert_eq!(by_fill[0].fill_status, FillStatus::FULL);
        assert_eq!(by_fill[0].best_before, date(2024, 3, 5));
        assert_eq!(by_fill[2].fill_status.percent(), 60);

        let newest_first = repo
            .list_items(&ListingQuery::new(SortKey::BestBefore, SortDirection::Descending, 2))
            .await
            .unwrap();
        assert_eq!(newest_first.len(), 2);
        assert_eq!(newest_first[0].best_before, date(2024, 3, 20));
        assert_eq!(newest_first[1].best_before, date(2024, 3, 5));
    }

    #[tokio::test]
    async fn test_reopen_file_keeps_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("freezer.db");

        let repo = SqliteInventoryRepository::open(&path).await.unwrap();
        let product = Product::new(gtin(MILK), "Milk".to_string(), None, 3).unwrap();
        repo.register_product(&product).await.unwrap();
        repo.add_item(gtin(MILK), date(2024, 3, 1)).await.unwrap();
        repo.close().await;

        let reopened = SqliteInventoryRepository::open(&path).await.unwrap();
        let listing = reopened.list_items(&ListingQuery::default()).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "Milk");
        assert_eq!(listing[0].size, None);
        reopened.close().await;
    }

    #[tokio::test]
    async fn test_open_rejects_non_database_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not a database\n".repeat(200)).unwrap();

        let err = SqliteInventoryRepository::open(&path).await.unwrap_err();

        assert!(err.downcast_ref::<StoreError>().is_some());
        assert!(err.to_string().contains("Failed to open database"));
    }

    #[tokio::test]
    async fn test_open_rejects_incompatible_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.db");
        {
            let repo = SqliteInventoryRepository::open(&path).await.unwrap();
            sqlx::query("DROP TABLE items").execute(&repo.pool).await.unwrap();
            sqlx::query("CREATE TABLE items (id INTEGER PRIMARY KEY, label TEXT)")
                .execute(&repo.pool)
                .await
                .unwrap();
            repo.close().await;
        }

        let err = SqliteInventoryRepository::open(&path).await.unwrap_err();
        assert!(err.downcast_ref::<StoreError>().is_some());
    }

    #[tokio::test]
    async fn test_legacy_rows_are_readable() {
        let repo = repository_with(&[]).await;
        // Rows as the original Python tool wrote them: gtin bound as text, NULL shelf life.
        sqlx::query("INSERT INTO products (gtin, name, size, validDaysAfterOpening) VALUES ('4029764001807', 'Club Mate', '0,5 L', NULL)")
            .execute(&repo.pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO items (gtin, origBestBefore, bestBefore, fillStatus) VALUES ('4029764001807', '2016-06-16', '2016-06-16', 100)")
            .execute(&repo.pool)
            .await
            .unwrap();

        let consumed = repo
            .consume(gtin(CLUB_MATE), amount(25), date(2024, 5, 1))
            .await
            .unwrap();

        assert_eq!(consumed.fill_status().percent(), 75);
        assert_eq!(consumed.best_before(), date(2016, 6, 16));
    }

    #[tokio::test]
    async fn test_corrupt_fill_status_reported() {
        let repo = repository_with(&[(MILK, "Milk", 3)]).await;
        sqlx::query("INSERT INTO items (gtin, origBestBefore, bestBefore, fillStatus) VALUES (4008452011004, '2024-01-01', '2024-01-01', 140)")
            .execute(&repo.pool)
            .await
            .unwrap();

        let err = repo.list_items(&ListingQuery::default()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::CorruptRecord { table: "items", .. })
        ));
    }

    #[tokio::test]
    async fn test_null_best_before_falls_back_to_original() {
        let repo = repository_with(&[(MILK, "Milk", 3)]).await;
        repo.add_item(gtin(MILK), date(2024, 1, 5)).await.unwrap();
        sqlx::query("INSERT INTO items (gtin, origBestBefore, bestBefore, fillStatus) VALUES (4008452011004, '2024-01-02', NULL, 50)")
            .execute(&repo.pool)
            .await
            .unwrap();

        let listing = repo.list_items(&ListingQuery::default()).await.unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].best_before, date(2024, 1, 2));
        assert_eq!(listing[0].fill_status.percent(), 50);

        let consumed = repo
            .consume(gtin(MILK), amount(25), date(2024, 5, 1))
            .await
            .unwrap();
        assert_eq!(consumed.fill_status().percent(), 25);
        assert_eq!(consumed.best_before(), date(2024, 1, 2));
    }

    #[tokio::test]
    async fn test_item_without_dates_reported() {
        let repo = repository_with(&[(MILK, "Milk", 3)]).await;
        sqlx::query("INSERT INTO items (gtin, origBestBefore, bestBefore, fillStatus) VALUES (4008452011004, NULL, NULL, 100)")
            .execute(&repo.pool)
            .await
            .unwrap();

        let err = repo.list_items(&ListingQuery::default()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::CorruptRecord { table: "items", .. })
        ));
    }

    #[tokio::test]
    async fn test_negative_shelf_life_reported_on_consume() {
        let repo = repository_with(&[]).await;
        sqlx::query("INSERT INTO products (gtin, name, size, validDaysAfterOpening) VALUES (4008452011004, 'Milk', '1 L', -2)")
            .execute(&repo.pool)
            .await
            .unwrap();
        repo.add_item(gtin(MILK), date(2024, 1, 5)).await.unwrap();

        let err = repo
            .consume(gtin(MILK), amount(25), date(2024, 5, 1))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::CorruptRecord { table: "products", .. })
        ));
        let listing = repo.list_items(&ListingQuery::default()).await.unwrap();
        assert_eq!(listing[0].fill_status, FillStatus::FULL);
    }
}
