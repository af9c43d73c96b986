//! Conversions from SQLite rows to domain objects.

use crate::inventory::domain::best_before::STORAGE_DATE_FORMAT;
use crate::inventory::domain::{FillStatus, Gtin, Item, ItemId, ItemListing, Product};
use crate::shared::error::StoreError;
use crate::shared::Result;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

fn corrupt(table: &'static str, row_id: i64, details: impl Into<String>) -> anyhow::Error {
    StoreError::CorruptRecord {
        table,
        row_id,
        details: details.into(),
    }
    .into()
}

fn parse_gtin(table: &'static str, row_id: i64, value: i64) -> Result<Gtin> {
    Gtin::from_stored(value).ok_or_else(|| corrupt(table, row_id, format!("invalid gtin {}", value)))
}

fn parse_fill_status(row_id: i64, value: i64) -> Result<FillStatus> {
    FillStatus::from_stored(value)
        .ok_or_else(|| corrupt("items", row_id, format!("fillStatus {} out of range", value)))
}

fn parse_date(row_id: i64, column: &str, text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, STORAGE_DATE_FORMAT).map_err(|e| {
        corrupt(
            "items",
            row_id,
            format!("{} '{}' is not a date: {}", column, text, e),
        )
    })
}

/// Expects `rowid, gtin, name, size, validDaysAfterOpening`.
pub(super) fn product_from_row(row: &SqliteRow) -> Result<Product> {
    let row_id: i64 = row.try_get("rowid")?;
    let gtin = parse_gtin("products", row_id, row.try_get("gtin")?)?;
    let valid_days = row
        .try_get::<Option<i64>, _>("validDaysAfterOpening")?
        .map(|days| {
            u32::try_from(days).map_err(|_| {
                corrupt(
                    "products",
                    row_id,
                    format!("validDaysAfterOpening {} out of range", days),
                )
            })
        })
        .transpose()?;

    Ok(Product::from_stored(
        gtin,
        row.try_get("name")?,
        row.try_get("size")?,
        valid_days,
    ))
}

/// Reads `(origBestBefore, bestBefore)`. Hand-written rows may leave either
/// one NULL; the other stands in for it.
fn item_dates(row: &SqliteRow, id: i64) -> Result<(NaiveDate, NaiveDate)> {
    let original = row
        .try_get::<Option<String>, _>("origBestBefore")?
        .map(|text| parse_date(id, "origBestBefore", &text))
        .transpose()?;
    let current = row
        .try_get::<Option<String>, _>("bestBefore")?
        .map(|text| parse_date(id, "bestBefore", &text))
        .transpose()?;

    match (original, current) {
        (Some(original), Some(current)) => Ok((original, current)),
        (Some(date), None) | (None, Some(date)) => Ok((date, date)),
        (None, None) => Err(corrupt("items", id, "bestBefore and origBestBefore are NULL")),
    }
}

/// Expects `id, gtin, origBestBefore, bestBefore, fillStatus`.
pub(super) fn item_from_row(row: &SqliteRow) -> Result<Item> {
    let id: i64 = row.try_get("id")?;
    let gtin = parse_gtin("items", id, row.try_get("gtin")?)?;
    let (original_best_before, best_before) = item_dates(row, id)?;
    let fill_status = parse_fill_status(id, row.try_get("fillStatus")?)?;

    Ok(Item::new(
        ItemId(id),
        gtin,
        original_best_before,
        best_before,
        fill_status,
    ))
}

/// Expects `id, name, size, fillStatus, origBestBefore, bestBefore`.
pub(super) fn listing_from_row(row: &SqliteRow) -> Result<ItemListing> {
    let id: i64 = row.try_get("id")?;
    Ok(ItemListing {
        name: row.try_get("name")?,
        size: row.try_get("size")?,
        fill_status: parse_fill_status(id, row.try_get("fillStatus")?)?,
        best_before: item_dates(row, id)?.1,
    })
}
