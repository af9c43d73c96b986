use crate::shared::error::InventoryError;
use chrono::NaiveDate;

/// Format used by the `origBestBefore` and `bestBefore` columns.
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Compact form accepted from barcode-scanner style input.
const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// Parses a best-before date typed by the operator.
///
/// Tries `YYYY-MM-DD` first, then `YYYYMMDD`. Surrounding whitespace is ignored.
pub fn parse_best_before(input: &str) -> Result<NaiveDate, InventoryError> {
    let trimmed = input.trim();

    NaiveDate::parse_from_str(trimmed, STORAGE_DATE_FORMAT)
        .ok()
        .or_else(|| parse_compact(trimmed))
        .ok_or_else(|| InventoryError::InvalidDate {
            input: trimmed.to_string(),
        })
}

// chrono accepts "%Y%m%d" with fewer than eight digits, so require exactly eight.
fn parse_compact(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(input, COMPACT_DATE_FORMAT).ok()
}

/// Renders a date the way it is stored and displayed.
pub fn format_date(date: NaiveDate) -> String {
    date.format(STORAGE_DATE_FORMAT).to_string()
}
