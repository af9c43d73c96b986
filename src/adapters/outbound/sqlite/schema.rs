//! Table layout shared with existing `freezer.db` files.

pub(super) const CREATE_PRODUCTS_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    "gtin"                  INTEGER NOT NULL,
    "name"                  TEXT NOT NULL,
    "size"                  TEXT,
    "validDaysAfterOpening" INTEGER
)
"#;

pub(super) const CREATE_ITEMS_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    "id"             INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    "gtin"           INTEGER NOT NULL,
    "origBestBefore" TEXT,
    "bestBefore"     TEXT,
    "fillStatus"     INTEGER NOT NULL
)
"#;

/// Probes every column the repository reads, so a foreign or damaged
/// database fails at startup instead of mid-session.
pub(super) const VERIFY_SQL: [&str; 2] = [
    "SELECT gtin, name, size, validDaysAfterOpening FROM products LIMIT 0",
    "SELECT id, gtin, origBestBefore, bestBefore, fillStatus FROM items LIMIT 0",
];
