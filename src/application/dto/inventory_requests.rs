use crate::inventory::domain::Item;

/// Request to register a product in the catalog
#[derive(Debug, Clone)]
pub struct RegisterProductRequest {
    /// Product code as typed (8 to 15 digits)
    pub code: String,
    pub name: String,
    /// Packaging size, e.g. "0,5 L"
    pub size: Option<String>,
    pub valid_days_after_opening: u32,
}

impl RegisterProductRequest {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        size: Option<String>,
        valid_days_after_opening: u32,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            size,
            valid_days_after_opening,
        }
    }
}

/// Request to stock one unopened item
#[derive(Debug, Clone)]
pub struct AddItemRequest {
    pub code: String,
    /// Best-before date as typed (`YYYY-MM-DD` or `YYYYMMDD`)
    pub best_before: String,
}

impl AddItemRequest {
    pub fn new(code: impl Into<String>, best_before: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            best_before: best_before.into(),
        }
    }
}

/// Result of a successful AddItem: the new item and its product's name
#[derive(Debug, Clone)]
pub struct StockedItem {
    pub item: Item,
    pub product_name: String,
}

/// Request to consume from the item selected for a product code
#[derive(Debug, Clone)]
pub struct ConsumeRequest {
    pub code: String,
    /// Percentage points, must be within 1..=100
    pub amount: i64,
}

impl ConsumeRequest {
    pub fn new(code: impl Into<String>, amount: i64) -> Self {
        Self {
            code: code.into(),
            amount,
        }
    }
}

/// Request to list items in stock
#[derive(Debug, Clone, Default)]
pub struct ListItemsRequest {
    /// `name`, `fillStatus`, `bestBefore`, or None for the default order
    pub sort_key: Option<String>,
    pub descending: bool,
    /// Maximum number of rows; 0 means no limit
    pub max_count: usize,
}

impl ListItemsRequest {
    pub fn new(sort_key: Option<String>, descending: bool, max_count: usize) -> Self {
        Self {
            sort_key,
            descending,
            max_count,
        }
    }

    /// Default order, at most `max_count` rows.
    pub fn limited(max_count: usize) -> Self {
        Self {
            max_count,
            ..Self::default()
        }
    }
}
