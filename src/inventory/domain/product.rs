use super::Gtin;
use crate::shared::error::InventoryError;

/// Maximum length for product names
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for the packaging size text
const MAX_SIZE_LENGTH: usize = 64;

/// Product catalog entry: what an item is and how long it keeps once opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    gtin: Gtin,
    name: String,
    size: Option<String>,
    valid_days_after_opening: Option<u32>,
}

impl Product {
    /// Validates a new product before registration.
    pub fn new(
        gtin: Gtin,
        name: String,
        size: Option<String>,
        valid_days_after_opening: u32,
    ) -> Result<Self, InventoryError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(InventoryError::InvalidProduct {
                reason: "name cannot be empty".to_string(),
            });
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(InventoryError::InvalidProduct {
                reason: format!("name is longer than {} characters", MAX_NAME_LENGTH),
            });
        }

        let size = size
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if size
            .as_ref()
            .is_some_and(|s| s.chars().count() > MAX_SIZE_LENGTH)
        {
            return Err(InventoryError::InvalidProduct {
                reason: format!("size is longer than {} characters", MAX_SIZE_LENGTH),
            });
        }

        Ok(Self {
            gtin,
            name,
            size,
            valid_days_after_opening: Some(valid_days_after_opening),
        })
    }

    /// Rebuilds a product from a stored row. Legacy rows may lack the shelf life.
    pub fn from_stored(
        gtin: Gtin,
        name: String,
        size: Option<String>,
        valid_days_after_opening: Option<u32>,
    ) -> Self {
        Self {
            gtin,
            name,
            size,
            valid_days_after_opening,
        }
    }

    pub fn gtin(&self) -> Gtin {
        self.gtin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn valid_days_after_opening(&self) -> Option<u32> {
        self.valid_days_after_opening
    }
}
