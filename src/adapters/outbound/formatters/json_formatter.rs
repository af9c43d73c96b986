use crate::inventory::domain::ItemListing;
use crate::ports::outbound::ListingFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter emitting the listing as a pretty-printed JSON array
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingFormatter for JsonFormatter {
    fn format(&self, items: &[ItemListing]) -> Result<String> {
        serde_json::to_string_pretty(items).context("Failed to serialize item list to JSON")
    }
}
