use crate::inventory::domain::ItemListing;
use crate::shared::Result;

/// ListingFormatter port for rendering the item list
///
/// This port abstracts the output format (fixed-width table, JSON, ...).
pub trait ListingFormatter {
    /// Formats the listed items
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, items: &[ItemListing]) -> Result<String>;
}
