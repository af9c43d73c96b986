pub mod best_before;
pub mod fill_status;
pub mod gtin;
pub mod item;
pub mod listing;
pub mod product;

pub use best_before::{format_date, parse_best_before};
pub use fill_status::{ConsumeAmount, FillStatus};
pub use gtin::Gtin;
pub use item::{Item, ItemId, ItemState};
pub use listing::{ItemListing, ListingQuery, SortDirection, SortKey};
pub use product::Product;
