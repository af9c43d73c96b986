/// Data Transfer Objects for application layer
///
/// Requests carry operator input as typed in; the use cases validate it
/// so every rejection surfaces as an `InventoryError`.
mod inventory_requests;
mod output_format;

pub use inventory_requests::{
    AddItemRequest, ConsumeRequest, ListItemsRequest, RegisterProductRequest, StockedItem,
};
pub use output_format::OutputFormat;
