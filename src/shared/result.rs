/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures (`InventoryError`, `StoreError`) travel inside the anyhow error
/// and are recovered with `downcast_ref` at the console and CLI boundaries.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
