use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a rejected inventory operation
/// from a broken installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed
    Success = 0,
    /// The inventory rejected the operation (unknown item, underflow, bad date, ...)
    OperationRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (database unreadable, bad config file, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed command.
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<InventoryError>().is_some() {
            ExitCode::OperationRejected
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OperationRejected => write!(f, "Operation Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Rejections raised by inventory operations.
///
/// Every variant leaves the store unchanged. The console reports them and
/// keeps running; the one-shot CLI commands map them to `ExitCode::OperationRejected`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Unknown product: nothing is registered under code {gtin}")]
    UnknownProduct { gtin: u64 },

    #[error("Item not found: no item with code {gtin} is in stock")]
    UnknownItem { gtin: u64 },

    #[error("Not enough left: wanted {requested}% of {gtin} but only {remaining}% remain")]
    ItemUnderflow {
        gtin: u64,
        requested: u8,
        remaining: u8,
    },

    #[error("Invalid amount: {amount} (must be between 1 and 100 percent)")]
    InvalidAmount { amount: i64 },

    #[error("Invalid sort key: '{key}' (use name, fillStatus or bestBefore)")]
    InvalidSortKey { key: String },

    #[error("Invalid date: '{input}' (use YYYY-MM-DD or YYYYMMDD)")]
    InvalidDate { input: String },

    #[error("Invalid product code: '{input}' (must be 8 to 15 digits)")]
    InvalidGtin { input: String },

    #[error("Invalid product: {reason}")]
    InvalidProduct { reason: String },

    #[error("Duplicate product: code {gtin} is already registered")]
    DuplicateProduct { gtin: u64 },
}

/// Infrastructure failures of the SQLite store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database: {path}\nDetails: {details}\n\n💡 Hint: Check that the file is a freezer database and that you have read and write permissions")]
    DatabaseOpen { path: PathBuf, details: String },

    #[error("Corrupt record in table '{table}' (row {row_id}): {details}")]
    CorruptRecord {
        table: &'static str,
        row_id: i64,
        details: String,
    },
}
