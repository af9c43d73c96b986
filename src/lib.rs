//! freezer - fridge and pantry inventory
//!
//! Tracks perishable items by product code together with how much of each is
//! left and when it expires. Items go from unopened to opened to depleted;
//! opening an item moves its best-before date to "today plus the product's
//! shelf life", and consumption always hits the emptiest, then soonest
//! expiring, item first.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Items, products and the consumption policy
//! - **Application Layer** (`application`): Use cases and request DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): SQLite store, console session, formatters
//! - **Shared** (`shared`): Error types, logging and file checks
//!
//! # Example
//!
//! ```no_run
//! use freezer::prelude::*;
//!
//! # async fn demo() -> Result<()> {
//! let repository = SqliteInventoryRepository::open(std::path::Path::new("freezer.db")).await?;
//!
//! RegisterProductUseCase::new(&repository)
//!     .execute(RegisterProductRequest::new(
//!         "4029764001807",
//!         "Club Mate",
//!         Some("0,5 L".to_string()),
//!         5,
//!     ))
//!     .await?;
//! AddItemUseCase::new(&repository)
//!     .execute(AddItemRequest::new("4029764001807", "2016-06-16"))
//!     .await?;
//!
//! let clock = SystemClock::new();
//! ConsumeItemUseCase::new(&repository, &clock)
//!     .execute(ConsumeRequest::new("4029764001807", 25))
//!     .await?;
//!
//! let items = ListItemsUseCase::new(&repository)
//!     .execute(ListItemsRequest::default())
//!     .await?;
//! println!("{}", TableFormatter::new().format(&items)?);
//!
//! repository.close().await;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::console::{ConsoleCommand, ConsoleMode, ConsoleSession};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::sqlite::SqliteInventoryRepository;
    pub use crate::adapters::outbound::system::{ConsoleTerminal, SystemClock};
    pub use crate::application::dto::{
        AddItemRequest, ConsumeRequest, ListItemsRequest, OutputFormat, RegisterProductRequest,
        StockedItem,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{
        AddItemUseCase, ConsumeItemUseCase, ListItemsUseCase, RegisterProductUseCase,
        SeedDemoUseCase,
    };
    pub use crate::inventory::domain::{
        ConsumeAmount, FillStatus, Gtin, Item, ItemId, ItemListing, ItemState, ListingQuery,
        Product, SortDirection, SortKey,
    };
    pub use crate::inventory::policies::ConsumptionOrder;
    pub use crate::ports::outbound::{Clock, InventoryRepository, ListingFormatter, TerminalInfo};
    pub use crate::shared::error::{ExitCode, InventoryError, StoreError};
    pub use crate::shared::Result;
}
