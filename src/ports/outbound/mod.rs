/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (database, system clock, terminal, output).
pub mod clock;
pub mod formatter;
pub mod inventory_repository;
pub mod terminal;

pub use clock::Clock;
pub use formatter::ListingFormatter;
pub use inventory_repository::InventoryRepository;
pub use terminal::TerminalInfo;
