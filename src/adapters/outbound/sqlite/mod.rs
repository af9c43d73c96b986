/// SQLite adapter for the inventory store
mod rows;
mod schema;
mod sqlite_repository;

pub use sqlite_repository::SqliteInventoryRepository;
