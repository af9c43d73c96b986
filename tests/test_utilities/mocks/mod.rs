/// Mock implementations for testing
mod fixed_clock;
mod mock_inventory_repository;

pub use fixed_clock::FixedClock;
pub use mock_inventory_repository::MockInventoryRepository;
