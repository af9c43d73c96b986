/// Application layer - Use cases and DTOs
///
/// This layer turns operator input into domain values and orchestrates
/// the inventory store and the clock through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
