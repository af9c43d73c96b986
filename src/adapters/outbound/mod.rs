/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod formatters;
pub mod sqlite;
pub mod system;
