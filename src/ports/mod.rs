/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the application core
/// uses to reach the store, the clock and the terminal.
pub mod outbound;
