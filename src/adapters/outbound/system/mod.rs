/// System adapters: wall clock and terminal geometry
mod system_clock;
mod terminal;

pub use system_clock::SystemClock;
pub use terminal::ConsoleTerminal;
