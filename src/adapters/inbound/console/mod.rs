/// Interactive console: line-based commands read from a scanner or keyboard
mod command;
mod session;

pub use command::ConsoleCommand;
pub use session::{ConsoleMode, ConsoleSession};
