use crate::inventory::domain::Gtin;

/// One line of console input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Switch to fill mode
    Fill,
    /// Switch to consume mode
    Consume,
    Help,
    List,
    /// A product code, kept as typed
    Code(String),
    Empty,
    Unknown(String),
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        let token = line.trim();

        match token {
            "" => ConsoleCommand::Empty,
            "fill" => ConsoleCommand::Fill,
            "consume" => ConsoleCommand::Consume,
            "help" | "?" => ConsoleCommand::Help,
            "list" => ConsoleCommand::List,
            code if Gtin::is_code(code) => ConsoleCommand::Code(code.to_string()),
            other => ConsoleCommand::Unknown(other.to_string()),
        }
    }
}
