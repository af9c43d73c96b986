use crate::ports::outbound::TerminalInfo;
use console::Term;

/// ConsoleTerminal adapter querying the size of stdout
///
/// Falls back to the `console` crate's default of 24 rows when stdout
/// is not a terminal (pipes, tests).
#[derive(Debug, Clone)]
pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInfo for ConsoleTerminal {
    fn rows(&self) -> usize {
        let (rows, _columns) = self.term.size();
        usize::from(rows)
    }
}
