/// TerminalInfo port for querying the output terminal
pub trait TerminalInfo {
    /// Number of text rows the terminal shows
    fn rows(&self) -> usize;
}
