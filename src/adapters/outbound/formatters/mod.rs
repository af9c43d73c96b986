/// Formatter adapters for the different listing output formats
mod json_formatter;
mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use table_formatter::{TableFormatter, TABLE_HEADER_LINES};
