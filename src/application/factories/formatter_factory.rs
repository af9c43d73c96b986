use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ListingFormatter;

/// Factory for creating listing formatters
///
/// Selects the infrastructure adapter for an output format, so the CLI
/// only deals with `OutputFormat` values.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use freezer::application::dto::OutputFormat;
    /// use freezer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// assert_eq!(formatter.format(&[]).unwrap(), "[]");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ListingFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
