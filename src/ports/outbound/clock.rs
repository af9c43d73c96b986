use chrono::NaiveDate;

/// Clock port supplying "today" for opening dates
///
/// Injected so tests can pin the date an item is opened on.
pub trait Clock: Send + Sync {
    /// Returns the current local calendar date
    fn today(&self) -> NaiveDate;
}
