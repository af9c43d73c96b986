use crate::inventory::domain::{format_date, ItemListing};
use crate::ports::outbound::ListingFormatter;
use crate::shared::Result;

const NAME_WIDTH: usize = 10;
const SIZE_WIDTH: usize = 6;
const FILL_WIDTH: usize = 6;
const DATE_WIDTH: usize = 10;

const COLUMN_SEPARATOR: &str = " | ";

/// Lines the table spends before the first item row (header, rule).
pub const TABLE_HEADER_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// TableFormatter adapter rendering the fixed-width console table
///
/// ```text
/// Product    |   Size |   Fill | Best before
/// ===========================================
/// Club Mate  |  0,5 L |    75% | 2016-06-21
/// ```
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Pads `text` to exactly `width` characters, or cuts it and ends it with "...".
    fn fit(text: &str, width: usize, align: Align) -> String {
        let length = text.chars().count();

        if length > width {
            return if width > 3 {
                let kept: String = text.chars().take(width - 3).collect();
                format!("{}...", kept)
            } else {
                text.chars().take(width).collect()
            };
        }

        match align {
            Align::Left => format!("{:<width$}", text, width = width),
            Align::Right => format!("{:>width$}", text, width = width),
        }
    }

    fn row(name: &str, size: &str, fill: &str, date: &str) -> String {
        [
            Self::fit(name, NAME_WIDTH, Align::Left),
            Self::fit(size, SIZE_WIDTH, Align::Right),
            Self::fit(fill, FILL_WIDTH, Align::Right),
            Self::fit(date, DATE_WIDTH, Align::Left),
        ]
        .join(COLUMN_SEPARATOR)
    }

    /// Column titles are never cut, even where they overflow the column.
    fn header() -> String {
        [
            Self::fit("Product", NAME_WIDTH, Align::Left),
            Self::fit("Size", SIZE_WIDTH, Align::Right),
            Self::fit("Fill", FILL_WIDTH, Align::Right),
            "Best before".to_string(),
        ]
        .join(COLUMN_SEPARATOR)
    }

    fn rule() -> String {
        let width = NAME_WIDTH + SIZE_WIDTH + FILL_WIDTH + DATE_WIDTH + 3 * COLUMN_SEPARATOR.len();
        "=".repeat(width)
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingFormatter for TableFormatter {
    fn format(&self, items: &[ItemListing]) -> Result<String> {
        let mut output = String::new();
        output.push_str(&Self::header());
        output.push('\n');
        output.push_str(&Self::rule());
        output.push('\n');

        for item in items {
            let line = Self::row(
                &item.name,
                item.size.as_deref().unwrap_or(""),
                &item.fill_status.to_string(),
                &format_date(item.best_before),
            );
            // Right-padding of the last column is noise at the end of a line.
            output.push_str(line.trim_end());
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::FillStatus;
    use chrono::NaiveDate;

    fn listing(name: &str, size: Option<&str>, fill: u8) -> ItemListing {
        ItemListing {
            name: name.to_string(),
            size: size.map(String::from),
            fill_status: FillStatus::new(fill).unwrap(),
            best_before: NaiveDate::from_ymd_opt(2016, 6, 21).unwrap(),
        }
    }

    #[test]
    fn test_fit_pads_left_and_right() {
        assert_eq!(TableFormatter::fit("Milk", 10, Align::Left), "Milk      ");
        assert_eq!(TableFormatter::fit("1 L", 6, Align::Right), "   1 L");
    }

    #[test]
    fn test_fit_exact_width_unchanged() {
        assert_eq!(TableFormatter::fit("0123456789", 10, Align::Left), "0123456789");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(
            TableFormatter::fit("Schokoladenpudding", 10, Align::Left),
            "Schokol..."
        );
    }

    #[test]
    fn test_fit_counts_characters_not_bytes() {
        assert_eq!(TableFormatter::fit("Käse", 6, Align::Right), "  Käse");
        assert_eq!(
            TableFormatter::fit("Räucherlachs", 10, Align::Left),
            "Räucher..."
        );
    }

    #[test]
    fn test_fit_narrow_column_cuts_without_ellipsis() {
        assert_eq!(TableFormatter::fit("abcdef", 3, Align::Left), "abc");
    }

    #[test]
    fn test_format_table() {
        let items = vec![
            listing("Club Mate", Some("0,5 L"), 75),
            listing("Frischkäse Natur", None, 100),
        ];

        let output = TableFormatter::new().format(&items).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), TABLE_HEADER_LINES + 2);
        assert_eq!(lines[0], "Product    |   Size |   Fill | Best before");
        assert_eq!(lines[1], "=".repeat(41));
        assert_eq!(lines[2], "Club Mate  |  0,5 L |    75% | 2016-06-21");
        assert_eq!(lines[3], "Frischk... |        |   100% | 2016-06-21");
    }

    #[test]
    fn test_format_empty_list_has_header_only() {
        let output = TableFormatter::new().format(&[]).unwrap();
        assert_eq!(output.lines().count(), TABLE_HEADER_LINES);
    }
}
