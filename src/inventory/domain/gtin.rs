use crate::shared::error::InventoryError;
use std::str::FromStr;

/// Shortest accepted code (GTIN-8)
const MIN_GTIN_DIGITS: usize = 8;

/// Longest accepted code
const MAX_GTIN_DIGITS: usize = 15;

/// NewType wrapper for a product code (Global Trade Item Number)
///
/// Stored as an integer, like the `gtin INTEGER` column, so leading zeros
/// are not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gtin(u64);

impl Gtin {
    /// Parses a code typed by the operator: 8 to 15 ASCII digits, nothing else.
    pub fn parse(input: &str) -> Result<Self, InventoryError> {
        let invalid = || InventoryError::InvalidGtin {
            input: input.to_string(),
        };

        if !(MIN_GTIN_DIGITS..=MAX_GTIN_DIGITS).contains(&input.len())
            || !input.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        input.parse::<u64>().map(Self).map_err(|_| invalid())
    }

    /// Wraps a value read back from the `gtin` column.
    pub fn from_stored(value: i64) -> Option<Self> {
        u64::try_from(value).ok().map(Self)
    }

    /// True if the text looks like a product code.
    pub fn is_code(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Value bound into SQLite INTEGER columns. Fifteen digits always fit.
    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl FromStr for Gtin {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Gtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
