use super::FillStatus;
use crate::shared::error::InventoryError;
use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

/// Column the item list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Best-before ascending; the direction flag does not apply
    #[default]
    Default,
    Name,
    FillStatus,
    BestBefore,
}

impl FromStr for SortKey {
    type Err = InventoryError;

    /// Accepts `name`, `fillStatus` and `bestBefore` case-insensitively,
    /// with or without `-`/`_` separators. Empty text or `default` selects the default order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "" | "default" | "none" => Ok(SortKey::Default),
            "name" => Ok(SortKey::Name),
            "fillstatus" => Ok(SortKey::FillStatus),
            "bestbefore" => Ok(SortKey::BestBefore),
            _ => Err(InventoryError::InvalidSortKey { key: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// Parameters of an item listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingQuery {
    pub sort_key: SortKey,
    pub direction: SortDirection,
    /// Maximum number of rows; 0 means no limit
    pub max_count: usize,
}

impl ListingQuery {
    pub fn new(sort_key: SortKey, direction: SortDirection, max_count: usize) -> Self {
        Self {
            sort_key,
            direction,
            max_count,
        }
    }

    /// Default order, at most `max_count` rows.
    pub fn limited(max_count: usize) -> Self {
        Self {
            max_count,
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        (self.max_count > 0).then_some(self.max_count)
    }
}

/// One row of the item list: display fields only, no id and no code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemListing {
    pub name: String,
    pub size: Option<String>,
    #[serde(serialize_with = "serialize_fill_status")]
    pub fill_status: FillStatus,
    pub best_before: NaiveDate,
}

fn serialize_fill_status<S: serde::Serializer>(
    fill_status: &FillStatus,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(fill_status.percent())
}
