use crate::shared::error::InventoryError;

/// Remaining contents of an item in percent, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FillStatus(u8);

impl FillStatus {
    /// An unopened item.
    pub const FULL: FillStatus = FillStatus(100);
    /// A depleted item.
    pub const EMPTY: FillStatus = FillStatus(0);

    pub fn new(percent: u8) -> Option<Self> {
        (percent <= 100).then_some(Self(percent))
    }

    /// Converts a raw `fillStatus` column value.
    pub fn from_stored(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::new)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Subtracts `amount`, or returns None if less than `amount` is left.
    pub fn checked_sub(&self, amount: ConsumeAmount) -> Option<Self> {
        self.0.checked_sub(amount.percent()).map(Self)
    }
}

impl std::fmt::Display for FillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Percentage points taken out of an item in one consumption, within 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumeAmount(u8);

impl ConsumeAmount {
    /// The amount the console takes per scanned code.
    pub const QUARTER: ConsumeAmount = ConsumeAmount(25);

    pub fn new(percent: i64) -> Result<Self, InventoryError> {
        match u8::try_from(percent) {
            Ok(p @ 1..=100) => Ok(Self(p)),
            _ => Err(InventoryError::InvalidAmount { amount: percent }),
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl Default for ConsumeAmount {
    fn default() -> Self {
        Self::QUARTER
    }
}
