use chrono::NaiveDate;
use freezer::prelude::*;

/// Clock pinned to one date
pub struct FixedClock {
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            today: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
