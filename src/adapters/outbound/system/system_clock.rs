use crate::ports::outbound::Clock;
use chrono::{Local, NaiveDate};

/// SystemClock adapter reading the local date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
