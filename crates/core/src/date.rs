use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date as reported by the recognition engine.
///
/// The triple is kept exactly as the engine produced it. Documents sometimes
/// print partial dates, so an impossible value such as day `0` is preserved
/// rather than rejected; use [`Date::is_valid`] or [`Date::to_naive_date`]
/// when a real calendar date is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Date {
    /// Build a date from its parts without validating them.
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Date { day, month, year }
    }

    /// The calendar date, or `None` if the triple does not name a real day.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Whether the triple is a real calendar date.
    pub fn is_valid(self) -> bool {
        self.to_naive_date().is_some()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(date.day(), date.month(), date.year())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}
