//! The working-hours predicate over zoned civil date-times.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

/// Weekday working-hours window: hour-of-day in `[start_hour, end_hour)`,
/// Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    /// First acceptable hour-of-day (inclusive, 0–23).
    pub start_hour: u32,
    /// First unacceptable hour-of-day (exclusive).
    pub end_hour: u32,
}

impl Default for WorkingHours {
    /// 07:00–21:00, the standard window.
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 21,
        }
    }
}

impl WorkingHours {
    /// True iff `zdt`'s civil projection falls on Monday–Friday with the
    /// hour component in `[start_hour, end_hour)`.
    ///
    /// The decision reads only the civil side of `zdt` — the same instant can
    /// be acceptable in one zone and unacceptable in another, which is what
    /// makes the double filter in the engine do any work.
    pub fn accepts<Tz: TimeZone>(&self, zdt: &DateTime<Tz>) -> bool {
        let weekday = zdt.weekday();
        weekday != Weekday::Sat
            && weekday != Weekday::Sun
            && zdt.hour() >= self.start_hour
            && zdt.hour() < self.end_hour
    }
}
