//! The schedule engine — enumerate the instants acceptable in both zones.
//!
//! Expands a window of upcoming calendar days in the first participant's zone
//! into hourly candidates, filters them through the working-hours predicate in
//! the first zone, re-projects the survivors into the second zone, filters
//! again, and groups the result by the second zone's calendar date.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::hours::WorkingHours;
use crate::participant::Participant;

/// Days between "today" in the first zone and the first candidate date.
const LEAD_DAYS: i64 = 2;

/// Ordered mapping from calendar date to the accepted instants on that date.
///
/// Keys are civil dates in the *second* participant's zone and iterate in
/// ascending order; each date's instants ascend chronologically and carry the
/// second participant's zone. Dates with no accepted instants are absent —
/// an empty list is never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    slots: BTreeMap<NaiveDate, Vec<DateTime<Tz>>>,
}

impl Schedule {
    /// Iterate over `(date, instants)` entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &[DateTime<Tz>])> {
        self.slots
            .iter()
            .map(|(date, instants)| (date, instants.as_slice()))
    }

    /// The calendar dates that have at least one accepted instant, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.slots.keys()
    }

    /// The accepted instants on `date`, if any.
    pub fn get(&self, date: &NaiveDate) -> Option<&[DateTime<Tz>]> {
        self.slots.get(date).map(Vec::as_slice)
    }

    /// Total number of accepted instants across all dates.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// True when no instant survived both filters.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of distinct calendar dates with accepted instants.
    pub fn day_count(&self) -> usize {
        self.slots.len()
    }
}

/// Compute the mutual schedule using the system clock and the standard
/// Monday–Friday 07:00–21:00 window.
///
/// See [`schedule_with`] for the full seam.
pub fn schedule(first: &Participant, second: &Participant, days: u32) -> Schedule {
    schedule_with(first, second, days, WorkingHours::default(), &SystemClock)
}

/// Compute the mutual schedule for a window of `days + 1` calendar dates.
///
/// The window starts two days after "today" in `first`'s zone. Each date in
/// the window yields 24 hourly candidates (minutes and seconds zero) resolved
/// in `first`'s zone; a candidate survives iff `hours` accepts it in *both*
/// zones. Survivors are grouped by their civil date in `second`'s zone,
/// ascending, with each date's instants in ascending chronological order.
///
/// # Arguments
/// - `first` — the participant whose zone anchors the window and the hourly grid
/// - `second` — the participant whose zone keys the resulting groups
/// - `days` — days past the start date to include (`days = 0` is one date)
/// - `hours` — the working-hours predicate applied in both zones
/// - `clock` — source of "today"; the only impure input
///
/// Total over any constructed participants: zone validation happened at
/// [`Participant::new`], so no error path remains here.
pub fn schedule_with(
    first: &Participant,
    second: &Participant,
    days: u32,
    hours: WorkingHours,
    clock: &dyn Clock,
) -> Schedule {
    let start = clock.now().with_timezone(&first.zone).date_naive() + Duration::days(LEAD_DAYS);

    let slots = (0..=i64::from(days))
        .map(|offset| start + Duration::days(offset))
        .flat_map(|date| {
            (0..24).map(move |hour| date.and_hms_opt(hour, 0, 0).expect("hour is within 0..24"))
        })
        .map(|civil| resolve_civil(first.zone, civil))
        .filter(|zdt| hours.accepts(zdt))
        .map(|zdt| zdt.with_timezone(&second.zone))
        .filter(|zdt| hours.accepts(zdt))
        .fold(
            BTreeMap::<NaiveDate, Vec<DateTime<Tz>>>::new(),
            |mut slots, zdt| {
                slots.entry(zdt.date_naive()).or_default().push(zdt);
                slots
            },
        );

    Schedule { slots }
}

/// Map a civil date-time onto the timeline in `tz`.
///
/// - Unambiguous local times map directly.
/// - Ambiguous local times (DST fall-back) take the **earlier** offset.
/// - Local times inside a DST gap (spring-forward) resolve **forward** to the
///   first valid wall-clock time at or after the requested one, probed in
///   15-minute steps. Real-world gaps are 30 or 60 minutes (up to the 24-hour
///   Pacific/Apia date-line jump), so the probe terminates.
pub fn resolve_civil(tz: Tz, civil: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&civil) {
        LocalResult::Single(zdt) => zdt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            let mut probe = civil;
            loop {
                probe += Duration::minutes(15);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(zdt) => return zdt,
                    LocalResult::Ambiguous(earlier, _) => return earlier,
                    LocalResult::None => continue,
                }
            }
        }
    }
}
