//! Zone rule diagnostics — offsets, DST status, wall-clock separation.

use chrono::{DateTime, Duration, Offset, Utc};
use chrono_tz::{OffsetComponents, Tz};
use serde::Serialize;

/// Snapshot of a zone's rules at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneStatus {
    /// IANA zone name.
    pub zone: String,
    /// Zone abbreviation at the instant (e.g., "EST", "AEDT").
    pub abbreviation: String,
    /// Total offset from UTC, in seconds (base plus any DST component).
    pub utc_offset_seconds: i32,
    /// Whether daylight saving is in effect.
    pub in_dst: bool,
    /// Daylight saving component of the offset, in seconds.
    pub dst_offset_seconds: i32,
}

/// Inspect the rules of `zone` at the instant `at`.
pub fn zone_status(zone: Tz, at: DateTime<Utc>) -> ZoneStatus {
    let local = at.with_timezone(&zone);
    let offset = *local.offset();
    let dst = offset.dst_offset();

    ZoneStatus {
        zone: zone.name().to_string(),
        abbreviation: local.format("%Z").to_string(),
        utc_offset_seconds: offset.fix().local_minus_utc(),
        in_dst: !dst.is_zero(),
        dst_offset_seconds: dst.num_seconds() as i32,
    }
}

/// How far `second`'s wall clock runs ahead of `first`'s at the instant `at`.
///
/// Positive means `second` reads a later civil time than `first`; negative
/// means it trails. Both offsets are taken at the same instant, so the lead
/// changes across DST transitions in either zone.
pub fn wall_clock_lead(first: Tz, second: Tz, at: DateTime<Utc>) -> Duration {
    let first_offset = at.with_timezone(&first).offset().fix().local_minus_utc();
    let second_offset = at.with_timezone(&second).offset().fix().local_minus_utc();
    Duration::seconds(i64::from(second_offset) - i64::from(first_offset))
}
