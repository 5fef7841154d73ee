//! Tests for the working-hours predicate.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use zonemeet_core::WorkingHours;

fn tz(name: &str) -> Tz {
    name.parse().expect("zone must be valid")
}

fn at(zone: &str, y: i32, m: u32, d: u32, h: u32) -> DateTime<Tz> {
    tz(zone).with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[test]
fn default_window_is_seven_to_twenty_one() {
    let hours = WorkingHours::default();
    assert_eq!(hours.start_hour, 7);
    assert_eq!(hours.end_hour, 21);
}

#[test]
fn weekday_hour_boundaries() {
    let hours = WorkingHours::default();
    // Wednesday 2026-08-05.
    assert!(!hours.accepts(&at("America/New_York", 2026, 8, 5, 6)));
    assert!(hours.accepts(&at("America/New_York", 2026, 8, 5, 7)));
    assert!(hours.accepts(&at("America/New_York", 2026, 8, 5, 20)));
    assert!(!hours.accepts(&at("America/New_York", 2026, 8, 5, 21)));
}

#[test]
fn weekends_are_rejected_at_any_hour() {
    let hours = WorkingHours::default();
    // Saturday 2026-08-08 and Sunday 2026-08-09, mid-day.
    assert!(!hours.accepts(&at("America/New_York", 2026, 8, 8, 12)));
    assert!(!hours.accepts(&at("America/New_York", 2026, 8, 9, 12)));
}

#[test]
fn the_same_instant_can_pass_in_one_zone_and_fail_in_another() {
    let hours = WorkingHours::default();

    // Wednesday noon in New York is 02:00 Thursday in Sydney.
    let ny_noon = at("America/New_York", 2026, 8, 5, 12);
    let sydney_view = ny_noon.with_timezone(&tz("Australia/Sydney"));

    assert!(hours.accepts(&ny_noon));
    assert!(!hours.accepts(&sydney_view));
}

#[test]
fn custom_window_boundaries() {
    let hours = WorkingHours {
        start_hour: 9,
        end_hour: 17,
    };
    assert!(!hours.accepts(&at("Europe/London", 2026, 8, 5, 8)));
    assert!(hours.accepts(&at("Europe/London", 2026, 8, 5, 9)));
    assert!(hours.accepts(&at("Europe/London", 2026, 8, 5, 16)));
    assert!(!hours.accepts(&at("Europe/London", 2026, 8, 5, 17)));
}
