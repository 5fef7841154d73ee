//! # zonemeet-core
//!
//! Cross-timezone meeting window computation.
//!
//! Given two participants — each with a display name, a BCP-47 locale tag,
//! and an IANA timezone — the engine enumerates the upcoming instants that
//! fall inside working hours (Monday–Friday, 07:00–21:00) for *both*
//! participants simultaneously, grouped per calendar day. DST gaps and
//! overlaps are resolved against `chrono-tz`'s historical rules.
//!
//! ## Quick start
//!
//! ```rust
//! use zonemeet_core::{schedule_with, FixedClock, Participant, WorkingHours};
//!
//! let first = Participant::new("Ada", "en-US", "America/New_York").unwrap();
//! let second = Participant::new("Grace", "en-AU", "Australia/Sydney").unwrap();
//! // Pin "now" so the window is reproducible.
//! let clock = FixedClock("2026-08-05T10:00:00Z".parse().unwrap());
//!
//! let plan = schedule_with(&first, &second, 10, WorkingHours::default(), &clock);
//! assert!(!plan.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`participant`] — participant value model and input validation
//! - [`hours`] — the working-hours predicate
//! - [`engine`] — candidate enumeration, double filtering, ordered grouping
//! - [`clock`] — injectable clock (the engine's only impure input)
//! - [`zoneinfo`] — zone rule diagnostics (offset, DST status, wall-clock lead)
//! - [`error`] — error types

pub mod clock;
pub mod engine;
pub mod error;
pub mod hours;
pub mod participant;
pub mod zoneinfo;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{resolve_civil, schedule, schedule_with, Schedule};
pub use error::ZonemeetError;
pub use hours::WorkingHours;
pub use participant::Participant;
pub use zoneinfo::{wall_clock_lead, zone_status, ZoneStatus};
