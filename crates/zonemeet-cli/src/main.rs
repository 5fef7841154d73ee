//! `zonemeet` CLI — find mutual meeting windows across timezones.
//!
//! ## Usage
//!
//! ```sh
//! # Plan the next 10 days for the default pair (New York / Sydney)
//! zonemeet plan
//!
//! # Custom pair and window
//! zonemeet --first-name Ada --first-locale en-US --first-zone America/New_York \
//!          --second-name Grace --second-locale en-AU --second-zone Australia/Sydney \
//!          plan --days 5
//!
//! # Narrower acceptable hours
//! zonemeet plan --from-hour 9 --to-hour 17
//!
//! # Machine-readable output
//! zonemeet plan --json
//!
//! # Zone rules and DST status for both participants
//! zonemeet info
//! ```

use anyhow::{Context, Result};
use chrono::format::Locale;
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use zonemeet_core::{
    schedule_with, wall_clock_lead, zone_status, Clock, Participant, Schedule, SystemClock,
    WorkingHours,
};

/// Full localized date, e.g. "Monday, 10 August 2026".
const DATE_FORMAT: &str = "%A, %-d %B %Y";
/// Full localized date plus short time.
const DATE_TIME_FORMAT: &str = "%A, %-d %B %Y %H:%M";

#[derive(Parser)]
#[command(
    name = "zonemeet",
    version,
    about = "Find meeting times that suit two timezones at once"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// First participant's display name
    #[arg(long, global = true, default_value = "Ada")]
    first_name: String,

    /// First participant's BCP-47 locale tag
    #[arg(long, global = true, default_value = "en-US")]
    first_locale: String,

    /// First participant's IANA timezone
    #[arg(long, global = true, default_value = "America/New_York")]
    first_zone: String,

    /// Second participant's display name
    #[arg(long, global = true, default_value = "Grace")]
    second_name: String,

    /// Second participant's BCP-47 locale tag
    #[arg(long, global = true, default_value = "en-AU")]
    second_locale: String,

    /// Second participant's IANA timezone
    #[arg(long, global = true, default_value = "Australia/Sydney")]
    second_zone: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and render the mutual schedule
    Plan {
        /// Days past the start date to include (the window spans days + 1 dates)
        #[arg(long, default_value_t = 10)]
        days: u32,

        /// First acceptable hour of day, inclusive
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(0..24))]
        from_hour: u32,

        /// First unacceptable hour of day, exclusive
        #[arg(long, default_value_t = 21, value_parser = clap::value_parser!(u32).range(1..=24))]
        to_hour: u32,

        /// Emit the schedule as pretty-printed JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show zone rules and DST status for both participants
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let first = Participant::new(&cli.first_name, &cli.first_locale, &cli.first_zone)
        .context("invalid first participant")?;
    let second = Participant::new(&cli.second_name, &cli.second_locale, &cli.second_zone)
        .context("invalid second participant")?;

    match cli.command {
        Commands::Plan {
            days,
            from_hour,
            to_hour,
            json,
        } => {
            let hours = WorkingHours {
                start_hour: from_hour,
                end_hour: to_hour,
            };
            let plan = schedule_with(&first, &second, days, hours, &SystemClock);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&plan)
                        .context("Failed to serialize the schedule")?
                );
            } else {
                render_plan(&plan, &first, &second);
            }
        }
        Commands::Info => render_info(&first, &second),
    }

    Ok(())
}

/// Render the schedule: one header per calendar date (the second
/// participant's calendar), then each instant as seen by both participants.
fn render_plan(plan: &Schedule, first: &Participant, second: &Participant) {
    for (date, instants) in plan.iter() {
        println!(
            "{}",
            date.format_localized(DATE_FORMAT, locale_for(&second.locale))
        );
        for zdt in instants {
            println!(
                "\t{} <----> {}",
                participant_view(second, zdt),
                participant_view(first, &zdt.with_timezone(&first.zone)),
            );
        }
    }
}

/// One participant's view of an instant: `name [zone] : localized date-time`.
fn participant_view(participant: &Participant, zdt: &DateTime<Tz>) -> String {
    format!(
        "{} [{}] : {}",
        participant.name,
        participant.zone,
        zdt.format_localized(DATE_TIME_FORMAT, locale_for(&participant.locale))
    )
}

/// Zone rules and DST status for both participants, plus their wall-clock
/// separation at this instant.
fn render_info(first: &Participant, second: &Participant) {
    let now = SystemClock.now();

    for participant in [first, second] {
        let status = zone_status(participant.zone, now);
        let local = now.with_timezone(&participant.zone);

        println!("{} [{}] {}", participant.name, status.zone, participant.locale);
        println!(
            "  local time:   {}",
            local.format_localized(DATE_TIME_FORMAT, locale_for(&participant.locale))
        );
        println!("  utc offset:   {}", format_offset(status.utc_offset_seconds));
        if status.in_dst {
            println!(
                "  dst:          yes ({})",
                format_offset(status.dst_offset_seconds)
            );
        } else {
            println!("  dst:          no");
        }
        println!("  abbreviation: {}", status.abbreviation);
    }

    let lead = wall_clock_lead(first.zone, second.zone, now);
    let relation = if lead < Duration::zero() {
        "behind"
    } else {
        "ahead of"
    };
    println!(
        "{}'s clock runs {}h {:02}m {} {}'s.",
        second.name,
        lead.num_hours().abs(),
        (lead.num_minutes() % 60).abs(),
        relation,
        first.name
    );
}

/// Map a BCP-47 tag onto the compiled-in POSIX locale tables. Tags with no
/// matching table fall back to the default rendering rather than failing the
/// run.
fn locale_for(tag: &str) -> Locale {
    Locale::try_from(tag.replace('-', "_").as_str()).unwrap_or(Locale::POSIX)
}

/// Format an offset in seconds as "UTC±HH:MM".
fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}
