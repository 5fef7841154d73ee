//! Participant model — who is meeting, from which zone, in which locale.

use chrono_tz::Tz;

use crate::error::{Result, ZonemeetError};

/// A meeting participant: display name, BCP-47 locale tag, IANA timezone.
///
/// Immutable once constructed; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Display name, used only for rendering.
    pub name: String,
    /// BCP-47 language tag (e.g., "en-US", "en-AU").
    pub locale: String,
    /// Resolved IANA timezone.
    pub zone: Tz,
}

impl Participant {
    /// Create a participant, validating the timezone and locale tag.
    ///
    /// # Arguments
    /// - `name` — display name
    /// - `locale` — BCP-47 language tag (e.g., "en-US")
    /// - `zone` — IANA timezone identifier (e.g., "America/New_York")
    ///
    /// # Errors
    /// Returns `ZonemeetError::UnknownZone` if `zone` is not a valid IANA
    /// identifier. Returns `ZonemeetError::InvalidLocale` if `locale` is not a
    /// well-formed BCP-47 tag.
    pub fn new(name: &str, locale: &str, zone: &str) -> Result<Self> {
        let tz: Tz = zone
            .parse()
            .map_err(|_| ZonemeetError::UnknownZone(zone.to_string()))?;

        if !is_well_formed_tag(locale) {
            return Err(ZonemeetError::InvalidLocale(locale.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            locale: locale.to_string(),
            zone: tz,
        })
    }
}

/// BCP-47 well-formedness: non-empty subtags of 1–8 ASCII alphanumerics,
/// separated by '-'. Registry-level validation (does "xx" name a language?)
/// is out of scope; unknown-but-well-formed tags degrade at render time.
fn is_well_formed_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag.split('-').all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}
