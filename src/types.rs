//! Shared data-model types for cities, text styling and window geometry.
//!
//! Everything here is built once by [`crate::config::Settings`] and is
//! immutable afterwards; the clock units only clone what they need.

use crate::error::{AppError, Result};
use eframe::egui::Color32;
use jiff::tz::TimeZone;

// ── City / time zone pair ─────────────────────────────────────────────────────

/// A display name bound to an IANA time zone.
///
/// The zone is resolved against the tz database on construction, so holding a
/// `CityZone` means the identifier is known to be valid.
#[derive(Clone, Debug)]
pub struct CityZone {
    /// Raw configured name, underscores included (e.g. "New_York").
    pub city: String,
    /// IANA identifier as configured (e.g. "America/New_York").
    pub zone: String,
    pub tz: TimeZone,
}

impl CityZone {
    pub fn resolve(city: impl Into<String>, zone: impl Into<String>) -> Result<Self> {
        let zone = zone.into();
        let tz = TimeZone::get(&zone).map_err(|source| AppError::TimeZone {
            name: zone.clone(),
            source,
        })?;
        Ok(Self {
            city: city.into(),
            zone,
            tz,
        })
    }

    /// Label shown on screen: underscores become spaces.
    pub fn display_name(&self) -> String {
        self.city.replace('_', " ")
    }
}

// Two entries are the same city when both configured strings match; the
// resolved `TimeZone` follows from the identifier.
impl PartialEq for CityZone {
    fn eq(&self, other: &Self) -> bool {
        self.city == other.city && self.zone == other.zone
    }
}

impl Eq for CityZone {}

// ── Styling ───────────────────────────────────────────────────────────────────

/// Font family name, point size and color for one line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub size: f32,
    pub color: Color32,
    /// egui fonts carry no weight, so bold text is overstruck when painted.
    pub bold: bool,
}

/// The date line drawn under the city name of the main clock.
#[derive(Clone, Debug, PartialEq)]
pub struct DateLine {
    pub style: TextStyle,
    pub format: String,
}

/// Styling of one clock cell: the city label, the ticking time and,
/// for the main clock only, a date line.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockStyle {
    pub city: TextStyle,
    pub time: TextStyle,
    pub time_format: String,
    pub date: Option<DateLine>,
}

// ── Window ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct WindowGeometry {
    pub width: f32,
    pub height: f32,
    /// Top-left corner, when the geometry string carried `+X+Y`.
    pub position: Option<(f32, f32)>,
    pub fullscreen: bool,
    pub background: Color32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_replaces_underscores() {
        let entry = CityZone::resolve("Los_Angeles", "America/Los_Angeles").unwrap();
        assert_eq!(entry.display_name(), "Los Angeles");
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let err = CityZone::resolve("Atlantis", "Atlantic/Atlantis").unwrap_err();
        assert!(matches!(err, AppError::TimeZone { ref name, .. } if name == "Atlantic/Atlantis"));
    }

    #[test]
    fn equality_ignores_nothing_but_the_strings() {
        let a = CityZone::resolve("Tokyo", "Asia/Tokyo").unwrap();
        let b = CityZone::resolve("Tokyo", "Asia/Tokyo").unwrap();
        let c = CityZone::resolve("Tokio", "Asia/Tokyo").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
