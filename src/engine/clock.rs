//! Time-zone aware formatting and the state behind one clock cell.

use std::time::{Duration, Instant};

use crate::engine::ticker::Ticker;
use crate::error::{AppError, Result};
use crate::types::{CityZone, ClockStyle};
use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::Timestamp;

/// Interval between re-renders of a unit's time text.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(1000);

// ── Formatting ────────────────────────────────────────────────────────────────

/// Format the instant `at` as seen in `tz`, using strftime directives.
///
/// DST transitions come from the tz database, so the same `at` yields the
/// correct civil time and abbreviation on either side of a change.
pub fn format_at(at: Timestamp, tz: &TimeZone, format: &str) -> Result<String> {
    let zoned = at.to_zoned(tz.clone());
    strtime::format(format, &zoned).map_err(|source| AppError::Format {
        format: format.to_string(),
        source,
    })
}

/// Current wall-clock time in `tz`.
pub fn format_now(tz: &TimeZone, format: &str) -> Result<String> {
    format_at(Timestamp::now(), tz, format)
}

/// A point in time as seen by both the scheduler (monotonic) and the
/// formatter (wall clock).
#[derive(Clone, Copy, Debug)]
pub struct Moment {
    pub instant: Instant,
    pub wall: Timestamp,
}

impl Moment {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Timestamp::now(),
        }
    }
}

// ── Clock unit ────────────────────────────────────────────────────────────────

/// One clock cell: a city label, an optional date line and a time string
/// refreshed every [`REFRESH_PERIOD`].
#[derive(Debug)]
pub struct ClockUnit {
    entry: CityZone,
    label: String,
    style: ClockStyle,
    time_text: String,
    date_text: Option<String>,
    ticker: Ticker,
}

impl ClockUnit {
    /// Renders the time and, when styled with one, the date. Bad format
    /// strings fail here rather than on a later tick.
    pub fn new(entry: CityZone, style: ClockStyle, at: Moment) -> Result<Self> {
        let mut unit = Self {
            label: entry.display_name(),
            entry,
            style,
            time_text: String::new(),
            date_text: None,
            ticker: Ticker::new(REFRESH_PERIOD, at.instant),
        };
        unit.render_time(at.wall)?;
        unit.render_date(at.wall)?;
        Ok(unit)
    }

    /// Re-render the time if the refresh deadline has passed.
    pub fn tick(&mut self, at: Moment) -> Result<bool> {
        if !self.ticker.poll(at.instant) {
            return Ok(false);
        }
        self.render_time(at.wall)?;
        Ok(true)
    }

    /// Point this unit at another city. The time is re-rendered right away
    /// for the new zone; the refresh schedule is left as is.
    pub fn reassign(&mut self, entry: CityZone, at: Moment) -> Result<()> {
        self.label = entry.display_name();
        self.entry = entry;
        self.render_time(at.wall)?;
        if self.date_text.is_some() {
            self.render_date(at.wall)?;
        }
        Ok(())
    }

    fn render_time(&mut self, wall: Timestamp) -> Result<()> {
        self.time_text = format_at(wall, &self.entry.tz, &self.style.time_format)?;
        Ok(())
    }

    // The date is rendered on construction only; it does not tick.
    fn render_date(&mut self, wall: Timestamp) -> Result<()> {
        if let Some(date) = &self.style.date {
            self.date_text = Some(format_at(wall, &self.entry.tz, &date.format)?);
        }
        Ok(())
    }

    pub fn entry(&self) -> &CityZone {
        &self.entry
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn date_text(&self) -> Option<&str> {
        self.date_text.as_deref()
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    pub fn next_due(&self) -> Instant {
        self.ticker.next_due()
    }
}
