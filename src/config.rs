//! Settings read from the process environment, with the defaults the clock
//! has always shipped with.

use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::types::{CityZone, ClockStyle, DateLine, TextStyle, WindowGeometry};
use crate::colors::parse_color;
use log::info;

/// Highest `CITYn`/`TZn` index that is read.
pub const MAX_CITIES: usize = 52;

/// Number of lower clocks, and so the minimum rotation pool size.
pub const LOWER_CLOCKS: usize = 4;

const DEFAULT_FONT_FAMILY: &str = "Helvetica";
const DEFAULT_FONT_COLOR: &str = "white";
const DEFAULT_CLOCK_FORMAT: &str = "%H:%M:%S";
const DEFAULT_DATE_FORMAT: &str = "%A, %B %d, %Y";

#[derive(Clone, Debug)]
pub struct Settings {
    pub main: CityZone,
    /// Rotation pool: every configured pair except the main one.
    pub pool: Vec<CityZone>,
    pub main_style: ClockStyle,
    pub lower_style: ClockStyle,
    pub lower_update_interval: Duration,
    pub window: WindowGeometry,
}

impl Settings {
    /// Load `.env` (when present) and read settings from the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment overrides from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring unreadable .env file: {e}"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let main = CityZone::resolve(env.required("MAIN_CITY")?, env.required("MAIN_TZ")?)?;

        let mut pool = Vec::with_capacity(MAX_CITIES);
        for index in 1..=MAX_CITIES {
            let city = env.get(&format!("CITY{index}"));
            let zone = env.get(&format!("TZ{index}"));
            match (city, zone) {
                (Some(city), Some(zone)) => pool.push(CityZone::resolve(city, zone)?),
                (None, None) => {}
                (Some(_), None) => {
                    return Err(AppError::UnpairedCity { index, which: "TZ" });
                }
                (None, Some(_)) => {
                    return Err(AppError::UnpairedCity {
                        index,
                        which: "CITY",
                    });
                }
            }
        }
        pool.retain(|entry| *entry != main);
        if pool.len() < LOWER_CLOCKS {
            return Err(AppError::PoolTooSmall {
                available: pool.len(),
                needed: LOWER_CLOCKS,
            });
        }

        let city_family = env.string("CITY_FONT_FAMILY", DEFAULT_FONT_FAMILY);
        let city_color = env.color("CITY_FONT_COLOR", DEFAULT_FONT_COLOR)?;
        let clock_family = env.string("CLOCK_FONT_FAMILY", DEFAULT_FONT_FAMILY);
        let clock_color = env.color("CLOCK_FONT_COLOR", DEFAULT_FONT_COLOR)?;

        let date = DateLine {
            style: TextStyle {
                family: env.string("DATE_FONT_FAMILY", DEFAULT_FONT_FAMILY),
                size: env.font_size("DATE_FONT_SIZE", 60.0)?,
                color: env.color("DATE_FONT_COLOR", DEFAULT_FONT_COLOR)?,
                bold: false,
            },
            format: env.string("DATE_FORMAT", DEFAULT_DATE_FORMAT),
        };

        let main_style = ClockStyle {
            city: TextStyle {
                family: city_family.clone(),
                size: env.font_size("MAIN_CITY_FONT_SIZE", 200.0)?,
                color: city_color,
                bold: true,
            },
            time: TextStyle {
                family: clock_family.clone(),
                size: env.font_size("MAIN_CLOCK_FONT_SIZE", 200.0)?,
                color: clock_color,
                bold: false,
            },
            time_format: env.string("MAIN_CLOCK_FORMAT", DEFAULT_CLOCK_FORMAT),
            date: Some(date),
        };

        let lower_style = ClockStyle {
            city: TextStyle {
                family: city_family,
                size: env.font_size("LOWER_CITY_FONT_SIZE", 100.0)?,
                color: city_color,
                bold: true,
            },
            time: TextStyle {
                family: clock_family,
                size: env.font_size("LOWER_CLOCK_FONT_SIZE", 100.0)?,
                color: clock_color,
                bold: false,
            },
            time_format: env.string("LOWER_CLOCK_FORMAT", DEFAULT_CLOCK_FORMAT),
            date: None,
        };

        let interval_ms: u64 = env.parsed("LOWER_CLOCKS_UPDATE_EVERY_X_MILLISECONDS", 60_000)?;
        if interval_ms == 0 {
            return Err(AppError::invalid(
                "LOWER_CLOCKS_UPDATE_EVERY_X_MILLISECONDS",
                "0",
                "interval must be positive",
            ));
        }

        let (width, height, position) = match env.get("WINDOW_SIZE") {
            Some(value) => parse_geometry(&value)
                .map_err(|reason| AppError::invalid("WINDOW_SIZE", &value, reason))?,
            None => (1024.0, 768.0, None),
        };
        let fullscreen = match env.get("FULLSCREEN") {
            Some(value) => {
                parse_flag(&value).map_err(|reason| AppError::invalid("FULLSCREEN", &value, reason))?
            }
            None => false,
        };
        let window = WindowGeometry {
            width,
            height,
            position,
            fullscreen,
            background: env.color("WINDOW_BG_COLOR", "black")?,
        };

        let settings = Self {
            main,
            pool,
            main_style,
            lower_style,
            lower_update_interval: Duration::from_millis(interval_ms),
            window,
        };
        info!(
            "Main clock {} ({}), {} cities in rotation every {:?}",
            settings.main.display_name(),
            settings.main.zone,
            settings.pool.len(),
            settings.lower_update_interval,
        );
        Ok(settings)
    }
}

// ── Lookup helpers ────────────────────────────────────────────────────────────

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String> {
        self.get(name).ok_or_else(|| AppError::MissingVar {
            name: name.to_string(),
        })
    }

    fn string(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn parsed<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| AppError::invalid(name, &value, e.to_string())),
            None => Ok(default),
        }
    }

    fn font_size(&self, name: &str, default: f32) -> Result<f32> {
        let size: f32 = self.parsed(name, default)?;
        if size.is_finite() && size > 0.0 {
            Ok(size)
        } else {
            Err(AppError::invalid(
                name,
                &size.to_string(),
                "font size must be a positive number",
            ))
        }
    }

    fn color(&self, name: &str, default: &str) -> Result<eframe::egui::Color32> {
        let value = self.string(name, default);
        parse_color(&value).map_err(|reason| AppError::invalid(name, &value, reason))
    }
}

/// Parse a Tk geometry string: `WxH` optionally followed by `+X+Y`.
fn parse_geometry(value: &str) -> std::result::Result<(f32, f32, Option<(f32, f32)>), String> {
    let value = value.trim();
    let (size, offset) = match value.find(['+', '-']) {
        Some(at) => (&value[..at], Some(&value[at..])),
        None => (value, None),
    };
    let (w, h) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| "expected WIDTHxHEIGHT".to_string())?;
    let dimension = |s: &str| match s.trim().parse::<u32>() {
        Ok(0) => Err("dimensions must be positive".to_string()),
        Ok(n) => Ok(n as f32),
        Err(e) => Err(format!("bad dimension {s:?}: {e}")),
    };
    let (width, height) = (dimension(w)?, dimension(h)?);

    let position = match offset {
        None => None,
        Some(offset) => Some(parse_offset(offset)?),
    };
    Ok((width, height, position))
}

/// `+X+Y`, where either sign may be `-`.
fn parse_offset(offset: &str) -> std::result::Result<(f32, f32), String> {
    let split = offset[1..]
        .find(['+', '-'])
        .map(|i| i + 1)
        .ok_or_else(|| "expected +X+Y after the size".to_string())?;
    let coord = |s: &str| {
        s.parse::<i32>()
            .map(|n| n as f32)
            .map_err(|e| format!("bad offset {s:?}: {e}"))
    };
    let x = coord(offset[..split].trim_start_matches('+'))?;
    let y = coord(offset[split..].trim_start_matches('+'))?;
    Ok((x, y))
}

fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("{other:?} is not a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<String, String> {
        let mut vars = HashMap::new();
        let cities = [
            ("A", "Europe/London"),
            ("B", "Asia/Tokyo"),
            ("C", "America/New_York"),
            ("D", "Australia/Sydney"),
            ("E", "Europe/Berlin"),
        ];
        for (i, (city, zone)) in cities.iter().enumerate() {
            vars.insert(format!("CITY{}", i + 1), city.to_string());
            vars.insert(format!("TZ{}", i + 1), zone.to_string());
        }
        vars.insert("MAIN_CITY".into(), "E".into());
        vars.insert("MAIN_TZ".into(), "Europe/Berlin".into());
        vars
    }

    fn load(vars: &HashMap<String, String>) -> Result<Settings> {
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = load(&base_vars()).unwrap();
        assert_eq!(settings.main_style.time_format, "%H:%M:%S");
        assert_eq!(settings.main_style.city.size, 200.0);
        assert_eq!(settings.lower_style.time.size, 100.0);
        assert_eq!(settings.lower_style.city.family, "Helvetica");
        assert!(settings.lower_style.date.is_none());
        let date = settings.main_style.date.as_ref().unwrap();
        assert_eq!(date.format, "%A, %B %d, %Y");
        assert_eq!(date.style.size, 60.0);
        assert_eq!(settings.lower_update_interval, Duration::from_secs(60));
        assert_eq!(settings.window.width, 1024.0);
        assert_eq!(settings.window.height, 768.0);
        assert!(!settings.window.fullscreen);
        assert_eq!(settings.window.background, Color32::BLACK);
    }

    #[test]
    fn only_city_labels_are_bold() {
        let settings = load(&base_vars()).unwrap();
        for style in [&settings.main_style, &settings.lower_style] {
            assert!(style.city.bold);
            assert!(!style.time.bold);
        }
        assert!(!settings.main_style.date.unwrap().style.bold);
    }

    #[test]
    fn main_pair_is_excluded_from_pool() {
        let settings = load(&base_vars()).unwrap();
        assert_eq!(settings.pool.len(), 4);
        assert!(!settings.pool.contains(&settings.main));
        let names: Vec<_> = settings.pool.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    #[test]
    fn gaps_in_indices_are_skipped() {
        let mut vars = base_vars();
        vars.insert("CITY52".into(), "Honolulu".into());
        vars.insert("TZ52".into(), "Pacific/Honolulu".into());
        let settings = load(&vars).unwrap();
        assert_eq!(settings.pool.len(), 5);
        assert_eq!(settings.pool[4].city, "Honolulu");
    }

    #[test]
    fn missing_main_is_an_error() {
        let mut vars = base_vars();
        vars.remove("MAIN_TZ");
        assert!(matches!(
            load(&vars),
            Err(AppError::MissingVar { ref name }) if name == "MAIN_TZ"
        ));
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let mut vars = base_vars();
        vars.insert("MAIN_CITY".into(), "  ".into());
        assert!(matches!(load(&vars), Err(AppError::MissingVar { .. })));
    }

    #[test]
    fn half_a_pair_is_an_error() {
        let mut vars = base_vars();
        vars.insert("CITY7".into(), "Lima".into());
        assert!(matches!(
            load(&vars),
            Err(AppError::UnpairedCity { index: 7, which: "TZ" })
        ));
    }

    #[test]
    fn bad_zone_is_an_error() {
        let mut vars = base_vars();
        vars.insert("TZ2".into(), "Mars/Olympus_Mons".into());
        assert!(matches!(load(&vars), Err(AppError::TimeZone { .. })));
    }

    #[test]
    fn pool_must_fill_the_lower_row() {
        let mut vars = base_vars();
        vars.remove("CITY4");
        vars.remove("TZ4");
        assert!(matches!(
            load(&vars),
            Err(AppError::PoolTooSmall {
                available: 3,
                needed: 4
            })
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let mut vars = base_vars();
        vars.insert("FULLSCREEN".into(), "True".into());
        vars.insert("WINDOW_SIZE".into(), "1920x1080+10-20".into());
        vars.insert("WINDOW_BG_COLOR".into(), "#102030".into());
        vars.insert("CITY_FONT_COLOR".into(), "Dark Orange".into());
        vars.insert("LOWER_CLOCKS_UPDATE_EVERY_X_MILLISECONDS".into(), "1500".into());
        vars.insert("LOWER_CLOCK_FORMAT".into(), "%I:%M %p".into());
        vars.insert("DATE_FONT_SIZE".into(), "42.5".into());
        let settings = load(&vars).unwrap();
        assert!(settings.window.fullscreen);
        assert_eq!(settings.window.width, 1920.0);
        assert_eq!(settings.window.height, 1080.0);
        assert_eq!(settings.window.position, Some((10.0, -20.0)));
        assert_eq!(settings.window.background, Color32::from_rgb(0x10, 0x20, 0x30));
        assert_eq!(settings.lower_style.city.color, Color32::from_rgb(255, 140, 0));
        assert_eq!(settings.lower_update_interval, Duration::from_millis(1500));
        assert_eq!(settings.lower_style.time_format, "%I:%M %p");
        assert_eq!(settings.main_style.date.unwrap().style.size, 42.5);
    }

    #[test]
    fn malformed_values_are_rejected() {
        for (name, value) in [
            ("FULLSCREEN", "maybe"),
            ("WINDOW_SIZE", "big"),
            ("WINDOW_SIZE", "0x768"),
            ("MAIN_CLOCK_FONT_SIZE", "-3"),
            ("LOWER_CITY_FONT_SIZE", "huge"),
            ("LOWER_CLOCKS_UPDATE_EVERY_X_MILLISECONDS", "0"),
            ("CLOCK_FONT_COLOR", "not-a-color"),
        ] {
            let mut vars = base_vars();
            vars.insert(name.into(), value.into());
            assert!(
                matches!(load(&vars), Err(AppError::InvalidVar { .. })),
                "{name}={value} should be rejected"
            );
        }
    }

    #[test]
    fn geometry_strings() {
        assert_eq!(parse_geometry("800x600"), Ok((800.0, 600.0, None)));
        assert_eq!(parse_geometry("800X600+5+6"), Ok((800.0, 600.0, Some((5.0, 6.0)))));
        assert!(parse_geometry("800x600+5").is_err());
    }
}
