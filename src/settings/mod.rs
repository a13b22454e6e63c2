//! Persisted user settings: the day counters, display preferences and colors
//! the account engine is parameterized with. Stored as a small JSON file and
//! stamped with the month the day counters belong to, so counters reset on
//! month rollover.

use std::{io::ErrorKind, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::account::display::{ColorScheme, DisplayMode, Rgb};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bonus_days: u32,
    pub gift_days: u32,
    pub show_minutes: bool,
    pub display_format: DisplayMode,
    pub start_color: Rgb,
    pub end_color: Rgb,
    pub ahead_color: Rgb,
    /// Month the day counters belong to, as `year-month`.
    pub month: String,
}

impl Default for Settings {
    fn default() -> Self {
        let colors = ColorScheme::default();
        Self {
            bonus_days: 0,
            gift_days: 0,
            show_minutes: true,
            display_format: DisplayMode::Ratio,
            start_color: colors.start,
            end_color: colors.end,
            ahead_color: colors.ahead,
            month: String::new(),
        }
    }
}

impl Settings {
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            start: self.start_color,
            end: self.end_color,
            ahead: self.ahead_color,
        }
    }
}

pub fn month_key(year: i32, month: u32) -> String {
    format!("{year}-{month}")
}

/// Loads settings for the given month. A missing file yields defaults. When
/// the stored month differs, the day counters reset to zero while display
/// preferences are kept.
pub fn load(path: &Path, year: i32, month: u32) -> Result<Settings> {
    let current = month_key(year, month);
    let raw = match std::fs::read_to_string(path) {
        Ok(v) => v,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No saved settings at {path:?}, starting from defaults");
            return Ok(Settings {
                month: current,
                ..Settings::default()
            });
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read settings from {path:?}")),
    };

    let mut settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Settings file {path:?} is not valid"))?;
    if settings.month != current {
        info!(
            "Month changed from {} to {current}, resetting day counters",
            settings.month
        );
        settings.bonus_days = 0;
        settings.gift_days = 0;
        settings.month = current;
    }
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, data)
        .with_context(|| format!("Failed to write settings to {path:?}"))?;
    debug!(
        "Saved: bonus={}, gift={} for {}",
        settings.bonus_days, settings.gift_days, settings.month
    );
    Ok(())
}
