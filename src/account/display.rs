use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;
use clap::ValueEnum;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::monthly::MonthlyAccountResult;

/// How the status text presents the monthly numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Logged vs target, `"12h30/140h"`.
    #[default]
    Ratio,
    /// Signed delta to the target, `"-4h15"` or `"+2h"` when ahead.
    Remaining,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText {
    pub text: String,
    pub on_track: bool,
}

/// Renders a monthly result as a short status string. In remaining mode the
/// on-track flag becomes "is ahead of target".
pub fn format_status(
    result: &MonthlyAccountResult,
    show_minutes: bool,
    mode: DisplayMode,
) -> StatusText {
    match mode {
        DisplayMode::Ratio => {
            let text = if show_minutes {
                format!(
                    "{}h{:02}/{}h",
                    result.total_hours, result.total_minutes, result.working_hours
                )
            } else {
                format!("{}h/{}h", result.total_hours, result.working_hours)
            };
            StatusText {
                text,
                on_track: result.on_track,
            }
        }
        DisplayMode::Remaining => {
            let remaining = result.working_hours as f64 * 3600.0 - result.total_seconds;
            let ahead = remaining < 0.0;
            // Hours/minutes are derived from the absolute delta, otherwise
            // flooring a negative delta would overshoot by an hour.
            let delta = remaining.abs();
            let hours = (delta / 3600.0).floor() as u64;
            let minutes = (delta % 3600.0 / 60.0).floor() as u64;
            let sign = if ahead { '+' } else { '-' };
            let text = if show_minutes {
                format!("{sign}{hours}h{minutes:02}")
            } else {
                format!("{sign}{hours}h")
            };
            StatusText {
                text,
                on_track: ahead,
            }
        }
    }
}

/// 24-bit color, parsed from and rendered as a `#rrggbb` hex triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(anyhow!("Can't parse {s} into a #rrggbb color"));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| anyhow!("Can't parse {s} into a #rrggbb color"))?;
        Ok(Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The three endpoint colors of the progress signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub start: Rgb,
    pub end: Rgb,
    pub ahead: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            start: Rgb {
                r: 0xef,
                g: 0x44,
                b: 0x44,
            },
            end: Rgb {
                r: 0x4a,
                g: 0xde,
                b: 0x80,
            },
            ahead: Rgb {
                r: 0x00,
                g: 0xc8,
                b: 0xff,
            },
        }
    }
}

/// Easing exponent. Compresses early behind-schedule feedback and accelerates
/// the color transition near completion.
const PROGRESS_EASING: f64 = 2.5;

/// Continuous color signal for the status label. Below target the color is a
/// per-channel interpolation between `start` and `end` over the eased
/// progress fraction, above target it is exactly `ahead`. A zero-hour target
/// counts as at-or-above target.
pub fn progress_color(result: &MonthlyAccountResult, scheme: &ColorScheme) -> Rgb {
    if result.working_hours == 0 {
        return scheme.ahead;
    }
    let ratio = result.total_hours as f64 / result.working_hours as f64;
    if ratio > 1.0 {
        return scheme.ahead;
    }
    let eased = ratio.clamp(0.0, 1.0).powf(PROGRESS_EASING);
    Rgb {
        r: interpolate_channel(scheme.start.r, scheme.end.r, eased),
        g: interpolate_channel(scheme.start.g, scheme.end.g, eased),
        b: interpolate_channel(scheme.start.b, scheme.end.b, eased),
    }
}

fn interpolate_channel(start: u8, end: u8, fraction: f64) -> u8 {
    (start as f64 + (end as f64 - start as f64) * fraction).round() as u8
}

#[cfg(test)]
mod tests {
    use crate::account::monthly::MonthlyAccountResult;

    use super::{format_status, progress_color, ColorScheme, DisplayMode, Rgb, StatusText};

    fn result(total_seconds: f64, working_hours: u64) -> MonthlyAccountResult {
        let total_hours = (total_seconds / 3600.0).floor() as u64;
        MonthlyAccountResult {
            total_seconds,
            total_hours,
            total_minutes: (total_seconds % 3600.0 / 60.0).floor() as u64,
            working_days: (working_hours / 7) as u32,
            working_hours,
            on_track: total_hours >= working_hours,
        }
    }

    #[test]
    fn ratio_mode_with_minutes() {
        let status = format_status(&result(12.0 * 3600.0 + 30.0 * 60.0, 140), true, DisplayMode::Ratio);
        assert_eq!(
            status,
            StatusText {
                text: "12h30/140h".into(),
                on_track: false
            }
        );
    }

    #[test]
    fn ratio_mode_drops_minutes_even_when_nonzero() {
        let status = format_status(&result(5.0 * 3600.0 + 45.0 * 60.0, 140), false, DisplayMode::Ratio);
        assert_eq!(status.text, "5h/140h");
    }

    #[test]
    fn ratio_mode_pads_minutes_to_two_digits() {
        let status = format_status(&result(3600.0 + 300.0, 140), true, DisplayMode::Ratio);
        assert_eq!(status.text, "1h05/140h");
    }

    #[test]
    fn remaining_mode_behind_target() {
        // 135h45 logged against 140h leaves 4h15.
        let status = format_status(
            &result(135.0 * 3600.0 + 45.0 * 60.0, 140),
            true,
            DisplayMode::Remaining,
        );
        assert_eq!(
            status,
            StatusText {
                text: "-4h15".into(),
                on_track: false
            }
        );
    }

    #[test]
    fn remaining_mode_ahead_of_target() {
        let status = format_status(
            &result(141.0 * 3600.0 + 60.0, 140),
            true,
            DisplayMode::Remaining,
        );
        assert_eq!(
            status,
            StatusText {
                text: "+1h01".into(),
                on_track: true
            }
        );
    }

    #[test]
    fn remaining_mode_without_minutes() {
        let status = format_status(
            &result(135.0 * 3600.0 + 45.0 * 60.0, 140),
            false,
            DisplayMode::Remaining,
        );
        assert_eq!(status.text, "-4h");
    }

    #[test]
    fn rgb_round_trips_through_hex() {
        let color: Rgb = "#ef4444".parse().unwrap();
        assert_eq!(
            color,
            Rgb {
                r: 0xef,
                g: 0x44,
                b: 0x44
            }
        );
        assert_eq!(color.to_string(), "#ef4444");
        assert!("#ef44".parse::<Rgb>().is_err());
        assert!("zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn color_at_zero_progress_is_exactly_start() {
        let scheme = ColorScheme::default();
        assert_eq!(progress_color(&result(0.0, 140), &scheme), scheme.start);
    }

    #[test]
    fn color_at_full_progress_is_exactly_end() {
        let scheme = ColorScheme::default();
        assert_eq!(
            progress_color(&result(140.0 * 3600.0, 140), &scheme),
            scheme.end
        );
    }

    #[test]
    fn color_over_target_is_exactly_ahead() {
        let scheme = ColorScheme::default();
        assert_eq!(
            progress_color(&result(141.0 * 3600.0, 140), &scheme),
            scheme.ahead
        );
    }

    #[test]
    fn zero_hour_target_counts_as_ahead() {
        let scheme = ColorScheme::default();
        assert_eq!(progress_color(&result(0.0, 0), &scheme), scheme.ahead);
    }

    #[test]
    fn easing_compresses_early_progress() {
        let scheme = ColorScheme::default();
        // Halfway through the month the eased fraction is 0.5^2.5 ~ 0.177, so
        // the color should still sit close to the start endpoint.
        let halfway = progress_color(&result(70.0 * 3600.0, 140), &scheme);
        assert!(halfway.r > 0xc0);
        assert!(halfway.g < 0x80);
    }
}
