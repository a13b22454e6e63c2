use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::warn;

use crate::utils::time::parse_entry_key;

/// Raw per-day duration records as supplied by the external fetcher: a JSON
/// object mapping `YYYY-MM-DD` keys to `H:M:S` duration strings.
pub type RawEntries = BTreeMap<String, String>;

/// Parses a colon-separated `H:M:S` duration into seconds. The hour field can
/// be any width and seconds may be fractional. Returns [None] for fewer than
/// 3 fields or non-numeric fields.
pub fn parse_duration_secs(value: &str) -> Option<f64> {
    let mut fields = value.split(':');
    let hours = fields.next()?.trim().parse::<u64>().ok()?;
    let minutes = fields.next()?.trim().parse::<u64>().ok()?;
    let seconds = fields.next()?.trim().parse::<f64>().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
}

/// Sums the durations of all entries that fall inside the given month.
/// Entries from other months are ignored, malformed entries are skipped so a
/// single corrupt record can't lose the whole month. Fractional seconds are
/// kept in the sum, truncation happens only when hours/minutes are derived.
pub fn sum_durations_in_month(entries: &RawEntries, year: i32, month: u32) -> f64 {
    let mut total = 0.0;
    for (key, value) in entries {
        let Some(date) = parse_entry_key(key) else {
            warn!("Skipping entry with unparseable date {key:?}");
            continue;
        };
        if date.year() != year || date.month() != month {
            continue;
        }
        match parse_duration_secs(value) {
            Some(seconds) => total += seconds,
            None => warn!("Skipping malformed duration {value:?} for {date}"),
        }
    }
    total
}
