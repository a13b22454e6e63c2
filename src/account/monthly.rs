use tracing::debug;

use super::{
    aggregate::{sum_durations_in_month, RawEntries},
    holidays::holidays_for_year,
    working_days::working_days_in_month,
};

/// Contracted hours for one working day.
pub const HOURS_PER_WORKING_DAY: u64 = 7;

/// User-declared day adjustments for the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjustments {
    /// Each bonus day credits 7 hours to the logged total.
    pub bonus_days: u32,
    /// Each gift day removes one working day from the target.
    pub gift_days: u32,
}

/// Result of one monthly evaluation. A plain value, recomputed fresh on every
/// request.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAccountResult {
    /// Logged seconds in the month, bonus credit included.
    pub total_seconds: f64,
    pub total_hours: u64,
    pub total_minutes: u64,
    /// Working days after gift days are subtracted, floored at zero.
    pub working_days: u32,
    /// Target for the month, always `working_days * 7`.
    pub working_hours: u64,
    pub on_track: bool,
}

/// Evaluates the month: target from the business-day calendar, total from the
/// raw entries, both adjusted by the given day counts.
pub fn compute(
    entries: &RawEntries,
    year: i32,
    month: u32,
    adjustments: Adjustments,
) -> MonthlyAccountResult {
    let holidays = holidays_for_year(year);
    let raw_working_days = working_days_in_month(year, month, &holidays);
    let working_days = raw_working_days.saturating_sub(adjustments.gift_days);
    let working_hours = working_days as u64 * HOURS_PER_WORKING_DAY;

    let total_seconds = sum_durations_in_month(entries, year, month)
        + adjustments.bonus_days as f64 * (HOURS_PER_WORKING_DAY * 3600) as f64;

    let total_hours = (total_seconds / 3600.0).floor() as u64;
    let total_minutes = (total_seconds % 3600.0 / 60.0).floor() as u64;

    debug!(
        "Working days: {raw_working_days}, gift days: {}, target: {working_hours}h",
        adjustments.gift_days
    );

    MonthlyAccountResult {
        total_seconds,
        total_hours,
        total_minutes,
        working_days,
        working_hours,
        on_track: total_hours >= working_hours,
    }
}
