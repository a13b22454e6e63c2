use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

/// Number of days in a month, derived as the day before the first of the next
/// month so leap-year February comes out right.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("First of a month should always exist")
        .pred_opt()
        .expect("First of a month should always have a predecessor")
        .day()
}

/// Counts Monday-Friday days of the month that are not public holidays.
/// `month` is 1-indexed.
pub fn working_days_in_month(year: i32, month: u32, holidays: &BTreeSet<NaiveDate>) -> u32 {
    (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| is_working_day(*date, holidays))
        .count() as u32
}

fn is_working_day(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> bool {
    date.weekday().number_from_monday() <= 5 && !holidays.contains(&date)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use crate::account::holidays::holidays_for_year;

    use super::{days_in_month, working_days_in_month};

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn leap_year_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn counts_weekdays_without_holidays() {
        // January 2024 starts on a Monday and has 23 weekdays.
        assert_eq!(working_days_in_month(2024, 1, &BTreeSet::new()), 23);
    }

    #[test]
    fn holidays_on_weekdays_are_excluded() {
        // New Year's Day 2024 is a Monday, the only January holiday.
        let holidays = holidays_for_year(2024);
        assert_eq!(working_days_in_month(2024, 1, &holidays), 22);
    }

    #[test]
    fn weekend_holidays_do_not_double_count() {
        // December 25 2021 falls on a Saturday, so excluding it changes
        // nothing compared to plain weekday counting.
        let holidays = [NaiveDate::from_ymd_opt(2021, 12, 25).unwrap()]
            .into_iter()
            .collect::<BTreeSet<_>>();
        assert_eq!(
            working_days_in_month(2021, 12, &holidays),
            working_days_in_month(2021, 12, &BTreeSet::new())
        );
    }
}
