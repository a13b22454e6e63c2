use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// Easter Sunday for a year, computed with the Meeus/Jones/Butcher algorithm
/// for the Gregorian calendar. Pure integer function of the year.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("Easter computation should always produce a valid date")
}

/// French public holidays (jours fériés) for a year. 8 fixed dates plus the
/// Easter-derived cluster: Easter Monday, Ascension and Pentecost Monday.
pub fn holidays_for_year(year: i32) -> BTreeSet<NaiveDate> {
    const FIXED: [(u32, u32); 8] = [
        (1, 1),   // Jour de l'an
        (5, 1),   // Fête du Travail
        (5, 8),   // Victoire 1945
        (7, 14),  // Fête nationale
        (8, 15),  // Assomption
        (11, 1),  // Toussaint
        (11, 11), // Armistice 1918
        (12, 25), // Noël
    ];

    let mut holidays = FIXED
        .iter()
        .map(|&(month, day)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .expect("Fixed holidays should always be valid dates")
        })
        .collect::<BTreeSet<_>>();

    // The moving cluster. Offsets are counted from Easter Sunday and can cross
    // a month boundary.
    let easter = easter_sunday(year);
    holidays.insert(easter + Duration::days(1)); // Lundi de Pâques
    holidays.insert(easter + Duration::days(39)); // Ascension
    holidays.insert(easter + Duration::days(50)); // Lundi de Pentecôte

    holidays
}
