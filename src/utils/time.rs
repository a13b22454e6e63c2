use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, bail};
use chrono::{Datelike, Local, NaiveDate};

/// This is the standard way of writing a date key in logtime.
pub fn date_to_entry_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_entry_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// A calendar month, the unit every accounting request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// The month containing the local current date.
    pub fn current() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("Expected a YYYY-MM month, got {s}"))?;
        let year = year.parse()?;
        let month: u32 = month.parse()?;
        if !(1..=12).contains(&month) {
            bail!("Month must be between 1 and 12, got {month}");
        }
        Ok(Self { year, month })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{date_to_entry_key, parse_entry_key, YearMonth};

    #[test]
    fn entry_keys_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(date_to_entry_key(date), "2024-02-09");
        assert_eq!(parse_entry_key("2024-02-09"), Some(date));
        assert_eq!(parse_entry_key("02/09/2024"), None);
    }

    #[test]
    fn year_month_parsing() {
        let month: YearMonth = "2024-02".parse().unwrap();
        assert_eq!(
            month,
            YearMonth {
                year: 2024,
                month: 2
            }
        );
        assert_eq!(month.to_string(), "2024-02");
        assert!("2024".parse::<YearMonth>().is_err());
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("2024-00".parse::<YearMonth>().is_err());
    }
}
