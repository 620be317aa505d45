//! age.rs
//!
//! Calendar-aware age in years, months and days, shown as the "uptime" of a
//! life in the report and the share image.
//!
//! Chrono has no year/month/day diff, so the borrowing rules live here:
//!   • day underflow borrows the length of the month(s) before `today`
//!   • month underflow borrows a year
//!   • February follows the Gregorian leap-year rule

use std::fmt;

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl AgeBreakdown {
    /// Age on `today` of someone born on `birthdate`. `today` must not be
    /// earlier than `birthdate`.
    pub fn between(birthdate: NaiveDate, today: NaiveDate) -> Self {
        let mut years = today.year() - birthdate.year();
        let mut months = today.month() as i32 - birthdate.month() as i32;
        let mut days = today.day() as i32 - birthdate.day() as i32;

        // A short month may not cover the deficit (born on the 30th, today is
        // 1 March of a common year), so keep borrowing further back.
        let (mut year, mut month) = (today.year(), today.month());
        while days < 0 {
            months -= 1;
            (year, month) = previous_month(year, month);
            days += days_in_month(year, month) as i32;
        }

        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months,
            days,
        }
    }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_birthday() {
        let age = AgeBreakdown::between(date(1992, 6, 14), date(2024, 6, 14));
        assert_eq!(age, AgeBreakdown { years: 32, months: 0, days: 0 });
        assert_eq!(age.to_string(), "32 years, 0 months, 0 days");
    }

    #[test]
    fn test_day_underflow_borrows_previous_month() {
        // May has 31 days: 31 - 14 + 10 = 27
        let age = AgeBreakdown::between(date(1992, 6, 14), date(2024, 6, 10));
        assert_eq!(age, AgeBreakdown { years: 31, months: 11, days: 27 });
    }

    #[test]
    fn test_borrow_across_new_year() {
        let age = AgeBreakdown::between(date(2000, 12, 20), date(2024, 1, 5));
        assert_eq!(age, AgeBreakdown { years: 23, months: 0, days: 16 });
    }

    #[test]
    fn test_leap_february_borrow() {
        let leap = AgeBreakdown::between(date(2000, 1, 30), date(2024, 3, 1));
        assert_eq!(leap.days, 0);
        assert_eq!(leap.months, 1);

        // February 2023 has 28 days, so January is borrowed as well.
        let common = AgeBreakdown::between(date(2000, 1, 30), date(2023, 3, 1));
        assert_eq!(common, AgeBreakdown { years: 23, months: 0, days: 30 });
    }

    #[test]
    fn test_singular_units() {
        let age = AgeBreakdown::between(date(2022, 5, 9), date(2023, 6, 10));
        assert_eq!(age.to_string(), "1 year, 1 month, 1 day");
    }

    #[test]
    fn test_leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }
}
