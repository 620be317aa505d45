//! stats.rs
//!
//! Maps a birthdate and an explicit "now" to a `StatisticsRecord`. Everything
//! is derived from a single elapsed-milliseconds value so the temporal fields
//! stay consistent with each other.
//!
//! Years are 365.25-day years and weeks are 7-day weeks, computed
//! independently. `weeks_lived / 52` drifts slightly from `years_lived`, and
//! that drift is kept.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::error::LifeError;
use crate::rates::{Basis, Category, Metric, RATE_TABLE};

pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;
pub const MS_PER_WEEK: i64 = MS_PER_DAY * 7;
pub const MS_PER_YEAR: f64 = MS_PER_DAY as f64 * 365.25;

pub const WEEKS_PER_YEAR: u64 = 52;
/// Shortest projection horizon in years.
pub const MIN_HORIZON_YEARS: u64 = 90;
/// The horizon always extends this far past the current age.
pub const HORIZON_MARGIN_YEARS: u64 = 10;

/// Values of every table-driven estimate, indexed by `Metric`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimates([u64; Metric::COUNT]);

impl Estimates {
    pub fn get(&self, metric: Metric) -> u64 {
        self.0[metric.index()]
    }

    /// Estimates in table order with their category.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, Category, u64)> + '_ {
        RATE_TABLE
            .iter()
            .map(move |row| (row.metric, row.category, self.get(row.metric)))
    }
}

impl Serialize for Estimates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Metric::COUNT))?;
        for row in RATE_TABLE.iter() {
            map.serialize_entry(row.metric.key(), &self.get(row.metric))?;
        }
        map.end()
    }
}

/// Immutable snapshot of everything derived from one birthdate at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsRecord {
    pub birthdate: NaiveDate,
    pub computed_at: NaiveDateTime,
    pub birth_year: i32,
    /// 1-based.
    pub birth_month: u32,

    pub years_lived: f64,
    /// Years rounded to one decimal.
    pub age: f64,
    /// Years rounded to two decimals.
    pub earth_orbits: f64,
    pub days_lived: u64,
    pub weeks_lived: u64,
    pub max_age_years: u64,
    pub total_weeks: u64,
    pub weeks_remaining: u64,
    pub percentage_lived: u64,

    #[serde(flatten)]
    pub estimates: Estimates,
}

impl StatisticsRecord {
    pub fn get(&self, metric: Metric) -> u64 {
        self.estimates.get(metric)
    }
}

/// Parses a birthdate.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, or an RFC 3339 timestamp (only the date
/// part is kept).
pub fn parse_birthdate(input: &str) -> Result<NaiveDate, LifeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LifeError::InvalidInput("birthdate is missing".into()));
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(date);
        }
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .map_err(|_| LifeError::InvalidInput(format!("cannot parse birthdate {input:?}")))
}

/// Computes the full record. The birthdate stands for local midnight of that
/// day, `now` is local wall-clock time supplied by the caller.
pub fn compute_statistics(
    birthdate: NaiveDate,
    now: NaiveDateTime,
) -> Result<StatisticsRecord, LifeError> {
    let born = birthdate.and_time(NaiveTime::MIN);
    if born > now {
        return Err(LifeError::InvalidInput(format!(
            "birthdate {birthdate} is after {now}"
        )));
    }

    let elapsed_ms = (now - born).num_milliseconds();

    let years_lived = elapsed_ms as f64 / MS_PER_YEAR;
    let days_lived = (elapsed_ms / MS_PER_DAY) as u64;
    let weeks_lived = (elapsed_ms / MS_PER_WEEK) as u64;

    let max_age_years = MIN_HORIZON_YEARS.max(years_lived.ceil() as u64 + HORIZON_MARGIN_YEARS);
    let total_weeks = max_age_years * WEEKS_PER_YEAR;
    let weeks_remaining = total_weeks.saturating_sub(weeks_lived);
    let percentage_lived =
        ((weeks_lived as f64 / total_weeks as f64 * 100.0).round() as u64).min(100);

    let mut values = [0u64; Metric::COUNT];
    for row in RATE_TABLE.iter() {
        let basis = match row.basis {
            Basis::Days => days_lived as f64,
            Basis::Years => years_lived,
            Basis::Metric(dep) => values[dep.index()] as f64,
        };
        values[row.metric.index()] = row.rounding.apply(row.rate.apply(basis));
    }

    Ok(StatisticsRecord {
        birthdate,
        computed_at: now,
        birth_year: birthdate.year(),
        birth_month: birthdate.month(),
        years_lived,
        age: round_to(years_lived, 1),
        earth_orbits: round_to(years_lived, 2),
        days_lived,
        weeks_lived,
        max_age_years,
        total_weeks,
        weeks_remaining,
        percentage_lived,
        estimates: Estimates(values),
    })
}

/// Parses `birthdate` and computes the record.
pub fn compute_from_str(birthdate: &str, now: NaiveDateTime) -> Result<StatisticsRecord, LifeError> {
    compute_statistics(parse_birthdate(birthdate)?, now)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
