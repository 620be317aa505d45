//! grid.rs
//!
//! Week-of-life grid over a `StatisticsRecord`. A week index is classified
//! purely by comparing it with `weeks_lived`, so every query is O(1) and no
//! grid is ever materialised.

use std::fmt;

use crate::error::LifeError;
use crate::stats::{StatisticsRecord, WEEKS_PER_YEAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekState {
    Past,
    Current,
    Future,
}

/// Tooltip facts for a single week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekDescription {
    Lived {
        index: u64,
        age_years: u64,
        age_weeks: u64,
    },
    Current {
        index: u64,
    },
    Future {
        index: u64,
        age_years: u64,
        age_weeks: u64,
    },
}

impl WeekDescription {
    pub fn index(&self) -> u64 {
        match *self {
            WeekDescription::Lived { index, .. }
            | WeekDescription::Current { index }
            | WeekDescription::Future { index, .. } => index,
        }
    }

    pub fn state(&self) -> WeekState {
        match self {
            WeekDescription::Lived { .. } => WeekState::Past,
            WeekDescription::Current { .. } => WeekState::Current,
            WeekDescription::Future { .. } => WeekState::Future,
        }
    }
}

impl fmt::Display for WeekDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Week {}", self.index() + 1)?;
        match *self {
            WeekDescription::Lived {
                age_years,
                age_weeks,
                ..
            } => write!(f, "Age {age_years} years, {age_weeks} weeks"),
            WeekDescription::Current { .. } => write!(f, "Current week"),
            WeekDescription::Future { age_years, .. } => write!(f, "Future age {age_years} years"),
        }
    }
}

fn checked_index(week_index: i64, stats: &StatisticsRecord) -> Result<u64, LifeError> {
    u64::try_from(week_index)
        .ok()
        .filter(|&i| i < stats.total_weeks)
        .ok_or(LifeError::IndexOutOfRange {
            index: week_index,
            total_weeks: stats.total_weeks,
        })
}

fn state_of(index: u64, weeks_lived: u64) -> WeekState {
    match index.cmp(&weeks_lived) {
        std::cmp::Ordering::Less => WeekState::Past,
        std::cmp::Ordering::Equal => WeekState::Current,
        std::cmp::Ordering::Greater => WeekState::Future,
    }
}

/// Classifies a week. Indices outside `[0, total_weeks)` are rejected.
pub fn classify(week_index: i64, stats: &StatisticsRecord) -> Result<WeekState, LifeError> {
    let index = checked_index(week_index, stats)?;
    Ok(state_of(index, stats.weeks_lived))
}

pub fn describe(week_index: i64, stats: &StatisticsRecord) -> Result<WeekDescription, LifeError> {
    let index = checked_index(week_index, stats)?;
    let age_years = index / WEEKS_PER_YEAR;
    let age_weeks = index % WEEKS_PER_YEAR;

    Ok(match state_of(index, stats.weeks_lived) {
        WeekState::Past => WeekDescription::Lived {
            index,
            age_years,
            age_weeks,
        },
        WeekState::Current => WeekDescription::Current { index },
        WeekState::Future => WeekDescription::Future {
            index,
            age_years,
            age_weeks,
        },
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekCounts {
    pub past: u64,
    pub current: u64,
    pub future: u64,
}

/// Borrowed row-major view used by renderers.
#[derive(Debug, Clone, Copy)]
pub struct WeekGrid<'a> {
    stats: &'a StatisticsRecord,
}

impl<'a> WeekGrid<'a> {
    pub fn new(stats: &'a StatisticsRecord) -> Self {
        Self { stats }
    }

    pub fn total_rows(&self) -> u64 {
        self.stats.total_weeks.div_ceil(WEEKS_PER_YEAR)
    }

    /// Up to `max_rows` rows of 52 weeks each. The last row may be shorter if
    /// the grid does not end on a row boundary.
    pub fn rows(self, max_rows: u64) -> impl Iterator<Item = Vec<WeekState>> + 'a {
        let stats = self.stats;
        let rows = self.total_rows().min(max_rows);
        (0..rows).map(move |row| {
            let start = row * WEEKS_PER_YEAR;
            let end = (start + WEEKS_PER_YEAR).min(stats.total_weeks);
            (start..end)
                .map(|index| state_of(index, stats.weeks_lived))
                .collect()
        })
    }

    /// Past/current/future totals over the whole grid.
    pub fn counts(&self) -> WeekCounts {
        let total = self.stats.total_weeks;
        let lived = self.stats.weeks_lived.min(total);
        let current = u64::from(self.stats.weeks_lived < total);
        WeekCounts {
            past: lived,
            current,
            future: total - lived - current,
        }
    }
}
