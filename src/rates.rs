//! rates.rs
//!
//! The declarative table behind every illustrative estimate. Each row names a
//! metric, the quantity it is derived from, a fixed rate and a rounding rule.
//! The engine walks the table in order, so a row may only use as its basis a
//! metric that appears above it.
//!
//! The constants are deliberately approximate. They are part of the output
//! contract and must not be "corrected".

/// Grouping of each estimate, reported alongside its value by `Estimates::iter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Temporal,
    Biological,
    Environmental,
    Cosmic,
    Social,
    Learning,
    Digital,
    Health,
    Memory,
}

/// Every estimate derived from the elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    HoursLived,
    MinutesLived,
    SecondsLived,
    Heartbeats,
    Breaths,
    HoursSlept,
    Blinks,
    SeasonsExperienced,
    FullMoonsWitnessed,
    EarthTravelDistanceKm,
    SolarSystemTravelKm,
    WordsSpoken,
    StepsTaken,
    MealsEaten,
    TimesSmiled,
    MoviesWatched,
    SongsHeard,
    BooksCouldRead,
    SkillHoursAvailable,
    LanguagesCouldLearn,
    DegreesEquivalent,
    InternetHours,
    PhoneChecks,
    EmailsSent,
    PhotosCouldTake,
    WaterConsumedLiters,
    CaloriesConsumed,
    HairGrowthMm,
    FingernailGrowthMm,
    MemoriesFormed,
    DreamsHad,
    TimesLaughed,
    ConversationsHad,
}

impl Metric {
    pub const COUNT: usize = 33;

    /// Field name used in serialized records.
    pub fn key(self) -> &'static str {
        match self {
            Metric::HoursLived => "hoursLived",
            Metric::MinutesLived => "minutesLived",
            Metric::SecondsLived => "secondsLived",
            Metric::Heartbeats => "heartbeats",
            Metric::Breaths => "breaths",
            Metric::HoursSlept => "hoursSlept",
            Metric::Blinks => "blinks",
            Metric::SeasonsExperienced => "seasonsExperienced",
            Metric::FullMoonsWitnessed => "fullMoonsWitnessed",
            Metric::EarthTravelDistanceKm => "earthTravelDistanceKm",
            Metric::SolarSystemTravelKm => "solarSystemTravelKm",
            Metric::WordsSpoken => "wordsSpoken",
            Metric::StepsTaken => "stepsTaken",
            Metric::MealsEaten => "mealsEaten",
            Metric::TimesSmiled => "timesSmiled",
            Metric::MoviesWatched => "moviesWatched",
            Metric::SongsHeard => "songsHeard",
            Metric::BooksCouldRead => "booksCouldRead",
            Metric::SkillHoursAvailable => "skillHoursAvailable",
            Metric::LanguagesCouldLearn => "languagesCouldLearn",
            Metric::DegreesEquivalent => "degreesEquivalent",
            Metric::InternetHours => "internetHours",
            Metric::PhoneChecks => "phoneChecks",
            Metric::EmailsSent => "emailsSent",
            Metric::PhotosCouldTake => "photosCouldTake",
            Metric::WaterConsumedLiters => "waterConsumedLiters",
            Metric::CaloriesConsumed => "caloriesConsumed",
            Metric::HairGrowthMm => "hairGrowthMm",
            Metric::FingernailGrowthMm => "fingernailGrowthMm",
            Metric::MemoriesFormed => "memoriesFormed",
            Metric::DreamsHad => "dreamsHad",
            Metric::TimesLaughed => "timesLaughed",
            Metric::ConversationsHad => "conversationsHad",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// What a rate is applied to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Basis {
    Days,
    /// Unrounded fractional years (365.25-day years).
    Years,
    /// A metric evaluated earlier in the table.
    Metric(Metric),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    /// basis * k
    Times(f64),
    /// basis / k
    Per(f64),
}

impl Rate {
    pub fn apply(self, basis: f64) -> f64 {
        match self {
            Rate::Times(k) => basis * k,
            Rate::Per(k) => basis / k,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Round,
}

impl Rounding {
    pub fn apply(self, value: f64) -> u64 {
        let rounded = match self {
            Rounding::Floor => value.floor(),
            Rounding::Round => value.round(),
        };
        // Inputs are non-negative, the clamp only guards against -0.0.
        rounded.max(0.0) as u64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RateEntry {
    pub metric: Metric,
    pub category: Category,
    pub basis: Basis,
    pub rate: Rate,
    pub rounding: Rounding,
}

const fn entry(
    metric: Metric,
    category: Category,
    basis: Basis,
    rate: Rate,
    rounding: Rounding,
) -> RateEntry {
    RateEntry {
        metric,
        category,
        basis,
        rate,
        rounding,
    }
}

use Basis::{Days, Years};
use Category::*;
use Rate::{Per, Times};
use Rounding::{Floor, Round};

/// Rows are listed in `Metric` declaration order.
pub const RATE_TABLE: [RateEntry; Metric::COUNT] = [
    entry(Metric::HoursLived, Temporal, Days, Times(24.0), Floor),
    entry(Metric::MinutesLived, Temporal, Days, Times(1440.0), Floor),
    entry(Metric::SecondsLived, Temporal, Days, Times(86_400.0), Floor),
    entry(Metric::Heartbeats, Biological, Days, Times(24.0 * 60.0 * 70.0), Floor),
    entry(Metric::Breaths, Biological, Days, Times(24.0 * 60.0 * 16.0), Floor),
    entry(Metric::HoursSlept, Biological, Days, Times(8.0), Floor),
    entry(Metric::Blinks, Biological, Days, Times(17_280.0), Floor),
    entry(Metric::SeasonsExperienced, Environmental, Days, Per(91.25), Floor),
    entry(Metric::FullMoonsWitnessed, Environmental, Days, Per(29.5), Floor),
    entry(Metric::EarthTravelDistanceKm, Cosmic, Days, Times(2.6 * 1_000_000.0), Round),
    entry(Metric::SolarSystemTravelKm, Cosmic, Days, Times(24.0 * 828_000.0), Round),
    entry(Metric::WordsSpoken, Social, Days, Times(16_000.0), Floor),
    entry(Metric::StepsTaken, Social, Days, Times(7_500.0), Floor),
    entry(Metric::MealsEaten, Social, Days, Times(3.0), Floor),
    entry(Metric::TimesSmiled, Social, Days, Times(20.0), Floor),
    entry(Metric::MoviesWatched, Social, Days, Times(0.33), Floor),
    entry(Metric::SongsHeard, Social, Days, Times(25.0), Floor),
    entry(Metric::BooksCouldRead, Learning, Days, Per(7.0), Floor),
    entry(Metric::SkillHoursAvailable, Learning, Days, Times(2.0), Floor),
    entry(Metric::LanguagesCouldLearn, Learning, Years, Per(2.0), Floor),
    entry(
        Metric::DegreesEquivalent,
        Learning,
        Basis::Metric(Metric::SkillHoursAvailable),
        Per(1440.0),
        Floor,
    ),
    entry(Metric::InternetHours, Digital, Days, Times(6.5), Floor),
    entry(Metric::PhoneChecks, Digital, Days, Times(96.0), Floor),
    entry(Metric::EmailsSent, Digital, Days, Times(12.0), Floor),
    entry(Metric::PhotosCouldTake, Digital, Days, Times(50.0), Floor),
    entry(Metric::WaterConsumedLiters, Health, Days, Times(2.2), Floor),
    entry(Metric::CaloriesConsumed, Health, Days, Times(2000.0), Floor),
    entry(Metric::HairGrowthMm, Health, Days, Times(0.35), Floor),
    entry(Metric::FingernailGrowthMm, Health, Days, Times(0.1), Floor),
    entry(Metric::MemoriesFormed, Memory, Days, Times(50.0), Floor),
    // (hoursSlept / 8) * 4
    entry(
        Metric::DreamsHad,
        Memory,
        Basis::Metric(Metric::HoursSlept),
        Times(0.5),
        Floor,
    ),
    entry(Metric::TimesLaughed, Memory, Days, Times(17.0), Floor),
    entry(Metric::ConversationsHad, Memory, Days, Times(7.0), Floor),
];

/// Looks up the table row for `metric`.
pub fn entry_for(metric: Metric) -> &'static RateEntry {
    &RATE_TABLE[metric.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_metric_order() {
        for (i, row) in RATE_TABLE.iter().enumerate() {
            assert_eq!(row.metric.index(), i, "{:?} out of place", row.metric);
        }
    }

    #[test]
    fn test_metric_bases_precede_their_dependents() {
        for row in RATE_TABLE.iter() {
            if let Basis::Metric(dep) = row.basis {
                assert!(
                    dep.index() < row.metric.index(),
                    "{:?} depends on later metric {:?}",
                    row.metric,
                    dep
                );
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = RATE_TABLE.iter().map(|r| r.metric.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Metric::COUNT);
    }

    #[test]
    fn test_rate_constants() {
        assert_eq!(entry_for(Metric::Heartbeats).rate, Rate::Times(100_800.0));
        assert_eq!(entry_for(Metric::Breaths).rate, Rate::Times(23_040.0));
        assert_eq!(entry_for(Metric::WordsSpoken).rate, Rate::Times(16_000.0));
        assert_eq!(entry_for(Metric::SolarSystemTravelKm).rate, Rate::Times(19_872_000.0));
        assert_eq!(entry_for(Metric::EarthTravelDistanceKm).rounding, Rounding::Round);
        assert_eq!(entry_for(Metric::LanguagesCouldLearn).basis, Basis::Years);
    }

    #[test]
    fn test_per_rate_divides_exactly() {
        // 365 / 91.25 is exactly 4; a reciprocal multiply would land below it.
        let row = entry_for(Metric::SeasonsExperienced);
        assert_eq!(row.rounding.apply(row.rate.apply(365.0)), 4);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Rounding::Floor.apply(2.99), 2);
        assert_eq!(Rounding::Round.apply(2.5), 3);
        assert_eq!(Rounding::Floor.apply(-0.0), 0);
    }
}
