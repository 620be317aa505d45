//! General and personalized facts shown alongside the report.
//!
//! Personalized facts use their own rough per-day figures (walking miles, hair
//! in inches) rather than the rate table, matching the wording of each fact.

use crate::format::group_thousands;
use crate::rates::Metric;
use crate::stats::StatisticsRecord;

pub const GENERAL: [&str; 15] = [
    "The average person will spend 25 years asleep in their lifetime",
    "You blink about 17,000 times per day",
    "Your heart will beat about 2.5 billion times in your lifetime",
    "The atoms in your body are mostly empty space - you're 99.999% nothing",
    "The average person walks 7,500 miles per year",
    "You experience about 12 full moons each year",
    "The light from distant stars you see at night started its journey before you were born",
    "Every 7 years, your body replaces most of its cells",
    "You share 99.9% of your DNA with every other human on Earth",
    "Your brain uses 20% of your body's total energy despite being only 2% of your weight",
    "Your fingerprints are completely unique",
    "You shed about 30,000 dead skin cells every minute",
    "Your sense of smell can distinguish between 1 trillion different scents",
    "The human eye can distinguish about 10 million colors",
    "Your body produces about 25 million new cells every second",
];

fn per_day(days: u64, rate: f64) -> u64 {
    (days as f64 * rate).floor() as u64
}

/// 7,500 miles a year. Multiplies before dividing so whole years stay whole.
fn walked_miles(days: u64) -> u64 {
    (days as f64 * 7500.0 / 365.0).floor() as u64
}

pub fn personalized(stats: &StatisticsRecord) -> Vec<String> {
    let days = stats.days_lived;
    vec![
        "The average person will spend 25 years asleep in their lifetime".to_string(),
        format!(
            "You have blinked approximately {} times since birth",
            group_thousands(stats.get(Metric::Blinks))
        ),
        "Your heart will beat about 2.5 billion times in your lifetime".to_string(),
        "The atoms in your body are mostly empty space - you are 99.999% nothing".to_string(),
        format!(
            "You have walked approximately {} miles in your lifetime",
            group_thousands(walked_miles(days))
        ),
        format!(
            "You have witnessed {} full moon cycles",
            stats.get(Metric::FullMoonsWitnessed)
        ),
        "The light from distant stars you see at night started its journey before you were born"
            .to_string(),
        "Every 7 years, your body replaces most of its cells - you are literally a different person"
            .to_string(),
        format!(
            "Your hair has grown approximately {} inches since birth",
            per_day(days, 0.44)
        ),
        "You share 99.9% of your DNA with every other human on Earth".to_string(),
        format!(
            "You have consumed roughly {} liters of water",
            group_thousands(per_day(days, 2.0))
        ),
        format!(
            "You have said approximately {} words",
            group_thousands(stats.get(Metric::WordsSpoken))
        ),
        format!(
            "You have laughed roughly {} times",
            group_thousands(stats.get(Metric::TimesLaughed))
        ),
        format!(
            "You have taken approximately {} steps",
            group_thousands(per_day(days, 20_000.0))
        ),
        format!(
            "You have dreamed for roughly {} hours",
            group_thousands(per_day(stats.get(Metric::HoursSlept), 0.25))
        ),
    ]
}

/// Deterministic pick: rotates once per day lived.
pub fn fact_of_the_day(stats: &StatisticsRecord) -> String {
    let mut facts = personalized(stats);
    let index = (stats.days_lived % facts.len() as u64) as usize;
    facts.swap_remove(index)
}
