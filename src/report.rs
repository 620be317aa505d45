//! report.rs
//!
//! Plain-text rendering of a record, one section per stat card.

use crate::age::AgeBreakdown;
use crate::format::group_thousands;
use crate::rates::Metric;
use crate::stats::StatisticsRecord;

struct Item {
    label: &'static str,
    value: String,
    unit: Option<String>,
}

struct Section {
    title: &'static str,
    items: Vec<Item>,
    note: String,
}

fn item(label: &'static str, value: String) -> Item {
    Item {
        label,
        value,
        unit: None,
    }
}

fn item_with_unit(label: &'static str, value: String, unit: impl Into<String>) -> Item {
    Item {
        label,
        value,
        unit: Some(unit.into()),
    }
}

/// Hours slept expressed in whole years.
pub fn sleep_years(stats: &StatisticsRecord) -> u64 {
    (stats.get(Metric::HoursSlept) as f64 / 24.0 / 365.0).round() as u64
}

fn sections(stats: &StatisticsRecord) -> Vec<Section> {
    let n = |m: Metric| group_thousands(stats.get(m));

    vec![
        Section {
            title: "Time Perspective",
            items: vec![
                item_with_unit(
                    "Weeks lived",
                    group_thousands(stats.weeks_lived),
                    format!("/{}", group_thousands(stats.total_weeks)),
                ),
                item("Days lived", group_thousands(stats.days_lived)),
                item("Hours lived", n(Metric::HoursLived)),
                item("Minutes lived", n(Metric::MinutesLived)),
                item("Seconds lived", n(Metric::SecondsLived)),
            ],
            note: format!(
                "You have completed {}% of a {}-year lifespan. That is {} weeks remaining.",
                stats.percentage_lived,
                stats.max_age_years,
                group_thousands(stats.weeks_remaining)
            ),
        },
        Section {
            title: "Biological Experience",
            items: vec![
                item("Heartbeats", n(Metric::Heartbeats)),
                item("Breaths taken", n(Metric::Breaths)),
                item_with_unit(
                    "Hours slept",
                    n(Metric::HoursSlept),
                    format!("({} years)", sleep_years(stats)),
                ),
                item("Blinks", n(Metric::Blinks)),
            ],
            note: "Your cells regenerate constantly - you are made of entirely new atoms since childhood.".into(),
        },
        Section {
            title: "Earth's Rhythm",
            items: vec![
                item("Trips around the sun", format!("{:.2}", stats.earth_orbits)),
                item("Seasons experienced", stats.get(Metric::SeasonsExperienced).to_string()),
                item("Full moons witnessed", stats.get(Metric::FullMoonsWitnessed).to_string()),
                item_with_unit(
                    "Distance traveled (Earth orbit)",
                    n(Metric::EarthTravelDistanceKm),
                    "km",
                ),
            ],
            note: "While standing still, you're moving at 107,000 km/h around the galaxy.".into(),
        },
        Section {
            title: "Cosmic Perspective",
            items: vec![
                item_with_unit("Solar system movement", n(Metric::SolarSystemTravelKm), "km"),
                item_with_unit(
                    "Percentage of universe age",
                    format!("{:.10}", 80.0 / 13_800_000_000.0 * 100.0),
                    "%",
                ),
                item_with_unit("Stardust in you", "~93%".into(), "of atoms"),
            ],
            note: "The iron in your blood was forged in supernovae billions of years ago.".into(),
        },
        Section {
            title: "Social & Cultural Experience",
            items: vec![
                item("Words spoken", n(Metric::WordsSpoken)),
                item("Steps taken", n(Metric::StepsTaken)),
                item("Meals enjoyed", n(Metric::MealsEaten)),
                item("Times smiled", n(Metric::TimesSmiled)),
                item_with_unit("Movies watched", n(Metric::MoviesWatched), "(estimated)"),
                item("Songs heard", n(Metric::SongsHeard)),
            ],
            note: format!(
                "Every interaction shapes who you are - you have had roughly {} meaningful conversations.",
                n(Metric::ConversationsHad)
            ),
        },
        Section {
            title: "Learning & Growth",
            items: vec![
                item_with_unit("Books you could have read", n(Metric::BooksCouldRead), "(1/week)"),
                item("Skill development hours", n(Metric::SkillHoursAvailable)),
                item_with_unit(
                    "Languages you could master",
                    stats.get(Metric::LanguagesCouldLearn).to_string(),
                    "(2 years each)",
                ),
                item_with_unit(
                    "University degrees equivalent",
                    stats.get(Metric::DegreesEquivalent).to_string(),
                    "(1,440 hrs each)",
                ),
            ],
            note: "With just 1 hour daily, you could become an expert in any field within 3-5 years.".into(),
        },
        Section {
            title: "Digital Life",
            items: vec![
                item("Internet hours", n(Metric::InternetHours)),
                item("Phone checks", n(Metric::PhoneChecks)),
                item_with_unit("Emails sent", n(Metric::EmailsSent), "(estimated)"),
                item("Photos you could take", n(Metric::PhotosCouldTake)),
            ],
            note: "You are part of the first generation to live largely digital lives - what a time to be alive!".into(),
        },
        Section {
            title: "Health & Wellness",
            items: vec![
                item_with_unit("Water consumed", n(Metric::WaterConsumedLiters), "liters"),
                item("Calories consumed", n(Metric::CaloriesConsumed)),
                item_with_unit("Hair grown", n(Metric::HairGrowthMm), "mm"),
                item_with_unit("Fingernail growth", n(Metric::FingernailGrowthMm), "mm"),
            ],
            note: "Your body is constantly renewing itself - you are literally not the same person you were 7 years ago.".into(),
        },
        Section {
            title: "Memories & Experiences",
            items: vec![
                item_with_unit("Memories formed", n(Metric::MemoriesFormed), "(estimated)"),
                item("Dreams experienced", n(Metric::DreamsHad)),
                item("Times laughed", n(Metric::TimesLaughed)),
                item("Conversations had", n(Metric::ConversationsHad)),
            ],
            note: "Your brain stores about 2.5 petabytes of information - equivalent to 3 million hours of TV shows.".into(),
        },
    ]
}

/// Renders the full text report. `fact` is printed in the closing block.
pub fn render(stats: &StatisticsRecord, fact: &str) -> String {
    let age = AgeBreakdown::between(stats.birthdate, stats.computed_at.date());
    let mut out = String::new();

    out.push_str(&format!("Life in weeks since {}\n", stats.birthdate));
    out.push_str(&format!("Uptime: {age}\n"));

    for section in sections(stats) {
        let width = section.items.iter().map(|i| i.label.len()).max().unwrap_or(0);
        out.push_str(&format!(
            "\n{}\n{}\n",
            section.title,
            "-".repeat(section.title.len())
        ));
        for item in &section.items {
            let line = match &item.unit {
                Some(unit) => format!("  {:<width$}  {} {unit}\n", item.label, item.value),
                None => format!("  {:<width$}  {}\n", item.label, item.value),
            };
            out.push_str(&line);
        }
        out.push_str(&format!("  {}\n", section.note));
    }

    out.push_str(&format!("\nFascinating fact: \"{fact}\"\n"));
    out.push_str("Each week is a unique, non-renewable resource.\n");
    out.push_str(&format!(
        "How will you use your remaining {} weeks?\n",
        group_thousands(stats.weeks_remaining)
    ));

    out
}
