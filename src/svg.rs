//! svg.rs
//!
//! Share image: the week grid on the left and a dot-leader stat column on the
//! right, in the same monospace layout for both themes.

use crate::age::AgeBreakdown;
use crate::format::{group_thousands, millions};
use crate::grid::{WeekGrid, WeekState};
use crate::rates::Metric;
use crate::report::sleep_years;
use crate::stats::{StatisticsRecord, WEEKS_PER_YEAR};

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const GAP_BETWEEN_COLUMNS: f32 = 30.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_RIGHT_COL_CHARS: usize = 44;

const CELL_SIZE: f32 = 6.0;
const CELL_GAP: f32 = 1.5;
/// Tallest grid drawn, in rows of 52 weeks.
pub const MAX_GRID_ROWS: u64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub past: &'static str,
    pub current: &'static str,
    pub future: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
                past: "#6366f1",
                current: "#f85149",
                future: "#30363d",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                past: "#4f46e5",
                current: "#dc2626",
                future: "#e5e7eb",
            },
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark_mode.svg",
            Theme::Light => "light_mode.svg",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

/// The sixteen headline numbers of the share image.
pub fn key_stats(stats: &StatisticsRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Days Lived", group_thousands(stats.days_lived)),
        ("Heartbeats", millions(stats.get(Metric::Heartbeats))),
        ("Breaths", millions(stats.get(Metric::Breaths))),
        ("Blinks", millions(stats.get(Metric::Blinks))),
        ("Earth Orbits", format!("{:.2}", stats.earth_orbits)),
        ("Full Moons", stats.get(Metric::FullMoonsWitnessed).to_string()),
        ("Seasons", stats.get(Metric::SeasonsExperienced).to_string()),
        ("Sleep Years", sleep_years(stats).to_string()),
        ("Words Spoken", millions(stats.get(Metric::WordsSpoken))),
        ("Steps Taken", millions(stats.get(Metric::StepsTaken))),
        ("Meals Eaten", group_thousands(stats.get(Metric::MealsEaten))),
        ("Times Smiled", group_thousands(stats.get(Metric::TimesSmiled))),
        ("Books Possible", group_thousands(stats.get(Metric::BooksCouldRead))),
        ("Degrees Possible", stats.get(Metric::DegreesEquivalent).to_string()),
        ("Internet Hours", group_thousands(stats.get(Metric::InternetHours))),
        ("Weeks Left", group_thousands(stats.weeks_remaining)),
    ]
}

// Returns (rects, width, height)
fn build_week_grid(stats: &StatisticsRecord) -> (String, f32, f32) {
    let pitch = CELL_SIZE + CELL_GAP;
    let mut out = String::new();
    let mut rows_drawn = 0u64;

    for (row, weeks) in WeekGrid::new(stats).rows(MAX_GRID_ROWS).enumerate() {
        let y = START_Y as f32 + row as f32 * pitch;
        for (col, state) in weeks.iter().enumerate() {
            let x = LEFT_PADDING + col as f32 * pitch;
            let class = match state {
                WeekState::Past => "past",
                WeekState::Current => "current",
                WeekState::Future => "future",
            };
            out.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{CELL_SIZE}\" height=\"{CELL_SIZE}\" class=\"{class}\"/>\n"
            ));
        }
        rows_drawn += 1;
    }

    let width = LEFT_PADDING + WEEKS_PER_YEAR as f32 * pitch;
    let height = START_Y as f32 + rows_drawn as f32 * pitch;
    (out, width, height)
}

enum Line {
    Header(String),
    Blank,
    Stat { k: String, d: String, v: String },
}

// Builds the right column content and returns (tspans, width, height)
fn build_right_column(
    stats: &StatisticsRecord,
    age: &AgeBreakdown,
    grid_width_px: f32,
    grid_height_px: f32,
) -> (String, f32, f32) {
    let uptime_value = age.to_string();
    let born_value = stats.birthdate.to_string();
    let lived_value = format!(
        "{}% of {} years",
        stats.percentage_lived, stats.max_age_years
    );
    let weeks_value = format!(
        "{} / {}",
        group_thousands(stats.weeks_lived),
        group_thousands(stats.total_weeks)
    );

    let mut rows_for_width: Vec<(&str, String)> = vec![
        ("Uptime", uptime_value),
        ("Born", born_value),
        ("Lived", lived_value),
        ("Weeks", weeks_value),
    ];
    let intro_len = rows_for_width.len();
    rows_for_width.extend(key_stats(stats));

    let align_width = rows_for_width
        .iter()
        .map(|(k, v)| k.len() + 2 + v.len())
        .max()
        .unwrap_or(0)
        .max(MIN_RIGHT_COL_CHARS);

    let stat_line = |(k, v): &(&str, String)| {
        let (k, d, v) = build_stat_row(k, v, align_width);
        Line::Stat { k, d, v }
    };

    let mut lines = vec![Line::Header(build_header_line("life@weeks", align_width))];
    lines.extend(rows_for_width[..intro_len].iter().map(stat_line));
    lines.push(Line::Blank);
    lines.push(Line::Header(build_header_line("- Key Stats", align_width)));
    lines.extend(rows_for_width[intro_len..].iter().map(stat_line));

    let right_height_px = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;
    let right_x = grid_width_px + GAP_BETWEEN_COLUMNS;

    let mut right_tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(text) => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Stat { k, d, v } => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(k),
                    escape_xml(d),
                    escape_xml(v)
                ));
            }
        }
    }

    let content_width = right_x + (align_width as f32) * CHAR_WIDTH + RIGHT_PADDING;
    let content_height = grid_height_px.max(right_height_px) + 30.0;

    (right_tspans, content_width, content_height)
}

/// Main SVG generation function
pub fn generate_svg(stats: &StatisticsRecord, age: &AgeBreakdown, theme: Theme) -> String {
    let colors = theme.colors();

    let (grid_rects, grid_width_px, grid_height_px) = build_week_grid(stats);
    let (right_tspans, w, h) = build_right_column(stats, age, grid_width_px, grid_height_px);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key     {{ fill: {key}; }}
.value   {{ fill: {value}; }}
.cc      {{ fill: {cc}; }}
.past    {{ fill: {past}; }}
.current {{ fill: {current}; }}
.future  {{ fill: {future}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<!-- WEEK GRID -->
<g>
{grid}</g>

<!-- RIGHT COLUMN -->
<text fill="{text}">
{right}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        past = colors.past,
        current = colors.current,
        future = colors.future,
        grid = grid_rects,
        right = right_tspans
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_statistics;
    use chrono::{NaiveDate, NaiveTime};

    fn record(birth_year: i32) -> StatisticsRecord {
        let birth = NaiveDate::from_ymd_opt(birth_year, 1, 1).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN);
        compute_statistics(birth, now).unwrap()
    }

    fn age_of(stats: &StatisticsRecord) -> AgeBreakdown {
        AgeBreakdown::between(stats.birthdate, stats.computed_at.date())
    }

    #[test]
    fn test_grid_cells_by_state() {
        let stats = record(2000);
        let svg = generate_svg(&stats, &age_of(&stats), Theme::Dark);

        assert_eq!(svg.matches("class=\"past\"").count(), 1252);
        assert_eq!(svg.matches("class=\"current\"").count(), 1);
        assert_eq!(svg.matches("class=\"future\"").count(), 4680 - 1253);
    }

    #[test]
    fn test_grid_is_capped_at_ninety_rows() {
        // 104 years lived gives a 114-year horizon
        let stats = record(1920);
        assert!(stats.total_weeks > MAX_GRID_ROWS * 52);

        let svg = generate_svg(&stats, &age_of(&stats), Theme::Light);
        assert_eq!(svg.matches("<rect x=").count() as u64, MAX_GRID_ROWS * 52);
    }

    #[test]
    fn test_theme_palettes() {
        let stats = record(2000);
        let dark = generate_svg(&stats, &age_of(&stats), Theme::Dark);
        let light = generate_svg(&stats, &age_of(&stats), Theme::Light);

        assert!(dark.contains("fill=\"#161b22\""));
        assert!(light.contains("fill=\"#ffffff\""));
        assert_ne!(dark, light);
    }

    #[test]
    fn test_right_column_lists_key_stats() {
        let stats = record(2000);
        let svg = generate_svg(&stats, &age_of(&stats), Theme::Dark);

        for (title, _) in key_stats(&stats) {
            assert!(svg.contains(&format!("{title}: ")), "missing {title}");
        }
        assert!(svg.contains("884M"));
        assert!(svg.contains("24 years, 0 months, 0 days"));
        assert!(svg.contains("27% of 90 years"));
    }

    #[test]
    fn test_key_stats_count() {
        assert_eq!(key_stats(&record(2000)).len(), 16);
    }

    #[test]
    fn test_stat_row_alignment() {
        let (k, d, v) = build_stat_row("Seasons", "96", 20);
        assert_eq!(k, "Seasons: ");
        assert_eq!(k.len() + d.len() + v.len(), 20);

        let (_, d, _) = build_stat_row("Seasons", "96", 12);
        assert_eq!(d, " ");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & c>"), "a&lt;b &amp; c&gt;");
    }
}
