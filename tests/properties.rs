use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use lifeweeks::{
    LifeError, Metric, StatisticsRecord, WeekGrid, WeekState, classify, compute_from_str,
    compute_statistics,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

/// A spread of lifespans from newborn to well past 90.
fn samples() -> Vec<StatisticsRecord> {
    let now = at(2024, 6, 15, 12);
    [
        date(2024, 6, 15),
        date(2024, 6, 1),
        date(2023, 2, 28),
        date(2000, 2, 29),
        date(1992, 6, 14),
        date(1970, 1, 1),
        date(1934, 11, 30),
        date(1915, 7, 4),
        date(1890, 1, 1),
    ]
    .into_iter()
    .map(|birth| compute_statistics(birth, now).unwrap())
    .collect()
}

#[test]
fn test_bounds_hold_for_all_samples() {
    for stats in samples() {
        assert!(stats.percentage_lived <= 100, "{}", stats.birthdate);
        assert_eq!(
            stats.weeks_remaining,
            stats.total_weeks.saturating_sub(stats.weeks_lived)
        );
        let horizon = 90u64.max(stats.years_lived.ceil() as u64 + 10);
        assert_eq!(stats.max_age_years, horizon);
        assert_eq!(stats.total_weeks, 52 * horizon);
        assert!(stats.weeks_lived < stats.total_weeks);
    }
}

#[test]
fn test_computation_is_deterministic() {
    let now = at(2024, 6, 15, 12);
    let a = compute_statistics(date(1992, 6, 14), now).unwrap();
    let b = compute_statistics(date(1992, 6, 14), now).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_monotonic_in_now() {
    let birth = date(1985, 3, 9);
    let mut previous = compute_statistics(birth, at(2020, 1, 1, 0)).unwrap();

    for step in 1..200 {
        let now = at(2020, 1, 1, 0) + Duration::hours(step * 37);
        let next = compute_statistics(birth, now).unwrap();

        assert!(next.days_lived >= previous.days_lived);
        assert!(next.weeks_lived >= previous.weeks_lived);
        for (metric, _, value) in next.estimates.iter() {
            assert!(
                value >= previous.get(metric),
                "{metric:?} decreased at step {step}"
            );
        }
        previous = next;
    }
}

#[test]
fn test_classify_partitions_grid() {
    for stats in samples() {
        let mut counts = [0u64; 3];
        for index in 0..stats.total_weeks as i64 {
            match classify(index, &stats).unwrap() {
                WeekState::Past => {
                    assert!((index as u64) < stats.weeks_lived);
                    counts[0] += 1;
                }
                WeekState::Current => {
                    assert_eq!(index as u64, stats.weeks_lived);
                    counts[1] += 1;
                }
                WeekState::Future => {
                    assert!(index as u64 > stats.weeks_lived);
                    counts[2] += 1;
                }
            }
        }

        assert_eq!(counts[1], 1);
        assert_eq!(counts.iter().sum::<u64>(), stats.total_weeks);

        let grid = WeekGrid::new(&stats).counts();
        assert_eq!([grid.past, grid.current, grid.future], counts);
    }
}

#[test]
fn test_last_week_is_future_and_one_past_is_rejected() {
    let stats = compute_from_str("2000-01-01", at(2024, 1, 1, 0)).unwrap();
    let last = stats.total_weeks as i64 - 1;

    assert_eq!(classify(last, &stats), Ok(WeekState::Future));
    assert!(matches!(
        classify(last + 1, &stats),
        Err(LifeError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_born_at_now() {
    let now = date(2024, 6, 15).and_time(NaiveTime::MIN);
    let stats = compute_statistics(date(2024, 6, 15), now).unwrap();

    assert_eq!(stats.days_lived, 0);
    assert_eq!(stats.weeks_lived, 0);
    assert_eq!(stats.percentage_lived, 0);
    assert_eq!(stats.get(Metric::Heartbeats), 0);
    assert_eq!(classify(0, &stats), Ok(WeekState::Current));
}

#[test]
fn test_future_birthdate_fails() {
    let result = compute_from_str("2024-06-16", at(2024, 6, 15, 23));
    assert!(matches!(result, Err(LifeError::InvalidInput(_))));
}

#[test]
fn test_week_and_year_counts_drift_independently() {
    let stats = compute_from_str("1950-01-01", at(2024, 1, 1, 0)).unwrap();
    let years_from_weeks = stats.weeks_lived as f64 / 52.0;
    assert!(years_from_weeks > stats.years_lived);
    assert!((years_from_weeks - stats.years_lived).abs() < 1.0);
}
