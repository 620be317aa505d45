//! lifeweeks: a life measured in weeks.
//!
//! Computes a snapshot of statistics from a birthdate and an explicit "now",
//! classifies every week of the projected lifespan, and renders the result as
//! a text report or a themed SVG share image.

pub mod age;
pub mod config;
pub mod error;
pub mod facts;
pub mod format;
pub mod grid;
pub mod rates;
pub mod report;
pub mod stats;
pub mod svg;

pub use error::LifeError;
pub use grid::{WeekDescription, WeekGrid, WeekState, classify, describe};
pub use rates::{Category, Metric};
pub use stats::{StatisticsRecord, compute_from_str, compute_statistics, parse_birthdate};
