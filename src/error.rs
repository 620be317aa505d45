/// Errors raised by the statistics engine and the week grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Week index {index} is outside the grid of {total_weeks} weeks")]
    IndexOutOfRange { index: i64, total_weeks: u64 },
}
