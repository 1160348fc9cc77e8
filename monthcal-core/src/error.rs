//! Error types for calendar grid computation.

use thiserror::Error;

/// Errors that can occur while building a month grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month number outside 1..=12. The only input the core validates.
    #[error("invalid month: {0}")]
    InvalidMonth(i64),

    /// The date library cannot represent this month.
    #[error("date out of range: {year}-{month:02}")]
    DateOutOfRange { year: i64, month: u32 },
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
