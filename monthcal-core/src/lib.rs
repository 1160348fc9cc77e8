//! Core types for monthcal.
//!
//! This crate holds everything that does not touch the network:
//! - `grid` computes the month view and its navigation targets
//! - `clock` abstracts "today" so callers can inject a fixed date

pub mod clock;
pub mod error;
pub mod grid;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CalendarError, CalendarResult};
pub use grid::{build, CalendarGrid, Cell, MonthRef};
