//! Domain types for the dashboard.
//!
//! These types represent validated schedule data. Invariants are enforced
//! at construction time, so code that receives these types can trust their
//! validity.

mod departure;
mod schedule;

pub use departure::{Countdown, Departure};
pub use schedule::{DepartureTable, ScheduleError};
