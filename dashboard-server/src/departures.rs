//! Upcoming departure selection.
//!
//! Scans the validated [`DepartureTable`] for the next few departures after
//! a given instant. Only today's schedule is considered: once the last
//! departure of the day has passed, the board reports a service-ended state
//! rather than wrapping to tomorrow.

use chrono::{NaiveDateTime, Timelike};

use crate::domain::{Countdown, Departure, DepartureTable};

/// Number of upcoming departures shown on the board.
pub const BOARD_SIZE: usize = 3;

/// A departure still to come today, with the time remaining until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingDeparture {
    pub departure: Departure,
    pub countdown: Countdown,
}

/// Result of a board recomputation.
///
/// `ServiceEnded` is a designated empty state, not an error: the schedule
/// simply has no further departures today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartureBoard {
    /// The next departures in chronological order, soonest first.
    Upcoming(Vec<UpcomingDeparture>),

    /// No departures remain today.
    ServiceEnded,
}

impl DepartureBoard {
    /// The soonest upcoming departure, if any.
    pub fn next(&self) -> Option<&UpcomingDeparture> {
        match self {
            DepartureBoard::Upcoming(list) => list.first(),
            DepartureBoard::ServiceEnded => None,
        }
    }
}

/// Select the next `k` departures from `table` strictly after `now`.
///
/// Hours iterate in ascending order; hours before the current one are
/// skipped outright. Within the current hour, a departure at exactly the
/// current minute is excluded: a bus leaving "now" is considered missed.
/// The scan short-circuits once `k` departures are collected.
pub fn next_departures(table: &DepartureTable, now: NaiveDateTime, k: usize) -> DepartureBoard {
    let current_hour = now.hour();
    let current_minute = now.minute();
    let now_seconds = now.time().num_seconds_from_midnight();

    let mut upcoming = Vec::with_capacity(k);

    'hours: for (hour, minutes) in table.iter() {
        let hour = u32::from(hour);
        if hour < current_hour {
            continue;
        }

        for &minute in minutes {
            let minute = u32::from(minute);
            if hour == current_hour && minute <= current_minute {
                continue;
            }

            // Table validation guarantees the components are in range.
            let Some(departure) = Departure::from_hm(hour, minute) else {
                continue;
            };
            let remaining = departure.seconds_from_midnight().saturating_sub(now_seconds);
            upcoming.push(UpcomingDeparture {
                departure,
                countdown: Countdown::from_seconds(remaining),
            });

            if upcoming.len() >= k {
                break 'hours;
            }
        }
    }

    if upcoming.is_empty() {
        DepartureBoard::ServiceEnded
    } else {
        DepartureBoard::Upcoming(upcoming)
    }
}
