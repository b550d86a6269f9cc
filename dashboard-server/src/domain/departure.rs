//! Departure and countdown values.

use std::fmt;

use chrono::NaiveTime;

/// A scheduled bus departure, instantiated against "today".
///
/// Departures always land on a whole minute; the seconds component is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    time: NaiveTime,
}

impl Departure {
    /// Create a departure at the given hour and minute of today.
    ///
    /// Returns `None` if the components are out of range; callers holding a
    /// validated [`DepartureTable`](super::DepartureTable) never hit this.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time })
    }

    /// The time of day of this departure.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Seconds from midnight, for countdown arithmetic.
    pub fn seconds_from_midnight(&self) -> u32 {
        use chrono::Timelike;
        self.time.num_seconds_from_midnight()
    }
}

impl fmt::Display for Departure {
    /// Formats as `H:MM`, hour unpadded, matching the departure board style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use chrono::Timelike;
        write!(f, "{}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// Time remaining until a departure, as whole minutes plus leftover seconds.
///
/// Countdowns are never negative: the selector only ever pairs a countdown
/// with a departure strictly in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    minutes: u32,
    seconds: u32,
}

impl Countdown {
    /// Split a total number of seconds into minutes and remainder seconds.
    pub fn from_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    /// Whole minutes remaining.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Leftover seconds beyond the whole minutes (0-59).
    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m {}s", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn departure_display_unpadded_hour() {
        let d = Departure::from_hm(7, 5).unwrap();
        assert_eq!(d.to_string(), "7:05");

        let d = Departure::from_hm(12, 40).unwrap();
        assert_eq!(d.to_string(), "12:40");
    }

    #[test]
    fn departure_rejects_out_of_range() {
        assert!(Departure::from_hm(24, 0).is_none());
        assert!(Departure::from_hm(10, 60).is_none());
    }

    #[test]
    fn countdown_split() {
        let c = Countdown::from_seconds(754);
        assert_eq!(c.minutes(), 12);
        assert_eq!(c.seconds(), 34);

        let c = Countdown::from_seconds(59);
        assert_eq!(c.minutes(), 0);
        assert_eq!(c.seconds(), 59);

        let c = Countdown::from_seconds(0);
        assert_eq!(c.minutes(), 0);
        assert_eq!(c.seconds(), 0);
    }

    #[test]
    fn countdown_display() {
        assert_eq!(Countdown::from_seconds(754).to_string(), "12m 34s");
    }
}
