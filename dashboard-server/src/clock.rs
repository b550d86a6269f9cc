//! Clock frame computation for the dashboard's analog and digital clocks.
//!
//! The analog hands are driven by rotation angles that grow monotonically
//! over the process lifetime. A naive `seconds * 6` angle snaps backwards by
//! 354 degrees at every 59 -> 0 rollover, which an animated rotation renders
//! as a full spin the wrong way. Instead, each hand keeps a wrap counter
//! that adds a further 360 degrees per completed revolution, so a renderer
//! can apply the angle directly (or reduce modulo 360 for display).
//!
//! Rollover detection compares each component against its previously
//! observed value: a strictly smaller reading means the hand completed a
//! revolution. This assumes at least one tick per second; if the host skips
//! ticks for longer than a full cycle, a wrap can be missed. That is an
//! accepted limitation, not corrected here.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Weekday abbreviations indexed by days-from-Sunday (0 = Sunday).
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Component values observed on the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observed {
    second: u32,
    minute: u32,
    hour12: u32,
}

/// Per-hand wrap counters and the previously observed component values.
///
/// The state is an explicit value threaded through each [`tick`] call:
/// the caller holds it between ticks and passes it back in. The very first
/// tick seeds the observed values and never counts a wrap, so a process
/// started at 10:59:58 does not begin with a spurious revolution.
///
/// [`tick`]: ClockState::tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockState {
    previous: Option<Observed>,
    second_wraps: u32,
    minute_wraps: u32,
    hour_wraps: u32,
}

/// One rendered clock frame: hand angles in degrees plus the digital text.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFrame {
    /// Second hand rotation in degrees, monotonically increasing.
    pub second_angle: f64,

    /// Minute hand rotation in degrees, smoothed by the seconds component.
    pub minute_angle: f64,

    /// Hour hand rotation in degrees, smoothed by the minutes component.
    pub hour_angle: f64,

    /// Zero-padded 24-hour `HH:MM:SS`.
    pub time_text: String,

    /// `YYYY.MM.DD (Www)` using the local calendar.
    pub date_text: String,
}

impl ClockState {
    /// Fresh state with no observed values and all wrap counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one observation of the current time.
    ///
    /// Returns the updated state together with the frame for `now`. Wrap
    /// counters increment at most once per component per tick, and only on
    /// a backward transition of that component.
    pub fn tick(self, now: NaiveDateTime) -> (Self, ClockFrame) {
        let second = now.second();
        let minute = now.minute();
        let hour12 = now.hour() % 12;

        let mut next = self;
        match next.previous {
            // First tick: seed without counting a wrap.
            None => {}
            Some(prev) => {
                if second < prev.second {
                    next.second_wraps += 1;
                }
                if minute < prev.minute {
                    next.minute_wraps += 1;
                }
                if hour12 < prev.hour12 {
                    next.hour_wraps += 1;
                }
            }
        }
        next.previous = Some(Observed {
            second,
            minute,
            hour12,
        });

        let second_angle = f64::from(second) * 6.0 + f64::from(next.second_wraps) * 360.0;
        let minute_angle = f64::from(minute) * 6.0
            + f64::from(second) * 0.1
            + f64::from(next.minute_wraps) * 360.0;
        let hour_angle = f64::from(hour12) * 30.0
            + f64::from(minute) * 0.5
            + f64::from(next.hour_wraps) * 360.0;

        let frame = ClockFrame {
            second_angle,
            minute_angle,
            hour_angle,
            time_text: format!("{:02}:{:02}:{:02}", now.hour(), minute, second),
            date_text: format_date(now),
        };

        (next, frame)
    }
}

/// Format the date as `YYYY.MM.DD (Www)` with the fixed weekday table.
fn format_date(now: NaiveDateTime) -> String {
    let weekday = WEEKDAY_NAMES[now.weekday().num_days_from_sunday() as usize];
    format!(
        "{}.{:02}.{:02} ({})",
        now.year(),
        now.month(),
        now.day(),
        weekday
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 11)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn digital_text() {
        let (_, frame) = ClockState::new().tick(at(9, 5, 3));
        assert_eq!(frame.time_text, "09:05:03");
        // 2025-12-11 is a Thursday.
        assert_eq!(frame.date_text, "2025.12.11 (Thu)");
    }

    #[test]
    fn date_weekday_table_starts_at_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2025, 12, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let (_, frame) = ClockState::new().tick(sunday);
        assert_eq!(frame.date_text, "2025.12.14 (Sun)");
    }

    #[test]
    fn basic_angles() {
        let (_, frame) = ClockState::new().tick(at(3, 30, 15));
        assert_eq!(frame.second_angle, 15.0 * 6.0);
        assert_eq!(frame.minute_angle, 30.0 * 6.0 + 15.0 * 0.1);
        assert_eq!(frame.hour_angle, 3.0 * 30.0 + 30.0 * 0.5);
    }

    #[test]
    fn hour_uses_twelve_hour_dial() {
        let (_, frame) = ClockState::new().tick(at(15, 0, 0));
        assert_eq!(frame.hour_angle, 3.0 * 30.0);
    }

    #[test]
    fn first_tick_never_counts_a_wrap() {
        // Seeding near every rollover boundary must leave counters at zero.
        for &(h, m, s) in &[(0, 0, 0), (11, 59, 59), (23, 59, 59), (12, 0, 0)] {
            let (state, _) = ClockState::new().tick(at(h, m, s));
            assert_eq!(state.second_wraps, 0);
            assert_eq!(state.minute_wraps, 0);
            assert_eq!(state.hour_wraps, 0);
        }
    }

    #[test]
    fn second_rollover_adds_a_revolution() {
        let (state, before) = ClockState::new().tick(at(10, 15, 59));
        let (state, after) = state.tick(at(10, 16, 0));

        assert_eq!(state.second_wraps, 1);
        assert_eq!(state.minute_wraps, 0);
        // 59s -> 0s: the second hand keeps moving forward by 6 degrees.
        assert_eq!(after.second_angle - before.second_angle, 6.0);
        assert!(after.minute_angle > before.minute_angle);
    }

    #[test]
    fn minute_rollover_adds_a_revolution() {
        let (state, before) = ClockState::new().tick(at(10, 59, 59));
        let (state, after) = state.tick(at(11, 0, 0));

        assert_eq!(state.minute_wraps, 1);
        assert!(after.minute_angle > before.minute_angle);
        assert!(after.hour_angle > before.hour_angle);
    }

    #[test]
    fn hour_rollover_adds_a_revolution() {
        let (state, before) = ClockState::new().tick(at(11, 59, 59));
        let (state, after) = state.tick(at(12, 0, 0));

        assert_eq!(state.hour_wraps, 1);
        assert!(after.hour_angle > before.hour_angle);
    }

    #[test]
    fn midnight_rollover_wraps_all_hands() {
        let (state, _) = ClockState::new().tick(at(23, 59, 59));
        let (state, _) = state.tick(at(0, 0, 0));

        assert_eq!(state.second_wraps, 1);
        assert_eq!(state.minute_wraps, 1);
        assert_eq!(state.hour_wraps, 1);
    }

    #[test]
    fn full_second_cycle_is_exactly_360() {
        let mut state = ClockState::new();
        let start = at(8, 30, 0);

        let (next, first) = state.tick(start);
        state = next;

        let mut last = first.clone();
        for i in 1..=60 {
            let (next, frame) = state.tick(start + Duration::seconds(i));
            state = next;
            last = frame;
        }

        assert_eq!(last.second_angle - first.second_angle, 360.0);
    }

    #[test]
    fn angles_survive_multiple_wraps() {
        let mut state = ClockState::new();
        let start = at(9, 58, 30);

        // Three minutes of one-second ticks crosses the second hand's
        // rollover three times.
        let mut prev_angle = f64::MIN;
        for i in 0..180 {
            let (next, frame) = state.tick(start + Duration::seconds(i));
            state = next;
            assert!(frame.second_angle >= prev_angle);
            prev_angle = frame.second_angle;
        }
        assert_eq!(state.second_wraps, 3);
        // Crossing 10:00:00 also rolls the minute hand over.
        assert_eq!(state.minute_wraps, 1);
        assert_eq!(state.hour_wraps, 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    prop_compose! {
        fn start_time()(
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 12, 11)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap()
        }
    }

    proptest! {
        /// All three angles are non-decreasing over any run of 1s ticks.
        #[test]
        fn angles_monotonic(start in start_time(), ticks in 1usize..400) {
            let mut state = ClockState::new();
            let mut prev: Option<ClockFrame> = None;

            for i in 0..ticks {
                let now = start + Duration::seconds(i as i64);
                let (next, frame) = state.tick(now);
                state = next;

                if let Some(p) = prev {
                    prop_assert!(frame.second_angle >= p.second_angle);
                    prop_assert!(frame.minute_angle >= p.minute_angle);
                    prop_assert!(frame.hour_angle >= p.hour_angle);
                }
                prev = Some(frame);
            }
        }

        /// The second hand advances exactly 6 degrees per elapsed second,
        /// including across rollovers.
        #[test]
        fn second_hand_rate_constant(start in start_time(), ticks in 1usize..200) {
            let (mut state, first) = ClockState::new().tick(start);
            let mut last = first.clone();

            for i in 1..=ticks {
                let (next, frame) = state.tick(start + Duration::seconds(i as i64));
                state = next;
                last = frame;
            }

            let expected = 6.0 * ticks as f64;
            prop_assert_eq!(last.second_angle - first.second_angle, expected);
        }

        /// The first tick never increments a wrap counter, whatever the seed.
        #[test]
        fn first_tick_suppressed(start in start_time()) {
            let (state, _) = ClockState::new().tick(start);
            prop_assert_eq!(state.second_wraps, 0);
            prop_assert_eq!(state.minute_wraps, 0);
            prop_assert_eq!(state.hour_wraps, 0);
        }

        /// Wrap counters only ever grow, and by at most one per tick.
        #[test]
        fn wrap_counters_monotonic(start in start_time(), ticks in 1usize..400) {
            let mut state = ClockState::new();

            for i in 0..ticks {
                let before = state.clone();
                let (next, _) = state.tick(start + Duration::seconds(i as i64));
                state = next;

                prop_assert!(state.second_wraps >= before.second_wraps);
                prop_assert!(state.second_wraps <= before.second_wraps + 1);
                prop_assert!(state.minute_wraps >= before.minute_wraps);
                prop_assert!(state.minute_wraps <= before.minute_wraps + 1);
                prop_assert!(state.hour_wraps >= before.hour_wraps);
                prop_assert!(state.hour_wraps <= before.hour_wraps + 1);
            }
        }
    }
}
