//! Dashboard snapshot DTOs.
//!
//! The snapshot mirrors the display shell's named slots. Every panel is
//! optional: a consumer renders the slots that are present and leaves the
//! rest untouched, so a partially warmed-up snapshot is valid.

use serde::Serialize;

use crate::clock::ClockFrame;
use crate::departures::{DepartureBoard, UpcomingDeparture};
use crate::weather::{WeatherDay, WeatherIcon, WeatherSummary};

/// User-facing text for the designated service-ended state.
const SERVICE_ENDED_MESSAGE: &str = "Service has ended for today";

/// The full dashboard snapshot served to the display shell.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    /// Clock panel; absent until the first clock tick.
    pub clock: Option<ClockDto>,

    /// Departure panel; absent until the first recompute.
    pub departures: Option<DepartureBoardDto>,

    /// Weather panel; absent until the first successful fetch.
    pub weather: Option<WeatherDto>,
}

/// Clock panel slots.
#[derive(Debug, Clone, Serialize)]
pub struct ClockDto {
    /// Digital time, `HH:MM:SS`.
    pub time: String,

    /// Digital date, `YYYY.MM.DD (Www)`.
    pub date: String,

    /// Hand rotations in degrees; monotonically increasing, so the shell
    /// may apply them to a rotation transform directly.
    pub second_angle: f64,
    pub minute_angle: f64,
    pub hour_angle: f64,
}

impl ClockDto {
    pub fn from_frame(frame: &ClockFrame) -> Self {
        Self {
            time: frame.time_text.clone(),
            date: frame.date_text.clone(),
            second_angle: frame.second_angle,
            minute_angle: frame.minute_angle,
            hour_angle: frame.hour_angle,
        }
    }
}

/// Departure panel slots: one primary departure plus up to two secondary.
#[derive(Debug, Clone, Serialize)]
pub struct DepartureBoardDto {
    /// True when no departures remain today.
    pub service_ended: bool,

    /// User-facing text for the service-ended state.
    pub message: Option<String>,

    /// The soonest departure, shown as the primary "NEXT" card.
    pub next: Option<DepartureDto>,

    /// Later departures, shown as secondary cards.
    pub later: Vec<DepartureDto>,
}

impl DepartureBoardDto {
    pub fn from_board(board: &DepartureBoard) -> Self {
        match board {
            DepartureBoard::ServiceEnded => Self {
                service_ended: true,
                message: Some(SERVICE_ENDED_MESSAGE.to_string()),
                next: None,
                later: Vec::new(),
            },
            DepartureBoard::Upcoming(list) => {
                let mut cards = list.iter().map(DepartureDto::from_upcoming);
                let next = cards.next();
                Self {
                    service_ended: false,
                    message: None,
                    next,
                    later: cards.collect(),
                }
            }
        }
    }
}

/// One departure card.
#[derive(Debug, Clone, Serialize)]
pub struct DepartureDto {
    /// Departure time as `H:MM` (hour unpadded).
    pub time: String,

    /// Whole minutes until departure.
    pub countdown_minutes: u32,

    /// Leftover seconds beyond the whole minutes.
    pub countdown_seconds: u32,
}

impl DepartureDto {
    fn from_upcoming(upcoming: &UpcomingDeparture) -> Self {
        Self {
            time: upcoming.departure.to_string(),
            countdown_minutes: upcoming.countdown.minutes(),
            countdown_seconds: upcoming.countdown.seconds(),
        }
    }
}

/// Weather panel slots.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherDto {
    pub today: WeatherRowDto,
    pub tomorrow: WeatherRowDto,
    pub day_after: WeatherRowDto,
}

impl WeatherDto {
    pub fn from_summary(summary: &WeatherSummary) -> Self {
        Self {
            today: WeatherRowDto::from_day(&summary.today),
            tomorrow: WeatherRowDto::from_day(&summary.tomorrow),
            day_after: WeatherRowDto::from_day(&summary.day_after),
        }
    }
}

/// One day's weather row.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherRowDto {
    /// Condition text.
    pub condition: String,

    /// Icon category.
    pub icon: WeatherIcon,

    /// Temperature range text, `min℃ / max℃` with `-` for unset slots.
    pub temperature: String,
}

impl WeatherRowDto {
    fn from_day(day: &WeatherDay) -> Self {
        Self {
            condition: day.condition.clone(),
            icon: day.icon,
            temperature: format!(
                "{} / {}",
                format_temp(day.min_temp),
                format_temp(day.max_temp)
            ),
        }
    }
}

/// Format an optional temperature for the range text.
fn format_temp(temp: Option<f64>) -> String {
    match temp {
        Some(t) if t.fract() == 0.0 => format!("{t:.0}℃"),
        Some(t) => format!("{t}℃"),
        None => "-".to_string(),
    }
}
