//! Reduces a forecast document to the dashboard's three-day summary.
//!
//! The upstream document spreads one forecast over several series of
//! different granularities: condition texts come from a regional area in
//! the short-range section, today/tomorrow temperatures from a city-level
//! spot series, and day-after-tomorrow min/max from the daily summary in
//! the longer-range section.

use serde::Serialize;

use super::types::{AreaSeries, ForecastSection};

/// Placeholder shown for a condition slot the document did not fill.
const NO_CONDITION: &str = "-";

/// Icon category for a condition text.
///
/// Classification is by substring match, tested in a fixed priority order;
/// the first match wins. A text mentioning both 晴 (clear) and 雨 (rain)
/// is therefore classified as clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Clear,
    Snow,
    Thunder,
    Rain,
    Cloudy,
    Other,
}

impl WeatherIcon {
    /// Classify a condition text into an icon category.
    pub fn classify(text: &str) -> Self {
        if text.contains('晴') {
            WeatherIcon::Clear
        } else if text.contains('雪') {
            WeatherIcon::Snow
        } else if text.contains('雷') {
            WeatherIcon::Thunder
        } else if text.contains('雨') {
            WeatherIcon::Rain
        } else if text.contains('曇') || text.contains("くもり") {
            WeatherIcon::Cloudy
        } else {
            WeatherIcon::Other
        }
    }
}

/// One day's forecast row.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDay {
    /// Condition text, full-width spaces normalized; `-` when absent.
    pub condition: String,

    /// Icon category derived from the condition text.
    pub icon: WeatherIcon,

    /// Minimum temperature in degrees Celsius, if published.
    pub min_temp: Option<f64>,

    /// Maximum temperature in degrees Celsius, if published.
    pub max_temp: Option<f64>,
}

impl WeatherDay {
    fn new(condition: String, min_temp: Option<f64>, max_temp: Option<f64>) -> Self {
        let icon = WeatherIcon::classify(&condition);
        Self {
            condition,
            icon,
            min_temp,
            max_temp,
        }
    }
}

/// The three-day summary: today, tomorrow, and the day after.
///
/// Rebuilt in full on every successful fetch; never merged with a previous
/// summary.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub today: WeatherDay,
    pub tomorrow: WeatherDay,
    pub day_after: WeatherDay,
}

/// Build the three-day summary from a forecast document.
///
/// Conditions come from `condition_area` in the short-range conditions
/// series; today/tomorrow temperatures from `temperature_area` in the
/// short-range spot series; day-after min/max from `temperature_area` in
/// the daily-summary series, positionally at index 1.
///
/// Returns `None` when the condition area is missing from the document,
/// meaning there is nothing to update this cycle. Missing temperature
/// series degrade to unset fields instead.
pub fn summarize(
    document: &[ForecastSection],
    condition_area: &str,
    temperature_area: &str,
) -> Option<WeatherSummary> {
    let short_range = document.first()?;
    let conditions = short_range
        .time_series
        .first()?
        .areas
        .iter()
        .find(|a| a.area.name == condition_area)?;

    // The agency pads condition texts with full-width spaces.
    let weathers: Vec<String> = conditions
        .weathers
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|w| w.replace('\u{3000}', " "))
        .collect();
    let condition_for =
        |i: usize| weathers.get(i).cloned().unwrap_or_else(|| NO_CONDITION.to_string());

    let temps: &[String] = short_range
        .time_series
        .get(2)
        .and_then(|ts| find_area(ts.areas.as_slice(), temperature_area))
        .and_then(|a| a.temps.as_deref())
        .unwrap_or_default();

    // The spot series shrinks as the day progresses: four entries cover
    // today's min/max plus tomorrow's, three drop today's min, two drop
    // today entirely. Any other arity fails closed to all-unset.
    let (today_min, today_max, tomorrow_min, tomorrow_max) = match temps {
        [a, b, c, d] => (parse_temp(a), parse_temp(b), parse_temp(c), parse_temp(d)),
        [a, b, c] => (None, parse_temp(a), parse_temp(b), parse_temp(c)),
        [a, b] => (None, None, parse_temp(a), parse_temp(b)),
        _ => (None, None, None, None),
    };

    let daily = document
        .get(1)
        .and_then(|s| s.time_series.get(1))
        .and_then(|ts| find_area(ts.areas.as_slice(), temperature_area));
    let day_after_min = daily
        .and_then(|a| a.temps_min.as_ref())
        .and_then(|v| v.get(1))
        .and_then(|s| parse_temp(s));
    let day_after_max = daily
        .and_then(|a| a.temps_max.as_ref())
        .and_then(|v| v.get(1))
        .and_then(|s| parse_temp(s));

    Some(WeatherSummary {
        today: WeatherDay::new(condition_for(0), today_min, today_max),
        tomorrow: WeatherDay::new(condition_for(1), tomorrow_min, tomorrow_max),
        day_after: WeatherDay::new(condition_for(2), day_after_min, day_after_max),
    })
}

fn find_area<'a>(areas: &'a [AreaSeries], name: &str) -> Option<&'a AreaSeries> {
    areas.iter().find(|a| a.area.name == name)
}

/// Parse a temperature string; empty or non-numeric values are unset.
fn parse_temp(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    s.parse().ok()
}
