//! Forecast API response DTOs.
//!
//! These types map directly to the forecast JSON document. They use
//! `Option` liberally because each time series only carries the fields
//! relevant to its granularity (a conditions series has no temperatures,
//! and vice versa).

use serde::Deserialize;

/// The full forecast document: a two-element top-level array.
///
/// Element 0 holds short-range series, element 1 longer-range series.
pub type ForecastDocument = Vec<ForecastSection>;

/// One top-level section of the forecast document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSection {
    /// Office that published this section.
    pub publishing_office: Option<String>,

    /// When this section was published (ISO 8601 datetime).
    pub report_datetime: Option<String>,

    /// The forecast series, ordered by the upstream contract:
    /// in section 0, index 0 is conditions and index 2 is temperatures;
    /// in section 1, index 1 is daily min/max temperatures.
    pub time_series: Vec<TimeSeries>,
}

/// A forecast series: time points plus per-area values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// The instants each positional value refers to.
    pub time_defines: Option<Vec<String>>,

    /// Per-area value arrays, positionally aligned with `time_defines`.
    pub areas: Vec<AreaSeries>,
}

/// Values for one named area within a series.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSeries {
    /// The area these values belong to.
    pub area: AreaName,

    /// Condition texts (conditions series only).
    pub weathers: Option<Vec<String>>,

    /// Spot temperatures as strings (temperature series only).
    pub temps: Option<Vec<String>>,

    /// Daily minimum temperatures (daily-summary series only).
    pub temps_min: Option<Vec<String>>,

    /// Daily maximum temperatures (daily-summary series only).
    pub temps_max: Option<Vec<String>>,
}

/// Area identification.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaName {
    /// Localized area name, matched exactly during summarization.
    pub name: String,

    /// Upstream area code.
    pub code: Option<String>,
}
