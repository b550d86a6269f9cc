//! Forecast API client and summarization.
//!
//! This module fetches a public forecast document over HTTP and reduces it
//! to the dashboard's three-day summary.
//!
//! Key characteristics of the forecast document:
//! - The top level is a **two-element array**: element 0 carries short-range
//!   series (conditions by area, temperatures by a city-level area), element
//!   1 carries longer-range series including daily min/max temperatures
//! - Areas are selected by exact localized name; a missing area means
//!   "no update this cycle", never an error
//! - Temperatures arrive as strings and may be empty for slots the agency
//!   no longer publishes for today

mod client;
mod convert;
mod error;
mod types;

pub use client::{ForecastClient, ForecastConfig};
pub use convert::{WeatherDay, WeatherIcon, WeatherSummary, summarize};
pub use error::WeatherError;
pub use types::{AreaName, AreaSeries, ForecastDocument, ForecastSection, TimeSeries};
