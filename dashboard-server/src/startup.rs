//! Startup progress reporting and the weather refresh cycle.
//!
//! An external display shell shows a progress indicator while the dashboard
//! warms up. The core reports percentages at fixed milestones and must
//! always eventually report 100, even when the weather fetch fails, so the
//! shell never sticks on its loading state.

use tracing::{info, warn};

use crate::weather::{ForecastClient, WeatherError, WeatherSummary};

/// Progress milestone: clock and departure panels initialized.
pub const PROGRESS_INIT: u8 = 10;

/// Progress milestone: about to contact the forecast API.
pub const PROGRESS_WEATHER_API: u8 = 40;

/// Progress milestone: forecast fetch in flight.
pub const PROGRESS_WEATHER_FETCH: u8 = 60;

/// Progress milestone: startup complete (reported on success and failure).
pub const PROGRESS_DONE: u8 = 100;

/// Receives startup progress updates.
///
/// Implementations must tolerate repeated reports: the hourly weather
/// refresh re-reports its milestones on every cycle, which is harmless
/// once the initial reveal has happened.
pub trait ProgressSink: Send + Sync {
    /// Report progress as a percentage (0-100) with a status message.
    fn report(&self, percent: u8, message: &str);
}

/// Progress sink that logs through `tracing`.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&self, percent: u8, message: &str) {
        info!(percent, "{message}");
    }
}

/// Run one weather refresh cycle, reporting progress milestones.
///
/// Returns the new summary when the fetch produced one. All failure modes
/// still drive the progress to 100:
/// - a fetch or parse error is logged and reported as a degraded start
/// - a document without the configured area is "nothing to update"
pub async fn load_weather(
    client: &ForecastClient,
    progress: &dyn ProgressSink,
) -> Option<WeatherSummary> {
    progress.report(PROGRESS_WEATHER_FETCH, "Fetching weather data...");
    complete(client.fetch_summary().await, progress)
}

/// Translate a fetch outcome into progress reports and the optional update.
fn complete(
    outcome: Result<Option<WeatherSummary>, WeatherError>,
    progress: &dyn ProgressSink,
) -> Option<WeatherSummary> {
    match outcome {
        Ok(Some(summary)) => {
            progress.report(PROGRESS_DONE, "Ready!");
            Some(summary)
        }
        Ok(None) => {
            warn!("forecast document did not contain the configured area");
            progress.report(PROGRESS_DONE, "Ready!");
            None
        }
        Err(e) => {
            warn!("weather fetch failed: {e}");
            progress.report(PROGRESS_DONE, "Weather load failed. Starting anyway.");
            None
        }
    }
}
