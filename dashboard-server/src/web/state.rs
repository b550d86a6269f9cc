//! Shared application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::clock::ClockFrame;
use crate::departures::DepartureBoard;
use crate::weather::WeatherSummary;

use super::dto::{ClockDto, DashboardSnapshot, DepartureBoardDto, WeatherDto};

/// Shared application state.
///
/// Holds the latest dashboard snapshot. The periodic tasks each update
/// their own panel; request handlers read the whole snapshot.
#[derive(Clone, Default)]
pub struct AppState {
    snapshot: Arc<RwLock<DashboardSnapshot>>,
}

impl AppState {
    /// Create state with an empty snapshot (no panel filled yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current snapshot.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Replace the clock panel with a new frame.
    pub async fn apply_clock(&self, frame: &ClockFrame) {
        let mut guard = self.snapshot.write().await;
        guard.clock = Some(ClockDto::from_frame(frame));
    }

    /// Replace the departure panel with a recomputed board.
    pub async fn apply_departures(&self, board: &DepartureBoard) {
        let mut guard = self.snapshot.write().await;
        guard.departures = Some(DepartureBoardDto::from_board(board));
    }

    /// Replace the weather panel with a fresh summary.
    ///
    /// Only called on a successful fetch; a failed refresh leaves the
    /// previous (possibly stale) panel in place.
    pub async fn apply_weather(&self, summary: &WeatherSummary) {
        let mut guard = self.snapshot.write().await;
        guard.weather = Some(WeatherDto::from_summary(summary));
    }
}
