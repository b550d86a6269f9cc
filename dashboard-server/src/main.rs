use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use dashboard_server::clock::ClockState;
use dashboard_server::departures::{BOARD_SIZE, next_departures};
use dashboard_server::domain::DepartureTable;
use dashboard_server::scheduler::Scheduler;
use dashboard_server::startup::{
    LogProgress, PROGRESS_INIT, PROGRESS_WEATHER_API, ProgressSink, load_weather,
};
use dashboard_server::weather::{ForecastClient, ForecastConfig};
use dashboard_server::web::{AppState, create_router};

/// Period of the clock recompute tick.
const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Period of the departure board recompute tick.
const DEPARTURE_TICK: Duration = Duration::from_secs(1);

/// How often to refresh the weather summary (1 hour).
const WEATHER_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Delay before the first weather fetch, so the clock and departure panels
/// come up first.
const WEATHER_INITIAL_DELAY: Duration = Duration::from_millis(600);

/// Bundled fallback departure table.
const DEFAULT_SCHEDULE: &str = include_str!("../data/bus_schedule.json");

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Departure table is configuration data, never fetched at runtime
    let table = match std::env::var("BUS_SCHEDULE_PATH") {
        Ok(path) => DepartureTable::load(&path).expect("Failed to load bus schedule"),
        Err(_) => {
            eprintln!("Warning: BUS_SCHEDULE_PATH not set. Using the bundled schedule.");
            DepartureTable::from_json(DEFAULT_SCHEDULE).expect("Bundled schedule is invalid")
        }
    };
    let table = Arc::new(table);

    // Forecast client, with optional endpoint/area overrides
    let mut forecast_config = ForecastConfig::default();
    if let Ok(url) = std::env::var("FORECAST_URL") {
        forecast_config = forecast_config.with_url(url);
    }
    if let Some((condition, temperature)) = area_override(
        std::env::var("FORECAST_CONDITION_AREA").ok(),
        std::env::var("FORECAST_TEMPERATURE_AREA").ok(),
    ) {
        forecast_config = forecast_config.with_areas(condition, temperature);
    }
    let client = ForecastClient::new(forecast_config).expect("Failed to create forecast client");
    tracing::info!(url = %client.config().url, "forecast endpoint configured");

    let progress: Arc<dyn ProgressSink> = Arc::new(LogProgress);
    progress.report(PROGRESS_INIT, "Initializing clock and departures...");

    let state = AppState::new();
    let mut scheduler = Scheduler::new();

    // Clock tick: the dial state is threaded through each invocation
    {
        let app = state.clone();
        scheduler.every_with(CLOCK_TICK, ClockState::new(), move |dial| {
            let app = app.clone();
            async move {
                let (dial, frame) = dial.tick(Local::now().naive_local());
                app.apply_clock(&frame).await;
                dial
            }
        });
    }

    // Departure board recompute
    {
        let app = state.clone();
        let table = table.clone();
        scheduler.every(DEPARTURE_TICK, move || {
            let app = app.clone();
            let table = table.clone();
            async move {
                let board = next_departures(&table, Local::now().naive_local(), BOARD_SIZE);
                app.apply_departures(&board).await;
            }
        });
    }

    // Weather refresh: one delayed initial fetch, then hourly. A failed
    // cycle leaves the previous panel in place and never stops the loop.
    {
        let app = state.clone();
        let client = client.clone();
        let progress = progress.clone();
        let first = Arc::new(AtomicBool::new(true));
        scheduler.every_after(WEATHER_INITIAL_DELAY, WEATHER_REFRESH_INTERVAL, move || {
            let app = app.clone();
            let client = client.clone();
            let progress = progress.clone();
            let first = first.clone();
            async move {
                if first.swap(false, Ordering::Relaxed) {
                    progress.report(PROGRESS_WEATHER_API, "Loading weather API...");
                }
                if let Some(summary) = load_weather(&client, &*progress).await {
                    app.apply_weather(&summary).await;
                }
            }
        });
    }

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit dashboard listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /health         - Health check");
    println!("  GET /api/dashboard  - Current dashboard snapshot");
    println!("  GET /static/...     - Display shell assets");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}

/// Resolve the forecast area override pair. Both names must be supplied
/// together; a partial pair is ignored with a warning rather than mixing a
/// custom area with a default one.
fn area_override(
    condition: Option<String>,
    temperature: Option<String>,
) -> Option<(String, String)> {
    match (condition, temperature) {
        (Some(condition), Some(temperature)) => Some((condition, temperature)),
        (Some(_), None) | (None, Some(_)) => {
            eprintln!(
                "Warning: FORECAST_CONDITION_AREA and FORECAST_TEMPERATURE_AREA must be set together. Using the default areas."
            );
            None
        }
        (None, None) => None,
    }
}
