//! Forecast HTTP client.
//!
//! Fetches the forecast document from a fixed endpoint and reduces it to
//! the dashboard summary. The endpoint is public and unauthenticated.

use super::convert::{WeatherSummary, summarize};
use super::error::WeatherError;
use super::types::ForecastDocument;

/// Default forecast endpoint (Kanagawa prefecture).
const DEFAULT_FORECAST_URL: &str =
    "https://www.jma.go.jp/bosai/forecast/data/forecast/140000.json";

/// Default area for condition texts.
const DEFAULT_CONDITION_AREA: &str = "東部";

/// Default city-level area for temperatures.
const DEFAULT_TEMPERATURE_AREA: &str = "横浜";

/// Configuration for the forecast client.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Endpoint URL for the forecast document.
    pub url: String,
    /// Area name to read condition texts from.
    pub condition_area: String,
    /// Area name to read temperatures from.
    pub temperature_area: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ForecastConfig {
    /// Set a custom endpoint URL (for testing or another region).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the condition and temperature area names.
    pub fn with_areas(
        mut self,
        condition_area: impl Into<String>,
        temperature_area: impl Into<String>,
    ) -> Self {
        self.condition_area = condition_area.into();
        self.temperature_area = temperature_area.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FORECAST_URL.to_string(),
            condition_area: DEFAULT_CONDITION_AREA.to_string(),
            temperature_area: DEFAULT_TEMPERATURE_AREA.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Forecast API client.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    config: ForecastConfig,
}

impl ForecastClient {
    /// Create a new forecast client with the given configuration.
    pub fn new(config: ForecastConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fetch the raw forecast document.
    pub async fn fetch(&self) -> Result<ForecastDocument, WeatherError> {
        let response = self.http.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| WeatherError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Fetch the forecast and reduce it to the three-day summary.
    ///
    /// `Ok(None)` means the document parsed but the configured condition
    /// area was absent, so there is nothing to update this cycle.
    pub async fn fetch_summary(&self) -> Result<Option<WeatherSummary>, WeatherError> {
        let document = self.fetch().await?;
        Ok(summarize(
            &document,
            &self.config.condition_area,
            &self.config.temperature_area,
        ))
    }
}
