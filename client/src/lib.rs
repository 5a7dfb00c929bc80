use common::WeatherForecast;
use thiserror::Error;

/// Where the backend serves forecasts when started with its defaults.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5041/weatherforecast";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to reach the forecast service: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    #[error("failed to decode the forecast payload: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

/// Fetches one forecast batch from the given endpoint.
///
/// Non-success statuses count as transport failures. A response body that
/// is not a forecast array counts as a decode failure.
pub async fn fetch_forecasts(endpoint: &str) -> Result<Vec<WeatherForecast>, FetchError> {
    let response = reqwest::get(endpoint).await?.error_for_status()?;
    let body = response.bytes().await?;
    let forecasts = serde_json::from_slice(&body)?;
    Ok(forecasts)
}
