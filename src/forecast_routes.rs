use axum::Json;
use axum::extract::State;
use common::WeatherForecast;

use crate::app::AppState;

pub async fn get_weather_forecast(State(state): State<AppState>) -> Json<Vec<WeatherForecast>> {
    Json(state.provider.forecasts())
}
