use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::forecast::ForecastProvider;
use crate::forecast_routes;

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
}

pub fn create_app(provider: Arc<dyn ForecastProvider>) -> Router {
    let state = AppState { provider };

    Router::new()
        .route(
            "/weatherforecast",
            get(forecast_routes::get_weather_forecast),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
