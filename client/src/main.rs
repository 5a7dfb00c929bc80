use client::{DEFAULT_ENDPOINT, fetch_forecasts};

#[tokio::main]
async fn main() {
    env_logger::init();

    match fetch_forecasts(DEFAULT_ENDPOINT).await {
        Ok(forecasts) => {
            for forecast in forecasts {
                println!(
                    "{}  {:>3} C  {:>3} F  {}",
                    forecast.date,
                    forecast.temperature_c,
                    forecast.temperature_f,
                    forecast.summary.as_deref().unwrap_or("-")
                );
            }
        }
        Err(error) => {
            log::error!("failed to fetch forecasts: {}", error);
            std::process::exit(1);
        }
    }
}
