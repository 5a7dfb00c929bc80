use chrono::{Duration, Local, NaiveDate};
use common::{SUMMARIES, WeatherForecast};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::Mutex;

/// Number of days covered by one batch, starting tomorrow.
pub const FORECAST_DAYS: i64 = 5;

// Upper bound exclusive, so temperatures land in [-20, 54].
pub const TEMPERATURE_RANGE_C: Range<i32> = -20..55;

/// Anything that can produce a forecast batch on demand. The handler only
/// sees this trait, so tests can swap in a deterministic implementation.
pub trait ForecastProvider: Send + Sync {
    fn forecasts(&self) -> Vec<WeatherForecast>;
}

/// Produces randomized batches from an explicitly injected RNG.
pub struct RandomForecastProvider {
    rng: Mutex<StdRng>,
}

impl RandomForecastProvider {
    pub fn new() -> RandomForecastProvider {
        RandomForecastProvider::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> RandomForecastProvider {
        RandomForecastProvider {
            rng: Mutex::new(rng),
        }
    }

    /// Fixed-seed provider, giving reproducible batches.
    #[allow(dead_code)] // Only used by tests so far.
    pub fn seeded(seed: u64) -> RandomForecastProvider {
        RandomForecastProvider::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl ForecastProvider for RandomForecastProvider {
    fn forecasts(&self) -> Vec<WeatherForecast> {
        let today = Local::now().date_naive();
        let mut rng = self.rng.lock().unwrap();
        (1..=FORECAST_DAYS)
            .map(|day| random_forecast(today + Duration::days(day), &mut *rng))
            .collect()
    }
}

fn random_forecast(date: NaiveDate, rng: &mut impl Rng) -> WeatherForecast {
    let temperature_c = rng.random_range(TEMPERATURE_RANGE_C);
    // Independent draw, deliberately not correlated with the temperature.
    let summary = SUMMARIES[rng.random_range(0..SUMMARIES.len())];
    WeatherForecast::new(date, temperature_c, Some(summary.to_string()))
}
