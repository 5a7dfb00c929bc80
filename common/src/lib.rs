use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Labels the generator draws from, ordered coldest to hottest.
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// One forecast record as it appears on the wire. The backend serializes it,
/// the client deserializes it; both sides share this definition.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<String>) -> WeatherForecast {
        WeatherForecast {
            date,
            temperature_c,
            temperature_f: approximate_fahrenheit(temperature_c),
            summary,
        }
    }
}

// Derived with a 0.5556 divisor rather than the exact 9/5 conversion, and
// truncated toward zero. Existing consumers expect these exact values, so the
// approximation is part of the wire contract and must not be corrected.
pub fn approximate_fahrenheit(temperature_c: i32) -> i32 {
    32 + (temperature_c as f64 / 0.5556) as i32
}
