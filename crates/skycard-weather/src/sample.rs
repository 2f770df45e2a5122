//! Bundled sample data shown until real conditions are wired in.

use crate::types::{ForecastPoint, WeatherSample};

/// Baseline current conditions
pub fn sample_weather() -> WeatherSample {
    WeatherSample {
        city: "İstanbul".to_string(),
        temperature: 24.0,
        description: "Güneşli".to_string(),
        feels_like: 25.0,
        min_temperature: 20.0,
        max_temperature: 27.0,
    }
}

/// Five-day forecast, Monday to Friday
pub fn sample_forecast() -> Vec<ForecastPoint> {
    vec![
        ForecastPoint::new("Pzt", 22.0),
        ForecastPoint::new("Sal", 24.0),
        ForecastPoint::new("Çar", 23.0),
        ForecastPoint::new("Per", 26.0),
        ForecastPoint::new("Cum", 25.0),
    ]
}
