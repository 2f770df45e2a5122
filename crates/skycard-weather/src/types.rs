use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions shown on the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub city: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Free text, used for condition detection
    pub description: String,
    pub feels_like: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
}

impl WeatherSample {
    /// Check `min_temperature <= temperature <= max_temperature`.
    ///
    /// Nothing enforces this on construction; callers decide whether a
    /// violation matters.
    pub fn check_range(&self) -> Result<(), SampleError> {
        let in_range = self.min_temperature <= self.temperature
            && self.temperature <= self.max_temperature;

        if in_range {
            Ok(())
        } else {
            Err(SampleError::OutOfRange {
                temperature: self.temperature,
                min: self.min_temperature,
                max: self.max_temperature,
            })
        }
    }

    /// Same sample with a different city
    pub fn with_city(self, city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..self
        }
    }

    /// Same sample with a different description
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }
}

/// One day of the short-range forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub day_label: String,
    pub temperature: f64,
}

impl ForecastPoint {
    pub fn new(day_label: impl Into<String>, temperature: f64) -> Self {
        Self {
            day_label: day_label.into(),
            temperature,
        }
    }
}

/// Geographic position returned by a location lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub captured_at: DateTime<Utc>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            captured_at: Utc::now(),
        }
    }
}

/// Location capability errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    /// No location service on this platform/configuration
    #[error("Location service unavailable")]
    CapabilityUnavailable,
    /// Permission denied or a platform-reported error
    #[error("Location lookup failed: {0}")]
    LookupFailed(String),
}

impl From<reqwest::Error> for LocationError {
    fn from(e: reqwest::Error) -> Self {
        LocationError::LookupFailed(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    #[error("Temperature {temperature} outside of range {min}..={max}")]
    OutOfRange { temperature: f64, min: f64, max: f64 },
}
