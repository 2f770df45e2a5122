//! Maps weather-crate errors to skycard_core::AppError for consistent
//! user-facing messages.

use skycard_core::{AppError, LocationError as CoreLocationError};
use skycard_weather::LocationError;

pub fn location_error(e: LocationError) -> AppError {
    match e {
        LocationError::CapabilityUnavailable => AppError::Location(CoreLocationError::Unavailable),
        LocationError::LookupFailed(s) => AppError::Location(CoreLocationError::LookupFailed(s)),
    }
}
