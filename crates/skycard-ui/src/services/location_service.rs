//! Location backend: one async lookup per request.
//! The lookup runs on the tokio runtime; its result is sent back via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use anyhow::{Context, Result};
use skycard_core::{LocationConfig, LocationSourceKind};
use skycard_weather::{IpLocator, Location, LocationError, LocationSource};

/// Messages sent from async operations back to the widget owner
#[derive(Debug)]
pub enum LocationServiceMessage {
    /// Result of a single location lookup
    LocateDone(Result<Location, LocationError>),
}

/// Build the configured location source
pub fn location_source_from_config(config: &LocationConfig) -> Result<LocationSource> {
    let source = match config.source {
        LocationSourceKind::Disabled => LocationSource::Disabled,
        LocationSourceKind::Fixed => {
            let (latitude, longitude) = config
                .latitude
                .zip(config.longitude)
                .context("Fixed location source requires latitude and longitude")?;
            LocationSource::Fixed {
                latitude,
                longitude,
            }
        }
        LocationSourceKind::IpLookup => LocationSource::IpLookup(
            IpLocator::new(config.url.clone()).context("Failed to create location client")?,
        ),
    };

    Ok(source)
}

/// Start a location lookup.
/// Sends exactly one `LocateDone` on the channel when it completes; there
/// is no cancellation.
pub fn request_locate(
    tx: &Sender<LocationServiceMessage>,
    source: Arc<LocationSource>,
    runtime: &tokio::runtime::Handle,
) {
    let tx = tx.clone();

    runtime.spawn(async move {
        let result = source.locate().await;

        match &result {
            Ok(location) => {
                tracing::info!("Got location: {}, {}", location.latitude, location.longitude)
            }
            Err(e) => tracing::warn!("Location lookup failed: {}", e),
        }

        // The receiver is gone only after the widget shut down
        let _ = tx.send(LocationServiceMessage::LocateDone(result));
    });
}
