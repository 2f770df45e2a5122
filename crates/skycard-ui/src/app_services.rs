//! Services owned by the widget's host: the tokio runtime, the location
//! source and the channel that carries lookup results back.
//!
//! One instance per widget host; there is no global registry.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use skycard_core::Config;
use skycard_weather::LocationSource;

use crate::services::{location_source_from_config, request_locate, LocationServiceMessage};

pub struct WidgetServices {
    /// Tokio runtime for async operations
    runtime: tokio::runtime::Runtime,

    /// Answers "use my location"
    location_source: Arc<LocationSource>,

    /// Location service channel sender
    location_tx: Sender<LocationServiceMessage>,

    /// Location service channel receiver
    location_rx: Mutex<Receiver<LocationServiceMessage>>,
}

impl WidgetServices {
    pub fn new(location_source: LocationSource) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("skycard-tokio")
            .build()
            .context("Failed to create tokio runtime")?;

        let (location_tx, location_rx) = mpsc::channel();

        tracing::info!(
            "Widget services initialized (location available: {})",
            location_source.is_available()
        );

        Ok(Self {
            runtime,
            location_source: Arc::new(location_source),
            location_tx,
            location_rx: Mutex::new(location_rx),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let source = location_source_from_config(&config.location)?;
        Self::new(source)
    }

    /// Whether the platform can answer location requests at all
    pub fn location_available(&self) -> bool {
        self.location_source.is_available()
    }

    /// Spawn one location lookup; its result arrives through `try_recv`/`recv`
    pub fn request_locate(&self) {
        request_locate(
            &self.location_tx,
            self.location_source.clone(),
            self.runtime.handle(),
        );
    }

    /// Next completed message, if any, without blocking
    pub fn try_recv(&self) -> Option<LocationServiceMessage> {
        self.location_rx.lock().try_recv().ok()
    }

    /// Block until the next message arrives.
    ///
    /// Only call this with a lookup in flight; the services keep their own
    /// sender, so the channel never disconnects.
    pub fn recv(&self) -> Option<LocationServiceMessage> {
        self.location_rx.lock().recv().ok()
    }
}
