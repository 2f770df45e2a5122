use std::path::Path;

use anyhow::Result;

use crate::{AppError, Config, ConfigError};

/// Application state and lifecycle manager
pub struct App {
    config: Config,
}

impl App {
    /// Load the config file and build the application around it
    pub fn new() -> Result<Self, AppError> {
        let path = Config::config_path()?;
        Self::load_from(&path)
    }

    /// Load the config file at `path` and build the application around it
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let config = Config::load_from(path).map_err(load_error)?;
        Self::with_config(config)
    }

    /// Build the application from an already loaded config.
    ///
    /// Validation warnings are logged; validation errors are returned.
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        tracing::info!(
            "Application configured (locale: {}, location source: {:?})",
            config.ui.locale.code(),
            config.location.source
        );

        Ok(Self { config })
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// File system failures stay I/O errors; anything else means a bad file
fn load_error(e: anyhow::Error) -> AppError {
    match e.downcast::<std::io::Error>() {
        Ok(io) => AppError::Io(io),
        Err(e) => ConfigError::ParseError(format!("{:#}", e)).into(),
    }
}
