use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default endpoint for IP based location lookups (ip-api.com JSON format)
pub const DEFAULT_LOOKUP_URL: &str = "http://ip-api.com/json/";

const CONFIG_DIR_NAME: &str = "skycard";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors joined into a single line
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Where "use my location" gets its position from
    #[serde(default)]
    pub location: LocationConfig,

    /// Widget behaviour
    #[serde(default)]
    pub widget: WidgetConfig,
}

/// Language of labels and user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,

    /// Paint the header with the condition theme (ANSI truecolor)
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            color: default_color(),
        }
    }
}

/// Backend used to answer location requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationSourceKind {
    /// No location capability; requests fail immediately
    Disabled,
    /// Static coordinates from this file
    Fixed,
    /// Single HTTP lookup against `url`
    #[default]
    IpLookup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub source: LocationSourceKind,

    /// Used by the `fixed` source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Used by the `fixed` source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Used by the `ip_lookup` source
    #[serde(default = "default_lookup_url")]
    pub url: String,
}

fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            source: LocationSourceKind::default(),
            latitude: None,
            longitude: None,
            url: default_lookup_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Warn when a sample's temperature falls outside its min/max range.
    /// The sample is displayed either way.
    #[serde(default)]
    pub validate_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            location: LocationConfig::default(),
            widget: WidgetConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the platform config dir, creating a default file if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating a default file if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        let location = &self.location;

        match location.source {
            LocationSourceKind::Disabled => {
                result.add_warning(
                    "location.source",
                    "Location lookups disabled - \"use my location\" will report unavailable",
                );
            }
            LocationSourceKind::IpLookup => {
                Self::validate_url(&location.url, "location.url", &mut result);
            }
            LocationSourceKind::Fixed => match (location.latitude, location.longitude) {
                (Some(latitude), Some(longitude)) => {
                    if !(-90.0..=90.0).contains(&latitude) {
                        result.add_error(
                            "location.latitude",
                            format!("Latitude must be within -90..=90, got: {}", latitude),
                        );
                    }
                    if !(-180.0..=180.0).contains(&longitude) {
                        result.add_error(
                            "location.longitude",
                            format!("Longitude must be within -180..=180, got: {}", longitude),
                        );
                    }
                }
                _ => {
                    result.add_error(
                        "location",
                        "Fixed location source requires both latitude and longitude",
                    );
                }
            },
        }

        if location.source != LocationSourceKind::Fixed
            && (location.latitude.is_some() || location.longitude.is_some())
        {
            result.add_warning(
                "location",
                "Coordinates are only used by the fixed source and will be ignored",
            );
        }

        result
    }

    fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }
}
