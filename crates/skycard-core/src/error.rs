//! Centralized error types for SkyCard.
//!
//! Every error can produce a short, localized message for the widget's
//! error line via `user_message()`; the `Display` impls keep the technical
//! detail for logs.

use thiserror::Error;

use crate::config::Locale;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a message suitable for display in the widget.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(locale),
            AppError::Location(e) => e.user_message(locale),
            AppError::Io(_) => match locale {
                Locale::Tr => "Dosya işlemi başarısız oldu. Lütfen tekrar deneyin.",
                Locale::En => "A file operation failed. Please try again.",
            },
            AppError::Other(_) => match locale {
                Locale::Tr => "Beklenmeyen bir hata oluştu. Lütfen tekrar deneyin.",
                Locale::En => "An unexpected error occurred. Please try again.",
            },
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ConfigError::Invalid(_), Locale::Tr) => "Geçersiz ayar. Ayarlarınızı kontrol edin.",
            (ConfigError::Invalid(_), Locale::En) => "Invalid configuration. Check your settings.",
            (ConfigError::ParseError(_), Locale::Tr) => "Ayar dosyası okunamadı. Ayarlarınızı kontrol edin.",
            (ConfigError::ParseError(_), Locale::En) => {
                "Configuration file is malformed. Check your settings."
            }
        }
    }
}

/// Location capability errors as seen by the application layer.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The platform has no location service configured.
    #[error("Location service unavailable")]
    Unavailable,

    /// Permission denied or a platform-reported failure.
    #[error("Location lookup failed: {0}")]
    LookupFailed(String),
}

impl LocationError {
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (LocationError::Unavailable, Locale::Tr) => "Cihazınız konum bilgisini desteklemiyor.",
            (LocationError::Unavailable, Locale::En) => {
                "Your device does not support location services."
            }
            (LocationError::LookupFailed(_), Locale::Tr) => {
                "Konum alınırken bir hata oluştu veya izin verilmedi."
            }
            (LocationError::LookupFailed(_), Locale::En) => {
                "Could not get your location or permission was denied."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_errors() -> Vec<AppError> {
        vec![
            ConfigError::Invalid("x".into()).into(),
            ConfigError::ParseError("x".into()).into(),
            LocationError::Unavailable.into(),
            LocationError::LookupFailed("denied".into()).into(),
            std::io::Error::new(std::io::ErrorKind::Other, "disk").into(),
            anyhow::anyhow!("boom").into(),
        ]
    }

    #[test]
    fn test_user_messages_are_non_empty() {
        for err in all_errors() {
            for locale in [Locale::Tr, Locale::En] {
                assert!(
                    !err.user_message(locale).trim().is_empty(),
                    "empty message for {:?} in {:?}",
                    err,
                    locale
                );
            }
        }
    }

    #[test]
    fn test_locales_differ() {
        for err in all_errors() {
            assert_ne!(err.user_message(Locale::Tr), err.user_message(Locale::En));
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let app_err: AppError = LocationError::Unavailable.into();
        assert!(matches!(app_err, AppError::Location(LocationError::Unavailable)));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Location(LocationError::LookupFailed("denied".into()));
        assert_eq!(
            app_err.user_message(Locale::Tr),
            "Konum alınırken bir hata oluştu veya izin verilmedi."
        );
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = LocationError::LookupFailed("status 403".into());
        assert!(err.to_string().contains("status 403"));
    }
}
