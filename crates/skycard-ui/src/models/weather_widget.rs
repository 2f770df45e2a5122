//! View-model for the weather card.
//!
//! Owns every piece of UI state: the displayed sample, the city input, and
//! the locating/error flags of "use my location". All mutation happens on
//! the thread that owns the widget; lookup results arrive as
//! `LocationServiceMessage`s and are applied by `poll_messages`/`handle_message`.

use skycard_core::{Config, Locale};
use skycard_weather::{
    classify, sample_forecast, sample_weather, theme_for, ConditionCategory, ForecastPoint,
    Location, LocationError, ThemeToken, WeatherSample,
};

use crate::app_services::WidgetServices;
use crate::error_mapping;
use crate::services::LocationServiceMessage;
use crate::strings::{strings, Strings};

/// Outcome of pressing "use my location"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateStart {
    /// A lookup is in flight; its result arrives later
    Started,
    /// No location capability; the error line was set
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct WeatherWidget {
    locale: Locale,
    validate_samples: bool,
    /// Sample every replacement starts from
    baseline: WeatherSample,
    forecast: Vec<ForecastPoint>,
    // Displayed state
    weather: WeatherSample,
    city_input: String,
    is_locating: bool,
    location_error: Option<String>,
}

impl WeatherWidget {
    pub fn new(locale: Locale) -> Self {
        let baseline = sample_weather();

        Self {
            locale,
            validate_samples: false,
            weather: baseline.clone(),
            baseline,
            forecast: sample_forecast(),
            city_input: String::new(),
            is_locating: false,
            location_error: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ui.locale).with_sample_validation(config.widget.validate_samples)
    }

    /// Log a warning whenever a displayed sample breaks `min <= temp <= max`
    pub fn with_sample_validation(mut self, enabled: bool) -> Self {
        self.validate_samples = enabled;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn strings(&self) -> &'static Strings {
        strings(self.locale)
    }

    pub fn weather(&self) -> &WeatherSample {
        &self.weather
    }

    pub fn forecast(&self) -> &[ForecastPoint] {
        &self.forecast
    }

    pub fn city_input(&self) -> &str {
        &self.city_input
    }

    pub fn is_locating(&self) -> bool {
        self.is_locating
    }

    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    /// Derived from the current description on every call
    pub fn condition(&self) -> ConditionCategory {
        classify(&self.weather.description)
    }

    pub fn theme(&self) -> ThemeToken {
        theme_for(self.condition())
    }

    pub fn set_city_input(&mut self, text: impl Into<String>) {
        self.city_input = text.into();
    }

    /// Show the sample for the typed city.
    ///
    /// Returns false and leaves the card untouched when the input is blank.
    pub fn submit_city(&mut self) -> bool {
        tracing::info!("City searched: {:?}", self.city_input);

        let city = self.city_input.trim();
        if city.is_empty() {
            return false;
        }

        let sample = self.baseline.clone().with_city(city);
        self.replace_weather(sample);
        true
    }

    /// Start "use my location".
    ///
    /// `available` says whether the platform has a location capability at
    /// all. Lookups already in flight are not de-duplicated.
    pub fn request_location(&mut self, available: bool) -> LocateStart {
        if !available {
            self.location_error = Some(self.error_message(LocationError::CapabilityUnavailable));
            return LocateStart::Unavailable;
        }

        self.is_locating = true;
        self.location_error = None;
        LocateStart::Started
    }

    /// Apply the outcome of a location lookup
    pub fn on_location_result(&mut self, result: Result<Location, LocationError>) {
        match result {
            Ok(location) => {
                tracing::info!(
                    "Location received: {}, {}",
                    location.latitude,
                    location.longitude
                );
                let text = self.strings();
                let sample = self
                    .baseline
                    .clone()
                    .with_city(text.location_city)
                    .with_description(text.location_description);
                self.replace_weather(sample);
            }
            Err(e) => {
                tracing::warn!("Location request failed: {}", e);
                self.location_error = Some(self.error_message(e));
            }
        }

        self.is_locating = false;
    }

    pub fn handle_message(&mut self, message: LocationServiceMessage) {
        match message {
            LocationServiceMessage::LocateDone(result) => self.on_location_result(result),
        }
    }

    /// Press "use my location" against real services
    pub fn locate(&mut self, services: &WidgetServices) -> LocateStart {
        let start = self.request_location(services.location_available());
        if start == LocateStart::Started {
            services.request_locate();
        }
        start
    }

    /// Apply every message that has arrived; returns how many were applied
    pub fn poll_messages(&mut self, services: &WidgetServices) -> usize {
        let mut applied = 0;
        while let Some(message) = services.try_recv() {
            self.handle_message(message);
            applied += 1;
        }
        applied
    }

    fn replace_weather(&mut self, sample: WeatherSample) {
        if self.validate_samples {
            if let Err(e) = sample.check_range() {
                tracing::warn!("Sample for {} looks inconsistent: {}", sample.city, e);
            }
        }
        self.weather = sample;
    }

    fn error_message(&self, e: LocationError) -> String {
        error_mapping::location_error(e)
            .user_message(self.locale)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> WeatherWidget {
        WeatherWidget::new(Locale::Tr)
    }

    #[test]
    fn test_initial_state() {
        let w = widget();
        assert_eq!(w.weather(), &sample_weather());
        assert_eq!(w.forecast().len(), 5);
        assert!(!w.is_locating());
        assert!(w.location_error().is_none());
        assert_eq!(w.condition(), ConditionCategory::Sunny);
        assert_eq!(w.theme(), ThemeToken::SUNNY);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut w = widget();
        for input in ["", "   ", "\t\n"] {
            w.set_city_input(input);
            let before = w.weather().clone();
            assert!(!w.submit_city());
            assert_eq!(w.weather(), &before);
        }
    }

    #[test]
    fn test_submit_uses_trimmed_city() {
        let mut w = widget();
        w.set_city_input("  Ankara  ");
        assert!(w.submit_city());

        let weather = w.weather();
        assert_eq!(weather.city, "Ankara");
        assert_eq!(weather.temperature, 24.0);
        assert_eq!(weather.description, "Güneşli");
        assert_eq!(weather.feels_like, 25.0);
        assert_eq!(weather.min_temperature, 20.0);
        assert_eq!(weather.max_temperature, 27.0);
    }

    #[test]
    fn test_submit_keeps_input_text() {
        let mut w = widget();
        w.set_city_input(" İzmir ");
        w.submit_city();
        assert_eq!(w.city_input(), " İzmir ");
    }

    #[test]
    fn test_location_unavailable() {
        let mut w = widget();
        assert_eq!(w.request_location(false), LocateStart::Unavailable);
        assert!(!w.is_locating());
        assert_eq!(
            w.location_error(),
            Some("Cihazınız konum bilgisini desteklemiyor.")
        );
    }

    #[test]
    fn test_location_start_clears_error() {
        let mut w = widget();
        w.request_location(false);
        assert!(w.location_error().is_some());

        assert_eq!(w.request_location(true), LocateStart::Started);
        assert!(w.is_locating());
        assert!(w.location_error().is_none());
    }

    #[test]
    fn test_location_success() {
        let mut w = widget();
        w.request_location(true);
        w.on_location_result(Ok(Location::new(41.0, 29.0)));

        assert!(!w.is_locating());
        assert!(w.location_error().is_none());
        assert_eq!(w.weather().city, "Bulunduğun Konum");
        assert_eq!(w.weather().description, "Konumuna göre örnek hava durumu");
        assert_eq!(w.weather().temperature, 24.0);
        assert_eq!(w.condition(), ConditionCategory::Default);
        assert_eq!(w.theme(), ThemeToken::DEFAULT);
    }

    #[test]
    fn test_location_failure() {
        let mut w = widget();
        w.request_location(true);
        let before = w.weather().clone();

        w.on_location_result(Err(LocationError::LookupFailed("denied".into())));

        assert!(!w.is_locating());
        let message = w.location_error().unwrap();
        assert!(!message.is_empty());
        assert_eq!(message, "Konum alınırken bir hata oluştu veya izin verilmedi.");
        assert_eq!(w.weather(), &before);
    }

    #[test]
    fn test_english_location_text() {
        let mut w = WeatherWidget::new(Locale::En);
        w.request_location(true);
        w.on_location_result(Ok(Location::new(51.5, -0.12)));
        assert_eq!(w.weather().city, "Your Location");

        w.request_location(false);
        assert_eq!(
            w.location_error(),
            Some("Your device does not support location services.")
        );
    }

    #[test]
    fn test_submit_after_location_starts_from_baseline() {
        let mut w = widget();
        w.on_location_result(Ok(Location::new(41.0, 29.0)));
        w.set_city_input("Bursa");
        w.submit_city();
        assert_eq!(w.weather().city, "Bursa");
        assert_eq!(w.weather().description, "Güneşli");
    }

    #[test]
    fn test_handle_message() {
        let mut w = widget();
        w.request_location(true);
        w.handle_message(LocationServiceMessage::LocateDone(Err(
            LocationError::CapabilityUnavailable,
        )));
        assert!(!w.is_locating());
        assert!(w.location_error().is_some());
    }

    #[test]
    fn test_validation_does_not_block_display() {
        let mut w = widget().with_sample_validation(true);
        w.baseline.temperature = 40.0;
        w.set_city_input("Adana");
        assert!(w.submit_city());
        assert_eq!(w.weather().temperature, 40.0);
    }
}
