//! End-to-end widget flows against real services.

use skycard_core::{Config, Locale, LocationSourceKind};
use skycard_ui::{render, LocateStart, WeatherWidget, WidgetServices};
use skycard_weather::{ConditionCategory, IpLocator, LocationSource, ThemeToken};

fn wait_for_lookup(widget: &mut WeatherWidget, services: &WidgetServices) {
    let message = services.recv().unwrap();
    widget.handle_message(message);
}

#[test]
fn test_fixed_location_flow() {
    let mut config = Config::default();
    config.location.source = LocationSourceKind::Fixed;
    config.location.latitude = Some(41.0082);
    config.location.longitude = Some(28.9784);

    let services = WidgetServices::from_config(&config).unwrap();
    let mut widget = WeatherWidget::from_config(&config);

    assert_eq!(widget.locate(&services), LocateStart::Started);
    assert!(widget.is_locating());

    wait_for_lookup(&mut widget, &services);

    assert!(!widget.is_locating());
    assert!(widget.location_error().is_none());
    assert_eq!(widget.weather().city, "Bulunduğun Konum");
    assert_eq!(widget.condition(), ConditionCategory::Default);
    assert_eq!(render(&widget).theme, ThemeToken::DEFAULT);
}

#[test]
fn test_disabled_location_flow() {
    let services = WidgetServices::new(LocationSource::Disabled).unwrap();
    let mut widget = WeatherWidget::new(Locale::En);
    let before = widget.weather().clone();

    assert_eq!(widget.locate(&services), LocateStart::Unavailable);

    assert!(!widget.is_locating());
    assert_eq!(
        widget.location_error(),
        Some("Your device does not support location services.")
    );
    assert_eq!(widget.weather(), &before);
    assert_eq!(widget.poll_messages(&services), 0);
}

#[test]
fn test_failed_lookup_flow() {
    let locator = IpLocator::new("http://127.0.0.1:1/json/").unwrap();
    let services = WidgetServices::new(LocationSource::IpLookup(locator)).unwrap();
    let mut widget = WeatherWidget::new(Locale::Tr);

    assert_eq!(widget.locate(&services), LocateStart::Started);
    wait_for_lookup(&mut widget, &services);

    assert!(!widget.is_locating());
    let message = widget.location_error().unwrap();
    assert!(!message.trim().is_empty());
    assert_eq!(widget.weather().city, "İstanbul");
}

#[test]
fn test_search_then_poll_is_noop() {
    let services = WidgetServices::new(LocationSource::Disabled).unwrap();
    let mut widget = WeatherWidget::new(Locale::Tr);

    widget.set_city_input("  Trabzon ");
    assert!(widget.submit_city());
    assert_eq!(widget.poll_messages(&services), 0);
    assert_eq!(widget.weather().city, "Trabzon");
    assert_eq!(widget.condition(), ConditionCategory::Sunny);
}

#[test]
fn test_overlapping_lookups_both_apply() {
    let services = WidgetServices::new(LocationSource::Fixed {
        latitude: 39.93,
        longitude: 32.86,
    })
    .unwrap();
    let mut widget = WeatherWidget::new(Locale::Tr);

    assert_eq!(widget.locate(&services), LocateStart::Started);
    assert_eq!(widget.locate(&services), LocateStart::Started);

    wait_for_lookup(&mut widget, &services);
    wait_for_lookup(&mut widget, &services);

    assert!(!widget.is_locating());
    assert_eq!(widget.weather().city, "Bulunduğun Konum");
}
