//! Plain-text rendering of the weather card and forecast chart.

use skycard_weather::{ForecastPoint, ThemeToken};

use crate::models::weather_widget::WeatherWidget;

const CHART_WIDTH: usize = 24;
const BAR: char = '█';

/// Rendered card: the theme to paint it with plus its text lines
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub theme: ThemeToken,
    pub lines: Vec<String>,
}

pub fn render(widget: &WeatherWidget) -> RenderedCard {
    let text = widget.strings();
    let weather = widget.weather();
    let mut lines = Vec::new();

    lines.push(text.title.to_string());
    lines.push(text.subtitle.to_string());

    let locate_label = if widget.is_locating() {
        text.locating_button
    } else {
        text.locate_button
    };
    lines.push(format!("[{}] [{}]", locate_label, text.search_button));

    if let Some(error) = widget.location_error() {
        lines.push(format!("! {}", error));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}: {}    {}: {}°C",
        text.city_label, weather.city, text.temperature_label, weather.temperature
    ));
    lines.push(format!(
        "{}  |  {}: {}°C  {}: {}°C  {}: {}°C",
        weather.description,
        text.feels_like_label,
        weather.feels_like,
        text.min_label,
        weather.min_temperature,
        text.max_label,
        weather.max_temperature
    ));

    lines.push(String::new());
    lines.push(text.forecast_title.to_string());
    lines.extend(forecast_chart(widget.forecast(), CHART_WIDTH));

    lines.push(String::new());
    lines.push(text.sample_note.to_string());

    RenderedCard {
        theme: widget.theme(),
        lines,
    }
}

/// Horizontal bar per day, scaled between the coldest and warmest day.
/// The coldest day gets one cell, the warmest gets `width`.
pub fn forecast_chart(points: &[ForecastPoint], width: usize) -> Vec<String> {
    let width = width.max(1);
    let (low, high) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.temperature), hi.max(p.temperature))
    });
    let span = high - low;
    let label_width = points
        .iter()
        .map(|p| p.day_label.chars().count())
        .max()
        .unwrap_or(0);

    points
        .iter()
        .map(|p| {
            let cells = if span > 0.0 {
                let ratio = (p.temperature - low) / span;
                1 + (ratio * (width - 1) as f64).round() as usize
            } else {
                width
            };
            let bar: String = std::iter::repeat(BAR).take(cells).collect();
            format!(
                "{:<label_width$} {:<width$} {}°C",
                p.day_label,
                bar,
                p.temperature,
                label_width = label_width,
                width = width
            )
        })
        .collect()
}

/// Header line painted with the theme's first gradient stop (ANSI truecolor)
pub fn paint(line: &str, theme: &ThemeToken) -> String {
    let [start, _, _] = theme.gradient;
    let foreground = if theme.is_light() { "30" } else { "97" };
    format!(
        "\x1b[48;2;{};{};{}m\x1b[{}m {} \x1b[0m",
        start.0, start.1, start.2, foreground, line
    )
}
