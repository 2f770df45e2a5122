//! Fixed UI text for the two supported locales.

use skycard_core::Locale;

#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_placeholder: &'static str,
    pub search_button: &'static str,
    pub locate_button: &'static str,
    pub locating_button: &'static str,
    pub city_label: &'static str,
    pub temperature_label: &'static str,
    pub feels_like_label: &'static str,
    pub min_label: &'static str,
    pub max_label: &'static str,
    pub forecast_title: &'static str,
    pub sample_note: &'static str,
    /// City shown after a successful location lookup
    pub location_city: &'static str,
    /// Description shown after a successful location lookup
    pub location_description: &'static str,
    pub help: &'static str,
}

static TR: Strings = Strings {
    title: "Hava Durumu",
    subtitle: "Şehir ismini yazarak güncel hava durumunu görüntüleyin.",
    input_placeholder: "Örn: İstanbul",
    search_button: "Ara",
    locate_button: "Konumumu Kullan",
    locating_button: "Konum Alınıyor...",
    city_label: "Şehir",
    temperature_label: "Sıcaklık",
    feels_like_label: "Hissedilen",
    min_label: "Min",
    max_label: "Max",
    forecast_title: "5 Günlük Sıcaklık Tahmini",
    sample_note: "Not: Şu anda örnek veri gösteriliyor. Daha sonra gerçek bir hava durumu API'sine bağlayabiliriz.",
    location_city: "Bulunduğun Konum",
    location_description: "Konumuna göre örnek hava durumu",
    help: "Şehir adını yazıp Enter'a basın. /konum: konumumu kullan, /cikis: çıkış",
};

static EN: Strings = Strings {
    title: "Weather",
    subtitle: "Type a city name to see the current weather.",
    input_placeholder: "e.g. Istanbul",
    search_button: "Search",
    locate_button: "Use My Location",
    locating_button: "Locating...",
    city_label: "City",
    temperature_label: "Temperature",
    feels_like_label: "Feels like",
    min_label: "Min",
    max_label: "Max",
    forecast_title: "5-Day Temperature Forecast",
    sample_note: "Note: sample data is shown for now. A real weather API can be connected later.",
    location_city: "Your Location",
    location_description: "Sample weather for your location",
    help: "Type a city name and press Enter. /location: use my location, /quit: exit",
};

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::Tr => &TR,
        Locale::En => &EN,
    }
}
