//! Toolkit-agnostic front end for the SkyCard widget: view-model, location
//! service bridge, localized strings and a plain-text renderer.

pub mod app_services;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;
pub mod strings;

pub use app_services::WidgetServices;
pub use models::weather_widget::{LocateStart, WeatherWidget};
pub use render::{render, RenderedCard};
pub use services::LocationServiceMessage;
