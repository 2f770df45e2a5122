pub mod location_service;

pub use location_service::{location_source_from_config, request_locate, LocationServiceMessage};
