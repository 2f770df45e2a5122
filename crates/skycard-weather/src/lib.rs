//! Weather domain for SkyCard
//!
//! Sample conditions and forecast, keyword based condition detection,
//! theme selection per condition, and the location capability used by
//! "use my location".

pub mod condition;
pub mod location;
pub mod sample;
pub mod theme;
pub mod types;

pub use condition::{classify, ConditionCategory};
pub use location::{IpLocator, LocationSource};
pub use sample::{sample_forecast, sample_weather};
pub use theme::{theme_for, ThemeToken};
pub use types::*;
