//! Core library for the `rainy` terminal weather report.
//!
//! This crate defines:
//! - Units, weather code classification and the pictogram catalog
//! - Field formatting and composition of the printed report
//! - Settings on disk and their resolution into a render configuration
//! - Geolocation and forecast providers
//!
//! It is used by `rainy-cli`, but rendering is pure and can be driven by any
//! caller that already has a [`WeatherReport`].

pub mod classify;
pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod pictogram;
pub mod provider;
pub mod render;
pub mod units;

#[cfg(test)]
mod test_support;

pub use classify::{WeatherCategory, WeatherCode};
pub use compose::Decoration;
pub use config::{RenderConfig, Resolved, Settings, ShowFlags};
pub use error::ConfigWarning;
pub use format::{DateFormat, DisplayField, FieldKey, TimeFormat};
pub use model::{Location, WeatherReport, WeatherRequest};
pub use pictogram::Pictogram;
pub use provider::{LocationProvider, WeatherProvider};
pub use render::{print_report, render};
pub use units::{TemperatureUnit, WindDirection, WindSpeedUnit};
