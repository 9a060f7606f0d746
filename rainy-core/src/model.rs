use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{
    classify::WeatherCode,
    config::RenderConfig,
    units::{TemperatureUnit, WindSpeedUnit},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub location: Location,
    pub temperature_unit: TemperatureUnit,
    pub wind_speed_unit: WindSpeedUnit,
}

impl WeatherRequest {
    pub fn new(location: Location, config: &RenderConfig) -> Self {
        Self {
            location,
            temperature_unit: config.temperature_unit,
            wind_speed_unit: config.wind_speed_unit,
        }
    }
}

/// Current conditions as fetched.
///
/// Temperatures are in the unit named by `TemperatureUnit::api_token`
/// (Celsius when Kelvin is displayed), wind speed in the requested unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub weather_code: WeatherCode,
    pub is_daytime: bool,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub wind_speed: f64,
    pub wind_direction_degrees: u16,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}
