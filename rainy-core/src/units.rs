//! Temperature and wind speed units, plus the small conversions between
//! what the forecast service returns and what ends up on screen.

use std::{fmt, str::FromStr};

use crate::error::ConfigWarning;

/// Additive offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Decimal places used for temperatures; matches the forecast service's granularity.
pub const TEMPERATURE_PRECISION: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const fn all() -> &'static [TemperatureUnit] {
        &[
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Kelvin,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "°K",
        }
    }

    /// Unit requested from the forecast service.
    ///
    /// The service has no Kelvin mode, so Kelvin is fetched as Celsius and
    /// shifted locally by [`TemperatureUnit::display_value`].
    pub fn api_token(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Convert a value fetched with [`TemperatureUnit::api_token`] into this unit.
    pub fn display_value(&self, fetched: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => celsius_to_kelvin(fetched),
            TemperatureUnit::Celsius | TemperatureUnit::Fahrenheit => fetched,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConfigWarning;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "°c" | "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "°f" | "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "°k" | "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ConfigWarning::UnknownTemperatureUnit(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindSpeedUnit {
    Mph,
    #[default]
    KilometresPerHour,
    MetresPerSecond,
    Knots,
}

impl WindSpeedUnit {
    pub const fn all() -> &'static [WindSpeedUnit] {
        &[
            WindSpeedUnit::Mph,
            WindSpeedUnit::KilometresPerHour,
            WindSpeedUnit::MetresPerSecond,
            WindSpeedUnit::Knots,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::KilometresPerHour => "km/h",
            WindSpeedUnit::MetresPerSecond => "m/s",
            WindSpeedUnit::Knots => "knots",
        }
    }

    pub fn api_token(&self) -> &'static str {
        match self {
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::KilometresPerHour => "kmh",
            WindSpeedUnit::MetresPerSecond => "ms",
            WindSpeedUnit::Knots => "kn",
        }
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WindSpeedUnit {
    type Err = ConfigWarning;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "mph" => Ok(WindSpeedUnit::Mph),
            "km/h" => Ok(WindSpeedUnit::KilometresPerHour),
            "m/s" => Ok(WindSpeedUnit::MetresPerSecond),
            other if other.eq_ignore_ascii_case("knots") => Ok(WindSpeedUnit::Knots),
            _ => Err(ConfigWarning::UnknownWindSpeedUnit(value.to_string())),
        }
    }
}

/// Label for a configured temperature unit string; unknown units are an error.
pub fn temperature_unit_label(unit: &str) -> Result<&'static str, ConfigWarning> {
    unit.parse::<TemperatureUnit>().map(|u| u.label())
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// `21.3°C`: no space before the degree label.
pub fn format_temperature(value: f64, unit: TemperatureUnit, precision: usize) -> String {
    format!("{value:.precision$}{}", unit.label())
}

pub fn format_wind_speed(value: f64, unit_label: &str) -> String {
    format!("{value:.1} {unit_label}")
}

/// Four-way compass bucket.
///
/// There is no north-west bucket: everything from 224° up to 359° is West.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    North,
    East,
    South,
    West,
}

impl WindDirection {
    pub fn from_degrees(degrees: u16) -> Self {
        match degrees % 360 {
            0..44 => WindDirection::North,
            44..134 => WindDirection::East,
            134..224 => WindDirection::South,
            _ => WindDirection::West,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindDirection::North => "North",
            WindDirection::East => "East",
            WindDirection::South => "South",
            WindDirection::West => "West",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_unit_parses_labels_and_names() {
        for unit in TemperatureUnit::all() {
            let parsed: TemperatureUnit = unit.label().parse().expect("label should parse");
            assert_eq!(*unit, parsed);
        }
        assert_eq!("Kelvin".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
        assert_eq!("f".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn unknown_temperature_unit_is_an_error() {
        let err = temperature_unit_label("°R").unwrap_err();
        assert_eq!(err, ConfigWarning::UnknownTemperatureUnit("°R".to_string()));
        assert_eq!(temperature_unit_label("°K"), Ok("°K"));
    }

    #[test]
    fn kelvin_is_fetched_as_celsius_and_shifted() {
        assert_eq!(TemperatureUnit::Kelvin.api_token(), "celsius");
        let shown = TemperatureUnit::Kelvin.display_value(21.3);
        assert!((shown - 294.45).abs() < 1e-9);
        assert_eq!(TemperatureUnit::Fahrenheit.display_value(70.1), 70.1);
    }

    #[test]
    fn kelvin_conversion_inverts() {
        for x in [-40.0, 0.0, 21.3, 273.15, 1000.5] {
            assert!((celsius_to_kelvin(kelvin_to_celsius(x)) - x).abs() < 0.05);
        }
    }

    #[test]
    fn wind_speed_api_tokens() {
        assert_eq!(WindSpeedUnit::Mph.api_token(), "mph");
        assert_eq!(WindSpeedUnit::KilometresPerHour.api_token(), "kmh");
        assert_eq!(WindSpeedUnit::MetresPerSecond.api_token(), "ms");
        assert_eq!(WindSpeedUnit::Knots.api_token(), "kn");
    }

    #[test]
    fn knots_match_case_insensitively_but_others_do_not() {
        assert_eq!("Knots".parse::<WindSpeedUnit>(), Ok(WindSpeedUnit::Knots));
        assert_eq!("KNOTS".parse::<WindSpeedUnit>(), Ok(WindSpeedUnit::Knots));
        assert!("KM/H".parse::<WindSpeedUnit>().is_err());
    }

    #[test]
    fn temperature_has_no_space_before_degree_label() {
        assert_eq!(
            format_temperature(21.3, TemperatureUnit::Celsius, TEMPERATURE_PRECISION),
            "21.3°C"
        );
        assert_eq!(
            format_temperature(-4.0, TemperatureUnit::Fahrenheit, TEMPERATURE_PRECISION),
            "-4.0°F"
        );
    }

    #[test]
    fn wind_speed_has_space_before_label() {
        assert_eq!(format_wind_speed(12.5, "km/h"), "12.5 km/h");
    }

    #[test]
    fn wind_direction_bucket_boundaries() {
        let cases = [
            (0, WindDirection::North),
            (43, WindDirection::North),
            (44, WindDirection::East),
            (133, WindDirection::East),
            (134, WindDirection::South),
            (223, WindDirection::South),
            (224, WindDirection::West),
            (315, WindDirection::West),
            (359, WindDirection::West),
        ];
        for (degrees, expected) in cases {
            assert_eq!(WindDirection::from_degrees(degrees), expected, "{degrees}°");
        }
    }

    #[test]
    fn wind_direction_wraps_full_turns() {
        assert_eq!(WindDirection::from_degrees(360), WindDirection::North);
    }
}
