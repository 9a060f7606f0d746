//! Weather code classification.
//!
//! Codes follow the WMO vocabulary used by Open-Meteo (0..=99). Anything not
//! listed explicitly, including codes outside that range, degrades to
//! [`WeatherCategory::Foggy`].

use std::fmt;

use crate::pictogram::{self, Pictogram};

pub type WeatherCode = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
    Thundery,
    Foggy,
}

impl WeatherCategory {
    pub fn classify(code: WeatherCode) -> Self {
        match code {
            0 => WeatherCategory::Clear,
            1..=3 => WeatherCategory::Cloudy,
            51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => {
                WeatherCategory::Rainy
            }
            71 | 73 | 75 | 77 | 85 | 86 => WeatherCategory::Snowy,
            95 | 96 | 99 => WeatherCategory::Thundery,
            _ => WeatherCategory::Foggy,
        }
    }

    pub const fn all() -> &'static [WeatherCategory] {
        &[
            WeatherCategory::Clear,
            WeatherCategory::Cloudy,
            WeatherCategory::Rainy,
            WeatherCategory::Snowy,
            WeatherCategory::Thundery,
            WeatherCategory::Foggy,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "clear",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Rainy => "rainy",
            WeatherCategory::Snowy => "snowy",
            WeatherCategory::Thundery => "thundery",
            WeatherCategory::Foggy => "foggy",
        }
    }

    /// Only `Clear` has a separate night glyph.
    pub fn pictogram(&self, is_daytime: bool) -> Pictogram {
        match self {
            WeatherCategory::Clear if is_daytime => pictogram::CLEAR_DAY,
            WeatherCategory::Clear => pictogram::CLEAR_NIGHT,
            WeatherCategory::Cloudy => pictogram::CLOUDY,
            WeatherCategory::Rainy => pictogram::RAINY,
            WeatherCategory::Snowy => pictogram::SNOWY,
            WeatherCategory::Thundery => pictogram::THUNDERY,
            WeatherCategory::Foggy => pictogram::FOGGY,
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
