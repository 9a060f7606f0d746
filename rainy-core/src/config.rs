use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::{
    error::ConfigWarning,
    format::{DateFormat, FieldKey, TimeFormat},
    units::{TemperatureUnit, WindSpeedUnit},
};

/// Which parts of the report are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowFlags {
    pub city: bool,
    pub weather: bool,
    pub temperature: bool,
    pub apparent_temperature: bool,
    pub min_max_temperature: bool,
    pub wind_speed: bool,
    pub wind_direction: bool,
    pub sunrise: bool,
    pub sunset: bool,
    pub date: bool,
    pub time: bool,
    pub pictogram: bool,
    pub emoji: bool,
    pub color: bool,
    /// `false` prints the weather category without its "Weather:" prefix.
    pub weather_label: bool,
}

impl Default for ShowFlags {
    fn default() -> Self {
        Self {
            city: true,
            weather: true,
            temperature: true,
            apparent_temperature: false,
            min_max_temperature: false,
            wind_speed: true,
            wind_direction: false,
            sunrise: true,
            sunset: true,
            date: true,
            time: true,
            pictogram: true,
            emoji: false,
            color: false,
            weather_label: true,
        }
    }
}

impl ShowFlags {
    pub fn all() -> Self {
        Self {
            city: true,
            weather: true,
            temperature: true,
            apparent_temperature: true,
            min_max_temperature: true,
            wind_speed: true,
            wind_direction: true,
            sunrise: true,
            sunset: true,
            date: true,
            time: true,
            pictogram: true,
            emoji: true,
            color: true,
            weather_label: true,
        }
    }

    pub fn none() -> Self {
        Self {
            city: false,
            weather: false,
            temperature: false,
            apparent_temperature: false,
            min_max_temperature: false,
            wind_speed: false,
            wind_direction: false,
            sunrise: false,
            sunset: false,
            date: false,
            time: false,
            pictogram: false,
            emoji: false,
            color: false,
            weather_label: false,
        }
    }

    pub fn field_enabled(&self, key: FieldKey) -> bool {
        match key {
            FieldKey::City => self.city,
            FieldKey::Weather => self.weather,
            FieldKey::Temperature => self.temperature,
            FieldKey::WindSpeed => self.wind_speed,
            FieldKey::WindDirection => self.wind_direction,
            FieldKey::Sunrise => self.sunrise,
            FieldKey::Sunset => self.sunset,
            FieldKey::Date => self.date,
            FieldKey::Time => self.time,
        }
    }

    /// Every toggle with a human-readable name, in file order.
    pub fn entries_mut(&mut self) -> [(&'static str, &mut bool); 15] {
        [
            ("city", &mut self.city),
            ("weather", &mut self.weather),
            ("temperature", &mut self.temperature),
            ("apparent temperature", &mut self.apparent_temperature),
            ("min/max temperature", &mut self.min_max_temperature),
            ("wind speed", &mut self.wind_speed),
            ("wind direction", &mut self.wind_direction),
            ("sunrise", &mut self.sunrise),
            ("sunset", &mut self.sunset),
            ("date", &mut self.date),
            ("time", &mut self.time),
            ("pictogram", &mut self.pictogram),
            ("emoji", &mut self.emoji),
            ("color", &mut self.color),
            ("\"Weather:\" label", &mut self.weather_label),
        ]
    }
}

/// Settings as stored on disk.
///
/// Units and formats stay in their raw file form (strings, and any TOML value
/// for `time_format`) so a typo degrades to a warning at [`Settings::resolve`]
/// instead of failing the whole file.
///
/// Example TOML:
/// ```toml
/// temperature_unit = "°C"
/// wind_speed_unit = "km/h"
/// date_format = "DD.MM.YYYY"
/// time_format = 24
///
/// [show]
/// wind_direction = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub temperature_unit: String,
    pub wind_speed_unit: String,
    pub date_format: String,
    pub time_format: toml::Value,
    pub show: ShowFlags,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default().label().to_string(),
            wind_speed_unit: WindSpeedUnit::default().label().to_string(),
            date_format: DateFormat::default().as_str().to_string(),
            time_format: toml::Value::Integer(i64::from(TimeFormat::default().hours())),
            show: ShowFlags::default(),
        }
    }
}

/// Fully validated options for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub show: ShowFlags,
    pub temperature_unit: TemperatureUnit,
    pub wind_speed_unit: WindSpeedUnit,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
}

/// Outcome of [`Settings::resolve`]: the config plus whatever had to be defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub config: RenderConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl Settings {
    /// Validate every option, substituting the default for anything unknown.
    ///
    /// Never fails; each substitution is logged and returned as a warning.
    pub fn resolve(&self) -> Resolved {
        let mut warnings = Vec::new();

        let config = RenderConfig {
            show: self.show,
            temperature_unit: or_default(self.temperature_unit.parse(), &mut warnings),
            wind_speed_unit: or_default(self.wind_speed_unit.parse(), &mut warnings),
            date_format: or_default(self.date_format.parse(), &mut warnings),
            time_format: or_default(TimeFormat::try_from(&self.time_format), &mut warnings),
        };

        for warning in &warnings {
            warn!("{warning}");
        }

        Resolved { config, warnings }
    }

    /// Set the clock option from anything TOML can hold, e.g. `12` or `"24"`.
    pub fn set_time_format(&mut self, value: impl Into<toml::Value>) {
        self.time_format = value.into();
    }

    /// Load settings from disk, or return defaults if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize settings to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "rainy", "rainy")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn or_default<T: Default>(parsed: Result<T, ConfigWarning>, warnings: &mut Vec<ConfigWarning>) -> T {
    parsed.unwrap_or_else(|warning| {
        warnings.push(warning);
        T::default()
    })
}
