//! Turns a [`WeatherReport`] into the ordered list of labelled display fields.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    classify::WeatherCategory,
    config::RenderConfig,
    error::ConfigWarning,
    model::WeatherReport,
    units::{TEMPERATURE_PRECISION, WindDirection, format_temperature, format_wind_speed},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    City,
    Weather,
    Temperature,
    WindSpeed,
    WindDirection,
    Sunrise,
    Sunset,
    Date,
    Time,
}

impl FieldKey {
    /// Presentation order of the report.
    pub const CANONICAL_ORDER: [FieldKey; 9] = [
        FieldKey::City,
        FieldKey::Weather,
        FieldKey::Temperature,
        FieldKey::WindSpeed,
        FieldKey::WindDirection,
        FieldKey::Sunrise,
        FieldKey::Sunset,
        FieldKey::Date,
        FieldKey::Time,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::City => "city",
            FieldKey::Weather => "weather",
            FieldKey::Temperature => "temperature",
            FieldKey::WindSpeed => "wind speed",
            FieldKey::WindDirection => "wind direction",
            FieldKey::Sunrise => "sunrise",
            FieldKey::Sunset => "sunset",
            FieldKey::Date => "date",
            FieldKey::Time => "time",
        }
    }

    /// On-screen label prefix.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::City => "City",
            FieldKey::Weather => "Weather",
            FieldKey::Temperature => "Temperature",
            FieldKey::WindSpeed => "Wind speed",
            FieldKey::WindDirection => "Wind direction",
            FieldKey::Sunrise => "Sunrise",
            FieldKey::Sunset => "Sunset",
            FieldKey::Date => "Date",
            FieldKey::Time => "Time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub key: FieldKey,
    /// `None` renders the value bare.
    pub label: Option<&'static str>,
    pub value: String,
}

impl DisplayField {
    pub fn labelled(key: FieldKey, value: impl Into<String>) -> Self {
        Self {
            key,
            label: Some(key.label()),
            value: value.into(),
        }
    }

    pub fn bare(key: FieldKey, value: impl Into<String>) -> Self {
        Self {
            key,
            label: None,
            value: value.into(),
        }
    }

    /// `Label: value`, or just the value for bare fields.
    pub fn text(&self) -> String {
        match self.label {
            Some(label) => format!("{label}: {}", self.value),
            None => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    MonthDayYear,
    DayMonthYear,
    YearMonthDaySlash,
    YearMonthDayDash,
    #[default]
    DayMonthYearDots,
}

impl DateFormat {
    pub const fn all() -> &'static [DateFormat] {
        &[
            DateFormat::MonthDayYear,
            DateFormat::DayMonthYear,
            DateFormat::YearMonthDaySlash,
            DateFormat::YearMonthDayDash,
            DateFormat::DayMonthYearDots,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::YearMonthDaySlash => "YYYY/MM/DD",
            DateFormat::YearMonthDayDash => "YYYY-MM-DD",
            DateFormat::DayMonthYearDots => "DD.MM.YYYY",
        }
    }

    fn strftime(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::YearMonthDaySlash => "%Y/%m/%d",
            DateFormat::YearMonthDayDash => "%Y-%m-%d",
            DateFormat::DayMonthYearDots => "%d.%m.%Y",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = ConfigWarning;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DateFormat::all()
            .iter()
            .find(|format| format.as_str() == value.trim())
            .copied()
            .ok_or_else(|| ConfigWarning::UnknownDateFormat(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFormat {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn hours(&self) -> u32 {
        match self {
            TimeFormat::TwelveHour => 12,
            TimeFormat::TwentyFourHour => 24,
        }
    }

    fn clock_strftime(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "%I:%M:%S %p",
            TimeFormat::TwentyFourHour => "%H:%M:%S",
        }
    }

    fn sun_strftime(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "%I:%M %p",
            TimeFormat::TwentyFourHour => "%H:%M",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-hour", self.hours())
    }
}

impl TryFrom<u32> for TimeFormat {
    type Error = ConfigWarning;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        match hours {
            12 => Ok(TimeFormat::TwelveHour),
            24 => Ok(TimeFormat::TwentyFourHour),
            other => Err(ConfigWarning::UnknownTimeFormat(other.to_string())),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = ConfigWarning;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "12" => Ok(TimeFormat::TwelveHour),
            "24" => Ok(TimeFormat::TwentyFourHour),
            _ => Err(ConfigWarning::UnknownTimeFormat(value.to_string())),
        }
    }
}

/// Accepts `12`/`24` written either as an integer or as a string.
impl TryFrom<&toml::Value> for TimeFormat {
    type Error = ConfigWarning;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::Integer(hours) => u32::try_from(*hours)
                .map_err(|_| ConfigWarning::UnknownTimeFormat(hours.to_string()))
                .and_then(TimeFormat::try_from),
            toml::Value::String(text) => text.parse(),
            other => Err(ConfigWarning::UnknownTimeFormat(other.to_string())),
        }
    }
}

pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    date.format(format.strftime()).to_string()
}

/// Current time of day with seconds.
pub fn format_clock(time: NaiveTime, format: TimeFormat) -> String {
    time.format(format.clock_strftime()).to_string()
}

/// Sunrise/sunset: minutes only, following the configured clock.
pub fn format_sun_time(time: NaiveTime, format: TimeFormat) -> String {
    time.format(format.sun_strftime()).to_string()
}

/// Base temperature plus the optional "feels like" and min/max suffixes.
pub fn temperature_text(report: &WeatherReport, config: &RenderConfig) -> String {
    let unit = config.temperature_unit;
    let render = |fetched: f64| {
        format_temperature(unit.display_value(fetched), unit, TEMPERATURE_PRECISION)
    };

    let mut text = render(report.temperature);

    if config.show.apparent_temperature {
        text.push_str(" feels like ");
        text.push_str(&render(report.apparent_temperature));
    }

    if config.show.min_max_temperature {
        text.push_str(&format!(
            " ({} ↑ | {} ↓)",
            render(report.temperature_max),
            render(report.temperature_min)
        ));
    }

    text
}

/// Build the enabled fields in canonical order.
pub fn build_fields(
    report: &WeatherReport,
    config: &RenderConfig,
    now: NaiveDateTime,
) -> Vec<DisplayField> {
    FieldKey::CANONICAL_ORDER
        .iter()
        .filter(|key| config.show.field_enabled(**key))
        .map(|key| field_for(*key, report, config, now))
        .collect()
}

fn field_for(
    key: FieldKey,
    report: &WeatherReport,
    config: &RenderConfig,
    now: NaiveDateTime,
) -> DisplayField {
    match key {
        FieldKey::City => DisplayField::bare(key, report.city.clone()),
        FieldKey::Weather => {
            let label = WeatherCategory::classify(report.weather_code).label();
            if config.show.weather_label {
                DisplayField::labelled(key, label)
            } else {
                DisplayField::bare(key, label)
            }
        }
        FieldKey::Temperature => DisplayField::labelled(key, temperature_text(report, config)),
        FieldKey::WindSpeed => DisplayField::labelled(
            key,
            format_wind_speed(report.wind_speed, config.wind_speed_unit.label()),
        ),
        FieldKey::WindDirection => DisplayField::labelled(
            key,
            WindDirection::from_degrees(report.wind_direction_degrees).label(),
        ),
        FieldKey::Sunrise => {
            DisplayField::labelled(key, format_sun_time(report.sunrise, config.time_format))
        }
        FieldKey::Sunset => {
            DisplayField::labelled(key, format_sun_time(report.sunset, config.time_format))
        }
        FieldKey::Date => DisplayField::labelled(key, format_date(now.date(), config.date_format)),
        FieldKey::Time => DisplayField::labelled(key, format_clock(now.time(), config.time_format)),
    }
}
