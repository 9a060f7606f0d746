use thiserror::Error;

/// A recoverable configuration problem.
///
/// Parsing a unit or format returns one of these; resolving settings into a
/// [`RenderConfig`](crate::RenderConfig) logs it and substitutes the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("Invalid temperature unit '{0}'. Supported units: °C, °F, °K. Using default °C.")]
    UnknownTemperatureUnit(String),

    #[error(
        "Invalid wind speed unit '{0}'. Supported units: mph, km/h, m/s, knots. Using default km/h."
    )]
    UnknownWindSpeedUnit(String),

    #[error(
        "Invalid date format '{0}'. Supported formats: MM/DD/YYYY, DD/MM/YYYY, YYYY/MM/DD, \
         YYYY-MM-DD, DD.MM.YYYY. Using default DD.MM.YYYY."
    )]
    UnknownDateFormat(String),

    #[error("Invalid time format '{0}'. Supported formats: 12, 24. Using default 24.")]
    UnknownTimeFormat(String),
}
