use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDateTime, NaiveTime};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    classify::WeatherCode,
    model::{WeatherReport, WeatherRequest},
};

use super::{WeatherProvider, fetch_body, http_client};

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";
const CURRENT_VARIABLES: &str =
    "temperature_2m,apparent_temperature,weather_code,wind_speed_10m,wind_direction_10m,is_day";
const DAILY_VARIABLES: &str = "sunrise,sunset,temperature_2m_max,temperature_2m_min";

/// Current conditions from the keyless Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            http: http_client()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    apparent_temperature: f64,
    weather_code: WeatherCode,
    wind_speed_10m: f64,
    wind_direction_10m: f64,
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    sunrise: Vec<String>,
    sunset: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current: OmCurrent,
    daily: OmDaily,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        let url = format!("{}/v1/forecast", self.base_url);
        debug!(%url, location = ?request.location, "fetching forecast");

        let query = [
            ("latitude", request.location.latitude.to_string()),
            ("longitude", request.location.longitude.to_string()),
            ("current", CURRENT_VARIABLES.to_string()),
            ("daily", DAILY_VARIABLES.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", "1".to_string()),
            ("temperature_unit", request.temperature_unit.api_token().to_string()),
            ("wind_speed_unit", request.wind_speed_unit.api_token().to_string()),
        ];

        let body = fetch_body(self.http.get(&url).query(&query), "Open-Meteo").await?;
        let parsed: OmResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")?;

        let daily = &parsed.daily;
        let current = &parsed.current;

        Ok(WeatherReport {
            city: request.location.city.clone(),
            weather_code: current.weather_code,
            is_daytime: current.is_day != 0,
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            temperature_max: first(&daily.temperature_2m_max, "temperature_2m_max")?,
            temperature_min: first(&daily.temperature_2m_min, "temperature_2m_min")?,
            wind_speed: current.wind_speed_10m,
            wind_direction_degrees: normalize_degrees(current.wind_direction_10m),
            sunrise: local_clock(first(&daily.sunrise, "sunrise")?)?,
            sunset: local_clock(first(&daily.sunset, "sunset")?)?,
        })
    }
}

fn first<T: Clone>(values: &[T], name: &str) -> Result<T> {
    values
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Open-Meteo response contained no daily {name} data"))
}

/// "2026-10-18T07:21" -> 07:21
fn local_clock(timestamp: String) -> Result<NaiveTime> {
    NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.time())
        .with_context(|| format!("Invalid Open-Meteo timestamp '{timestamp}'"))
}

fn normalize_degrees(degrees: f64) -> u16 {
    (degrees.round() as i64).rem_euclid(360) as u16
}
