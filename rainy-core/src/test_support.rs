use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::WeatherReport;

pub(crate) fn sample_report() -> WeatherReport {
    WeatherReport {
        city: "Berlin".to_string(),
        weather_code: 0,
        is_daytime: true,
        temperature: 21.3,
        apparent_temperature: 19.8,
        temperature_max: 24.6,
        temperature_min: 12.1,
        wind_speed: 11.2,
        wind_direction_degrees: 250,
        sunrise: NaiveTime::from_hms_opt(7, 4, 0).expect("valid time"),
        sunset: NaiveTime::from_hms_opt(18, 41, 0).expect("valid time"),
    }
}

pub(crate) fn sample_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 3)
        .and_then(|d| d.and_hms_opt(14, 5, 9))
        .expect("valid timestamp")
}
