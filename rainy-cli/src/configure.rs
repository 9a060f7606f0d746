use anyhow::Context;
use inquire::{Confirm, Select};
use rainy_core::{DateFormat, Settings, TemperatureUnit, TimeFormat, WindSpeedUnit};

/// Walk through every setting, starting from the saved values, and save the result.
pub fn run() -> anyhow::Result<()> {
    let mut settings = Settings::load()?;
    let current = settings.resolve().config;

    let temperature = select(
        "Temperature unit:",
        TemperatureUnit::all(),
        current.temperature_unit,
    )?;
    let wind_speed = select(
        "Wind speed unit:",
        WindSpeedUnit::all(),
        current.wind_speed_unit,
    )?;
    let date_format = select("Date format:", DateFormat::all(), current.date_format)?;
    let time_format = select(
        "Time format:",
        &[TimeFormat::TwentyFourHour, TimeFormat::TwelveHour],
        current.time_format,
    )?;

    settings.temperature_unit = temperature.label().to_string();
    settings.wind_speed_unit = wind_speed.label().to_string();
    settings.date_format = date_format.as_str().to_string();
    settings.set_time_format(i64::from(time_format.hours()));

    for (name, enabled) in settings.show.entries_mut() {
        *enabled = Confirm::new(&format!("Show {name}?"))
            .with_default(*enabled)
            .prompt()
            .context("Configuration cancelled")?;
    }

    let path = settings.save()?;
    println!("Saved settings to {}", path.display());

    Ok(())
}

fn select<T>(message: &str, options: &[T], current: T) -> anyhow::Result<T>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    let cursor = options.iter().position(|o| *o == current).unwrap_or(0);

    Select::new(message, options.to_vec())
        .with_starting_cursor(cursor)
        .prompt()
        .context("Configuration cancelled")
}
