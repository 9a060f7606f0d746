use anyhow::Context;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use rainy_core::{
    Location, LocationProvider, Settings, WeatherProvider, WeatherRequest,
    provider::{FixedLocation, IpInfoLocator, OpenMeteoProvider},
};

use crate::configure;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "rainy", version, about = "Compact terminal weather report")]
pub struct Cli {
    /// Print debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather (the default when no subcommand is given).
    Show(ShowArgs),

    /// Interactively edit the saved settings.
    Configure,

    /// Print the location of the settings file.
    ConfigPath,
}

#[derive(Debug, Default, Args)]
pub struct ShowArgs {
    /// Latitude to report on instead of geolocating by IP.
    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Longitude to report on instead of geolocating by IP.
    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Name shown for a location given by coordinates.
    #[arg(long)]
    pub city: Option<String>,

    /// Temperature unit: °C, °F or °K.
    #[arg(long)]
    pub temperature_unit: Option<String>,

    /// Wind speed unit: mph, km/h, m/s or knots.
    #[arg(long)]
    pub wind_speed_unit: Option<String>,

    /// Date format, e.g. YYYY-MM-DD.
    #[arg(long)]
    pub date_format: Option<String>,

    /// Clock: 12 or 24.
    #[arg(long)]
    pub time_format: Option<String>,

    /// Prefix each line with an emoji.
    #[arg(long)]
    pub emoji: bool,

    /// Color each line by field.
    #[arg(long)]
    pub color: bool,

    /// Hide the weather pictogram.
    #[arg(long)]
    pub no_pictogram: bool,
}

impl ShowArgs {
    /// Layer command-line options over the saved settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(unit) = &self.temperature_unit {
            settings.temperature_unit = unit.clone();
        }
        if let Some(unit) = &self.wind_speed_unit {
            settings.wind_speed_unit = unit.clone();
        }
        if let Some(format) = &self.date_format {
            settings.date_format = format.clone();
        }
        if let Some(hours) = &self.time_format {
            settings.set_time_format(hours.as_str());
        }
        if self.emoji {
            settings.show.emoji = true;
        }
        if self.color {
            settings.show.color = true;
        }
        if self.no_pictogram {
            settings.show.pictogram = false;
        }
    }

    pub fn fixed_location(&self) -> Option<Location> {
        let (latitude, longitude) = (self.latitude?, self.longitude?);
        let city = self
            .city
            .clone()
            .unwrap_or_else(|| format!("{latitude:.2}, {longitude:.2}"));

        Some(Location {
            city,
            latitude,
            longitude,
        })
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => show(ShowArgs::default()).await,
            Some(Command::Show(args)) => show(args).await,
            Some(Command::Configure) => configure::run(),
            Some(Command::ConfigPath) => {
                println!("{}", Settings::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

async fn show(args: ShowArgs) -> anyhow::Result<()> {
    let mut settings = Settings::load()?;
    args.apply_overrides(&mut settings);
    let config = settings.resolve().config;

    let locator: Box<dyn LocationProvider> = match args.fixed_location() {
        Some(location) => Box::new(FixedLocation(location)),
        None => Box::new(IpInfoLocator::new()?),
    };
    let location = locator
        .locate()
        .await
        .context(
            "Could not determine location. Check your internet connection \
             or pass --latitude/--longitude.",
        )?;

    let provider = OpenMeteoProvider::new()?;
    let report = provider
        .current(&WeatherRequest::new(location, &config))
        .await?;

    rainy_core::print_report(&report, &config, Local::now().naive_local())
        .context("Failed to write report to stdout")?;

    Ok(())
}
