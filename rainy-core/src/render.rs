use std::io;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::{
    classify::WeatherCategory,
    compose::{Decoration, compose, print_lines},
    config::RenderConfig,
    format::build_fields,
    model::WeatherReport,
};

/// Classify, format and compose one report.
pub fn render(report: &WeatherReport, config: &RenderConfig, now: NaiveDateTime) -> Vec<String> {
    let category = WeatherCategory::classify(report.weather_code);
    debug!(code = report.weather_code, %category, is_daytime = report.is_daytime, "classified");

    let pictogram = config
        .show
        .pictogram
        .then(|| category.pictogram(report.is_daytime));
    let fields = build_fields(report, config, now);
    let decoration = Decoration {
        use_emoji: config.show.emoji,
        use_color: config.show.color,
    };

    compose(pictogram.as_ref(), &fields, decoration)
}

/// Render and write the report to stdout.
pub fn print_report(
    report: &WeatherReport,
    config: &RenderConfig,
    now: NaiveDateTime,
) -> io::Result<()> {
    print_lines(&render(report, config, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ShowFlags,
        pictogram,
        test_support::{sample_now, sample_report},
    };

    #[test]
    fn default_report_on_a_clear_day() {
        let lines = render(&sample_report(), &RenderConfig::default(), sample_now());

        assert_eq!(
            lines,
            vec![
                r"               Berlin",
                r"     \   /     Weather: clear",
                r"      .-.      Temperature: 21.3°C",
                r"   ‒ (   ) ‒   Wind speed: 11.2 km/h",
                r"      `-᾿      Sunrise: 07:04",
                r"     /   \     Sunset: 18:41",
                r"               Date: 03.10.2026",
                r"               Time: 14:05:09",
            ]
        );
    }

    #[test]
    fn clear_night_uses_the_moon() {
        let mut report = sample_report();
        report.is_daytime = false;

        let lines = render(&report, &RenderConfig::default(), sample_now());
        assert!(lines[1].starts_with(pictogram::CLEAR_NIGHT.lines()[1]));
    }

    #[test]
    fn short_field_list_keeps_the_whole_glyph() {
        let mut report = sample_report();
        report.weather_code = 95;
        let mut show = ShowFlags::none();
        show.pictogram = true;
        show.weather = true;
        show.weather_label = true;
        let config = RenderConfig {
            show,
            ..RenderConfig::default()
        };

        let lines = render(&report, &config, sample_now());

        assert_eq!(lines.len(), pictogram::THUNDERY.height());
        assert_eq!(lines[0], format!("{}Weather: thundery", pictogram::THUNDERY.lines()[0]));
        assert_eq!(lines[5], pictogram::THUNDERY.lines()[5]);
    }

    #[test]
    fn hidden_pictogram_prints_fields_only() {
        let mut show = ShowFlags::default();
        show.pictogram = false;
        let config = RenderConfig {
            show,
            ..RenderConfig::default()
        };
        let mut report = sample_report();
        report.weather_code = 250;

        let lines = render(&report, &config, sample_now());

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Berlin");
        assert_eq!(lines[1], "Weather: foggy");
    }
}
