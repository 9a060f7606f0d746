//! Merges a pictogram with the formatted fields into printable lines.
//!
//! Line `i` is `pictogram[i]` followed by field `i`. When there are more
//! fields than pictogram lines the pictogram side is padded with blanks of
//! the pictogram's width; surplus pictogram lines are printed on their own.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::{
    format::{DisplayField, FieldKey},
    pictogram::Pictogram,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoration {
    pub use_emoji: bool,
    pub use_color: bool,
}

pub fn emoji_for(key: FieldKey) -> &'static str {
    match key {
        FieldKey::City => "🏠",
        FieldKey::Weather => "🌧️",
        FieldKey::Temperature => "🌡️",
        FieldKey::WindSpeed => "💨",
        FieldKey::WindDirection => "🧭",
        FieldKey::Sunrise => "🌅",
        FieldKey::Sunset => "🌇",
        FieldKey::Date => "📅",
        FieldKey::Time => "🕒",
    }
}

pub fn color_for(key: FieldKey) -> Color {
    match key {
        FieldKey::City => Color::Blue,
        FieldKey::Weather => Color::Cyan,
        FieldKey::Temperature => Color::Red,
        FieldKey::WindSpeed => Color::Green,
        FieldKey::WindDirection => Color::Yellow,
        FieldKey::Sunrise | FieldKey::Sunset => Color::Magenta,
        FieldKey::Date | FieldKey::Time => Color::White,
    }
}

/// Compose the report lines.
///
/// Produces `max(pictogram height, fields)` lines, or exactly one line per
/// field when `pictogram` is `None`.
pub fn compose(
    pictogram: Option<&Pictogram>,
    fields: &[DisplayField],
    decoration: Decoration,
) -> Vec<String> {
    let glyph: &[&str] = pictogram.map(Pictogram::lines).unwrap_or_default();
    let blank = " ".repeat(pictogram.map(Pictogram::width).unwrap_or(0));
    let rows = glyph.len().max(fields.len());

    (0..rows)
        .map(|i| {
            let mut line = glyph.get(i).copied().unwrap_or(blank.as_str()).to_string();
            if let Some(field) = fields.get(i) {
                line.push_str(&decorate(field, decoration));
            }
            line
        })
        .collect()
}

fn decorate(field: &DisplayField, decoration: Decoration) -> String {
    let mut out = String::new();

    if decoration.use_emoji {
        out.push_str(emoji_for(field.key));
        out.push(' ');
    }

    let text = field.text();
    if decoration.use_color {
        out.push_str(&text.with(color_for(field.key)).to_string());
    } else {
        out.push_str(&text);
    }

    out
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Write composed lines to stdout.
pub fn print_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_lines(&mut lock, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEVEN: Pictogram =
        Pictogram::new(&["1234", "abcd", "ABCD", "5678", "efgh", "EFGH", "9012"]);

    fn fields(keys: &[FieldKey]) -> Vec<DisplayField> {
        keys.iter()
            .map(|key| DisplayField::labelled(*key, "v"))
            .collect()
    }

    #[test]
    fn more_fields_than_glyph_lines_pads_with_blanks() {
        let fields = fields(&FieldKey::CANONICAL_ORDER);
        let lines = compose(Some(&SEVEN), &fields, Decoration::default());

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "1234City: v");
        assert_eq!(lines[6], "9012Sunset: v");
        assert_eq!(lines[7], "    Date: v");
        assert_eq!(lines[8], "    Time: v");
    }

    #[test]
    fn more_glyph_lines_than_fields_prints_glyph_alone() {
        let fields = fields(&[FieldKey::City, FieldKey::Weather, FieldKey::Temperature]);
        let lines = compose(Some(&SEVEN), &fields, Decoration::default());

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[2], "ABCDTemperature: v");
        assert_eq!(&lines[3..], &SEVEN.lines()[3..]);
    }

    #[test]
    fn without_pictogram_one_line_per_field() {
        let fields = vec![
            DisplayField::bare(FieldKey::City, "Berlin"),
            DisplayField::labelled(FieldKey::Weather, "clear"),
        ];
        let lines = compose(None, &fields, Decoration::default());

        assert_eq!(lines, vec!["Berlin", "Weather: clear"]);
    }

    #[test]
    fn nothing_to_show_is_empty() {
        assert!(compose(None, &[], Decoration::default()).is_empty());
    }

    #[test]
    fn emoji_prefixes_the_label() {
        let fields = vec![DisplayField::labelled(FieldKey::Temperature, "21.3°C")];
        let decoration = Decoration {
            use_emoji: true,
            use_color: false,
        };
        let lines = compose(None, &fields, decoration);

        assert_eq!(lines, vec!["🌡️ Temperature: 21.3°C"]);
    }

    #[test]
    fn color_leaves_the_glyph_segment_plain() {
        let fields = vec![DisplayField::labelled(FieldKey::WindSpeed, "3.0 m/s")];
        let decoration = Decoration {
            use_emoji: false,
            use_color: true,
        };
        let lines = compose(Some(&SEVEN), &fields, decoration);

        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            format!("1234{}", "Wind speed: 3.0 m/s".with(Color::Green))
        );
    }

    #[test]
    fn emoji_stays_outside_the_color() {
        let fields = vec![DisplayField::labelled(FieldKey::Sunrise, "07:04")];
        let decoration = Decoration {
            use_emoji: true,
            use_color: true,
        };
        let lines = compose(None, &fields, decoration);

        assert_eq!(
            lines,
            vec![format!("🌅 {}", "Sunrise: 07:04".with(Color::Magenta))]
        );
    }

    #[test]
    fn each_key_has_its_color() {
        let expected = [
            (FieldKey::City, Color::Blue),
            (FieldKey::Weather, Color::Cyan),
            (FieldKey::Temperature, Color::Red),
            (FieldKey::WindSpeed, Color::Green),
            (FieldKey::WindDirection, Color::Yellow),
            (FieldKey::Sunrise, Color::Magenta),
            (FieldKey::Sunset, Color::Magenta),
            (FieldKey::Date, Color::White),
            (FieldKey::Time, Color::White),
        ];
        for (key, color) in expected {
            assert_eq!(color_for(key), color, "{}", key.name());
        }
    }

    #[test]
    fn every_key_has_a_glyph() {
        for key in FieldKey::CANONICAL_ORDER {
            assert!(!emoji_for(key).is_empty(), "{}", key.name());
        }
    }

    #[test]
    fn lines_are_newline_terminated() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["a".to_string(), "b".to_string()]).expect("write");

        assert_eq!(String::from_utf8(buf).expect("utf8"), "a\nb\n");
    }
}
