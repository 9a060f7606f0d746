//! Static glyph catalog.
//!
//! Heights: clear day 6, clear night 6, cloudy 4, rainy 5, snowy 5,
//! thundery 6, foggy 6. Every line in a glyph has the same width; the
//! first line is left blank so the glyph body sits beside the weather line
//! rather than the city line.

/// A fixed block of equal-width text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pictogram {
    lines: &'static [&'static str],
}

impl Pictogram {
    pub const fn new(lines: &'static [&'static str]) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width in characters of the widest line, 0 for an empty glyph.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

pub const CLEAR_DAY: Pictogram = Pictogram::new(&[
    r"               ",
    r"     \   /     ",
    r"      .-.      ",
    r"   ‒ (   ) ‒   ",
    r"      `-᾿      ",
    r"     /   \     ",
]);

pub const CLEAR_NIGHT: Pictogram = Pictogram::new(&[
    r"               ",
    r"      _.._     ",
    r"    .' .-'`    ",
    r"   /  /        ",
    r"   \  '.___.;  ",
    r"    '._  _.'   ",
]);

pub const CLOUDY: Pictogram = Pictogram::new(&[
    r"                 ",
    r"       .--.      ",
    r"    .-(    ).    ",
    r"   (___.__)__)   ",
]);

pub const RAINY: Pictogram = Pictogram::new(&[
    r"                 ",
    r"       .--.      ",
    r"    .-(    ).    ",
    r"   (___.__)__)   ",
    r"    ʻ‚ʻ‚ʻ‚ʻ‚ʻ    ",
]);

pub const SNOWY: Pictogram = Pictogram::new(&[
    r"                 ",
    r"       .--.      ",
    r"    .-(    ).    ",
    r"   (___.__)__)   ",
    r"    * * * * *    ",
]);

pub const THUNDERY: Pictogram = Pictogram::new(&[
    r"                 ",
    r"       .--.      ",
    r"    .-(    ).    ",
    r"   (___.__)__)   ",
    r"        /_       ",
    r"         /       ",
]);

pub const FOGGY: Pictogram = Pictogram::new(&[
    r"~~~~   ~~~~ ~~~   * ~~~~~~~ ",
    r"~~~   *  ~~~~~  * ~~~~  ~~~~",
    r"  ~~~~  ~~~ * ~~~~~ ~~~~   ~",
    r"~~~~*   ~~~~   * ~~~~   ~~~~",
    r"  * ~~~ ~~~~  ~~~~~  * ~~~~ ",
    r"~~~~  * ~~~~ ~~~   ~~~~~~~~ ",
]);
