use ratatui::style::Color;
use ratatui::style::Style;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumCount;
use strum_macros::EnumIter;

/// Foreground colors the clock can be drawn in. Order matters: menu and
/// `c` cycling both walk the variants in declaration order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Palette {
    #[default]
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Black,
}

impl Palette {
    pub const LEN: usize = <Palette as strum::EnumCount>::COUNT;

    /// Out-of-range indices fall back to the default entry.
    pub fn from_index(index: usize) -> Palette {
        return Palette::iter().nth(index).unwrap_or_default();
    }

    pub fn names() -> Vec<String> {
        return Palette::iter().map(|e| e.to_string()).collect();
    }

    pub fn color(&self) -> Color {
        return match self {
            Palette::White => Color::White,
            Palette::Red => Color::Red,
            Palette::Green => Color::Green,
            Palette::Yellow => Color::Yellow,
            Palette::Blue => Color::Blue,
            Palette::Magenta => Color::Magenta,
            Palette::Cyan => Color::Cyan,
            Palette::Black => Color::Black,
        };
    }

    /// Every entry is paired with a black background.
    pub fn style(&self) -> Style {
        return Style::default().fg(self.color()).bg(Color::Black);
    }
}
