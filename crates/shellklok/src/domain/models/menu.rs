use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;

use super::Palette;

pub const SECONDS_OPTIONS: [&str; 2] = ["ON", "OFF"];
pub const MODE_OPTIONS: [&str; 2] = ["24h", "12h"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MenuField {
    Font,
    Color,
    Seconds,
    Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub field: MenuField,
    pub options: Vec<String>,
}

impl MenuOption {
    pub fn label(&self) -> String {
        return self.field.to_string();
    }

    pub fn max_index(&self) -> usize {
        return self.options.len().saturating_sub(1);
    }

    /// Builds the four menu rows in display order.
    pub fn all(fonts: &[String]) -> Vec<MenuOption> {
        return MenuField::iter()
            .map(|field| {
                let options = match field {
                    MenuField::Font => fonts.to_vec(),
                    MenuField::Color => Palette::names(),
                    MenuField::Seconds => SECONDS_OPTIONS.iter().map(|e| e.to_string()).collect(),
                    MenuField::Mode => MODE_OPTIONS.iter().map(|e| e.to_string()).collect(),
                };
                return MenuOption { field, options };
            })
            .collect();
    }
}
