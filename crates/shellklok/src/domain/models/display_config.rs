#[cfg(test)]
#[path = "display_config_test.rs"]
mod tests;

use super::MenuField;
use super::Palette;

/// Rendering choices for the clock. Each field is an index into the option
/// list of the matching [`MenuField`], never a raw value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub font: usize,
    pub color: usize,
    /// 0 shows seconds, 1 hides them.
    pub seconds: usize,
    /// 0 is the 24-hour clock, 1 the 12-hour clock.
    pub mode: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    H24,
    H12,
}

impl DisplayConfig {
    pub fn get(&self, field: MenuField) -> usize {
        return match field {
            MenuField::Font => self.font,
            MenuField::Color => self.color,
            MenuField::Seconds => self.seconds,
            MenuField::Mode => self.mode,
        };
    }

    pub fn set(&mut self, field: MenuField, value: usize) {
        match field {
            MenuField::Font => self.font = value,
            MenuField::Color => self.color = value,
            MenuField::Seconds => self.seconds = value,
            MenuField::Mode => self.mode = value,
        }
    }

    pub fn shows_seconds(&self) -> bool {
        return self.seconds == 0;
    }

    pub fn clock_mode(&self) -> ClockMode {
        if self.mode == 0 {
            return ClockMode::H24;
        }

        return ClockMode::H12;
    }

    pub fn palette(&self) -> Palette {
        return Palette::from_index(self.color);
    }

    pub fn cycle_color(&mut self) {
        self.color = (self.color + 1) % Palette::LEN;
    }

    pub fn cycle_font(&mut self, font_count: usize) {
        if font_count == 0 {
            self.font = 0;
            return;
        }
        self.font = (self.font + 1) % font_count;
    }

    pub fn toggle_seconds(&mut self) {
        self.seconds = 1 - self.seconds.min(1);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = 1 - self.mode.min(1);
    }
}
