#[cfg(test)]
#[path = "settings_menu_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;

use crate::domain::models::centered_rect;
use crate::domain::models::DisplayConfig;
use crate::domain::models::MenuInput;
use crate::domain::models::MenuOption;
use crate::domain::models::ModalInput;
use crate::domain::models::Surface;

pub const MENU_WIDTH: u16 = 35;

/// Cursor and working copy for one visit to the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSession {
    pub selected: usize,
    pub values: DisplayConfig,
}

impl MenuSession {
    /// Applies one input and reports whether the session is over. Edits are
    /// clamped to the option list, they never wrap.
    pub fn apply(&mut self, input: MenuInput, items: &[MenuOption]) -> bool {
        let last = items.len().saturating_sub(1);
        match input {
            MenuInput::Commit => return true,
            MenuInput::Up => self.selected = self.selected.saturating_sub(1),
            MenuInput::Down => self.selected = (self.selected + 1).min(last),
            MenuInput::Decrease => {
                if let Some(item) = items.get(self.selected) {
                    let value = self.values.get(item.field).saturating_sub(1);
                    self.values.set(item.field, value);
                }
            }
            MenuInput::Increase => {
                if let Some(item) = items.get(self.selected) {
                    let value = (self.values.get(item.field) + 1).min(item.max_index());
                    self.values.set(item.field, value);
                }
            }
        }

        return false;
    }
}

pub struct SettingsMenu {
    items: Vec<MenuOption>,
    selected: usize,
}

impl SettingsMenu {
    pub fn new(fonts: &[String]) -> SettingsMenu {
        return SettingsMenu {
            items: MenuOption::all(fonts),
            selected: 0,
        };
    }

    pub fn selected(&self) -> usize {
        return self.selected;
    }

    pub fn height(&self) -> u16 {
        return self.items.len() as u16 + 2;
    }

    /// Runs the menu until a commit key. Every exit returns the working copy,
    /// so a terminal too small for the panel hands back `current` untouched.
    pub async fn show<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        current: &DisplayConfig,
    ) -> Result<DisplayConfig> {
        let mut session = MenuSession {
            selected: self.selected,
            values: *current,
        };
        let mut surface = ModalInput::acquire(surface);

        loop {
            let Some(area) = centered_rect(surface.size()?, MENU_WIDTH, self.height()) else {
                tracing::debug!("terminal too small for the settings menu");
                break;
            };

            self.draw(&mut *surface, area, &session);
            surface.present()?;

            let Some(key) = surface.read_key().await? else {
                continue;
            };
            if let Some(input) = MenuInput::parse(key) {
                if session.apply(input, &self.items) {
                    break;
                }
            }
        }

        self.selected = session.selected;
        return Ok(session.values);
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, area: Rect, session: &MenuSession) {
        surface.draw_panel(area);

        let inner_width = usize::from(MENU_WIDTH - 3);
        for (idx, item) in self.items.iter().enumerate() {
            let value = item
                .options
                .get(session.values.get(item.field))
                .map(String::as_str)
                .unwrap_or_default();
            let row: String = format!("{:8}: <{:15}>", item.label(), value)
                .chars()
                .take(inner_width)
                .collect();

            let mut style = Style::default();
            if idx == session.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            surface.draw_text(area.x + 2, area.y + 1 + idx as u16, &row, style);
        }
    }
}
