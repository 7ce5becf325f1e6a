use anyhow::Result;
use ratatui::style::Style;

use crate::domain::models::centered_rect;
use crate::domain::models::Key;
use crate::domain::models::ModalInput;
use crate::domain::models::Surface;

pub fn help_lines() -> Vec<&'static str> {
    return vec![
        "shellklok",
        "an ASCII digital tty clock using figlet",
        "[q/x] - quit",
        "[c]   - cycle colors",
        "[f]   - cycle fonts",
        "[s]   - toggle seconds",
        "[a]   - 12/24h mode",
        "[m]   - settings menu",
        "[h]   - this help",
    ];
}

/// Shows the key bindings until any key is pressed. Does nothing when the
/// panel does not fit the terminal.
pub async fn show_help<S: Surface + ?Sized>(surface: &mut S) -> Result<()> {
    let lines = help_lines();
    let height = lines.len() as u16 + 2;
    let width = lines.iter().map(|e| e.len()).max().unwrap_or_default() as u16 + 4;

    let mut surface = ModalInput::acquire(surface);
    loop {
        let Some(area) = centered_rect(surface.size()?, width, height) else {
            tracing::debug!("terminal too small for the help panel");
            return Ok(());
        };

        surface.draw_panel(area);
        for (idx, line) in lines.iter().enumerate() {
            surface.draw_text(area.x + 2, area.y + 1 + idx as u16, line, Style::default());
        }
        surface.present()?;

        match surface.read_key().await? {
            None | Some(Key::Resize) => continue,
            Some(_) => return Ok(()),
        }
    }
}
