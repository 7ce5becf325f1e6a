#[cfg(test)]
#[path = "compositor_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::layout::Size;

use crate::domain::models::Palette;
use crate::domain::models::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub x: u16,
    pub y: u16,
    pub text: String,
}

/// Centers `art` in a terminal of `size`. Rows past the bottom edge are
/// dropped and each line is cut to `width - 1` characters.
pub fn layout(art: &[String], size: Size) -> Vec<PlacedLine> {
    let height = usize::from(size.height);
    let width = usize::from(size.width);
    let start_y = height.saturating_sub(art.len()) / 2;

    return art
        .iter()
        .take(height)
        .enumerate()
        .map(|(idx, line)| {
            let x = width.saturating_sub(line.chars().count()) / 2;
            let text = line.chars().take(width.saturating_sub(1)).collect();

            // Both offsets are bounded by the u16 terminal dimensions.
            return PlacedLine {
                x: x as u16,
                y: (start_y + idx) as u16,
                text,
            };
        })
        .collect();
}

/// Clears the surface and paints one frame of art in a single palette color.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, art: &[String], palette: Palette) -> Result<()> {
    surface.clear()?;
    let style = palette.style();
    for line in layout(art, surface.size()?) {
        surface.draw_text(line.x, line.y, &line.text, style);
    }

    return surface.present();
}
