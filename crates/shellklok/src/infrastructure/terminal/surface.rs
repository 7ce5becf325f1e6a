#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::layout::Size;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Widget;
use ratatui::Terminal;

use super::KeySource;
use crate::domain::models::InputMode;
use crate::domain::models::Key;
use crate::domain::models::Surface;

/// A [`Surface`] over any ratatui backend. Draw calls land in an off-screen
/// canvas that is copied into the terminal frame on `present`, so modals can
/// paint over the last clock frame without redrawing it.
pub struct TerminalSurface<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    canvas: Buffer,
    keys: K,
    mode: InputMode,
}

impl<B: Backend, K: KeySource> TerminalSurface<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> TerminalSurface<B, K> {
        return TerminalSurface {
            terminal,
            canvas: Buffer::empty(Rect::default()),
            keys,
            mode: InputMode::default(),
        };
    }

    pub fn terminal(&self) -> &Terminal<B> {
        return &self.terminal;
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        return &mut self.terminal;
    }

    pub fn keys(&self) -> &K {
        return &self.keys;
    }

    /// Matches the canvas to the terminal size, keeping what was painted.
    fn fit_canvas(&mut self) {
        let Ok(size) = self.terminal.size() else {
            return;
        };
        let area = Rect::new(0, 0, size.width, size.height);
        if self.canvas.area == area {
            return;
        }

        let mut canvas = Buffer::empty(area);
        Canvas(&self.canvas).render(area, &mut canvas);
        self.canvas = canvas;
    }
}

struct Canvas<'a>(&'a Buffer);

impl Widget for Canvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(self.0.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (self.0.cell((x, y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[async_trait]
impl<B, K> Surface for TerminalSurface<B, K>
where
    B: Backend + Send,
    K: KeySource,
{
    fn size(&self) -> Result<Size> {
        return Ok(self.terminal.size()?);
    }

    fn clear(&mut self) -> Result<()> {
        let size = self.size()?;
        self.canvas = Buffer::empty(Rect::new(0, 0, size.width, size.height));
        return Ok(());
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        let area = self.canvas.area;
        if x >= area.right() || y >= area.bottom() {
            return;
        }
        self.canvas
            .set_stringn(x, y, text, usize::from(area.right() - x), style);
    }

    fn draw_panel(&mut self, area: Rect) {
        self.fit_canvas();
        let area = area.intersection(self.canvas.area);
        if area.is_empty() {
            return;
        }
        Clear.render(area, &mut self.canvas);
        Block::bordered().render(area, &mut self.canvas);
    }

    fn present(&mut self) -> Result<()> {
        let canvas = &self.canvas;
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Canvas(canvas), area);
        })?;

        return Ok(());
    }

    fn input_mode(&self) -> InputMode {
        return self.mode;
    }

    fn set_input_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    async fn read_key(&mut self) -> Result<Option<Key>> {
        return self.keys.next_key(self.mode).await;
    }
}
