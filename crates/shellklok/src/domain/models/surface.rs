use std::ops::Deref;
use std::ops::DerefMut;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::layout::Rect;
use ratatui::layout::Size;
use ratatui::style::Style;

use super::InputMode;
use super::Key;

/// The slice of terminal capabilities the clock needs. Drawing calls paint
/// into a pending frame that only reaches the screen on `present`.
#[async_trait]
pub trait Surface: Send {
    fn size(&self) -> Result<Size>;
    fn clear(&mut self) -> Result<()>;
    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style);
    /// Blanks `area` and draws a border around it.
    fn draw_panel(&mut self, area: Rect);
    fn present(&mut self) -> Result<()>;
    fn input_mode(&self) -> InputMode;
    fn set_input_mode(&mut self, mode: InputMode);
    /// Reads one key. Returns `None` when polling and nothing is pending.
    async fn read_key(&mut self) -> Result<Option<Key>>;
}

/// Centers a `width` x `height` box inside `size`, or `None` when it does not fit.
pub fn centered_rect(size: Size, width: u16, height: u16) -> Option<Rect> {
    if height > size.height || width > size.width {
        return None;
    }

    return Some(Rect::new(
        (size.width - width) / 2,
        (size.height - height) / 2,
        width,
        height,
    ));
}

/// Holds the surface in blocking input mode for the lifetime of a modal and
/// switches it back to polling when dropped, whichever way the modal exits.
pub struct ModalInput<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> ModalInput<'a, S> {
    pub fn acquire(surface: &'a mut S) -> ModalInput<'a, S> {
        surface.set_input_mode(InputMode::Blocking);
        return ModalInput { surface };
    }
}

impl<S: Surface + ?Sized> Deref for ModalInput<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        return self.surface;
    }
}

impl<S: Surface + ?Sized> DerefMut for ModalInput<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        return self.surface;
    }
}

impl<S: Surface + ?Sized> Drop for ModalInput<'_, S> {
    fn drop(&mut self) {
        self.surface.set_input_mode(InputMode::Polling);
    }
}
