use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::Terminal;

use super::TerminalSurface;
use crate::domain::models::InputMode;
use crate::domain::models::Key;
use crate::domain::models::ModalInput;
use crate::domain::models::Surface;
use crate::infrastructure::terminal::ScriptedKeys;

fn surface(width: u16, height: u16) -> TerminalSurface<TestBackend, ScriptedKeys> {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    return TerminalSurface::new(terminal, ScriptedKeys::default());
}

fn row(surface: &TerminalSurface<TestBackend, ScriptedKeys>, y: u16) -> String {
    let buffer = surface.terminal().backend().buffer();
    return (0..buffer.area.width)
        .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
        .collect();
}

#[test]
fn it_presents_drawn_text() {
    let mut surface = surface(12, 3);
    surface.clear().unwrap();
    surface.draw_text(2, 1, "12:00", Style::default().fg(Color::Red));
    surface.present().unwrap();

    assert_eq!(row(&surface, 1), "  12:00     ");
    let buffer = surface.terminal().backend().buffer();
    assert_eq!(buffer.cell((2, 1)).unwrap().fg, Color::Red);
}

#[test]
fn it_clips_text_at_the_right_edge() {
    let mut surface = surface(6, 2);
    surface.clear().unwrap();
    surface.draw_text(3, 0, "abcdef", Style::default());
    surface.draw_text(9, 0, "ignored", Style::default());
    surface.draw_text(0, 5, "ignored", Style::default());
    surface.present().unwrap();

    assert_eq!(row(&surface, 0), "   abc");
}

#[test]
fn it_draws_bordered_panels_over_the_canvas() {
    let mut surface = surface(8, 4);
    surface.clear().unwrap();
    surface.draw_text(0, 1, "xxxxxxxx", Style::default());
    surface.draw_panel(Rect::new(1, 0, 5, 3));
    surface.present().unwrap();

    assert_eq!(row(&surface, 0), " ┌───┐  ");
    assert_eq!(row(&surface, 1), "x│   │xx");
    assert_eq!(row(&surface, 2), " └───┘  ");
}

#[test]
fn it_follows_terminal_resizes_on_clear() {
    let mut surface = surface(20, 10);
    surface.clear().unwrap();
    surface.terminal_mut().backend_mut().resize(10, 4);
    surface.clear().unwrap();

    let size = surface.size().unwrap();
    assert_eq!((size.width, size.height), (10, 4));
    surface.present().unwrap();
}

#[tokio::test]
async fn it_reads_keys_in_the_current_mode() {
    let terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    let keys = ScriptedKeys::new(vec![None, None, Some(Key::Char('m'))]);
    let mut surface = TerminalSurface::new(terminal, keys);

    assert_eq!(surface.read_key().await.unwrap(), None);
    surface.set_input_mode(InputMode::Blocking);
    assert_eq!(surface.read_key().await.unwrap(), Some(Key::Char('m')));
}

#[test]
fn it_restores_polling_when_a_modal_ends() {
    let mut surface = surface(10, 4);
    {
        let guard = ModalInput::acquire(&mut surface);
        assert_eq!(guard.input_mode(), InputMode::Blocking);
    }
    assert_eq!(surface.input_mode(), InputMode::Polling);
}

#[tokio::test]
async fn it_restores_polling_when_a_modal_fails() {
    async fn failing_modal<S: Surface>(surface: &mut S) -> anyhow::Result<()> {
        let mut surface = ModalInput::acquire(surface);
        surface.read_key().await?;
        return Ok(());
    }

    let mut surface = surface(10, 4);
    assert!(failing_modal(&mut surface).await.is_err());
    assert_eq!(surface.input_mode(), InputMode::Polling);
}

#[test]
fn it_sizes_the_canvas_for_panels_drawn_before_any_clear() {
    let mut surface = surface(6, 3);
    surface.draw_panel(Rect::new(0, 0, 6, 3));
    surface.present().unwrap();

    assert_eq!(row(&surface, 0), "┌────┐");
    assert_eq!(row(&surface, 2), "└────┘");
}
