use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ArtRenderer;
use crate::domain::services::ClockApp;
use crate::domain::services::ClockAppProps;
use crate::infrastructure::fonts::FontCatalog;
use crate::infrastructure::renderers::Figlet;
use crate::infrastructure::terminal::CrosstermKeys;
use crate::infrastructure::terminal::TerminalSurface;

/// Puts the terminal back into cooked mode. Safe to call more than once.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

pub async fn start_loop() -> Result<()> {
    let fonts = FontCatalog::discover(&PathBuf::from(Config::get(ConfigKey::FontDir))).await;

    let renderer = Figlet::new(&Config::get(ConfigKey::Renderer));
    if let Err(err) = renderer.health_check().await {
        tracing::warn!(renderer = %renderer.name(), error = %err, "renderer health check failed");
    }

    let mut app = ClockApp::new(ClockAppProps {
        renderer: Box::new(renderer),
        fonts,
        refresh: Config::refresh_interval(),
    });

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut surface = TerminalSurface::new(terminal, CrosstermKeys::default());

    let result = app.run(&mut surface).await;

    disable_raw_mode()?;
    crossterm::execute!(
        surface.terminal_mut().backend_mut(),
        LeaveAlternateScreen,
        cursor::Show
    )?;

    return result;
}
