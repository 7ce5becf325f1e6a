#[cfg(test)]
#[path = "clock_app_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::time;

use super::compositor;
use super::help;
use super::time_format;
use super::SettingsMenu;
use crate::domain::models::ArtRendererBox;
use crate::domain::models::Command;
use crate::domain::models::DisplayConfig;
use crate::domain::models::Key;
use crate::domain::models::Surface;

pub const FALLBACK_ART: &str = "FONT ERROR";
pub const DEFAULT_REFRESH: Duration = Duration::from_millis(100);

pub struct ClockAppProps {
    pub renderer: ArtRendererBox,
    pub fonts: Vec<String>,
    pub refresh: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies a direct key command. Font and color wrap around, seconds and
/// mode flip. Modal commands are left to the caller.
pub fn apply_command(config: &mut DisplayConfig, command: Command, font_count: usize) {
    match command {
        Command::CycleColor => config.cycle_color(),
        Command::CycleFont => config.cycle_font(font_count),
        Command::ToggleSeconds => config.toggle_seconds(),
        Command::ToggleMode => config.toggle_mode(),
        Command::Quit | Command::Help | Command::Menu => {}
    }
}

pub struct ClockApp {
    config: DisplayConfig,
    fonts: Vec<String>,
    menu: SettingsMenu,
    renderer: ArtRendererBox,
    refresh: Duration,
    last_render_error: Option<String>,
}

impl ClockApp {
    pub fn new(props: ClockAppProps) -> ClockApp {
        return ClockApp {
            config: DisplayConfig::default(),
            menu: SettingsMenu::new(&props.fonts),
            fonts: props.fonts,
            renderer: props.renderer,
            refresh: props.refresh,
            last_render_error: None,
        };
    }

    pub fn config(&self) -> &DisplayConfig {
        return &self.config;
    }

    pub fn font_name(&self) -> &str {
        return self
            .fonts
            .get(self.config.font)
            .map(String::as_str)
            .unwrap_or_default();
    }

    /// Polls, dispatches and redraws until a quit key arrives.
    pub async fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        tracing::info!(
            fonts = self.fonts.len(),
            renderer = %self.renderer.name(),
            refresh_ms = self.refresh.as_millis() as u64,
            "clock started"
        );

        loop {
            if let Some(key) = surface.read_key().await? {
                if self.handle_key(surface, key).await? == Flow::Quit {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }

            self.render(surface).await?;
            time::sleep(self.refresh).await;
        }
    }

    pub async fn handle_key<S: Surface + ?Sized>(&mut self, surface: &mut S, key: Key) -> Result<Flow> {
        let Some(command) = Command::parse(key) else {
            return Ok(Flow::Continue);
        };
        tracing::debug!(?command, "command");

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => help::show_help(surface).await?,
            Command::Menu => {
                self.config = self.menu.show(surface, &self.config).await?;
                tracing::info!(
                    font = self.font_name(),
                    color = %self.config.palette(),
                    seconds = self.config.shows_seconds(),
                    mode_24h = self.config.mode == 0,
                    "settings updated"
                );
            }
            command => apply_command(&mut self.config, command, self.fonts.len()),
        }

        return Ok(Flow::Continue);
    }

    pub async fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        let text = time_format::local_time(&self.config);
        let art = self.art(&text).await;
        return compositor::paint(surface, &art, self.config.palette());
    }

    async fn art(&mut self, text: &str) -> Vec<String> {
        let font = self.font_name().to_string();
        match self.renderer.render(text, &font).await {
            Ok(lines) => {
                if self.last_render_error.take().is_some() {
                    tracing::info!(font = %font, "art renderer recovered");
                }
                return lines;
            }
            Err(err) => {
                // Logged once per distinct failure, the loop retries every tick.
                let message = err.to_string();
                if self.last_render_error.as_deref() != Some(message.as_str()) {
                    tracing::warn!(font = %font, error = %message, "art renderer failed");
                    self.last_render_error = Some(message);
                }
                return vec![FALLBACK_ART.to_string()];
            }
        }
    }
}
