//! ASCII digital clock for the terminal.
//!
//! The current time is rendered through an external figlet compatible binary
//! and centered on screen. Single keys change the font, color, seconds
//! display and 12/24 hour mode, and a small settings menu edits all four.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{ArtRenderer, DisplayConfig, Key, Surface};
pub use domain::services::{ClockApp, ClockAppProps};
