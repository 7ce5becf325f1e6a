//! Infrastructure layer providing external integrations.
//!
//! This module contains the font directory scanner, the figlet process
//! gateway and the crossterm/ratatui terminal surface.

pub mod fonts;
pub mod renderers;
pub mod terminal;
