//! Application layer wiring the clock to the real terminal.
//!
//! Handles command-line parsing, log setup and the terminal lifecycle around
//! the main clock loop.

pub mod cli;
pub mod logging;
pub mod ui;
