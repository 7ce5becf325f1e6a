//! Configuration management.
//!
//! Settings come from built-in defaults, then the TOML config file, then
//! command-line flags and `SHELLKLOK_*` environment variables.

mod config;

pub use config::*;
