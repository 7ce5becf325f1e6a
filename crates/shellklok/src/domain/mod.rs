//! Core clock logic.
//!
//! Display state, key commands, layout and the modal menus live here,
//! written against the `Surface` and `ArtRenderer` traits so they run
//! unchanged against a real terminal or a test backend.

pub mod models;
pub mod services;
