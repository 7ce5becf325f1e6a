mod art_renderer;
mod command;
mod display_config;
mod key;
mod menu;
mod palette;
mod surface;

pub use art_renderer::*;
pub use command::*;
pub use display_config::*;
pub use key::*;
pub use menu::*;
pub use palette::*;
pub use surface::*;
