pub mod clock_app;
pub mod compositor;
pub mod help;
pub mod settings_menu;
pub mod time_format;

pub use clock_app::*;
pub use settings_menu::*;
