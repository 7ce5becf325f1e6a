mod keys;
mod surface;

pub use keys::*;
pub use surface::*;
