mod figlet;

pub use figlet::*;
