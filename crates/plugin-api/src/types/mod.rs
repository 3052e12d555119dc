mod color;
mod dark_mode;
mod overrides;
mod palette;

pub use color::Color;
pub use dark_mode::DarkMode;
pub use overrides::{CssOverrides, DEFAULT_VARIANT, Declaration, StyleRule};
pub use palette::Palette;
