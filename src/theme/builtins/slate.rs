use tinct_plugin_api::{Color, DarkMode, Palette};
use tinct_plugins_typography as typography;

use super::default_content;
use crate::theme::types::ThemeConfig;

/// The site's light theme, built on the slate scale.
pub(super) fn theme() -> ThemeConfig {
    ThemeConfig {
        content: default_content(),
        dark_mode: DarkMode::ClassMarker,
        palette: Palette::from_iter([
            ("pale", Color::hex(0xF8, 0xFA, 0xFC)),        // slate-50
            ("yellow", Color::hex(0xEA, 0xB3, 0x08)),      // yellow-500
            ("dark-yellow", Color::hex(0xCA, 0x8A, 0x04)), // yellow-600
            ("soft-gray", Color::hex(0xE2, 0xE8, 0xF0)),   // slate-200
            ("light-gray", Color::hex(0xCB, 0xD5, 0xE1)),  // slate-300
            ("gray", Color::hex(0x64, 0x74, 0x8B)),        // slate-500
            ("dark-gray", Color::hex(0x33, 0x41, 0x55)),   // slate-700
            ("light-blue", Color::hex(0x93, 0xC5, 0xFD)),  // blue-300
            ("blue", Color::hex(0x3B, 0x82, 0xF6)),        // blue-500
            ("primary", Color::rgb(80, 116, 191)),
        ]),
        typography: Some(typography::prose_extension),
        plugins: vec![typography::PLUGIN_ID.to_string()],
    }
}
