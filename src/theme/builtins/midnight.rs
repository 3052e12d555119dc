use tinct_plugin_api::{Color, DarkMode, Palette};
use tinct_plugins_typography as typography;

use super::default_content;
use crate::theme::types::ThemeConfig;

/// Dark counterpart of the slate theme. Semantic names match `slate` so the
/// same typography extension resolves against either palette.
pub(super) fn theme() -> ThemeConfig {
    ThemeConfig {
        content: default_content(),
        dark_mode: DarkMode::ClassMarker,
        palette: Palette::from_iter([
            ("pale", Color::hex(0x0F, 0x17, 0x2A)),        // slate-900
            ("yellow", Color::hex(0xFA, 0xCC, 0x15)),      // yellow-400
            ("dark-yellow", Color::hex(0xEA, 0xB3, 0x08)), // yellow-500
            ("soft-gray", Color::hex(0x33, 0x41, 0x55)),   // slate-700
            ("light-gray", Color::hex(0x47, 0x55, 0x69)),  // slate-600
            ("gray", Color::hex(0x94, 0xA3, 0xB8)),        // slate-400
            ("dark-gray", Color::hex(0xCB, 0xD5, 0xE1)),   // slate-300
            ("light-blue", Color::hex(0x60, 0xA5, 0xFA)),  // blue-400
            ("blue", Color::hex(0x93, 0xC5, 0xFD)),        // blue-300
            ("primary", Color::rgb(122, 152, 214)),
        ]),
        typography: Some(typography::prose_extension),
        plugins: vec![typography::PLUGIN_ID.to_string()],
    }
}
