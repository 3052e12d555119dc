use crate::context::ExtendContext;
use crate::error::MissingKeyError;
use crate::types::CssOverrides;

/// Identifying metadata for a theme plugin.
#[derive(Debug)]
pub struct PluginDescriptor {
    /// Stable identifier referenced from descriptor plugin lists.
    pub id: &'static str,
    /// One-line description shown by `--list-plugins`.
    pub summary: &'static str,
}

impl PluginDescriptor {
    #[must_use]
    pub const fn new(id: &'static str, summary: &'static str) -> Self {
        Self { id, summary }
    }
}

/// A pluggable style contributor applied, in configured order, while a theme
/// is resolved.
pub trait ThemePlugin: Send + Sync {
    /// Static metadata describing this plugin.
    fn descriptor(&self) -> &'static PluginDescriptor;

    /// Produce the override tree this plugin contributes for the given theme.
    fn extend(&self, context: &ExtendContext<'_>) -> Result<CssOverrides, MissingKeyError>;
}
