mod plugin;
mod store;

pub use plugin::{PluginDescriptor, ThemePlugin};
pub use store::PluginRegistry;
