use std::path::PathBuf;

use tinct::ThemeConfig;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) theme_name: String,
    pub(crate) descriptor: ThemeConfig,
    pub(crate) root: PathBuf,
    pub(crate) scan: bool,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Theme: {}", self.theme_name);
        println!("  Dark mode: {}", self.descriptor.dark_mode);
        println!("  Palette entries: {}", self.descriptor.palette.len());
        for (name, colour) in self.descriptor.palette.iter() {
            println!("    {name:<12} {colour}");
        }
        if self.descriptor.plugins.is_empty() {
            println!("  Plugins: (none)");
        } else {
            println!("  Plugins: {}", self.descriptor.plugins.join(", "));
        }
        println!("  Content globs:");
        for glob in self.descriptor.content.patterns() {
            println!("    {glob}");
        }
        println!("  Content root: {}", self.root.display());
        println!("  Scan content: {}", bool_to_word(self.scan));
        println!(
            "  Typography extension: {}",
            bool_to_word(self.descriptor.typography.is_some())
        );
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct::default_theme;

    #[test]
    fn bool_to_word_matches_expectations() {
        assert_eq!(super::bool_to_word(true), "yes");
        assert_eq!(super::bool_to_word(false), "no");
    }

    #[test]
    fn summary_prints_without_panic() {
        let config = ResolvedConfig {
            theme_name: "slate".into(),
            descriptor: default_theme(),
            root: PathBuf::from("/tmp"),
            scan: false,
        };

        config.print_summary();
    }
}
