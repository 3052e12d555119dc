use anyhow::Result;
use tinct::{ThemeBuild, ThemeManifest};

use crate::settings::ResolvedConfig;

/// Coordinates resolving the effective configuration into a theme manifest.
pub(crate) struct ManifestWorkflow {
    build: ThemeBuild,
}

impl ManifestWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        let ResolvedConfig {
            theme_name,
            descriptor,
            root,
            scan,
        } = config;

        let build = ThemeBuild::new(descriptor)
            .with_theme_name(theme_name)
            .with_root(root)
            .with_scan(scan);

        Self { build }
    }

    pub(crate) fn run(self) -> Result<ThemeManifest> {
        self.build.run()
    }
}
