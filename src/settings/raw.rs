use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, ensure};
use indexmap::IndexMap;
use serde::Deserialize;

use tinct::content::ContentGlobs;
use tinct::theme;
use tinct_plugin_api::{Color, DarkMode};

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;
use super::util::{parse_colour_assignment, sanitize_patterns, sanitize_plugin_ids};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    theme: ThemeSection,
    content: ContentSection,
    plugins: Option<Vec<String>>,
    /// `--color NAME=COLOUR` assignments, validated during resolution.
    #[serde(skip)]
    cli_colours: Vec<String>,
}

/// Theme specific configuration options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ThemeSection {
    preset: Option<String>,
    dark_mode: Option<DarkMode>,
    colors: IndexMap<String, String>,
}

/// Content specific configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ContentSection {
    root: Option<PathBuf>,
    globs: Option<Vec<String>>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(preset) = cli.theme.clone() {
            self.theme.preset = Some(preset);
        }
        if let Some(mode) = cli.dark_mode {
            self.theme.dark_mode = Some(mode);
        }
        if let Some(assignments) = &cli.colors {
            self.cli_colours = assignments.clone();
        }
        if let Some(root) = cli.root.clone() {
            self.content.root = Some(root);
        }
        if let Some(globs) = &cli.content {
            self.content.globs = Some(globs.clone());
        }
        if let Some(plugins) = &cli.plugins {
            self.plugins = Some(plugins.clone());
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let mut root = match self.content.root {
            Some(path) => path,
            None => env::current_dir().context("failed to determine working directory")?,
        };
        if root.is_relative() {
            root = env::current_dir()
                .context("failed to resolve current directory for root")?
                .join(root);
        }
        root = fs::canonicalize(&root)
            .with_context(|| format!("failed to canonicalize content root {}", root.display()))?;

        let metadata = fs::metadata(&root)
            .with_context(|| format!("failed to inspect content root {}", root.display()))?;
        ensure!(metadata.is_dir(), "content root must be a directory");

        let (theme_name, mut descriptor) = match self.theme.preset {
            Some(name) => {
                let config = theme::by_name(&name).ok_or_else(|| {
                    anyhow!(
                        "unknown theme preset '{name}' (known: {})",
                        theme::names().join(", ")
                    )
                })?;
                (name, config)
            }
            None => ("slate".to_string(), theme::default_theme()),
        };

        if let Some(mode) = self.theme.dark_mode {
            descriptor.dark_mode = mode;
        }

        for (name, literal) in self.theme.colors {
            let colour: Color = literal.parse().with_context(|| {
                format!("invalid colour '{literal}' for palette entry '{name}'")
            })?;
            descriptor.palette.insert(name, colour);
        }

        for assignment in self.cli_colours {
            let (name, literal) = parse_colour_assignment(&assignment)?;
            let colour: Color = literal.parse().with_context(|| {
                format!("invalid colour '{literal}' for palette entry '{name}'")
            })?;
            descriptor.palette.insert(name, colour);
        }

        if let Some(globs) = self.content.globs {
            let globs = sanitize_patterns(globs);
            if !globs.is_empty() {
                descriptor.content = ContentGlobs::new(globs);
            }
        }
        descriptor.content.compile()?;

        if let Some(plugins) = self.plugins {
            descriptor.plugins = sanitize_plugin_ids(plugins);
        }

        tracing::debug!(theme = %theme_name, "resolved configuration");

        Ok(ResolvedConfig {
            theme_name,
            descriptor,
            root,
            scan: cli.scan,
        })
    }
}
