use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use tinct::app_dirs;
use tinct_plugin_api::DarkMode;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("tinct {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "tinct",
    version,
    long_version = long_version(),
    about = "Resolve and inspect utility-class theme configurations",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `tinct` binary.
pub(crate) struct CliArgs {
    /// Additional configuration files applied after the defaults, in order
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TINCT_CONFIG",
        action = ArgAction::Append
    )]
    pub(crate) config: Vec<PathBuf>,

    /// Skip the default configuration file locations
    #[arg(long)]
    pub(crate) no_config: bool,

    /// Directory content globs are resolved against (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub(crate) root: Option<PathBuf>,

    /// Theme preset to start from
    #[arg(short, long, value_name = "NAME")]
    pub(crate) theme: Option<String>,

    /// Dark-mode strategy ('media' or 'class-marker')
    #[arg(long, value_name = "STRATEGY")]
    pub(crate) dark_mode: Option<DarkMode>,

    /// Replace the content globs (repeatable)
    #[arg(long = "content", value_name = "GLOB", action = ArgAction::Append)]
    pub(crate) content: Option<Vec<String>>,

    /// Add or override a palette entry as NAME=COLOUR (repeatable)
    #[arg(long = "color", value_name = "NAME=COLOUR", action = ArgAction::Append)]
    pub(crate) colors: Option<Vec<String>>,

    /// Replace the plugin list (repeatable)
    #[arg(long = "plugin", value_name = "ID", action = ArgAction::Append)]
    pub(crate) plugins: Option<Vec<String>>,

    /// Walk the content root and report how many files the globs select
    #[arg(long)]
    pub(crate) scan: bool,

    /// Print the effective configuration before resolving
    #[arg(long)]
    pub(crate) print_config: bool,

    /// List registered themes and exit
    #[arg(long)]
    pub(crate) list_themes: bool,

    /// List available plugins and exit
    #[arg(long)]
    pub(crate) list_plugins: bool,

    /// Output format for the resolved manifest
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub(crate) output: OutputFormat,
}

/// Output format for the resolved manifest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_tokens_parse_from_the_command_line() {
        let cli = CliArgs::parse_from(["tinct", "--dark-mode", "class-marker"]);
        assert_eq!(cli.dark_mode, Some(DarkMode::ClassMarker));
    }

    #[test]
    fn repeated_flags_accumulate_in_order() {
        let cli = CliArgs::parse_from([
            "tinct", "--plugin", "typography", "--plugin", "forms", "--color", "primary=#5074BF",
        ]);
        assert_eq!(
            cli.plugins,
            Some(vec!["typography".to_string(), "forms".to_string()])
        );
        assert_eq!(cli.colors, Some(vec!["primary=#5074BF".to_string()]));
    }
}
