mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::ManifestWorkflow;

fn main() -> Result<()> {
    tinct::logging::initialize();
    let cli = parse_cli();

    if cli.list_themes {
        for descriptor in tinct::theme::descriptors() {
            if descriptor.aliases.is_empty() {
                println!("{}", descriptor.name);
            } else {
                println!("{} ({})", descriptor.name, descriptor.aliases.join(", "));
            }
        }
        return Ok(());
    }

    if cli.list_plugins {
        let registry = tinct::builtin_registry();
        for descriptor in registry.descriptors() {
            println!("{:<12} {}", descriptor.id, descriptor.summary);
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_build(cli.output, resolved)
}

/// Resolve the manifest and print it in the chosen format.
fn run_build(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let manifest = ManifestWorkflow::from_config(settings).run()?;

    match format {
        OutputFormat::Plain => print_plain(&manifest),
        OutputFormat::Json => print_json(&manifest)?,
    }

    Ok(())
}
