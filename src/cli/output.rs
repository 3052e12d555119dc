use std::fmt::Write;

use anyhow::Result;
use tinct::ThemeManifest;
use tinct_plugin_api::StyleRule;

/// Print a plain-text representation of the resolved manifest.
pub(crate) fn print_plain(manifest: &ThemeManifest) {
    print!("{}", format_manifest_plain(manifest));
}

/// Format the resolved manifest as a JSON string.
pub(crate) fn format_manifest_json(manifest: &ThemeManifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Print the JSON representation of the resolved manifest.
pub(crate) fn print_json(manifest: &ThemeManifest) -> Result<()> {
    println!("{}", format_manifest_json(manifest)?);
    Ok(())
}

fn format_manifest_plain(manifest: &ThemeManifest) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Theme: {}",
        manifest.theme.as_deref().unwrap_or("(custom)")
    );
    match manifest.dark_mode.marker() {
        Some(marker) => {
            let _ = writeln!(out, "Dark mode: {} (marker: {marker})", manifest.dark_mode);
        }
        None => {
            let _ = writeln!(out, "Dark mode: {}", manifest.dark_mode);
        }
    }

    let _ = writeln!(out, "Palette:");
    for (name, colour) in manifest.palette.iter() {
        let _ = writeln!(out, "  {name:<12} {colour}");
    }

    if manifest.plugins.is_empty() {
        let _ = writeln!(out, "Plugins: (none)");
    } else {
        let _ = writeln!(out, "Plugins: {}", manifest.plugins.join(", "));
    }

    let _ = writeln!(out, "Content globs:");
    for glob in &manifest.content.globs {
        let _ = writeln!(out, "  {glob}");
    }
    if let Some(count) = manifest.content.matched_files {
        let _ = writeln!(out, "Matched files: {count}");
    }

    if !manifest.css.is_empty() {
        let _ = writeln!(out, "Overrides:");
        for (variant, rule) in manifest.css.iter() {
            let _ = writeln!(out, "  {variant}:");
            append_rule(&mut out, rule, 2);
        }
    }

    out
}

fn append_rule(out: &mut String, rule: &StyleRule, depth: usize) {
    let indent = "  ".repeat(depth);
    for (property, declaration) in rule.declarations() {
        let marker = if declaration.is_important() {
            " !important"
        } else {
            ""
        };
        let _ = writeln!(out, "{indent}{property}: {}{marker}", declaration.value());
    }
    for (selector, nested) in rule.rules() {
        let _ = writeln!(out, "{indent}{selector}:");
        append_rule(out, nested, depth + 1);
    }
}
