use std::collections::HashSet;

use anyhow::{Result, anyhow, ensure};

/// Normalize and deduplicate glob patterns provided by the user, preserving
/// first-occurrence order.
pub(super) fn sanitize_patterns(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for value in values {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.clone()) {
            cleaned.push(trimmed);
        }
    }
    cleaned
}

/// Normalize and deduplicate plugin identifiers, preserving first-occurrence
/// order.
pub(super) fn sanitize_plugin_ids(values: Vec<String>) -> Vec<String> {
    sanitize_patterns(values)
}

/// Split a `NAME=COLOUR` palette assignment into its parts.
pub(super) fn parse_colour_assignment(value: &str) -> Result<(String, String)> {
    let (name, literal) = value
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=COLOUR, got '{value}'"))?;

    let name = name.trim();
    ensure!(!name.is_empty(), "palette entry name must not be empty");

    Ok((name.to_string(), literal.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_are_cleaned_and_deduplicated() {
        let cleaned = sanitize_patterns(vec![
            " src/**/*.ts ".into(),
            "src/**/*.ts".into(),
            "".into(),
            "src/**/*.html".into(),
        ]);
        assert_eq!(cleaned, vec!["src/**/*.ts", "src/**/*.html"]);
    }

    #[test]
    fn colour_assignments_split_on_the_first_equals() {
        let (name, literal) = parse_colour_assignment("primary=rgb(80, 116, 191)").expect("parse");
        assert_eq!(name, "primary");
        assert_eq!(literal, "rgb(80, 116, 191)");
    }

    #[test]
    fn colour_assignments_without_equals_are_rejected() {
        assert!(parse_colour_assignment("primary").is_err());
        assert!(parse_colour_assignment("=#FFFFFF").is_err());
    }
}
