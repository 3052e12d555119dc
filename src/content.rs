//! Content glob handling: which source files a build scans for class usage.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while compiling or applying content globs.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A configured pattern is not a syntactically valid glob.
    #[error("malformed content glob '{pattern}': {source}")]
    MalformedGlob {
        pattern: String,
        source: globset::Error,
    },
}

/// Ordered glob patterns identifying class-bearing source files.
///
/// Order is preserved for display purposes only; matching semantics do not
/// depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentGlobs {
    patterns: Vec<String>,
}

impl ContentGlobs {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Compile the patterns into a matcher, reporting the first offending
    /// pattern on failure.
    pub fn compile(&self) -> Result<GlobSet, ContentError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.patterns {
            let glob = Glob::new(pattern).map_err(|source| ContentError::MalformedGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ContentError::MalformedGlob {
            pattern: source
                .glob()
                .map(ToString::to_string)
                .unwrap_or_default(),
            source,
        })
    }

    /// Whether some pattern matches files carrying the given extension.
    ///
    /// Probes a handful of representative paths rather than parsing the
    /// pattern syntax; malformed patterns simply never match.
    #[must_use]
    pub fn covers_extension(&self, extension: &str) -> bool {
        let ext = extension.trim_start_matches('.');
        let Ok(set) = self.compile() else {
            return false;
        };

        let candidates = [
            format!("probe.{ext}"),
            format!("src/probe.{ext}"),
            format!("src/pages/nested/probe.{ext}"),
        ];
        candidates
            .iter()
            .any(|candidate| set.is_match(Path::new(candidate)))
    }

    /// Walk `root` and return the sorted relative paths the globs select.
    ///
    /// Ignore files are respected, matching how a consuming generator would
    /// discover sources.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ContentError> {
        let set = self.compile()?;
        let mut matched = Vec::new();

        for entry in WalkBuilder::new(root).build().filter_map(Result::ok) {
            if !entry.file_type().is_some_and(|kind| kind.is_file()) {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if set.is_match(relative) {
                matched.push(relative.to_path_buf());
            }
        }

        matched.sort();
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_globs() -> ContentGlobs {
        ContentGlobs::new(["src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}"])
    }

    #[test]
    fn brace_alternates_cover_each_listed_extension() {
        let globs = site_globs();
        assert!(globs.covers_extension("html"));
        assert!(globs.covers_extension("ts"));
        assert!(globs.covers_extension(".mdx"));
        assert!(!globs.covers_extension("py"));
    }

    #[test]
    fn malformed_patterns_name_the_offender() {
        let globs = ContentGlobs::new(["src/**/*.{html", "src/**/*.ts"]);
        let error = globs.compile().expect_err("malformed");
        let ContentError::MalformedGlob { pattern, .. } = error;
        assert_eq!(pattern, "src/**/*.{html");
    }

    #[test]
    fn scan_returns_sorted_relative_matches() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        fs::create_dir_all(root.join("src/pages")).expect("mkdir");
        fs::write(root.join("src/index.html"), "<html>").expect("write");
        fs::write(root.join("src/pages/about.ts"), "export {}").expect("write");
        fs::write(root.join("src/build.log"), "noise").expect("write");
        fs::write(root.join("README.md"), "outside src").expect("write");

        let matched = site_globs().scan(root).expect("scan");
        assert_eq!(
            matched,
            vec![
                PathBuf::from("src/index.html"),
                PathBuf::from("src/pages/about.ts"),
            ]
        );
    }
}
