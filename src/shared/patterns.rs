//! Pattern matching utilities
//!
//! Glob matching for file paths, used by plugins that filter or reject by
//! file name.

use anyhow::Result;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compile a list of glob patterns into one matcher.
///
/// `*` and `?` do not cross path separators; `**` does.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(pattern).literal_separator(true).build()?);
    }
    Ok(builder.build()?)
}

/// Whether a path matches any of the compiled patterns
pub fn matches_any(globs: &GlobSet, path: impl AsRef<Path>) -> bool {
    globs.is_match(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        let globs = build_globset(&["**/*.rs".to_string(), "*.js".to_string()]).unwrap();
        assert!(matches_any(&globs, "src/main.rs"));
        assert!(matches_any(&globs, "lib/utils/mod.rs"));
        assert!(matches_any(&globs, "index.js"));
        assert!(!matches_any(&globs, "Cargo.toml"));
        assert!(!matches_any(&globs, "src/index.js"));
    }

    #[test]
    fn test_empty_pattern_list_matches_nothing() {
        let globs = build_globset(&[]).unwrap();
        assert!(!matches_any(&globs, "anything"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(build_globset(&["a[".to_string()]).is_err());
    }
}
