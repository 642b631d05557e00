//! Path and file-type exclusion filters

use std::path::Path;

use regex::Regex;

use super::utils::extension_of;

/// Compiled path-exclusion patterns.
///
/// Patterns that fail to compile never match: a malformed pattern does not
/// abort the build, it just excludes nothing.
#[derive(Debug, Default)]
pub struct PathFilter {
    patterns: Vec<Regex>,
}

impl PathFilter {
    pub fn new(patterns: &[String]) -> Self {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            match Regex::new(pattern) {
                Ok(re) => compiled.push(re),
                Err(e) => {
                    tracing::warn!(%pattern, error = %e, "ignoring invalid exclude pattern");
                }
            }
        }
        Self { patterns: compiled }
    }

    /// Check if a path matches any exclusion pattern (unanchored search).
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path = path.to_string_lossy();
        self.patterns.iter().any(|re| re.is_match(&path))
    }
}

/// Lower-cased file extensions to leave out of the tree.
#[derive(Debug, Default)]
pub struct TypeFilter {
    extensions: Vec<String>,
}

impl TypeFilter {
    pub fn new(extensions: &[String]) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(|e| {
                let e = e.to_lowercase();
                if e.starts_with('.') { e } else { format!(".{}", e) }
            })
            .collect();
        Self { extensions }
    }

    /// Check if a file name carries an excluded extension.
    pub fn is_excluded(&self, name: &str) -> bool {
        match extension_of(name) {
            Some(ext) => {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_filter_matches() {
        let filter = PathFilter::new(&strings(&[".*test.*"]));
        assert!(filter.is_excluded(Path::new("/home/user/test")));
        assert!(!filter.is_excluded(Path::new("/home/user/docs")));
    }

    #[test]
    fn test_path_filter_multiple_patterns() {
        let filter = PathFilter::new(&strings(&[".*test.*", ".*temp.*"]));
        assert!(filter.is_excluded(Path::new("/home/user/temp")));
    }

    #[test]
    fn test_path_filter_is_unanchored() {
        let filter = PathFilter::new(&strings(&["node_modules"]));
        assert!(filter.is_excluded(Path::new("/src/app/node_modules/left-pad")));
    }

    #[test]
    fn test_invalid_pattern_fails_open() {
        // A malformed pattern is a non-match, not an error
        let filter = PathFilter::new(&strings(&["["]));
        assert!(!filter.is_excluded(Path::new("/home/user/test")));

        // Valid patterns next to it still apply
        let filter = PathFilter::new(&strings(&["[", "user"]));
        assert!(filter.is_excluded(Path::new("/home/user/test")));
    }

    #[test]
    fn test_empty_path_filter() {
        let filter = PathFilter::new(&[]);
        assert!(!filter.is_excluded(Path::new("/home/user/test")));
    }

    #[test]
    fn test_type_filter() {
        let filter = TypeFilter::new(&strings(&[".go", ".txt"]));
        assert!(filter.is_excluded("file.go"));
        assert!(!filter.is_excluded("file.py"));
        assert!(!filter.is_excluded("README"));
    }

    #[test]
    fn test_type_filter_case_insensitive() {
        assert!(TypeFilter::new(&strings(&[".go"])).is_excluded("file.GO"));
        assert!(TypeFilter::new(&strings(&[".GO"])).is_excluded("file.go"));
    }

    #[test]
    fn test_type_filter_uses_last_suffix() {
        let filter = TypeFilter::new(&strings(&[".gz"]));
        assert!(filter.is_excluded("archive.tar.gz"));
        assert!(!TypeFilter::new(&strings(&[".tar"])).is_excluded("archive.tar.gz"));
    }

    #[test]
    fn test_type_filter_normalizes_missing_dot() {
        let filter = TypeFilter::new(&strings(&["go", " ", ""]));
        assert!(filter.is_excluded("main.go"));
        assert!(!filter.is_excluded("go"));
    }

    #[test]
    fn test_empty_type_filter() {
        assert!(!TypeFilter::new(&[]).is_excluded("file.go"));
    }
}
