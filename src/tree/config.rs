//! Options for a single tree build

use std::path::PathBuf;

/// Configuration for one `build_tree` call.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub path: PathBuf,
    /// Deepest level that still gets a node. The root is level 0.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Regular expressions tested against each descendant's full path.
    pub exclude_paths: Vec<String>,
    /// File extensions to leave out, compared case-insensitively.
    pub exclude_types: Vec<String>,
    pub include_files: bool,
    pub follow_links: bool,
}

impl BuildOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            max_depth: None,
            exclude_paths: Vec::new(),
            exclude_types: Vec::new(),
            include_files: true,
            follow_links: false,
        }
    }
}
