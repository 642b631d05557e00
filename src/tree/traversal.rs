//! Per-build traversal state and the decisions the builder consults.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

use super::config::BuildOptions;
use super::filter::{PathFilter, TypeFilter};
use super::node::NodeType;

/// How an entry was classified after applying the symlink policy.
#[derive(Debug)]
pub struct Resolved {
    pub node_type: NodeType,
    pub size: u64,
    /// Directory to list instead of the entry's own path (followed links).
    pub target: Option<PathBuf>,
}

/// State owned by one build: borrowed options and filters, plus the
/// directories on the active descent path.
pub struct Traversal<'a> {
    pub options: &'a BuildOptions,
    path_filter: &'a PathFilter,
    type_filter: &'a TypeFilter,
    cancel: Option<&'a AtomicBool>,
    /// Canonical paths of the directories currently being expanded.
    /// Only tracked when following links; without links there are no cycles.
    active: Vec<PathBuf>,
}

impl<'a> Traversal<'a> {
    pub fn new(
        options: &'a BuildOptions,
        path_filter: &'a PathFilter,
        type_filter: &'a TypeFilter,
        cancel: Option<&'a AtomicBool>,
    ) -> Self {
        Self {
            options,
            path_filter,
            type_filter,
            cancel,
            active: Vec::new(),
        }
    }

    /// Entries deeper than the limit get no node at all.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.options.max_depth.is_some_and(|max| depth > max)
    }

    /// Directories at the limit are leaves and are not listed.
    pub fn can_expand(&self, depth: usize) -> bool {
        self.options.max_depth.is_none_or(|max| depth < max)
    }

    pub fn is_path_excluded(&self, path: &Path) -> bool {
        self.path_filter.is_excluded(path)
    }

    pub fn is_type_excluded(&self, name: &str) -> bool {
        self.type_filter.is_excluded(name)
    }

    pub fn check_cancelled(&self) -> Result<()> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    /// Classify an entry from its metadata, applying the symlink policy.
    pub fn resolve(&self, path: &Path, metadata: &Metadata) -> Resolved {
        if metadata.is_dir() {
            return Resolved {
                node_type: NodeType::Directory,
                size: 0,
                target: None,
            };
        }

        if !metadata.file_type().is_symlink() {
            return Resolved {
                node_type: NodeType::File,
                size: metadata.len(),
                target: None,
            };
        }

        let unresolved = Resolved {
            node_type: NodeType::Symlink,
            size: metadata.len(),
            target: None,
        };
        if !self.options.follow_links {
            return unresolved;
        }

        let target = match fs::canonicalize(path) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unresolvable symlink");
                return unresolved;
            }
        };
        match fs::metadata(&target) {
            Ok(target_meta) if target_meta.is_dir() => Resolved {
                node_type: NodeType::Directory,
                size: 0,
                target: Some(target),
            },
            Ok(target_meta) => Resolved {
                node_type: NodeType::File,
                size: target_meta.len(),
                target: None,
            },
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "symlink target not statable");
                unresolved
            }
        }
    }

    /// A symlink is listed alongside directories when `include_files` is off
    /// only if it is followed to a directory. This intentionally differs from
    /// an lstat-only check, which would drop followed directory links too.
    pub fn counts_as_directory(&self, path: &Path, metadata: &Metadata) -> bool {
        if metadata.is_dir() {
            return true;
        }
        self.options.follow_links
            && metadata.file_type().is_symlink()
            && fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    /// Push a directory onto the active descent path.
    ///
    /// Returns `false` when the directory is already being expanded further
    /// up, which means a symlink led back into one of its ancestors.
    pub fn enter_dir(&mut self, listing_dir: &Path) -> bool {
        if !self.options.follow_links {
            return true;
        }
        let canonical =
            fs::canonicalize(listing_dir).unwrap_or_else(|_| listing_dir.to_path_buf());
        if self.active.contains(&canonical) {
            return false;
        }
        self.active.push(canonical);
        true
    }

    pub fn leave_dir(&mut self) {
        if self.options.follow_links {
            self.active.pop();
        }
    }
}
