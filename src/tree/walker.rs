//! TreeBuilder - walks a directory depth-first and builds the node tree

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::error::{Error, Result};

use super::config::BuildOptions;
use super::filter::{PathFilter, TypeFilter};
use super::node::{Node, NodeType};
use super::traversal::Traversal;
use super::utils::{entry_name, is_hidden};

/// Build a tree with the given options.
pub fn build_tree(options: &BuildOptions) -> Result<Node> {
    TreeBuilder::new(options.clone()).build()
}

/// Tree builder holding compiled filters for repeated builds.
///
/// Entries filtered out by depth, path or type are omitted silently. Only
/// an unstatable root or an unreadable directory abort the build.
pub struct TreeBuilder {
    options: BuildOptions,
    path_filter: PathFilter,
    type_filter: TypeFilter,
    cancel: Option<Arc<AtomicBool>>,
}

impl TreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        let path_filter = PathFilter::new(&options.exclude_paths);
        let type_filter = TypeFilter::new(&options.exclude_types);
        Self {
            options,
            path_filter,
            type_filter,
            cancel: None,
        }
    }

    /// Abort with `Error::Cancelled` once `flag` is set. Checked before each
    /// directory is listed.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn build(&self) -> Result<Node> {
        let root = &self.options.path;
        let _span = tracing::debug_span!("build_tree", root = %root.display()).entered();

        let metadata = fs::metadata(root).map_err(|source| Error::Access {
            path: root.clone(),
            source,
        })?;

        let mut traversal = Traversal::new(
            &self.options,
            &self.path_filter,
            &self.type_filter,
            self.cancel.as_deref(),
        );
        let node = self.build_node(&mut traversal, root.clone(), &metadata, 0)?;
        Ok(node)
    }

    /// Visit a descendant, returning `None` when a rule omits it.
    fn visit(
        &self,
        traversal: &mut Traversal<'_>,
        path: PathBuf,
        metadata: &Metadata,
        depth: usize,
    ) -> Result<Option<Node>> {
        if traversal.beyond_max_depth(depth) {
            return Ok(None);
        }
        if traversal.is_path_excluded(&path) {
            tracing::trace!(path = %path.display(), "excluded by path pattern");
            return Ok(None);
        }

        let resolved = traversal.resolve(&path, metadata);
        let name = entry_name(&path);
        if resolved.node_type == NodeType::File && traversal.is_type_excluded(&name) {
            tracing::trace!(path = %path.display(), "excluded by file type");
            return Ok(None);
        }

        let mut node = Node {
            is_hidden: is_hidden(&name),
            name,
            path,
            node_type: resolved.node_type,
            size: resolved.size,
            children: Vec::new(),
        };

        if node.node_type != NodeType::Directory || !traversal.can_expand(depth) {
            return Ok(Some(node));
        }

        let listing_dir = resolved.target.unwrap_or_else(|| node.path.clone());
        match self.expand(traversal, &node.path, &listing_dir, depth)? {
            Some(children) => node.children = children,
            None => return Ok(None),
        }
        Ok(Some(node))
    }

    /// The root is always kept: filters only apply below it.
    fn build_node(
        &self,
        traversal: &mut Traversal<'_>,
        path: PathBuf,
        metadata: &Metadata,
        depth: usize,
    ) -> Result<Node> {
        let resolved = traversal.resolve(&path, metadata);
        let name = entry_name(&path);
        let mut node = Node {
            is_hidden: is_hidden(&name),
            name,
            path,
            node_type: resolved.node_type,
            size: resolved.size,
            children: Vec::new(),
        };

        if node.node_type == NodeType::Directory && traversal.can_expand(depth) {
            let listing_dir = resolved.target.unwrap_or_else(|| node.path.clone());
            node.children = self
                .expand(traversal, &node.path, &listing_dir, depth)?
                .unwrap_or_default();
        }
        Ok(node)
    }

    /// List a directory's children. `None` means the directory is already on
    /// the active descent path (a symlink cycle) and must be omitted.
    fn expand(
        &self,
        traversal: &mut Traversal<'_>,
        dir_path: &Path,
        listing_dir: &Path,
        depth: usize,
    ) -> Result<Option<Vec<Node>>> {
        traversal.check_cancelled()?;

        if !traversal.enter_dir(listing_dir) {
            tracing::debug!(
                path = %dir_path.display(),
                target = %listing_dir.display(),
                "skipping symlink cycle"
            );
            return Ok(None);
        }
        let children = self.read_children(traversal, dir_path, listing_dir, depth);
        traversal.leave_dir();
        children.map(Some)
    }

    fn read_children(
        &self,
        traversal: &mut Traversal<'_>,
        dir_path: &Path,
        listing_dir: &Path,
        depth: usize,
    ) -> Result<Vec<Node>> {
        let read_error = |source: io::Error| Error::DirectoryRead {
            path: listing_dir.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(listing_dir)
            .map_err(read_error)?
            .collect::<io::Result<Vec<_>>>()
            .map_err(read_error)?;
        entries.sort_by_key(|e| e.file_name());

        let mut children = Vec::new();
        for entry in entries {
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!(
                        path = %entry.path().display(),
                        error = %e,
                        "skipping entry with unreadable metadata"
                    );
                    continue;
                }
            };

            let child_path = dir_path.join(entry.file_name());
            if !traversal.options.include_files
                && !traversal.counts_as_directory(&child_path, &metadata)
            {
                continue;
            }

            if let Some(child) = self.visit(traversal, child_path, &metadata, depth + 1)? {
                children.push(child);
            }
        }
        Ok(children)
    }
}
