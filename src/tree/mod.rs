//! Directory tree construction
//!
//! `TreeBuilder` walks a root path depth-first and returns an owned tree of
//! `Node`s. Along the way it applies:
//!
//! - a depth limit (root = 0; entries deeper than the limit get no node)
//! - path exclusion by regular expression, pruning whole subtrees
//! - type exclusion by file extension, checked after symlink resolution
//! - the symlink policy (record links as-is, or follow them)
//!
//! Filtered entries are simply absent. Only an unstatable root or an
//! unreadable directory produce an error, and then no tree is returned.

mod config;
mod filter;
mod node;
mod traversal;
mod utils;
mod walker;

pub use config::BuildOptions;
pub use filter::{PathFilter, TypeFilter};
pub use node::{Node, NodeType};
pub use utils::{extension_of, is_hidden};
pub use walker::{TreeBuilder, build_tree};
