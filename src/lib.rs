//! dirtree - snapshot a directory tree as JSON, YAML, XML or plain text

pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use generate::{generate, generate_json, generate_text, generate_to_file};
pub use output::{FieldSet, FormatConfig, NodeField, OutputFormat, TextFormatter, format};
pub use tree::{BuildOptions, Node, NodeType, TreeBuilder, build_tree};
