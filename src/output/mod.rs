//! Tree formatting and display
//!
//! This module turns a built tree into bytes in one of the supported formats:
//! - JSON and YAML via serde
//! - XML via a small indented writer
//! - plain text, optionally colored when printed to a terminal
//!
//! # Module Structure
//!
//! - `config` - Format selector, node fields and `FormatConfig`
//! - `projection` - Field-filtered view shared by the structured formats
//! - `json`, `yaml`, `xml` - Structured serializers
//! - `text` - Indented text rendering

mod config;
mod json;
mod projection;
mod text;
mod xml;
mod yaml;

pub use config::{FieldSet, FormatConfig, NodeField, OutputFormat};
pub use json::to_json;
pub use projection::Projection;
pub use text::TextFormatter;
pub use xml::to_xml;
pub use yaml::to_yaml;

use crate::error::Result;
use crate::tree::Node;

/// Format a tree with the given configuration.
///
/// A missing root is not an error: it formats as `null` for JSON/YAML and as
/// empty output for XML and text.
pub fn format(root: Option<&Node>, config: &FormatConfig) -> Result<Vec<u8>> {
    match config.format {
        OutputFormat::Json => to_json(root, config),
        OutputFormat::Yaml => to_yaml(root, config),
        OutputFormat::Xml => Ok(to_xml(root, config)),
        OutputFormat::Txt => Ok(TextFormatter::new(config).format(root).into_bytes()),
    }
}

/// Format a tree with a format named at runtime (`json`, `yaml`, `xml`,
/// `txt`). Unknown names fail with `Error::UnsupportedFormat`.
pub fn format_named(
    root: Option<&Node>,
    format_name: &str,
    config: &FormatConfig,
) -> Result<Vec<u8>> {
    let config = FormatConfig {
        format: format_name.parse()?,
        ..config.clone()
    };
    format(root, &config)
}
