//! Configuration for generating a directory tree
//!
//! `Config` bundles the traversal options with the output settings. It can be
//! assembled with `ConfigBuilder`, loaded from a JSON, YAML or TOML file, or
//! filled from command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::{FormatConfig, NodeField, OutputFormat};
use crate::tree::BuildOptions;

/// Max depth meaning "no limit".
pub const UNLIMITED_DEPTH: i64 = -1;

const DEFAULT_MAX_DEPTH: i64 = 1;
const DEFAULT_EXCLUDED_FIELDS: [NodeField; 4] = [
    NodeField::Size,
    NodeField::IsHidden,
    NodeField::Type,
    NodeField::Path,
];

/// All options for tree generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub path: PathBuf,
    /// File extensions to exclude (e.g. `[".tmp", ".log"]`)
    pub exclude_types: Vec<String>,
    /// Path patterns to exclude (regular expressions)
    pub exclude_paths: Vec<String>,
    /// Whether to include files or only directories
    pub include_files: bool,
    /// Maximum traversal depth, `-1` for unlimited
    pub max_depth: i64,
    pub follow_links: bool,
    pub format: FormatConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            exclude_types: Vec::new(),
            exclude_paths: Vec::new(),
            include_files: true,
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: false,
            format: FormatConfig {
                format: OutputFormat::Json,
                output_path: None,
                indent: 2,
                exclude_node_fields: DEFAULT_EXCLUDED_FIELDS.to_vec(),
            },
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load a config file. The format follows the extension: `.json`,
    /// `.yaml`/`.yml` or `.toml`. Keys missing from the file keep their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        };

        let config: Config = match ext.as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            other => {
                return Err(parse_error(format!(
                    "unsupported config file type '{}' (expected json, yaml, yml or toml)",
                    other
                )));
            }
        };
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Check the configuration for values the builder cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("path cannot be empty".to_string()));
        }
        if self.max_depth < UNLIMITED_DEPTH {
            return Err(Error::InvalidConfig(
                "max depth cannot be less than -1".to_string(),
            ));
        }
        Ok(())
    }

    /// Traversal options for this configuration.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            path: self.path.clone(),
            max_depth: usize::try_from(self.max_depth).ok(),
            exclude_paths: self.exclude_paths.clone(),
            exclude_types: self.exclude_types.clone(),
            include_files: self.include_files,
            follow_links: self.follow_links,
        }
    }
}

/// Fluent builder for `Config`, starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: i64) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn with_include_files(mut self, include_files: bool) -> Self {
        self.config.include_files = include_files;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.config.follow_links = follow_links;
        self
    }

    pub fn with_exclude_paths(mut self, exclude_paths: Vec<String>) -> Self {
        self.config.exclude_paths = exclude_paths;
        self
    }

    pub fn with_exclude_types(mut self, exclude_types: Vec<String>) -> Self {
        self.config.exclude_types = exclude_types;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.config.format.format = format;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.config.format.output_path = Some(output_path.into());
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.config.format.indent = indent;
        self
    }

    pub fn with_exclude_node_fields(mut self, fields: Vec<NodeField>) -> Self {
        self.config.format.exclude_node_fields = fields;
        self
    }

    pub fn add_exclude_path(mut self, pattern: impl Into<String>) -> Self {
        self.config.exclude_paths.push(pattern.into());
        self
    }

    pub fn add_exclude_type(mut self, extension: impl Into<String>) -> Self {
        self.config.exclude_types.push(extension.into());
        self
    }

    pub fn add_exclude_node_field(mut self, field: NodeField) -> Self {
        self.config.format.exclude_node_fields.push(field);
        self
    }

    /// Return the configuration built so far. The builder stays usable and
    /// later changes do not affect configs already returned.
    pub fn build(&self) -> Config {
        self.config.clone()
    }
}

/// Split a comma-separated flag value, trimming items and dropping empties.
pub fn parse_comma_separated(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a comma-separated list of node field names.
pub fn parse_node_fields(input: &str) -> Result<Vec<NodeField>> {
    parse_comma_separated(input)
        .iter()
        .map(|name| name.parse())
        .collect()
}
