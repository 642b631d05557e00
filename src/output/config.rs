//! Output configuration types

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::Error;

const DEFAULT_INDENT: usize = 2;

/// Serialization format for a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Xml,
    Txt,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Xml,
        OutputFormat::Txt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Xml => "xml",
            OutputFormat::Txt => "txt",
        }
    }

    /// File extension for this format, dot included.
    pub fn extension(self) -> String {
        format!(".{}", self.as_str())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A node attribute that can be left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeField {
    Name,
    Path,
    Type,
    Size,
    IsHidden,
    Children,
}

impl NodeField {
    pub const ALL: [NodeField; 6] = [
        NodeField::Name,
        NodeField::Path,
        NodeField::Type,
        NodeField::Size,
        NodeField::IsHidden,
        NodeField::Children,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeField::Name => "name",
            NodeField::Path => "path",
            NodeField::Type => "type",
            NodeField::Size => "size",
            NodeField::IsHidden => "is_hidden",
            NodeField::Children => "children",
        }
    }

    fn flag(self) -> FieldSet {
        match self {
            NodeField::Name => FieldSet::NAME,
            NodeField::Path => FieldSet::PATH,
            NodeField::Type => FieldSet::TYPE,
            NodeField::Size => FieldSet::SIZE,
            NodeField::IsHidden => FieldSet::IS_HIDDEN,
            NodeField::Children => FieldSet::CHILDREN,
        }
    }
}

impl fmt::Display for NodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

bitflags! {
    /// Set of node fields excluded from the output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldSet: u8 {
        const NAME = 1 << 0;
        const PATH = 1 << 1;
        const TYPE = 1 << 2;
        const SIZE = 1 << 3;
        const IS_HIDDEN = 1 << 4;
        const CHILDREN = 1 << 5;
    }
}

impl FieldSet {
    pub fn has(self, field: NodeField) -> bool {
        self.contains(field.flag())
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        FieldSet::empty()
    }
}

impl FromIterator<NodeField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = NodeField>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FieldSet::empty(), |set, field| set | field.flag())
    }
}

/// Configuration for formatting a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    #[serde(rename = "type")]
    pub format: OutputFormat,
    /// Output file; `None` writes to stdout. The format's extension is
    /// appended when missing, see `resolved_output_path`.
    pub output_path: Option<PathBuf>,
    /// Indentation width for pretty output. JSON is compact when 0; XML and
    /// text fall back to the default width.
    pub indent: usize,
    pub exclude_node_fields: Vec<NodeField>,
}

impl FormatConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn excluded_fields(&self) -> FieldSet {
        self.exclude_node_fields.iter().copied().collect()
    }

    /// Indentation for formats that are always indented.
    pub fn indent_or_default(&self) -> usize {
        if self.indent == 0 {
            DEFAULT_INDENT
        } else {
            self.indent
        }
    }

    /// Output path with the format's extension appended if it is missing
    /// (compared case-insensitively). `None` means stdout.
    pub fn resolved_output_path(&self) -> Option<PathBuf> {
        let path = self.output_path.as_ref()?;
        if path.as_os_str().is_empty() {
            return None;
        }
        let ext = self.format.extension();
        if has_extension(&path.to_string_lossy(), &ext) {
            Some(path.clone())
        } else {
            let mut with_ext = path.clone().into_os_string();
            with_ext.push(&ext);
            Some(PathBuf::from(with_ext))
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            output_path: None,
            indent: DEFAULT_INDENT,
            exclude_node_fields: Vec::new(),
        }
    }
}

fn has_extension(path: &str, ext: &str) -> bool {
    path.len() >= ext.len()
        && path.is_char_boundary(path.len() - ext.len())
        && path[path.len() - ext.len()..].eq_ignore_ascii_case(ext)
}
