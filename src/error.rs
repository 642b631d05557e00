//! Error types shared by the tree builder, formatters and configuration

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building, formatting or configuring a tree.
///
/// Entries omitted by depth, path or type rules are not errors: the builder
/// signals them with `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// The root path could not be stat'ed.
    #[error("error accessing path {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory that had to be expanded could not be listed.
    #[error("error reading directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("unknown node field: {0}")]
    UnknownField(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("error reading config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("output path is required for file generation")]
    MissingOutputPath,

    #[error("tree build cancelled")]
    Cancelled,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
