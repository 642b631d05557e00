//! One-call tree generation from a `Config`

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{OutputFormat, format};
use crate::tree::build_tree;

/// Validate the config, build the tree and format it.
pub fn generate(config: &Config) -> Result<Vec<u8>> {
    config.validate()?;
    let root = build_tree(&config.build_options())?;
    format(Some(&root), &config.format)
}

/// Generate the tree and write it to the config's output path (with the
/// format extension appended if missing). Returns the path written.
pub fn generate_to_file(config: &Config) -> Result<PathBuf> {
    let output_path = config
        .format
        .resolved_output_path()
        .ok_or(Error::MissingOutputPath)?;
    let data = generate(config)?;
    fs::write(&output_path, data)?;
    tracing::info!(path = %output_path.display(), "tree written");
    Ok(output_path)
}

/// JSON tree of `path` down to `max_depth` (`-1` for unlimited), with the
/// default field exclusions.
pub fn generate_json(path: impl AsRef<Path>, max_depth: i64) -> Result<Vec<u8>> {
    let config = Config::builder()
        .with_path(path.as_ref())
        .with_max_depth(max_depth)
        .with_format(OutputFormat::Json)
        .build();
    generate(&config)
}

/// Text tree of `path` down to `max_depth` (`-1` for unlimited).
pub fn generate_text(path: impl AsRef<Path>, max_depth: i64) -> Result<String> {
    let config = Config::builder()
        .with_path(path.as_ref())
        .with_max_depth(max_depth)
        .with_format(OutputFormat::Txt)
        .build();
    let data = generate(&config)?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
