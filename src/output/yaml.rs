//! YAML output formatting

use crate::error::Result;
use crate::tree::Node;

use super::config::FormatConfig;
use super::projection::Projection;

/// Serialize a tree as YAML. A missing root serializes as `null`.
pub fn to_yaml(root: Option<&Node>, config: &FormatConfig) -> Result<Vec<u8>> {
    let projected = root.map(|node| Projection::new(node, config.excluded_fields()));
    Ok(serde_yaml::to_string(&projected)?.into_bytes())
}
