//! JSON output formatting

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::tree::Node;

use super::config::FormatConfig;
use super::projection::Projection;

/// Serialize a tree as JSON. An indent of 0 gives compact output; a missing
/// root serializes as `null`.
pub fn to_json(root: Option<&Node>, config: &FormatConfig) -> Result<Vec<u8>> {
    let projected = root.map(|node| Projection::new(node, config.excluded_fields()));

    if config.indent == 0 {
        return Ok(serde_json::to_vec(&projected)?);
    }

    let indent = " ".repeat(config.indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    projected.serialize(&mut ser)?;
    Ok(buf)
}
