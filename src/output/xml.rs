//! XML output formatting
//!
//! The document mirrors the JSON structure: a `<node>` element per tree node
//! holding one element per included field, with child nodes wrapped in
//! `<children>`.

use crate::tree::Node;

use super::config::FormatConfig;
use super::projection::Projection;

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Serialize a tree as an indented XML document. A missing root produces
/// empty output.
pub fn to_xml(root: Option<&Node>, config: &FormatConfig) -> Vec<u8> {
    let Some(root) = root else {
        return Vec::new();
    };

    let projected = Projection::new(root, config.excluded_fields());
    let mut out = String::from(DECLARATION);
    XmlWriter {
        out: &mut out,
        indent: config.indent_or_default(),
    }
    .node(&projected, 0);
    out.into_bytes()
}

struct XmlWriter<'a> {
    out: &'a mut String,
    indent: usize,
}

impl XmlWriter<'_> {
    fn pad(&mut self, level: usize) {
        self.out
            .extend(std::iter::repeat_n(' ', level * self.indent));
    }

    fn node(&mut self, node: &Projection<'_>, level: usize) {
        self.pad(level);
        if node.is_empty() {
            self.out.push_str("<node/>\n");
            return;
        }
        self.out.push_str("<node>\n");

        let inner = level + 1;
        if let Some(name) = node.name {
            self.element(inner, "name", name);
        }
        if let Some(path) = &node.path {
            self.element(inner, "path", path);
        }
        if let Some(node_type) = node.node_type {
            self.element(inner, "type", node_type.as_str());
        }
        if let Some(size) = node.size {
            self.element(inner, "size", &size.to_string());
        }
        if let Some(children) = &node.children {
            self.pad(inner);
            self.out.push_str("<children>\n");
            for child in children {
                self.node(child, inner + 1);
            }
            self.pad(inner);
            self.out.push_str("</children>\n");
        }
        if let Some(hidden) = node.is_hidden {
            self.element(inner, "is_hidden", if hidden { "true" } else { "false" });
        }

        self.pad(level);
        self.out.push_str("</node>\n");
    }

    fn element(&mut self, level: usize, tag: &str, text: &str) {
        self.pad(level);
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        escape_into(&mut *self.out, text);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}
