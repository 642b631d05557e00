//! Plain-text tree rendering
//!
//! One line per node, indented by depth, with a marker for the entry type.
//! `TextFormatter::format` produces the bytes written to files; `print`
//! renders the same lines to a terminal with colors.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Node, NodeType};

use super::config::{FieldSet, FormatConfig, NodeField};

/// Role of a piece of a rendered line, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Marker,
    Name(NodeType),
    Size,
    Hidden,
}

impl Style {
    fn spec(self, hidden: bool) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            Style::Marker => return None,
            Style::Name(NodeType::Directory) => {
                spec.set_fg(Some(Color::Blue)).set_bold(true);
            }
            Style::Name(NodeType::Symlink) => {
                spec.set_fg(Some(Color::Cyan));
            }
            Style::Name(NodeType::File) if !hidden => return None,
            Style::Name(NodeType::File) => {
                spec.set_dimmed(true);
            }
            Style::Size => {
                spec.set_fg(Some(Color::Green));
            }
            Style::Hidden => {
                spec.set_fg(Some(Color::Yellow)).set_dimmed(true);
            }
        }
        Some(spec)
    }
}

fn marker(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Directory => "📁",
        NodeType::File => "📄",
        NodeType::Symlink => "🔗",
    }
}

/// Formatter for the `txt` output format.
pub struct TextFormatter {
    excluded: FieldSet,
    indent: usize,
}

impl TextFormatter {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            excluded: config.excluded_fields(),
            indent: config.indent_or_default(),
        }
    }

    /// Render the tree as plain text. A missing root renders as nothing.
    pub fn format(&self, root: Option<&Node>) -> String {
        let mut output = String::new();
        if let Some(node) = root {
            self.format_node(node, 0, &mut output);
        }
        output
    }

    fn format_node(&self, node: &Node, level: usize, output: &mut String) {
        output.extend(std::iter::repeat_n(' ', level * self.indent));
        for (i, (text, _)) in self.segments(node).iter().enumerate() {
            if i > 0 {
                output.push(' ');
            }
            output.push_str(text);
        }
        output.push('\n');

        if !self.excluded.has(NodeField::Children) {
            for child in &node.children {
                self.format_node(child, level + 1, output);
            }
        }
    }

    /// Print the tree to stdout, colored when `use_color` is set and stdout
    /// supports it.
    pub fn print(&self, root: Option<&Node>, use_color: bool) -> io::Result<()> {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(root, &mut stdout)
    }

    /// Write the colored rendering to any color-capable writer.
    pub fn write_colored<W: WriteColor>(
        &self,
        root: Option<&Node>,
        out: &mut W,
    ) -> io::Result<()> {
        if let Some(node) = root {
            self.write_node(node, 0, out)?;
        }
        out.flush()
    }

    fn write_node<W: WriteColor>(
        &self,
        node: &Node,
        level: usize,
        out: &mut W,
    ) -> io::Result<()> {
        write!(out, "{:width$}", "", width = level * self.indent)?;
        for (i, (text, style)) in self.segments(node).iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            match style.spec(node.is_hidden) {
                Some(spec) => {
                    out.set_color(&spec)?;
                    write!(out, "{}", text)?;
                    out.reset()?;
                }
                None => write!(out, "{}", text)?,
            }
        }
        writeln!(out)?;

        if !self.excluded.has(NodeField::Children) {
            for child in &node.children {
                self.write_node(child, level + 1, out)?;
            }
        }
        Ok(())
    }

    /// Pieces of a node's line: marker, then name, size and hidden tag
    /// unless excluded.
    fn segments(&self, node: &Node) -> Vec<(String, Style)> {
        let mut segments = vec![(marker(node.node_type).to_string(), Style::Marker)];
        if !self.excluded.has(NodeField::Name) {
            segments.push((node.name.clone(), Style::Name(node.node_type)));
        }
        if !self.excluded.has(NodeField::Size)
            && node.node_type == NodeType::File
            && node.size > 0
        {
            segments.push((format!("({} bytes)", node.size), Style::Size));
        }
        if !self.excluded.has(NodeField::IsHidden) && node.is_hidden {
            segments.push(("[hidden]".to_string(), Style::Hidden));
        }
        segments
    }
}
