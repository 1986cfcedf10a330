//! Element tree to markup text

use super::attribute::{escape_xml, Attributes};
use super::config::SerializeConfig;
use super::element::{Container, Element, Node};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Writes element trees as indented markup
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    config: SerializeConfig,
}

impl Serializer {
    pub fn new(config: SerializeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializeConfig {
        &self.config
    }

    /// Render `node` with its opening line at indentation level `indent`.
    ///
    /// Each child starts on its own line one level deeper than its parent.
    /// The result has no trailing newline.
    pub fn render(&self, node: &Node, indent: usize) -> String {
        let mut out = self.prologue();
        self.write_node(&mut out, node, indent);
        out
    }

    /// Same as [`Serializer::render`] for a container held by reference
    pub fn render_container(&self, container: &Container, indent: usize) -> String {
        let mut out = self.prologue();
        self.write_element(
            &mut out,
            container.tag().as_str(),
            container.attributes(),
            Some(container.children()),
            indent,
        );
        out
    }

    fn prologue(&self) -> String {
        let mut out = String::new();
        if self.config.standalone {
            out.push_str(XML_DECLARATION);
            out.push_str(self.newline());
        }
        out
    }

    fn write_node(&self, out: &mut String, node: &Node, level: usize) {
        let children = match node {
            Node::Leaf(_) => None,
            Node::Container(container) => Some(container.children()),
        };
        self.write_element(out, node.tag_name(), node.attributes(), children, level);
    }

    fn write_element(
        &self,
        out: &mut String,
        tag: &str,
        attributes: &Attributes,
        children: Option<&[Node]>,
        level: usize,
    ) {
        out.push_str(&self.indent_str(level));
        out.push('<');
        out.push_str(tag);
        for (name, value) in attributes.iter() {
            out.push_str(&format!(r#" {}="{}""#, name, escape_xml(value.as_str())));
        }

        let children = match children {
            None => {
                out.push_str("/>");
                return;
            }
            Some(children) => children,
        };

        out.push('>');
        for child in children {
            out.push_str(self.newline());
            self.write_node(out, child, level + 1);
        }
        if !children.is_empty() {
            out.push_str(self.newline());
            out.push_str(&self.indent_str(level));
        }
        out.push_str(&format!("</{}>", tag));
    }

    fn indent_str(&self, level: usize) -> String {
        if self.config.pretty_print {
            " ".repeat(self.config.indent_width.max(1) * level)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }
}
