//! Configuration for markup serialization

/// Configuration options for serialized output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeConfig {
    /// Spaces per indentation level; zero is treated as one
    pub indent_width: usize,

    /// Whether to put each child on its own indented line
    pub pretty_print: bool,

    /// Whether to prepend an XML declaration
    pub standalone: bool,
}

impl Default for SerializeConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            pretty_print: true,
            standalone: false,
        }
    }
}

impl SerializeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per indentation level, at least one
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether output is a standalone document
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Single-line output with no indentation
    pub fn compact() -> Self {
        Self::default().with_pretty_print(false)
    }
}
