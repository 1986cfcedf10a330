//! Tag names, split by whether the element may hold children

use std::fmt;

/// Tags that open and close around an ordered list of children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerTag {
    Svg,
    G,
    Defs,
    ClipPath,
}

impl ContainerTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerTag::Svg => "svg",
            ContainerTag::G => "g",
            ContainerTag::Defs => "defs",
            ContainerTag::ClipPath => "clipPath",
        }
    }
}

/// Tags that always render as a single self-closing element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafTag {
    Path,
    Circle,
    Ellipse,
    Line,
    Rect,
    Use,
}

impl LeafTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeafTag::Path => "path",
            LeafTag::Circle => "circle",
            LeafTag::Ellipse => "ellipse",
            LeafTag::Line => "line",
            LeafTag::Rect => "rect",
            LeafTag::Use => "use",
        }
    }
}

impl fmt::Display for ContainerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LeafTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_path_keeps_camel_case() {
        assert_eq!(ContainerTag::ClipPath.to_string(), "clipPath");
        assert_eq!(LeafTag::Use.as_str(), "use");
    }
}
