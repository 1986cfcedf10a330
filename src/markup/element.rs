//! Immutable element values and their chainable setters
//!
//! Leaves and containers are distinct types: only [`Container`] has a child
//! API, so a leaf holding children cannot be expressed. Every setter takes
//! the element by value and returns the updated element; clone a shared base
//! to derive variants from it.

use crate::error::ValueError;
use crate::path::PathData;
use crate::value::{Length, Paint, TransformList, Url, ViewBox};

use super::attribute::{AttrName, AttrValue, Attributes, FillRule, LineCap, LineJoin};
use super::config::SerializeConfig;
use super::serialize::Serializer;
use super::tag::{ContainerTag, LeafTag};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Setters shared by every element kind
pub trait Element: Sized {
    fn attributes(&self) -> &Attributes;

    /// Return this element with `name` set to `value`, replacing any earlier value
    fn with_attr(self, name: AttrName, value: impl Into<AttrValue>) -> Self;

    /// Set an attribute by name, rejecting names that are not XML names
    fn attr(self, name: &str, value: impl Into<AttrValue>) -> Result<Self, ValueError> {
        Ok(self.with_attr(AttrName::new(name)?, value))
    }

    fn id(self, id: impl Into<String>) -> Self {
        self.with_attr(AttrName::known("id"), id.into())
    }

    fn class(self, class: impl Into<String>) -> Self {
        self.with_attr(AttrName::known("class"), class.into())
    }

    fn width(self, width: Length) -> Self {
        self.with_attr(AttrName::known("width"), width)
    }

    fn height(self, height: Length) -> Self {
        self.with_attr(AttrName::known("height"), height)
    }

    fn fill(self, paint: Paint) -> Self {
        self.with_attr(AttrName::known("fill"), paint)
    }

    fn fill_rule(self, rule: FillRule) -> Self {
        self.with_attr(AttrName::known("fill-rule"), rule)
    }

    fn clip_rule(self, rule: FillRule) -> Self {
        self.with_attr(AttrName::known("clip-rule"), rule)
    }

    fn clip_path(self, url: Url) -> Self {
        self.with_attr(AttrName::known("clip-path"), url)
    }

    fn stroke(self, paint: Paint) -> Self {
        self.with_attr(AttrName::known("stroke"), paint)
    }

    fn stroke_width(self, width: f64) -> Self {
        self.with_attr(AttrName::known("stroke-width"), width)
    }

    fn stroke_linecap(self, cap: LineCap) -> Self {
        self.with_attr(AttrName::known("stroke-linecap"), cap)
    }

    fn stroke_linejoin(self, join: LineJoin) -> Self {
        self.with_attr(AttrName::known("stroke-linejoin"), join)
    }

    fn opacity(self, opacity: f64) -> Self {
        self.with_attr(AttrName::known("opacity"), opacity)
    }

    fn transform(self, transform: impl Into<TransformList>) -> Self {
        self.with_attr(AttrName::known("transform"), transform.into())
    }

    fn aria_hidden(self, hidden: bool) -> Self {
        self.with_attr(AttrName::known("aria-hidden"), hidden)
    }

    fn aria_label(self, label: impl Into<String>) -> Self {
        self.with_attr(AttrName::known("aria-label"), label.into())
    }

    fn role(self, role: impl Into<String>) -> Self {
        self.with_attr(AttrName::known("role"), role.into())
    }
}

/// A childless element such as `path` or `circle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: LeafTag,
    attributes: Attributes,
}

/// An element that encloses an ordered list of children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    tag: ContainerTag,
    attributes: Attributes,
    children: Vec<Node>,
}

/// Any element in a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Container(Container),
}

impl Element for Leaf {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn with_attr(mut self, name: AttrName, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl Element for Container {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn with_attr(mut self, name: AttrName, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl Leaf {
    pub fn new(tag: LeafTag) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
        }
    }

    pub fn tag(&self) -> LeafTag {
        self.tag
    }

    pub fn d(self, data: PathData) -> Self {
        self.with_attr(AttrName::known("d"), data)
    }

    pub fn cx(self, cx: f64) -> Self {
        self.with_attr(AttrName::known("cx"), cx)
    }

    pub fn cy(self, cy: f64) -> Self {
        self.with_attr(AttrName::known("cy"), cy)
    }

    pub fn r(self, r: f64) -> Self {
        self.with_attr(AttrName::known("r"), r)
    }

    pub fn rx(self, rx: f64) -> Self {
        self.with_attr(AttrName::known("rx"), rx)
    }

    pub fn ry(self, ry: f64) -> Self {
        self.with_attr(AttrName::known("ry"), ry)
    }

    pub fn x(self, x: f64) -> Self {
        self.with_attr(AttrName::known("x"), x)
    }

    pub fn y(self, y: f64) -> Self {
        self.with_attr(AttrName::known("y"), y)
    }

    pub fn x1(self, x1: f64) -> Self {
        self.with_attr(AttrName::known("x1"), x1)
    }

    pub fn y1(self, y1: f64) -> Self {
        self.with_attr(AttrName::known("y1"), y1)
    }

    pub fn x2(self, x2: f64) -> Self {
        self.with_attr(AttrName::known("x2"), x2)
    }

    pub fn y2(self, y2: f64) -> Self {
        self.with_attr(AttrName::known("y2"), y2)
    }

    /// Reference another element by id, written as `xlink:href="#id"`
    pub fn href(self, target: &Url) -> Self {
        self.with_attr(AttrName::known("xlink:href"), format!("#{}", target.id()))
    }

    pub fn render(&self, indent: usize) -> String {
        Serializer::new(SerializeConfig::default()).render(&Node::Leaf(self.clone()), indent)
    }
}

impl Container {
    pub fn new(tag: ContainerTag) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> ContainerTag {
        self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn view_box(self, view_box: ViewBox) -> Self {
        self.with_attr(AttrName::known("viewBox"), view_box)
    }

    /// Declare the SVG namespace
    pub fn xmlns(self) -> Self {
        self.with_attr(AttrName::known("xmlns"), SVG_NAMESPACE)
    }

    /// Declare the XLink namespace used by `xlink:href`
    pub fn xmlns_xlink(self) -> Self {
        self.with_attr(AttrName::known("xmlns:xlink"), XLINK_NAMESPACE)
    }

    /// Append one child after any existing children
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children in iteration order
    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn render(&self, indent: usize) -> String {
        Serializer::new(SerializeConfig::default()).render_container(self, indent)
    }
}

impl Node {
    pub fn tag_name(&self) -> &'static str {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_str(),
            Node::Container(container) => container.tag.as_str(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attributes,
            Node::Container(container) => &container.attributes,
        }
    }

    /// Children in paint order; always empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Container(container) => &container.children,
        }
    }

    pub fn render(&self, indent: usize) -> String {
        Serializer::new(SerializeConfig::default()).render(self, indent)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

pub fn svg() -> Container {
    Container::new(ContainerTag::Svg)
}

pub fn g() -> Container {
    Container::new(ContainerTag::G)
}

pub fn defs() -> Container {
    Container::new(ContainerTag::Defs)
}

pub fn clip_path() -> Container {
    Container::new(ContainerTag::ClipPath)
}

pub fn path() -> Leaf {
    Leaf::new(LeafTag::Path)
}

pub fn circle() -> Leaf {
    Leaf::new(LeafTag::Circle)
}

pub fn ellipse() -> Leaf {
    Leaf::new(LeafTag::Ellipse)
}

pub fn line() -> Leaf {
    Leaf::new(LeafTag::Line)
}

pub fn rect() -> Leaf {
    Leaf::new(LeafTag::Rect)
}

pub fn r#use() -> Leaf {
    Leaf::new(LeafTag::Use)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Transform;

    #[test]
    fn test_setters_do_not_touch_shared_base() {
        let base = path().fill(Paint::CurrentColor);
        let red = base.clone().fill(Paint::keyword("red"));

        assert_eq!(base.attributes().get("fill").unwrap().as_str(), "currentColor");
        assert_eq!(red.attributes().get("fill").unwrap().as_str(), "red");
        assert_eq!(red.attributes().len(), 1);
    }

    #[test]
    fn test_equality_ignores_attribute_order() {
        let a = circle().cx(10.0).cy(10.0).r(8.0);
        let b = circle().r(8.0).cy(10.0).cx(10.0);
        assert_eq!(a, b);
        assert_ne!(a, rect().cx(10.0).cy(10.0).r(8.0));
    }

    #[test]
    fn test_children_keep_call_order() {
        let group = g()
            .child(rect().width(Length::px(4.0)))
            .with_children([circle().r(1.0), path().d(PathData::new().move_to(0.0, 0.0))]);

        let tags: Vec<_> = group.children().iter().map(Node::tag_name).collect();
        assert_eq!(tags, vec!["rect", "circle", "path"]);
    }

    #[test]
    fn test_namespaces_and_href() {
        let root = svg().xmlns().xmlns_xlink();
        assert_eq!(root.attributes().get("xmlns").unwrap().as_str(), SVG_NAMESPACE);
        assert_eq!(root.attributes().get("xmlns:xlink").unwrap().as_str(), XLINK_NAMESPACE);

        let reference = r#use().href(&Url::fragment("star-shape"));
        assert_eq!(
            reference.attributes().get("xlink:href").unwrap().as_str(),
            "#star-shape"
        );
    }

    #[test]
    fn test_generic_attr_checks_name() {
        let leaf = path().attr("data-glyph", "close").unwrap();
        assert_eq!(leaf.attributes().get("data-glyph").unwrap().as_str(), "close");

        let err = path().attr(r#"x="1" onload="alert(1)"#, "v").unwrap_err();
        assert!(matches!(err, ValueError::InvalidAttributeName(_)));
        assert!(g().attr("a b", 1.0).is_err());
    }

    #[test]
    fn test_typed_setter_names_are_xml_names() {
        let leaf = r#use()
            .id("a")
            .class("b")
            .fill_rule(FillRule::EvenOdd)
            .stroke_linejoin(LineJoin::Bevel)
            .aria_label("c")
            .x1(0.0)
            .href(&Url::fragment("d"));
        let root = svg().view_box(ViewBox::square(4.0)).xmlns().xmlns_xlink();

        for (name, _) in leaf.attributes().iter().chain(root.attributes().iter()) {
            assert!(AttrName::new(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_shared_setters() {
        let group = g()
            .transform(Transform::translate(10.0, 10.0))
            .clip_path(Url::fragment("clip0"))
            .aria_hidden(true)
            .stroke_linecap(LineCap::Round);

        let rendered: Vec<_> = group
            .attributes()
            .iter()
            .map(|(n, v)| format!("{}={}", n, v))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "transform=translate(10 10)",
                "clip-path=url(#clip0)",
                "aria-hidden=true",
                "stroke-linecap=round",
            ]
        );
    }
}
