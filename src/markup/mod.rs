//! Declarative markup tree and its serializer
//!
//! Elements are immutable values built from tag constructors and chained
//! setters, then written out by a [`Serializer`].

pub mod attribute;
pub mod config;
pub mod element;
pub mod serialize;
pub mod tag;

pub use attribute::{escape_xml, AttrName, AttrValue, Attributes, FillRule, LineCap, LineJoin};
pub use config::SerializeConfig;
pub use element::{
    circle, clip_path, defs, ellipse, g, line, path, r#use, rect, svg, Container, Element, Leaf,
    Node, SVG_NAMESPACE, XLINK_NAMESPACE,
};
pub use serialize::{Serializer, XML_DECLARATION};
pub use tag::{ContainerTag, LeafTag};
