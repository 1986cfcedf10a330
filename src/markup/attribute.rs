//! Attribute values and the per-element attribute map

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::path::PathData;
use crate::value::number::decimal;
use crate::value::{Length, Paint, Transform, TransformList, Url, ViewBox};

/// An attribute name that is a valid XML name, so it can be written unescaped
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrName(Cow<'static, str>);

impl AttrName {
    /// Validate `name` against the XML `Name` production
    pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into();
        if is_xml_name(&name) {
            Ok(Self(Cow::Owned(name)))
        } else {
            Err(ValueError::InvalidAttributeName(name))
        }
    }

    /// Fixed names written by the typed setters
    pub(crate) const fn known(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AttrName {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn is_name_start(c: char) -> bool {
    c == ':' || c == '_' || c.is_alphabetic()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_alphanumeric() || matches!(c, '-' | '.' | '\u{b7}')
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// Rendered text of one attribute, stored unescaped
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrValue(String);

impl AttrValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self(decimal(value))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self(if value { "true" } else { "false" }.to_string())
    }
}

impl From<Length> for AttrValue {
    fn from(value: Length) -> Self {
        Self(value.to_attribute())
    }
}

macro_rules! display_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

display_value!(Paint, Url, PathData, ViewBox, Transform, TransformList);

/// Winding rule for `fill-rule` and `clip-rule`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

/// Stroke end caps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Stroke corner joins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl From<FillRule> for AttrValue {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::NonZero => "nonzero".into(),
            FillRule::EvenOdd => "evenodd".into(),
        }
    }
}

impl From<LineCap> for AttrValue {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => "butt".into(),
            LineCap::Round => "round".into(),
            LineCap::Square => "square".into(),
        }
    }
}

impl From<LineJoin> for AttrValue {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Miter => "miter".into(),
            LineJoin::Round => "round".into(),
            LineJoin::Bevel => "bevel".into(),
        }
    }
}

/// Attributes keyed by name.
///
/// Iteration follows the order in which each name was first set. Setting an
/// existing name replaces its value in place. Equality compares the set of
/// pairs and ignores order.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(AttrName, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: AttrName, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(name, value)| other.get(name.as_str()) == Some(value))
    }
}

impl Eq for Attributes {}

/// Escape `&`, `<`, `>` and `"` for use inside a double-quoted attribute
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_keeps_first_position() {
        let mut attrs = Attributes::new();
        attrs.set(AttrName::known("class"), "a");
        attrs.set(AttrName::known("width"), Length::px(20.0));
        attrs.set(AttrName::known("class"), "b");

        let pairs: Vec<_> = attrs.iter().map(|(n, v)| (n, v.as_str())).collect();
        assert_eq!(pairs, vec![("class", "b"), ("width", "20")]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a = Attributes::new();
        a.set(AttrName::known("x"), 1.0);
        a.set(AttrName::known("y"), 2.0);
        let mut b = Attributes::new();
        b.set(AttrName::known("y"), 2.0);
        b.set(AttrName::known("x"), 1.0);
        assert_eq!(a, b);

        b.set(AttrName::known("x"), 3.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(AttrValue::from(true).as_str(), "true");
        assert_eq!(AttrValue::from(false).as_str(), "false");
        assert_eq!(AttrValue::from(0.25).as_str(), "0.25");
        assert_eq!(AttrValue::from(Length::percent(50.0)).as_str(), "50%");
        assert_eq!(AttrValue::from(Paint::hex(0x5865f2)).as_str(), "#5865f2");
        assert_eq!(AttrValue::from(Url::fragment("clip0")).as_str(), "url(#clip0)");
        assert_eq!(AttrValue::from(FillRule::EvenOdd).as_str(), "evenodd");
    }

    #[test]
    fn test_attribute_names_must_be_xml_names() {
        for name in ["fill", "clip-path", "xlink:href", "aria-hidden", "_x.1", "données"] {
            assert_eq!(AttrName::new(name).unwrap().as_str(), name);
        }
        for name in ["", "1x", "-a", "a b", "x=\"1\"", "on\"load", "a>b", "a&b", "a/b"] {
            assert_eq!(
                AttrName::new(name),
                Err(ValueError::InvalidAttributeName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
