//! Paint values for `fill` and `stroke`

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// An sRGB color written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build from a packed `0xRRGGBB` value; the high byte is ignored
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            red: ((packed >> 16) & 0xff) as u8,
            green: ((packed >> 8) & 0xff) as u8,
            blue: (packed & 0xff) as u8,
        }
    }

    /// Parse `#rgb` or `#rrggbb`
    fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = digits
                    .chars()
                    .filter_map(|c| c.to_digit(16))
                    .map(|d| (d * 17) as u8);
                Some(Self::new(channels.next()?, channels.next()?, channels.next()?))
            }
            6 => {
                let packed = u32::from_str_radix(digits, 16).ok()?;
                Some(Self::from_u32(packed))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// A local IRI reference, written `url(#id)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url(String);

impl Url {
    /// Reference the element with the given id
    pub fn fragment(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url(#{})", self.0)
    }
}

/// A color reference for `fill` or `stroke`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Inherit the CSS `color` property
    #[default]
    CurrentColor,
    None,
    /// A named color keyword such as `white`
    Keyword(String),
    Hex(Rgb),
    /// Paint server reference, e.g. a gradient
    Url(Url),
    /// Design-token alias, resolved by [`crate::tokens::Tokens::resolve_paint`]
    Token(String),
}

impl Paint {
    pub fn keyword(name: impl Into<String>) -> Self {
        Paint::Keyword(name.into())
    }

    pub const fn hex(packed: u32) -> Self {
        Paint::Hex(Rgb::from_u32(packed))
    }

    pub fn url(id: impl Into<String>) -> Self {
        Paint::Url(Url::fragment(id))
    }

    pub fn token(name: impl Into<String>) -> Self {
        Paint::Token(name.into())
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Paint::Token(_))
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::CurrentColor => f.write_str("currentColor"),
            Paint::None => f.write_str("none"),
            Paint::Keyword(name) => f.write_str(name),
            Paint::Hex(rgb) => fmt::Display::fmt(rgb, f),
            Paint::Url(url) => fmt::Display::fmt(url, f),
            // An unresolved token falls through to a CSS custom property
            Paint::Token(name) => write!(f, "var(--{})", name),
        }
    }
}

impl FromStr for Paint {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ValueError::InvalidPaint(s.to_string());

        if trimmed.starts_with('#') {
            return Rgb::parse_hex(trimmed).map(Paint::Hex).ok_or_else(invalid);
        }
        if let Some(inner) = trimmed
            .strip_prefix("url(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let id = inner.trim().strip_prefix('#').ok_or_else(invalid)?;
            if id.is_empty() {
                return Err(invalid());
            }
            return Ok(Paint::url(id));
        }
        if let Some(inner) = trimmed
            .strip_prefix("token(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let name = inner.trim();
            if !is_name(name) {
                return Err(invalid());
            }
            return Ok(Paint::token(name));
        }

        match trimmed {
            "currentColor" | "currentcolor" => Ok(Paint::CurrentColor),
            "none" => Ok(Paint::None),
            keyword if keyword.chars().all(|c| c.is_ascii_alphabetic()) && !keyword.is_empty() => {
                Ok(Paint::keyword(keyword.to_ascii_lowercase()))
            }
            _ => Err(invalid()),
        }
    }
}

fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
