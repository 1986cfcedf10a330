//! Design tokens for paints and lengths
//!
//! Icons refer to colors through named tokens (`base`, `inverted`,
//! `brand-chat`) so one glyph can be rendered under different themes. A token
//! sheet maps those names to concrete paints and lengths; user sheets are
//! TOML files that overlay the embedded defaults.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ValueError;
use crate::value::{Length, Paint};

/// Longest alias chain followed before a token is treated as unresolvable
pub const MAX_ALIAS_DEPTH: usize = 8;

/// Errors that can occur when loading or parsing token sheets
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to read token file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse token TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("color token '{token}': {source}")]
    InvalidPaint { token: String, source: ValueError },

    #[error("length token '{token}': {source}")]
    InvalidLength { token: String, source: ValueError },
}

/// A sheet mapping token names to paints and lengths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokens {
    pub name: Option<String>,
    pub description: Option<String>,
    paints: HashMap<String, Paint>,
    lengths: HashMap<String, Length>,
}

#[derive(Deserialize)]
struct TomlTokens {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default)]
    lengths: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

const DEFAULT_TOKENS: &str = r##"
[metadata]
name = "Default"

[colors]
base = "currentColor"
inverted = "white"
muted = "#6b7280"
brand-chat = "#5865f2"
brand-mail = "#ea4335"

[lengths]
icon-tiny = "12px"
icon-small = "16px"
icon-regular = "18px"
icon-medium = "20px"
icon-large = "24px"
"##;

static DEFAULTS: LazyLock<Tokens> = LazyLock::new(|| {
    DEFAULT_TOKENS
        .parse()
        .expect("Default token sheet should be valid TOML")
});

impl Tokens {
    /// The embedded default sheet, parsed once per process
    pub fn defaults() -> &'static Tokens {
        &DEFAULTS
    }

    /// Load a token sheet from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TokenError> {
        let content = std::fs::read_to_string(path)?;
        let tokens: Tokens = content.parse()?;
        log::debug!(
            "loaded token sheet {} from {}: {} colors, {} lengths",
            tokens.name.as_deref().unwrap_or("<unnamed>"),
            path.display(),
            tokens.paints.len(),
            tokens.lengths.len()
        );
        Ok(tokens)
    }

    /// Return this sheet with every entry of `other` layered on top
    pub fn overlay(mut self, other: Tokens) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        self.paints.extend(other.paints);
        self.lengths.extend(other.lengths);
        self
    }

    pub fn with_paint(mut self, name: impl Into<String>, paint: Paint) -> Self {
        self.paints.insert(name.into(), paint);
        self
    }

    pub fn with_length(mut self, name: impl Into<String>, length: Length) -> Self {
        self.lengths.insert(name.into(), length);
        self
    }

    /// The paint stored under `name` in this sheet, without following aliases
    pub fn paint(&self, name: &str) -> Option<&Paint> {
        self.paints.get(name)
    }

    /// A length token from this sheet or, failing that, the defaults
    pub fn length(&self, name: &str) -> Option<Length> {
        self.lengths
            .get(name)
            .or_else(|| Self::defaults().lengths.get(name))
            .copied()
    }

    /// Resolve a paint to a concrete value.
    ///
    /// Tokens are looked up in this sheet, then in the defaults, following
    /// aliases such as `accent = "token(brand-chat)"` up to
    /// [`MAX_ALIAS_DEPTH`] steps. Unknown tokens and over-long or cyclic
    /// chains resolve to `currentColor` with a warning.
    pub fn resolve_paint(&self, paint: &Paint) -> Paint {
        let mut current = paint;
        for _ in 0..=MAX_ALIAS_DEPTH {
            let name = match current {
                Paint::Token(name) => name,
                concrete => return concrete.clone(),
            };
            match self.lookup(name) {
                Some(next) => current = next,
                None => {
                    log::warn!("unknown color token '{}', using currentColor", name);
                    return Paint::CurrentColor;
                }
            }
        }
        log::warn!(
            "color token chain from {:?} exceeds {} aliases, using currentColor",
            paint,
            MAX_ALIAS_DEPTH
        );
        Paint::CurrentColor
    }

    fn lookup(&self, name: &str) -> Option<&Paint> {
        self.paints
            .get(name)
            .or_else(|| Self::defaults().paints.get(name))
    }
}

impl FromStr for Tokens {
    type Err = TokenError;

    /// Parse a token sheet from TOML text
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlTokens = toml::from_str(content)?;

        let paints = parsed
            .colors
            .into_iter()
            .map(|(token, value)| match value.parse::<Paint>() {
                Ok(paint) => Ok((token, paint)),
                Err(source) => Err(TokenError::InvalidPaint { token, source }),
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        let lengths = parsed
            .lengths
            .into_iter()
            .map(|(token, value)| match value.parse::<Length>() {
                Ok(length) => Ok((token, length)),
                Err(source) => Err(TokenError::InvalidLength { token, source }),
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Tokens {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            paints,
            lengths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        let tokens = Tokens::defaults();
        assert_eq!(tokens.name.as_deref(), Some("Default"));
        assert_eq!(tokens.paint("base"), Some(&Paint::CurrentColor));
        assert_eq!(tokens.paint("inverted"), Some(&Paint::keyword("white")));
        assert_eq!(tokens.paint("brand-chat"), Some(&Paint::hex(0x5865f2)));
        assert_eq!(tokens.length("icon-small"), Some(Length::px(16.0)));
    }

    #[test]
    fn test_resolve_concrete_paint_is_identity() {
        let tokens = Tokens::default();
        assert_eq!(tokens.resolve_paint(&Paint::None), Paint::None);
        assert_eq!(tokens.resolve_paint(&Paint::hex(0x112233)), Paint::hex(0x112233));
    }

    #[test]
    fn test_empty_sheet_falls_back_to_defaults() {
        let empty = Tokens::default();
        assert_eq!(
            empty.resolve_paint(&Paint::token("brand-mail")),
            Paint::hex(0xea4335)
        );
        assert_eq!(empty.length("icon-tiny"), Some(Length::px(12.0)));
    }

    #[test]
    fn test_unknown_token_resolves_to_current_color() {
        let tokens = Tokens::default();
        assert_eq!(tokens.resolve_paint(&Paint::token("nope")), Paint::CurrentColor);
    }

    #[test]
    fn test_alias_chain() {
        let tokens = Tokens::default()
            .with_paint("accent", Paint::token("primary"))
            .with_paint("primary", Paint::token("brand-chat"));
        assert_eq!(tokens.resolve_paint(&Paint::token("accent")), Paint::hex(0x5865f2));
    }

    #[test]
    fn test_alias_cycle_terminates() {
        let tokens = Tokens::default()
            .with_paint("a", Paint::token("b"))
            .with_paint("b", Paint::token("a"));
        assert_eq!(tokens.resolve_paint(&Paint::token("a")), Paint::CurrentColor);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Dark"
description = "Light marks on dark surfaces"

[colors]
base = "#f5f5f5"
inverted = "token(base)"

[lengths]
icon-medium = "24px"
"##;
        let tokens: Tokens = toml_str.parse().expect("Should parse");
        assert_eq!(tokens.name.as_deref(), Some("Dark"));
        assert_eq!(
            tokens.description.as_deref(),
            Some("Light marks on dark surfaces")
        );
        assert_eq!(tokens.resolve_paint(&Paint::token("inverted")), Paint::hex(0xf5f5f5));
        assert_eq!(tokens.length("icon-medium"), Some(Length::px(24.0)));
    }

    #[test]
    fn test_overlay_replaces_matching_entries() {
        let user: Tokens = "[colors]\nbrand-chat = \"#000000\"\n".parse().unwrap();
        let merged = Tokens::defaults().clone().overlay(user);
        assert_eq!(merged.paint("brand-chat"), Some(&Paint::hex(0x000000)));
        assert_eq!(merged.paint("inverted"), Some(&Paint::keyword("white")));
        assert_eq!(merged.name.as_deref(), Some("Default"));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = "[colors]\nbase = \"#12\"\n".parse::<Tokens>().unwrap_err();
        assert!(matches!(err, TokenError::InvalidPaint { ref token, .. } if token == "base"));

        let err = "[lengths]\nicon = \"12em\"\n".parse::<Tokens>().unwrap_err();
        assert!(matches!(err, TokenError::InvalidLength { .. }));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = "this is not valid toml {{{{".parse::<Tokens>();
        assert!(matches!(result, Err(TokenError::Toml(_))));
    }
}
