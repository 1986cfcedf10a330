//! SVG Glyphs - icon components on a small markup substrate
//!
//! This library provides a path-data builder and parser, an immutable
//! element tree with an indenting serializer, unit-aware value types, design
//! tokens, and a catalog of icons built on top of them.
//!
//! # Example
//!
//! ```rust
//! use svg_glyphs::icons::{CloseIcon, Render};
//!
//! let svg = CloseIcon::new().class("large").render(0);
//! assert!(svg.starts_with(r#"<svg class="close-icon-view large""#));
//! ```

pub mod error;
pub mod icons;
pub mod markup;
pub mod path;
pub mod tokens;
pub mod value;

pub use error::{CatalogError, PathDataError, ValueError};
pub use icons::{Icon, IconName, IconOptions, Render};
pub use markup::SerializeConfig;
pub use path::PathData;
pub use tokens::{TokenError, Tokens};
pub use value::{Length, Paint};

/// Configuration for rendering icons
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Markup output configuration
    pub serialize: SerializeConfig,
    /// Token sheet for paint resolution
    pub tokens: Tokens,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            serialize: SerializeConfig::default(),
            tokens: Tokens::defaults().clone(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serializer configuration
    pub fn with_serialize(mut self, config: SerializeConfig) -> Self {
        self.serialize = config;
        self
    }

    /// Set the token sheet for paint resolution
    pub fn with_tokens(mut self, tokens: Tokens) -> Self {
        self.tokens = tokens;
        self
    }
}

/// Render a catalog icon by name with default configuration
///
/// # Example
///
/// ```rust
/// use svg_glyphs::{render_icon, IconOptions};
///
/// let svg = render_icon("check", &IconOptions::new()).unwrap();
/// assert!(svg.contains(r#"class="check-icon-view""#));
/// assert!(render_icon("chek", &IconOptions::new()).is_err());
/// ```
pub fn render_icon(name: &str, options: &IconOptions) -> Result<String, CatalogError> {
    render_icon_with_config(name, options, &RenderConfig::default())
}

/// Render a catalog icon by name with custom configuration
///
/// # Example
///
/// ```rust
/// use svg_glyphs::{render_icon_with_config, IconOptions, RenderConfig, SerializeConfig};
///
/// let config = RenderConfig::new().with_serialize(SerializeConfig::compact());
/// let svg = render_icon_with_config("close", &IconOptions::new(), &config).unwrap();
/// assert!(!svg.contains('\n'));
/// ```
pub fn render_icon_with_config(
    name: &str,
    options: &IconOptions,
    config: &RenderConfig,
) -> Result<String, CatalogError> {
    let icon: IconName = name.parse()?;
    log::debug!("rendering catalog icon {}", icon);
    Ok(icon.render(options, config, 0))
}
