//! Icon components
//!
//! Each icon is a small value type holding its configuration. Building an
//! icon produces an `svg` element tree; rendering serializes that tree. Both
//! steps are pure, so equal configurations give byte-identical output.

use crate::markup::{svg, Container, Element, Serializer};
use crate::tokens::Tokens;
use crate::value::{Length, Paint, ViewBox};
use crate::RenderConfig;

/// Anything that renders to markup at a given indentation level
pub trait Render {
    fn render(&self, indent: usize) -> String;
}

/// An icon that builds its `svg` tree against a token sheet
pub trait Icon {
    fn element(&self, tokens: &Tokens) -> Container;

    /// Render with explicit serializer settings and tokens
    fn render_with(&self, config: &RenderConfig, indent: usize) -> String {
        Serializer::new(config.serialize.clone())
            .render_container(&self.element(&config.tokens), indent)
    }
}

impl<T: Icon> Render for T {
    fn render(&self, indent: usize) -> String {
        Serializer::default().render_container(&self.element(Tokens::defaults()), indent)
    }
}

/// Join an icon's default class with a caller class.
///
/// An empty caller class yields the default alone.
pub fn compose_class(default_class: &str, class: &str) -> String {
    if class.is_empty() {
        default_class.to_string()
    } else {
        format!("{} {}", default_class, class)
    }
}

/// Options shared by every icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub width: Length,
    pub height: Length,
    /// Extra classes appended after the icon's default class
    pub class: String,
}

impl IconConfig {
    pub fn square(size: Length) -> Self {
        Self {
            width: size,
            height: size,
            class: String::new(),
        }
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    pub fn with_size(self, size: Length) -> Self {
        self.with_width(size).with_height(size)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// The `svg` root every icon starts from
    pub fn root(&self, default_class: &str, view_box: ViewBox) -> Container {
        svg()
            .class(compose_class(default_class, &self.class))
            .width(self.width)
            .height(self.height)
            .view_box(view_box)
            .xmlns()
    }
}

/// Options for two-tone brand icons
#[derive(Debug, Clone, PartialEq)]
pub struct BrandConfig {
    pub icon: IconConfig,
    /// Paint for every layer in monochrome mode
    pub fill: Paint,
    pub monochrome: bool,
}

impl BrandConfig {
    pub fn square(size: Length) -> Self {
        Self {
            icon: IconConfig::square(size),
            fill: Paint::token("base"),
            monochrome: false,
        }
    }

    /// Resolved `(background, foreground)` paints.
    ///
    /// Two-tone mode uses `brand_token` behind an `inverted` mark; monochrome
    /// mode uses the resolved fill for both.
    pub fn layers(&self, tokens: &Tokens, brand_token: &str) -> (Paint, Paint) {
        if self.monochrome {
            let paint = tokens.resolve_paint(&self.fill);
            (paint.clone(), paint)
        } else {
            (
                tokens.resolve_paint(&Paint::token(brand_token)),
                tokens.resolve_paint(&Paint::token("inverted")),
            )
        }
    }
}

/// Catalog-level overrides applicable to any icon
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconOptions {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub class: String,
    /// Only used by brand icons
    pub fill: Option<Paint>,
    /// Only used by brand icons
    pub monochrome: bool,
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: Length) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_size(self, size: Length) -> Self {
        self.with_width(size).with_height(size)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_monochrome(mut self, monochrome: bool) -> Self {
        self.monochrome = monochrome;
        self
    }

    fn apply_to(&self, mut config: IconConfig) -> IconConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.class = self.class.clone();
        config
    }
}

// Shared builder surface for single-color icons
macro_rules! icon {
    ($(#[$meta:meta])* $name:ident, class = $class:literal, size = $size:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            config: $crate::icons::IconConfig,
        }

        impl $name {
            pub const DEFAULT_CLASS: &'static str = $class;

            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_config(config: $crate::icons::IconConfig) -> Self {
                Self { config }
            }

            pub fn config(&self) -> &$crate::icons::IconConfig {
                &self.config
            }

            pub fn width(mut self, width: $crate::value::Length) -> Self {
                self.config.width = width;
                self
            }

            pub fn height(mut self, height: $crate::value::Length) -> Self {
                self.config.height = height;
                self
            }

            pub fn size(mut self, size: $crate::value::Length) -> Self {
                self.config = self.config.with_size(size);
                self
            }

            pub fn class(mut self, class: impl Into<String>) -> Self {
                self.config.class = class.into();
                self
            }

            /// Apply catalog overrides; paint options are ignored
            pub fn apply(mut self, options: &$crate::icons::IconOptions) -> Self {
                self.config = options.apply_to(self.config);
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    config: $crate::icons::IconConfig::square($crate::value::Length::px($size)),
                }
            }
        }
    };
}

// Shared builder surface for two-tone brand icons
macro_rules! brand_icon {
    (
        $(#[$meta:meta])* $name:ident,
        class = $class:literal, size = $size:expr, brand = $brand:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            config: $crate::icons::BrandConfig,
        }

        impl $name {
            pub const DEFAULT_CLASS: &'static str = $class;
            /// Token naming the background color in two-tone mode
            pub const BRAND_TOKEN: &'static str = $brand;

            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_config(config: $crate::icons::BrandConfig) -> Self {
                Self { config }
            }

            pub fn config(&self) -> &$crate::icons::BrandConfig {
                &self.config
            }

            pub fn width(mut self, width: $crate::value::Length) -> Self {
                self.config.icon.width = width;
                self
            }

            pub fn height(mut self, height: $crate::value::Length) -> Self {
                self.config.icon.height = height;
                self
            }

            pub fn size(mut self, size: $crate::value::Length) -> Self {
                self.config.icon = self.config.icon.with_size(size);
                self
            }

            pub fn class(mut self, class: impl Into<String>) -> Self {
                self.config.icon.class = class.into();
                self
            }

            pub fn fill(mut self, fill: $crate::value::Paint) -> Self {
                self.config.fill = fill;
                self
            }

            pub fn monochrome(mut self, monochrome: bool) -> Self {
                self.config.monochrome = monochrome;
                self
            }

            pub fn apply(mut self, options: &$crate::icons::IconOptions) -> Self {
                self.config.icon = options.apply_to(self.config.icon);
                if let Some(fill) = &options.fill {
                    self.config.fill = fill.clone();
                }
                self.config.monochrome = options.monochrome;
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    config: $crate::icons::BrandConfig::square($crate::value::Length::px($size)),
                }
            }
        }
    };
}

mod catalog;
mod chat;
mod check;
mod chevron_down;
mod close;
mod external_link;
mod info;
mod mail;
mod search;
mod spinner;
mod star;

pub use catalog::IconName;
pub use chat::ChatIcon;
pub use check::CheckIcon;
pub use chevron_down::ChevronDownIcon;
pub use close::CloseIcon;
pub use external_link::ExternalLinkIcon;
pub use info::InfoIcon;
pub use mail::MailIcon;
pub use search::SearchIcon;
pub use spinner::SpinnerIcon;
pub use star::StarIcon;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_class() {
        assert_eq!(compose_class("close-icon-view", ""), "close-icon-view");
        assert_eq!(compose_class("close-icon-view", "large"), "close-icon-view large");
    }

    #[test]
    fn test_root_attribute_order() {
        let root = IconConfig::square(Length::px(16.0))
            .with_class("x")
            .root("demo-icon-view", ViewBox::square(16.0));
        let names: Vec<_> = root.attributes().iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["class", "width", "height", "viewBox", "xmlns"]);
    }

    #[test]
    fn test_options_override_only_what_is_set() {
        let config = IconOptions::new()
            .with_height(Length::px(32.0))
            .with_class("wide")
            .apply_to(IconConfig::square(Length::px(20.0)));
        assert_eq!(config.width, Length::px(20.0));
        assert_eq!(config.height, Length::px(32.0));
        assert_eq!(config.class, "wide");
    }

    #[test]
    fn test_brand_layers() {
        let tokens = Tokens::defaults();
        let two_tone = BrandConfig::square(Length::px(20.0));
        assert_eq!(
            two_tone.layers(tokens, "brand-chat"),
            (Paint::hex(0x5865f2), Paint::keyword("white"))
        );

        let mono = BrandConfig {
            fill: Paint::hex(0x222222),
            monochrome: true,
            ..two_tone
        };
        assert_eq!(
            mono.layers(tokens, "brand-chat"),
            (Paint::hex(0x222222), Paint::hex(0x222222))
        );
    }
}
