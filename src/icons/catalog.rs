//! Name-based lookup over every shipped icon

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::RenderConfig;

use super::{
    ChatIcon, CheckIcon, ChevronDownIcon, CloseIcon, ExternalLinkIcon, Icon, IconOptions, InfoIcon,
    MailIcon, SearchIcon, SpinnerIcon, StarIcon,
};

/// Identity of a shipped icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Close,
    Check,
    ChevronDown,
    Search,
    Info,
    Spinner,
    ExternalLink,
    Star,
    Chat,
    Mail,
}

impl IconName {
    pub const ALL: [IconName; 10] = [
        IconName::Close,
        IconName::Check,
        IconName::ChevronDown,
        IconName::Search,
        IconName::Info,
        IconName::Spinner,
        IconName::ExternalLink,
        IconName::Star,
        IconName::Chat,
        IconName::Mail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Close => "close",
            IconName::Check => "check",
            IconName::ChevronDown => "chevron-down",
            IconName::Search => "search",
            IconName::Info => "info",
            IconName::Spinner => "spinner",
            IconName::ExternalLink => "external-link",
            IconName::Star => "star",
            IconName::Chat => "chat",
            IconName::Mail => "mail",
        }
    }

    pub fn default_class(&self) -> &'static str {
        match self {
            IconName::Close => CloseIcon::DEFAULT_CLASS,
            IconName::Check => CheckIcon::DEFAULT_CLASS,
            IconName::ChevronDown => ChevronDownIcon::DEFAULT_CLASS,
            IconName::Search => SearchIcon::DEFAULT_CLASS,
            IconName::Info => InfoIcon::DEFAULT_CLASS,
            IconName::Spinner => SpinnerIcon::DEFAULT_CLASS,
            IconName::ExternalLink => ExternalLinkIcon::DEFAULT_CLASS,
            IconName::Star => StarIcon::DEFAULT_CLASS,
            IconName::Chat => ChatIcon::DEFAULT_CLASS,
            IconName::Mail => MailIcon::DEFAULT_CLASS,
        }
    }

    /// Whether the icon has two-tone and monochrome modes
    pub fn is_brand(&self) -> bool {
        matches!(self, IconName::Chat | IconName::Mail)
    }

    /// Render this icon with catalog overrides
    pub fn render(&self, options: &IconOptions, config: &RenderConfig, indent: usize) -> String {
        if !self.is_brand() && (options.fill.is_some() || options.monochrome) {
            log::debug!("{} is single-color; ignoring fill and monochrome", self);
        }
        match self {
            IconName::Close => CloseIcon::new().apply(options).render_with(config, indent),
            IconName::Check => CheckIcon::new().apply(options).render_with(config, indent),
            IconName::ChevronDown => {
                ChevronDownIcon::new().apply(options).render_with(config, indent)
            }
            IconName::Search => SearchIcon::new().apply(options).render_with(config, indent),
            IconName::Info => InfoIcon::new().apply(options).render_with(config, indent),
            IconName::Spinner => SpinnerIcon::new().apply(options).render_with(config, indent),
            IconName::ExternalLink => {
                ExternalLinkIcon::new().apply(options).render_with(config, indent)
            }
            IconName::Star => StarIcon::new().apply(options).render_with(config, indent),
            IconName::Chat => ChatIcon::new().apply(options).render_with(config, indent),
            IconName::Mail => MailIcon::new().apply(options).render_with(config, indent),
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        IconName::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| CatalogError::unknown(s, find_similar(&wanted, 2)))
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    // Single rolling row of the edit-distance table
    let mut row: Vec<usize> = (0..=n).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for j in 1..=n {
            let cost = usize::from(*a_char != b_chars[j - 1]);
            let next = (row[j] + 1).min(row[j - 1] + 1).min(diagonal + cost);
            diagonal = row[j];
            row[j] = next;
        }
    }
    row[n]
}

/// Icon names within `max_distance` edits of `target`, closest first
fn find_similar(target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = IconName::ALL
        .iter()
        .map(|name| (name.as_str(), levenshtein_distance(name.as_str(), target)))
        .filter(|(_, dist)| *dist <= max_distance)
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for name in IconName::ALL {
            assert_eq!(name.as_str().parse::<IconName>().unwrap(), name);
        }
        assert_eq!("External_Link".parse::<IconName>().unwrap(), IconName::ExternalLink);
    }

    #[test]
    fn test_unknown_name_suggests_close_matches() {
        let err = "chek".parse::<IconName>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::unknown("chek", vec!["check".to_string(), "chat".to_string()])
        );

        let CatalogError::UnknownIcon { suggestions, .. } =
            "qqqqqqq".parse::<IconName>().unwrap_err();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("close", "close"), 0);
        assert_eq!(levenshtein_distance("close", "clos"), 1);
        assert_eq!(levenshtein_distance("star", "stair"), 1);
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
        assert_eq!(levenshtein_distance("", "mail"), 4);
    }

    #[test]
    fn test_default_classes_follow_names() {
        for name in IconName::ALL {
            assert_eq!(name.default_class(), format!("{}-icon-view", name));
        }
    }

    #[test]
    fn test_render_applies_options() {
        let options = IconOptions::new().with_class("large");
        let out = IconName::Close.render(&options, &RenderConfig::default(), 0);
        assert!(out.starts_with(r#"<svg class="close-icon-view large""#));
    }
}
