//! Integration tests for icon rendering

use pretty_assertions::assert_eq;

use svg_glyphs::icons::{ChatIcon, CloseIcon, MailIcon, Render};
use svg_glyphs::{IconName, IconOptions, Length, Paint, RenderConfig};

#[test]
fn test_close_icon_defaults() {
    insta::assert_snapshot!(CloseIcon::new().render(0), @r#"
    <svg class="close-icon-view" width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg" fill="currentColor">
      <path d="M3.51,4.93 L4.93,3.51 L16.49,15.07 L15.07,16.49 Z"/>
      <path d="M15.07,3.51 L16.49,4.93 L4.93,16.49 L3.51,15.07 Z"/>
    </svg>
    "#);
}

#[test]
fn test_close_icon_extra_class_changes_only_class() {
    let plain = CloseIcon::new().render(0);
    let large = CloseIcon::new().class("large").render(0);

    assert!(large.contains(r#"class="close-icon-view large""#));
    assert_eq!(
        large.replace(r#"class="close-icon-view large""#, r#"class="close-icon-view""#),
        plain
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let config = RenderConfig::default();
    let options = IconOptions::new()
        .with_size(Length::px(24.0))
        .with_class("a b");
    for name in IconName::ALL {
        let first = name.render(&options, &config, 1);
        let second = name.render(&options, &config, 1);
        assert_eq!(first, second);
    }
}

#[test]
fn test_class_composition_for_every_icon() {
    let config = RenderConfig::default();
    for name in IconName::ALL {
        let plain = name.render(&IconOptions::new(), &config, 0);
        assert!(
            plain.starts_with(&format!(r#"<svg class="{}" "#, name.default_class())),
            "{}: {}",
            name,
            plain
        );

        let extra = name.render(&IconOptions::new().with_class("foo"), &config, 0);
        assert!(extra.starts_with(&format!(r#"<svg class="{} foo" "#, name.default_class())));
    }
}

#[test]
fn test_every_icon_declares_namespace_and_view_box() {
    let config = RenderConfig::default();
    for name in IconName::ALL {
        let out = name.render(&IconOptions::new(), &config, 0);
        let root = out.lines().next().unwrap();
        assert!(root.contains(r#"xmlns="http://www.w3.org/2000/svg""#), "{}", name);
        assert!(root.contains("viewBox=\"0 0 "), "{}", name);
        assert!(out.ends_with("</svg>"), "{}", name);
    }
}

#[test]
fn test_default_sizes() {
    let config = RenderConfig::default();
    let expected = [
        (IconName::Close, 20),
        (IconName::Check, 16),
        (IconName::ChevronDown, 12),
        (IconName::Info, 18),
        (IconName::ExternalLink, 16),
        (IconName::Mail, 20),
    ];
    for (name, size) in expected {
        let out = name.render(&IconOptions::new(), &config, 0);
        assert!(
            out.contains(&format!(r#"width="{size}" height="{size}""#)),
            "{}",
            name
        );
    }
}

#[test]
fn test_brand_two_tone_and_monochrome() {
    let two_tone = MailIcon::new().render(0);
    assert!(two_tone.contains(r##"<circle cx="10" cy="10" r="10" fill="#ea4335"/>"##));
    assert!(two_tone.contains(r#"fill="white"/>"#));

    let mono = MailIcon::new()
        .fill(Paint::keyword("black"))
        .monochrome(true)
        .render(0);
    assert_eq!(mono.matches(r#"fill="black""#).count(), 2);
    assert!(!mono.contains("#ea4335"));
    assert!(!mono.contains("white"));
}

#[test]
fn test_brand_fill_ignored_without_monochrome() {
    let out = ChatIcon::new().fill(Paint::keyword("black")).render(0);
    assert!(!out.contains("black"));
    assert!(out.contains("#5865f2"));
}

#[test]
fn test_render_at_indent() {
    let out = CloseIcon::new().render(2);
    let lines: Vec<_> = out.lines().collect();
    assert!(lines[0].starts_with("    <svg "));
    assert!(lines[1].starts_with("      <path "));
    assert_eq!(lines[3], "    </svg>");
}
