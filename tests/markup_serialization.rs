//! Integration tests for element trees and the serializer

use pretty_assertions::assert_eq;

use svg_glyphs::markup::{
    circle, clip_path, defs, g, path, r#use, rect, svg, Element, Node, SerializeConfig, Serializer,
};
use svg_glyphs::value::{Length, Paint, Url, ViewBox};
use svg_glyphs::PathData;

fn nested(depth: usize) -> Node {
    let mut node: Node = circle().r(1.0).into();
    for _ in 0..depth {
        node = g().child(node).into();
    }
    node
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

#[test]
fn test_indentation_is_one_unit_per_level() {
    for width in [1, 2, 4] {
        let serializer = Serializer::new(SerializeConfig::default().with_indent_width(width));
        let out = serializer.render(&nested(5), 1);
        let lines: Vec<_> = out.lines().collect();

        // Opening tags step in, closing tags step back out
        for depth in 0..=5 {
            assert_eq!(leading_spaces(lines[depth]), width * (depth + 1));
        }
        for (offset, line) in lines[6..].iter().enumerate() {
            assert_eq!(leading_spaces(line), width * (5 - offset));
        }
    }
}

#[test]
fn test_leaves_self_close_and_containers_enclose_children() {
    let doc: Node = svg()
        .view_box(ViewBox::square(16.0))
        .child(defs().child(clip_path().id("c").child(rect().width(Length::number(16.0)))))
        .child(g().clip_path(Url::fragment("c")).child(path().d(PathData::new().move_to(0.0, 0.0))))
        .child(r#use().href(&Url::fragment("c")))
        .into();

    let out = Serializer::default().render(&doc, 0);
    assert_eq!(
        out,
        r##"<svg viewBox="0 0 16 16">
  <defs>
    <clipPath id="c">
      <rect width="16"/>
    </clipPath>
  </defs>
  <g clip-path="url(#c)">
    <path d="M0,0"/>
  </g>
  <use xlink:href="#c"/>
</svg>"##
    );
    assert!(!out.contains("</path>"));
    assert!(!out.contains("</rect>"));
    assert!(!out.contains("</use>"));
}

#[test]
fn test_children_render_in_call_order() {
    let group = g()
        .child(rect().fill(Paint::keyword("red")))
        .child(circle().fill(Paint::keyword("green")))
        .child(path().fill(Paint::keyword("blue")));
    let out = group.render(0);

    let red = out.find("red").unwrap();
    let green = out.find("green").unwrap();
    let blue = out.find("blue").unwrap();
    assert!(red < green && green < blue);
}

#[test]
fn test_attribute_override_keeps_position() {
    let out = rect()
        .fill(Paint::None)
        .x(1.0)
        .fill(Paint::hex(0xabcdef))
        .render(0);
    assert_eq!(out, r##"<rect fill="#abcdef" x="1"/>"##);
}

#[test]
fn test_shared_base_can_be_rederived() {
    let base = svg().width(Length::px(20.0)).height(Length::px(20.0));
    let small = base.clone().width(Length::px(12.0));

    assert_eq!(base.render(0), r#"<svg width="20" height="20"></svg>"#);
    assert_eq!(small.render(0), r#"<svg width="12" height="20"></svg>"#);
}

#[test]
fn test_unresolved_token_falls_back_to_css_variable() {
    let out = path().fill(Paint::token("brand-chat")).render(0);
    assert_eq!(out, r#"<path fill="var(--brand-chat)"/>"#);
}
