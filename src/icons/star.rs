//! Five-pointed star drawn twice from one shared outline

use crate::markup::{defs, path, r#use, Container, Element, LineJoin};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Paint, Url, ViewBox};

use super::Icon;

const SHAPE_ID: &str = "star-icon-shape";

icon!(
    /// Five-point star drawn once in `defs` and referenced twice
    StarIcon,
    class = "star-icon-view",
    size = 20.0
);

impl Icon for StarIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        let outline = PathData::new()
            .move_to(10.0, 1.5)
            .line_to(12.6, 6.9)
            .line_to(18.5, 7.7)
            .line_to(14.2, 11.8)
            .line_to(15.3, 17.7)
            .line_to(10.0, 14.9)
            .line_to(4.7, 17.7)
            .line_to(5.8, 11.8)
            .line_to(1.5, 7.7)
            .line_to(7.4, 6.9)
            .close();

        let shape = Url::fragment(SHAPE_ID);

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(20.0))
            .xmlns_xlink()
            .child(defs().child(path().id(SHAPE_ID).d(outline)))
            .child(r#use().href(&shape).fill(Paint::CurrentColor).opacity(0.3))
            .child(
                r#use()
                    .href(&shape)
                    .fill(Paint::None)
                    .stroke(Paint::CurrentColor)
                    .stroke_linejoin(LineJoin::Round),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Render;

    #[test]
    fn test_declares_xlink_and_references_shape() {
        let out = StarIcon::new().render(0);
        assert!(out.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
        assert_eq!(out.matches(r##"xlink:href="#star-icon-shape""##).count(), 2);
        assert!(out.contains(r#"<path id="star-icon-shape" d="M10,1.5 L12.6,6.9"#));
    }
}
