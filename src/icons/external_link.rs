//! Arrow leaving a box, for links that open elsewhere

use crate::markup::{clip_path, defs, g, path, rect, Container, Element, LineCap, LineJoin};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Length, Paint, Url, ViewBox};

use super::Icon;

const CLIP_ID: &str = "external-link-clip";

icon!(
    /// Box with an arrow leaving its top-right corner
    ExternalLinkIcon,
    class = "external-link-icon-view",
    size = 16.0
);

impl Icon for ExternalLinkIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        let arrow = PathData::new()
            .move_to(9.5, 2.5)
            .horizontal_to(13.5)
            .vertical_to(6.5)
            .move_to(13.5, 2.5)
            .line_to(7.0, 9.0);
        let frame = PathData::new()
            .move_to(11.5, 9.5)
            .vertical_to(12.5)
            .arc_to((1.0, 1.0), 0.0, false, true, (10.5, 13.5))
            .horizontal_to(3.5)
            .arc_to((1.0, 1.0), 0.0, false, true, (2.5, 12.5))
            .vertical_to(5.5)
            .arc_to((1.0, 1.0), 0.0, false, true, (3.5, 4.5))
            .horizontal_to(6.5);

        let clip = Url::fragment(CLIP_ID);
        let canvas = Length::number(16.0);

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(16.0))
            .fill(Paint::None)
            .child(
                defs().child(
                    clip_path()
                        .id(CLIP_ID)
                        .child(rect().width(canvas).height(canvas).fill(Paint::keyword("white"))),
                ),
            )
            .child(
                g().clip_path(clip)
                    .stroke(Paint::CurrentColor)
                    .stroke_width(1.5)
                    .stroke_linecap(LineCap::Round)
                    .stroke_linejoin(LineJoin::Round)
                    .with_children([path().d(arrow), path().d(frame)]),
            )
    }
}
