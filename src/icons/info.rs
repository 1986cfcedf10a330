//! Information glyph: a ring with a dot and stem

use crate::markup::{circle, path, rect, Container, Element, FillRule};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Length, Paint, ViewBox};

use super::Icon;

icon!(
    /// Circled lowercase "i"
    InfoIcon,
    class = "info-icon-view",
    size = 18.0
);

impl Icon for InfoIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        // Outer disc minus inner disc under even-odd leaves a ring
        let ring = PathData::new()
            .move_to(9.0, 1.5)
            .arc_to((7.5, 7.5), 0.0, true, false, (9.0, 16.5))
            .arc_to((7.5, 7.5), 0.0, true, false, (9.0, 1.5))
            .close()
            .move_to(9.0, 3.0)
            .arc_to((6.0, 6.0), 0.0, true, true, (9.0, 15.0))
            .arc_to((6.0, 6.0), 0.0, true, true, (9.0, 3.0))
            .close();

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(18.0))
            .fill(Paint::CurrentColor)
            .child(path().fill_rule(FillRule::EvenOdd).d(ring))
            .child(
                rect()
                    .x(8.25)
                    .y(7.5)
                    .width(Length::number(1.5))
                    .height(Length::number(5.0))
                    .rx(0.75),
            )
            .child(circle().cx(9.0).cy(5.25).r(1.0))
    }
}
