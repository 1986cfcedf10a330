//! Check mark

use crate::markup::{path, Container, Element, FillRule};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Paint, ViewBox};

use super::Icon;

icon!(
    /// Check mark with rounded joints
    CheckIcon,
    class = "check-icon-view",
    size = 16.0
);

impl Icon for CheckIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        let mark = PathData::new()
            .move_to(13.78, 4.22)
            .arc_by((0.75, 0.75), 0.0, false, true, (0.0, 1.06))
            .line_by(-7.25, 7.25)
            .arc_by((0.75, 0.75), 0.0, false, true, (-1.06, 0.0))
            .line_to(2.22, 9.28)
            .arc_by((0.75, 0.75), 0.0, false, true, (1.06, -1.06))
            .line_to(6.0, 10.94)
            .line_by(6.72, -6.72)
            .arc_by((0.75, 0.75), 0.0, false, true, (1.06, 0.0))
            .close();

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(16.0))
            .fill(Paint::CurrentColor)
            .child(
                path()
                    .fill_rule(FillRule::EvenOdd)
                    .clip_rule(FillRule::EvenOdd)
                    .d(mark),
            )
    }
}
