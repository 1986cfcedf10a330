//! Loading spinner: a faint track with a quarter arc

use crate::markup::{circle, g, path, Container, Element, LineCap};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Paint, Transform, ViewBox};

use super::Icon;

icon!(
    /// Loading indicator: a faint track with a quarter arc on top
    SpinnerIcon,
    class = "spinner-icon-view",
    size = 20.0
);

impl Icon for SpinnerIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        // Starts at 8·cos(π/2); the tiny x offset is kept as authored
        let arc = PathData::new()
            .move_to(8.11624501e-16, -8.0)
            .arc_to((8.0, 8.0), 0.0, false, true, (8.0, 0.0));

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(20.0))
            .fill(Paint::None)
            .aria_hidden(true)
            .child(
                g().transform(Transform::translate(10.0, 10.0))
                    .stroke(Paint::CurrentColor)
                    .stroke_width(2.0)
                    .child(circle().r(8.0).opacity(0.25))
                    .child(path().d(arc).stroke_linecap(LineCap::Round)),
            )
    }
}
