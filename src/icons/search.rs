//! Magnifying glass

use crate::markup::{circle, path, Container, Element, LineCap};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Paint, ViewBox};

use super::Icon;

icon!(
    /// Magnifying glass
    SearchIcon,
    class = "search-icon-view",
    size = 20.0
);

impl Icon for SearchIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        let handle = PathData::new().move_to(12.75, 12.75).line_to(17.0, 17.0);

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(20.0))
            .fill(Paint::None)
            .stroke(Paint::CurrentColor)
            .stroke_width(1.5)
            .stroke_linecap(LineCap::Round)
            .child(circle().cx(8.5).cy(8.5).r(5.75))
            .child(path().d(handle))
    }
}
