//! Downward chevron for disclosure controls

use crate::markup::{path, Container, Element, LineCap, LineJoin};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Paint, ViewBox};

use super::Icon;

icon!(
    /// Downward chevron for disclosure controls
    ChevronDownIcon,
    class = "chevron-down-icon-view",
    size = 12.0
);

impl Icon for ChevronDownIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        let chevron = PathData::new()
            .move_to(2.5, 4.5)
            .line_to(6.0, 8.0)
            .line_to(9.5, 4.5);

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(12.0))
            .fill(Paint::None)
            .child(
                path()
                    .d(chevron)
                    .stroke(Paint::CurrentColor)
                    .stroke_width(1.5)
                    .stroke_linecap(LineCap::Round)
                    .stroke_linejoin(LineJoin::Round),
            )
    }
}
