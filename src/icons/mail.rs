//! Envelope brand mark on a round badge

use crate::markup::{circle, path, Container, Element, FillRule};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::ViewBox;

use super::Icon;

brand_icon!(
    /// Mail app mark: an envelope on a brand disc
    MailIcon,
    class = "mail-icon-view",
    size = 20.0,
    brand = "brand-mail"
);

impl Icon for MailIcon {
    fn element(&self, tokens: &Tokens) -> Container {
        let (background, foreground) = self.config.layers(tokens, Self::BRAND_TOKEN);

        // Envelope body with the flap cut out under even-odd
        let envelope = PathData::new()
            .move_to(5.0, 6.0)
            .horizontal_to(15.0)
            .arc_to((1.0, 1.0), 0.0, false, true, (16.0, 7.0))
            .vertical_to(13.0)
            .arc_to((1.0, 1.0), 0.0, false, true, (15.0, 14.0))
            .horizontal_to(5.0)
            .arc_to((1.0, 1.0), 0.0, false, true, (4.0, 13.0))
            .vertical_to(7.0)
            .arc_to((1.0, 1.0), 0.0, false, true, (5.0, 6.0))
            .close()
            .move_to(5.5, 7.6)
            .vertical_to(12.5)
            .horizontal_to(14.5)
            .vertical_to(7.6)
            .line_to(10.0, 10.8)
            .close();

        self.config
            .icon
            .root(Self::DEFAULT_CLASS, ViewBox::square(20.0))
            .child(circle().cx(10.0).cy(10.0).r(10.0).fill(background))
            .child(path().fill_rule(FillRule::EvenOdd).d(envelope).fill(foreground))
    }
}
