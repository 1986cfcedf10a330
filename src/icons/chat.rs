//! Chat bubble brand mark on a rounded tile

use crate::markup::{path, rect, Container, Element};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Length, ViewBox};

use super::Icon;

brand_icon!(
    /// Chat app mark: a speech bubble on a rounded brand tile
    ChatIcon,
    class = "chat-icon-view",
    size = 20.0,
    brand = "brand-chat"
);

impl Icon for ChatIcon {
    fn element(&self, tokens: &Tokens) -> Container {
        let (background, foreground) = self.config.layers(tokens, Self::BRAND_TOKEN);

        let bubble = PathData::new()
            .move_to(5.0, 5.5)
            .horizontal_to(15.0)
            .arc_to((1.5, 1.5), 0.0, false, true, (16.5, 7.0))
            .vertical_to(12.0)
            .arc_to((1.5, 1.5), 0.0, false, true, (15.0, 13.5))
            .horizontal_to(9.0)
            .line_to(6.0, 16.0)
            .vertical_to(13.5)
            .horizontal_to(5.0)
            .arc_to((1.5, 1.5), 0.0, false, true, (3.5, 12.0))
            .vertical_to(7.0)
            .arc_to((1.5, 1.5), 0.0, false, true, (5.0, 5.5))
            .close();

        let tile = Length::number(20.0);

        self.config
            .icon
            .root(Self::DEFAULT_CLASS, ViewBox::square(20.0))
            .child(rect().width(tile).height(tile).rx(5.0).fill(background))
            .child(path().d(bubble).fill(foreground))
    }
}
