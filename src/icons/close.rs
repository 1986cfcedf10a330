//! Close (cross) glyph

use crate::markup::{path, Container, Element};
use crate::path::PathData;
use crate::tokens::Tokens;
use crate::value::{Paint, ViewBox};

use super::Icon;

icon!(
    /// Diagonal cross used by dismiss buttons
    CloseIcon,
    class = "close-icon-view",
    size = 20.0
);

impl Icon for CloseIcon {
    fn element(&self, _tokens: &Tokens) -> Container {
        let falling = PathData::new()
            .move_to(3.51, 4.93)
            .line_to(4.93, 3.51)
            .line_to(16.49, 15.07)
            .line_to(15.07, 16.49)
            .close();
        let rising = PathData::new()
            .move_to(15.07, 3.51)
            .line_to(16.49, 4.93)
            .line_to(4.93, 16.49)
            .line_to(3.51, 15.07)
            .close();

        self.config
            .root(Self::DEFAULT_CLASS, ViewBox::square(20.0))
            .fill(Paint::CurrentColor)
            .child(path().d(falling))
            .child(path().d(rising))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Render;
    use crate::value::Length;

    #[test]
    fn test_default_render() {
        assert_eq!(
            CloseIcon::new().render(0),
            concat!(
                r#"<svg class="close-icon-view" width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg" fill="currentColor">"#,
                "\n",
                r#"  <path d="M3.51,4.93 L4.93,3.51 L16.49,15.07 L15.07,16.49 Z"/>"#,
                "\n",
                r#"  <path d="M15.07,3.51 L16.49,4.93 L4.93,16.49 L3.51,15.07 Z"/>"#,
                "\n",
                "</svg>"
            )
        );
    }

    #[test]
    fn test_size_override() {
        let out = CloseIcon::new().size(Length::px(12.0)).render(0);
        assert!(out.starts_with(
            r#"<svg class="close-icon-view" width="12" height="12" viewBox="0 0 20 20""#
        ));
    }
}
