use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;

use crate::painter::Painter;
use crate::widget::Widget;

/// One line of text, horizontally centered in its row.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f32,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 16.0,
            color: Color::WHITE,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn height(&self) -> f32 {
        self.size * 1.2
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let measured = painter.measure_text(&self.text, self.size);
        let x = rect.origin.x + ((rect.size.x - measured.x) * 0.5).max(0.0);
        painter.text(&self.text, self.size, self.color, Vec2::new(x, rect.origin.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_one_line_of_text() {
        let label = Label::new("x").size(20.0);
        assert_eq!(label.height(), 24.0);
    }

    #[test]
    fn set_text_replaces_content() {
        let mut label = Label::new("a");
        label.set_text(format!("{}", 2));
        assert_eq!(label.text, "2");
    }
}
