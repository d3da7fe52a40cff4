use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;
use prism_engine::scene::{DrawList, ZIndex};
use prism_engine::text::{FontId, FontSystem};

use crate::pointer::PointerInput;

/// Drawing surface handed to widgets.
///
/// Wraps the engine's `DrawList` with a small API and carries the frame's
/// pointer so widgets can render hover and drag visuals. Text is skipped when
/// no font is available.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    font_system: &'a FontSystem,
    font: Option<FontId>,
    z: ZIndex,
    pub pointer: PointerInput,
}

impl<'a> Painter<'a> {
    pub fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        font: Option<FontId>,
        pointer: PointerInput,
    ) -> Self {
        Self {
            draw_list,
            font_system,
            font,
            z: ZIndex::default(),
            pointer,
        }
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer.is_over(rect)
    }

    // ── layering ──────────────────────────────────────────────────────────

    /// Runs `f` one z-layer above the current one.
    pub fn layer_above<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.z;
        self.z = saved.above();
        let out = f(self);
        self.z = saved;
        out
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_rect(self.z, rect, color);
    }

    /// Draws one line of text with its top-left at `origin`.
    pub fn text(&mut self, text: &str, size: f32, color: Color, origin: Vec2) {
        let Some(font) = self.font else { return };
        self.draw_list.push_text(self.z, text, font, size, color, origin);
    }

    /// Width and height of `text` at `size`; zero wide without a font.
    pub fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        match self.font {
            Some(font) => self.font_system.measure_text(text, font, size),
            None => Vec2::new(0.0, size * 1.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use prism_engine::scene::DrawCmd;

    use super::*;

    #[test]
    fn text_without_font_records_nothing() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut painter = Painter::new(&mut list, &fonts, None, PointerInput::default());

        painter.text("hello", 14.0, Color::WHITE, Vec2::zero());
        painter.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE);

        assert_eq!(list.len(), 1);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Rect(_)));
    }

    #[test]
    fn layer_above_raises_and_restores_z() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut painter = Painter::new(&mut list, &fonts, None, PointerInput::default());

        painter.layer_above(|p| p.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE));
        painter.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);

        assert_eq!(list.items()[0].key.z, ZIndex(1));
        assert_eq!(list.items()[1].key.z, ZIndex(0));
    }
}
