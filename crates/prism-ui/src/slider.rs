use prism_engine::coords::Rect;
use prism_engine::paint::Color;

use crate::painter::Painter;
use crate::pointer::PointerInput;
use crate::widget::Widget;

/// A horizontal slider over a continuous range.
///
/// Pressing the primary button anywhere inside the slider's rect starts a
/// drag; while the button is held the value follows the pointer x, clamped to
/// `[min, max]`, even when the pointer leaves the rect. Releasing ends the drag.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
    dragging: bool,

    pub track_height: f32,
    pub thumb_width: f32,
    pub track_color: Color,
    pub fill_color: Color,
    pub thumb_color: Color,
    pub thumb_hover_color: Color,
}

impl Slider {
    /// Creates a slider over `[min, max]` holding `value` (clamped).
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        debug_assert!(min <= max, "slider range is inverted");
        Self {
            value: value.clamp(min, max),
            min,
            max,
            dragging: false,
            track_height: 4.0,
            thumb_width: 12.0,
            track_color: Color::from_straight(0.15, 0.2, 0.3, 1.0),
            fill_color: Color::from_straight(0.2, 0.6, 1.0, 1.0),
            thumb_color: Color::from_straight(0.9, 0.9, 0.9, 1.0),
            thumb_hover_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Normalized position in `[0, 1]`.
    pub fn normalized(&self) -> f32 {
        let span = self.max - self.min;
        if span.abs() < f32::EPSILON {
            0.0
        } else {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        }
    }

    /// Value under logical x-coordinate `x` for a slider laid out in `rect`.
    pub fn value_at(&self, rect: Rect, x: f32) -> f32 {
        let t = if rect.size.x > 0.0 {
            ((x - rect.origin.x) / rect.size.x).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.min + t * (self.max - self.min)
    }

    fn track_rect(&self, rect: Rect) -> Rect {
        let cy = rect.center().y;
        Rect::new(
            rect.origin.x,
            cy - self.track_height * 0.5,
            rect.size.x,
            self.track_height,
        )
    }
}

impl Widget for Slider {
    fn height(&self) -> f32 {
        24.0
    }

    fn update(&mut self, rect: Rect, pointer: &PointerInput) -> bool {
        if pointer.pressed && pointer.is_over(rect) {
            log::trace!("slider drag started at {:.3}", self.value);
            self.dragging = true;
        }

        if !self.dragging {
            return false;
        }

        let before = self.value;
        if let Some(pos) = pointer.pos {
            self.value = self.value_at(rect, pos.x);
        }

        if pointer.released || !pointer.down {
            log::trace!("slider drag ended at {:.3}", self.value);
            self.dragging = false;
        }

        self.value != before
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let track = self.track_rect(rect);
        painter.fill_rect(track, self.track_color);

        let thumb_cx = track.origin.x + self.normalized() * track.size.x;
        let fill_w = (thumb_cx - track.origin.x).max(0.0);
        if fill_w > 0.0 {
            painter.fill_rect(
                Rect::new(track.origin.x, track.origin.y, fill_w, track.size.y),
                self.fill_color,
            );
        }

        let thumb = Rect::new(
            thumb_cx - self.thumb_width * 0.5,
            rect.origin.y,
            self.thumb_width,
            rect.size.y,
        );
        let color = if self.dragging || painter.is_hovered(rect) {
            self.thumb_hover_color
        } else {
            self.thumb_color
        };
        painter.layer_above(|p| p.fill_rect(thumb, color));
    }
}

#[cfg(test)]
mod tests {
    use prism_engine::coords::Vec2;
    use prism_engine::scene::DrawList;
    use prism_engine::text::FontSystem;

    use super::*;

    const RECT: Rect = Rect::new(100.0, 50.0, 200.0, 24.0);

    fn pointer(x: f32, down: bool, pressed: bool, released: bool) -> PointerInput {
        PointerInput {
            pos: Some(Vec2::new(x, 60.0)),
            down,
            pressed,
            released,
        }
    }

    // ── value mapping ─────────────────────────────────────────────────────

    #[test]
    fn value_maps_linearly_across_the_rect() {
        let s = Slider::new(0.0, 2.0, 0.33);
        assert_eq!(s.value_at(RECT, 100.0), 0.0);
        assert_eq!(s.value_at(RECT, 200.0), 1.0);
        assert_eq!(s.value_at(RECT, 300.0), 2.0);
    }

    #[test]
    fn value_clamps_outside_the_rect() {
        let s = Slider::new(0.0, 1.0, 0.5);
        assert_eq!(s.value_at(RECT, -40.0), 0.0);
        assert_eq!(s.value_at(RECT, 900.0), 1.0);
    }

    #[test]
    fn constructor_clamps_initial_value() {
        assert_eq!(Slider::new(0.0, 1.0, 3.0).value(), 1.0);
        assert_eq!(Slider::new(0.0, 1.0, -2.0).value(), 0.0);
    }

    #[test]
    fn degenerate_range_normalizes_to_zero() {
        assert_eq!(Slider::new(1.0, 1.0, 1.0).normalized(), 0.0);
    }

    // ── dragging ──────────────────────────────────────────────────────────

    #[test]
    fn press_inside_starts_drag_and_sets_value() {
        let mut s = Slider::new(0.0, 1.0, 1.0);
        assert!(s.update(RECT, &pointer(150.0, true, true, false)));
        assert!(s.is_dragging());
        assert!((s.value() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn drag_follows_pointer_outside_the_rect() {
        let mut s = Slider::new(0.0, 2.0, 0.33);
        s.update(RECT, &pointer(200.0, true, true, false));
        s.update(RECT, &pointer(1000.0, true, false, false));
        assert_eq!(s.value(), 2.0);
        assert!(s.is_dragging());
    }

    #[test]
    fn release_ends_drag() {
        let mut s = Slider::new(0.0, 1.0, 0.0);
        s.update(RECT, &pointer(200.0, true, true, false));
        s.update(RECT, &pointer(250.0, false, false, true));
        assert!(!s.is_dragging());
        assert!((s.value() - 0.75).abs() < 1e-6);

        assert!(!s.update(RECT, &pointer(120.0, false, false, false)));
        assert!((s.value() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut s = Slider::new(0.0, 1.0, 0.5);
        let outside = PointerInput {
            pos: Some(Vec2::new(150.0, 10.0)),
            down: true,
            pressed: true,
            released: false,
        };
        assert!(!s.update(RECT, &outside));
        assert!(!s.is_dragging());
        assert_eq!(s.value(), 0.5);
    }

    // ── painting ──────────────────────────────────────────────────────────

    #[test]
    fn paints_track_fill_and_thumb() {
        let s = Slider::new(0.0, 1.0, 0.5);
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut painter = Painter::new(&mut list, &fonts, None, PointerInput::default());

        s.paint(&mut painter, RECT);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn empty_slider_skips_fill() {
        let s = Slider::new(0.0, 1.0, 0.0);
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut painter = Painter::new(&mut list, &fonts, None, PointerInput::default());

        s.paint(&mut painter, RECT);
        assert_eq!(list.len(), 2);
    }
}
