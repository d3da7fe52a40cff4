use prism_engine::coords::Rect;

use crate::painter::Painter;
use crate::pointer::PointerInput;

/// A row-sized overlay element.
pub trait Widget {
    /// Preferred height in logical pixels; the width comes from the layout.
    fn height(&self) -> f32;

    /// Applies pointer input. Returns `true` if the widget's value changed.
    fn update(&mut self, rect: Rect, pointer: &PointerInput) -> bool {
        let _ = (rect, pointer);
        false
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);
}
