use prism_engine::coords::{Rect, Viewport};

use crate::painter::Painter;
use crate::pointer::PointerInput;
use crate::widget::Widget;

/// Vertical stack of full-width rows anchored to the bottom of the window.
///
/// Rows keep their given order top to bottom; the last row sits `padding`
/// above the bottom edge and every row is inset by `padding` horizontally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Panel {
    pub padding: f32,
    pub spacing: f32,
    /// Rows never grow wider than this, and are centered when narrower than the window.
    pub max_width: f32,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            padding: 16.0,
            spacing: 10.0,
            max_width: 480.0,
        }
    }
}

impl Panel {
    /// Row rects for the given row heights, top to bottom.
    pub fn layout(&self, viewport: Viewport, heights: &[f32]) -> Vec<Rect> {
        let avail = (viewport.width - 2.0 * self.padding).max(0.0);
        let width = avail.min(self.max_width);
        let x = self.padding + (avail - width) * 0.5;

        let gaps = heights.len().saturating_sub(1) as f32 * self.spacing;
        let total: f32 = heights.iter().sum::<f32>() + gaps;

        let mut y = viewport.height - self.padding - total;
        heights
            .iter()
            .map(|&h| {
                let row = Rect::new(x, y, width, h);
                y += h + self.spacing;
                row
            })
            .collect()
    }

    /// Lays out, updates and paints `widgets`. Returns `true` if any value changed.
    pub fn show(
        &self,
        viewport: Viewport,
        pointer: &PointerInput,
        painter: &mut Painter<'_>,
        widgets: &mut [&mut dyn Widget],
    ) -> bool {
        let heights: Vec<f32> = widgets.iter().map(|w| w.height()).collect();
        let rects = self.layout(viewport, &heights);

        let mut changed = false;
        for (widget, rect) in widgets.iter_mut().zip(rects) {
            changed |= widget.update(rect, pointer);
            widget.paint(painter, rect);
        }
        changed
    }
}
