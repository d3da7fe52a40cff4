use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded overlay draw stream for one frame.
///
/// `push()` is O(1); paint-order iteration reuses an internal index buffer, so
/// a warmed-up list does not allocate per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn rect_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Rect(r) => r.rect.origin.x,
            DrawCmd::Text(_) => f32::NAN,
        }
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex(1), Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        list.push_rect(ZIndex(0), Rect::new(1.0, 0.0, 1.0, 1.0), Color::WHITE);
        list.push_rect(ZIndex(1), Rect::new(2.0, 0.0, 1.0, 1.0), Color::WHITE);
        list.push_rect(ZIndex(0), Rect::new(3.0, 0.0, 1.0, 1.0), Color::WHITE);

        let xs: Vec<f32> = list.iter_in_paint_order().map(rect_x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push_rect(ZIndex(0), Rect::new(5.0, 0.0, 1.0, 1.0), Color::WHITE);
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn zindex_above_saturates() {
        assert_eq!(ZIndex(3).above(), ZIndex(4));
        assert_eq!(ZIndex(i32::MAX).above(), ZIndex(i32::MAX));
    }
}
