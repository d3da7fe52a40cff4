/// Position of a packed glyph inside the atlas, in texels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AtlasSlot {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl AtlasSlot {
    /// Normalized `(uv_min, uv_max)` for an atlas of `size × size` texels.
    pub fn uv(self, size: u32) -> ([f32; 2], [f32; 2]) {
        let s = size as f32;
        (
            [self.x as f32 / s, self.y as f32 / s],
            [(self.x + self.w) as f32 / s, (self.y + self.h) as f32 / s],
        )
    }
}

/// Shelf packer for a square glyph atlas.
///
/// Glyphs are placed left to right along the current shelf; a glyph that does
/// not fit opens a new shelf below the tallest glyph of the previous one.
/// Once a glyph no longer fits vertically the atlas is marked full and every
/// later allocation fails.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    size: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl GlyphAtlas {
    pub fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            full: false,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn allocate(&mut self, w: u32, h: u32) -> Option<AtlasSlot> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + self.padding > self.size {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }

        if self.cursor_x + w + self.padding > self.size
            || self.cursor_y + h + self.padding > self.size
        {
            self.full = true;
            return None;
        }

        let slot = AtlasSlot {
            x: self.cursor_x,
            y: self.cursor_y,
            w,
            h,
        };

        self.cursor_x += w + self.padding;
        self.row_height = self.row_height.max(h);

        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_along_a_shelf() {
        let mut atlas = GlyphAtlas::new(64, 1);
        let a = atlas.allocate(10, 12).unwrap();
        let b = atlas.allocate(8, 5).unwrap();

        assert_eq!(a, AtlasSlot { x: 1, y: 1, w: 10, h: 12 });
        assert_eq!(b, AtlasSlot { x: 12, y: 1, w: 8, h: 5 });
    }

    #[test]
    fn wraps_below_tallest_glyph() {
        let mut atlas = GlyphAtlas::new(32, 1);
        atlas.allocate(20, 7).unwrap();
        let next = atlas.allocate(20, 4).unwrap();

        assert_eq!((next.x, next.y), (1, 9));
    }

    #[test]
    fn full_atlas_rejects_everything_after() {
        let mut atlas = GlyphAtlas::new(16, 1);
        assert!(atlas.allocate(14, 14).is_some());
        assert!(atlas.allocate(14, 14).is_none());
        assert!(atlas.is_full());
        assert!(atlas.allocate(1, 1).is_none());
    }

    #[test]
    fn glyph_wider_than_atlas_is_rejected() {
        let mut atlas = GlyphAtlas::new(16, 1);
        assert!(atlas.allocate(40, 2).is_none());
    }

    #[test]
    fn uv_normalizes_by_atlas_size() {
        let slot = AtlasSlot { x: 16, y: 32, w: 16, h: 32 };
        assert_eq!(slot.uv(64), ([0.25, 0.5], [0.5, 1.0]));
    }
}
