use super::{PixelPos, PixelsIter};


/// Rectangle of pixels, both corners included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelsArea {
    top_left: PixelPos,
    bottom_right: PixelPos
}

impl PixelsArea {
    pub fn new(top_left: PixelPos, bottom_right: PixelPos) -> Self {
        assert!(top_left.row <= bottom_right.row);
        assert!(top_left.col <= bottom_right.col);
        PixelsArea { top_left, bottom_right }
    }

    pub fn with_size(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0);
        PixelsArea::new(
            PixelPos::new(0, 0),
            PixelPos::new(height - 1, width - 1))
    }

    pub fn with_pos(self, top_left_row: usize, top_left_col: usize) -> Self {
        let top_left = PixelPos::new(top_left_row, top_left_col);
        PixelsArea::new(
            top_left,
            top_left + self.bottom_right - self.top_left)
    }

    /// Block of `block_size` x `block_size` starting at `top_left`, clipped
    /// to an image of `height` x `width`.
    pub fn clipped_block(top_left: PixelPos, block_size: usize, height: usize, width: usize) -> Self {
        assert!(block_size > 0);
        assert!(top_left.row < height && top_left.col < width);

        let h = block_size.min(height - top_left.row);
        let w = block_size.min(width - top_left.col);

        PixelsArea::with_size(h, w).with_pos(top_left.row, top_left.col)
    }

    pub fn contains(&self, pos: PixelPos) -> bool {
        self.top_left.row <= pos.row && pos.row <= self.bottom_right.row
        && self.top_left.col <= pos.col && pos.col <= self.bottom_right.col
    }


    pub fn top_left(&self) -> PixelPos {
        self.top_left
    }
    pub fn bottom_right(&self) -> PixelPos {
        self.bottom_right
    }

    pub fn w(&self) -> usize { self.bottom_right.col - self.top_left.col + 1 }
    pub fn h(&self) -> usize { self.bottom_right.row - self.top_left.row + 1 }

    pub fn pixels_count(&self) -> usize { self.w() * self.h() }


    pub fn get_pixels_iter(&self) -> PixelsIter {
        PixelsIter::for_area(self)
    }
}
