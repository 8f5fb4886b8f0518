use super::{PixelPos, PixelsArea};

/// Row-major walk over every position of an area.
pub struct PixelsIter<'area> {
    area: &'area PixelsArea,
    cur_pos: PixelPos,
}

impl<'area> PixelsIter<'area> {
    pub fn for_area(area: &'area PixelsArea) -> Self {
        PixelsIter {
            area,
            cur_pos: area.top_left(),
        }
    }
}

impl<'area> Iterator for PixelsIter<'area> {
    type Item = PixelPos;

    fn next(&mut self) -> Option<PixelPos> {
        let curr = self.cur_pos;

        if !self.area.contains(curr) {
            return None;
        }

        self.cur_pos.col += 1;

        if self.cur_pos.col > self.area.bottom_right().col {
            self.cur_pos.col = self.area.top_left().col;
            self.cur_pos.row += 1;
        }

        Some(curr)
    }
}
