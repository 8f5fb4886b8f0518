use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPos { pub row: usize, pub col: usize }

impl PixelPos {
    pub fn new(row: usize, col: usize) -> Self {
        PixelPos { row, col }
    }
}

impl Add for PixelPos {
    type Output = PixelPos;

    fn add(self, rhs: Self) -> Self::Output {
        PixelPos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for PixelPos {
    type Output = PixelPos;

    fn sub(self, rhs: Self) -> Self::Output {
        PixelPos::new(self.row - rhs.row, self.col - rhs.col)
    }
}
