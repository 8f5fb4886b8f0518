use super::*;


/// Single-channel plane of samples, row-major, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix2D<T> {
    width: usize,
    height: usize,
    pixels: Vec<T>,
}

impl<T> Matrix2D<T> {
    pub fn w(&self) -> usize { self.width }
    pub fn h(&self) -> usize { self.height }

    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [T] {
        &mut self.pixels
    }
}

impl<T: Copy + Default + From<u8>> Matrix2D<T> {
    pub fn empty_with_size(width: usize, height: usize) -> Self {
        let pixels = vec![T::default(); width * height];
        Matrix2D { width, height, pixels }
    }

    pub fn empty_size_of<U>(other: &Matrix2D<U>) -> Self {
        Self::empty_with_size(other.w(), other.h())
    }

    pub fn with_pixels(width: usize, height: usize, pixels: Vec<T>) -> Result<Self, MyError> {
        if pixels.len() != width * height {
            return Err(MyError::new(format!(
                "Plane {}x{} needs {} samples, got {}",
                height, width, width * height, pixels.len())));
        }
        Ok(Matrix2D { width, height, pixels })
    }

    pub fn extended_for_window_filter<F: WindowFilter>(&self, filter: &F) -> Matrix2D<T> {
        let left = filter.w() / 2;
        let top = filter.h() / 2;

        self.extended(filter.get_border_mode(), left, top, left, top)
    }

    /// Copy of the plane with margins filled according to `border`.
    pub fn extended(
        &self,
        border: BorderMode,
        left: usize, top: usize, right: usize, bottom: usize
    ) -> Matrix2D<T> {
        let mut mat_ext = Matrix2D::<T>::empty_with_size(left + self.w() + right, top + self.h() + bottom);

        let fill = match border {
            BorderMode::Constant(val) => T::from(val),
            _ => T::default(),
        };

        for row_ext in 0..mat_ext.h() {
            let row_src = border.resolve(row_ext as isize - top as isize, self.h());

            for col_ext in 0..mat_ext.w() {
                let col_src = border.resolve(col_ext as isize - left as isize, self.w());

                let pos_ext = PixelPos::new(row_ext, col_ext);
                mat_ext[pos_ext] = match (row_src, col_src) {
                    (Some(row), Some(col)) => self[PixelPos::new(row, col)],
                    _ => fill,
                };
            }
        }

        mat_ext
    }
}

impl<T> Index<PixelPos> for Matrix2D<T> {
    type Output = T;

    fn index(&self, index: PixelPos) -> &Self::Output {
        if index.col >= self.width || index.row >= self.height {
            panic!("pos is {:?} which doesn't fit into {}x{}", index, self.height, self.width);
        }
        &self.pixels[index.row * self.width + index.col]
    }
}

impl<T> IndexMut<PixelPos> for Matrix2D<T> {
    fn index_mut(&mut self, index: PixelPos) -> &mut Self::Output {
        if index.col >= self.width || index.row >= self.height {
            panic!("pos is {:?} which doesn't fit into {}x{}", index, self.height, self.width);
        }
        &mut self.pixels[index.row * self.width + index.col]
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    fn mat_1234() -> Matrix2D<u8> {
        // 1 2
        // 3 4
        Matrix2D::with_pixels(2, 2, vec![1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn with_pixels_checks_len() {
        assert!(Matrix2D::<u8>::with_pixels(2, 3, vec![0; 5]).is_err());
        assert!(Matrix2D::<i16>::with_pixels(2, 3, vec![0; 6]).is_ok());
    }

    #[test]
    fn extended_replicate() {
        let ext = mat_1234().extended(BorderMode::Replicate, 1, 1, 1, 1);
        assert_eq!(ext.w(), 4);
        assert_eq!(ext.h(), 4);
        assert_eq!(ext.pixels(), &[
            1, 1, 2, 2,
            1, 1, 2, 2,
            3, 3, 4, 4,
            3, 3, 4, 4,
        ]);
    }

    #[test]
    fn extended_reflect101() {
        let ext = mat_1234().extended(BorderMode::Reflect101, 1, 0, 1, 0);
        assert_eq!(ext.pixels(), &[
            2, 1, 2, 1,
            4, 3, 4, 3,
        ]);
    }

    #[test]
    fn extended_constant() {
        let ext = mat_1234().extended(BorderMode::Constant(9), 0, 1, 0, 0);
        assert_eq!(ext.pixels(), &[
            9, 9,
            1, 2,
            3, 4,
        ]);
    }

    #[test]
    #[should_panic(expected = "doesn't fit")]
    fn index_out_of_plane() {
        let mat = mat_1234();
        let _ = mat[PixelPos::new(0, 2)];
    }
}
