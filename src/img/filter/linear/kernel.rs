use rayon::prelude::*;
use super::super::filter_option::BorderMode;
use super::super::super::{Matrix2D, PixelPos, PixelsArea};


/// Integer coefficients applied by correlation (the window is not flipped).
#[derive(Debug, Clone)]
pub struct LinearKernel {
    width: usize,
    height: usize,
    coeffs: Vec<i32>,
    border: BorderMode,
}

impl LinearKernel {
    pub fn with_coeffs(coeffs: Vec<i32>, width: usize, height: usize, border: BorderMode) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        assert_eq!(coeffs.len(), width * height);

        LinearKernel { width, height, coeffs, border }
    }

    pub fn scharr_dx() -> Self {
        let coeffs: Vec<i32> = vec![
            -3, 0, 3,
            -10, 0, 10,
            -3, 0, 3,
        ];
        LinearKernel::with_coeffs(coeffs, 3, 3, BorderMode::Reflect101)
    }

    pub fn scharr_dy() -> Self {
        let coeffs: Vec<i32> = vec![
            -3, -10, -3,
            0, 0, 0,
            3, 10, 3,
        ];
        LinearKernel::with_coeffs(coeffs, 3, 3, BorderMode::Reflect101)
    }

    pub fn w(&self) -> usize { self.width }
    pub fn h(&self) -> usize { self.height }

    /// Signed response of the kernel at every sample, saturated to `i16`.
    pub fn correlate(&self, plane: &Matrix2D<u8>) -> Matrix2D<i16> {
        let half = PixelPos::new(self.height / 2, self.width / 2);
        let plane_ext = plane.extended(self.border, half.col, half.row, half.col, half.row);
        let window_area = PixelsArea::with_size(self.height, self.width);

        let mut res = Matrix2D::<i16>::empty_size_of(plane);

        res.pixels_mut()
            .par_chunks_mut(plane.w())
            .enumerate()
            .for_each(|(row, row_res)| {
                for (col, res_val) in row_res.iter_mut().enumerate() {
                    let pos_im = PixelPos::new(row, col);

                    let mut sum = 0_i32;
                    for pos_w in window_area.get_pixels_iter() {
                        let coeff = self.coeffs[pos_w.row * self.width + pos_w.col];
                        sum += coeff * plane_ext[pos_im + pos_w] as i32;
                    }

                    *res_val = sum.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
                }
            });

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_kernel() {
        let plane = Matrix2D::<u8>::with_pixels(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let kernel = LinearKernel::with_coeffs(
            vec![0, 0, 0, 0, 1, 0, 0, 0, 0], 3, 3, BorderMode::Constant(0));

        assert_eq!(kernel.correlate(&plane).pixels(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn correlation_is_not_flipped() {
        // picks the right neighbour
        let plane = Matrix2D::<u8>::with_pixels(3, 1, vec![10, 20, 30]).unwrap();
        let kernel = LinearKernel::with_coeffs(vec![0, 0, 1], 3, 1, BorderMode::Constant(0));

        assert_eq!(kernel.correlate(&plane).pixels(), &[20, 30, 0]);
    }

    #[test]
    fn scharr_extremes_fit_i16() {
        // left half black, right half white
        let plane = Matrix2D::<u8>::with_pixels(4, 1, vec![0, 0, 255, 255]).unwrap();
        let dx = LinearKernel::scharr_dx().correlate(&plane);

        assert_eq!(dx.pixels(), &[0, 16 * 255, 16 * 255, 0]);
        assert_eq!(LinearKernel::scharr_dy().correlate(&plane).pixels(), &[0, 0, 0, 0]);
    }
}
