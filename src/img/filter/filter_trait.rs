use crate::my_err::MyError;

use super::filter_option::BorderMode;
use super::super::{Img, Matrix2D, PixelsArea};

pub trait Filter : Send + Sync {
    fn process(&self, img: &Img) -> Result<Img, MyError>;
    fn get_description(&self) -> String;
    /// Parameters as text lines, `None` for filters without parameters.
    fn params_to_string(&self) -> Option<String>;
}

/// Filter computing each output sample from the window around it.
pub trait WindowFilter : Filter {
    fn process_window(&self, window_buffer: &mut [u8]) -> u8;
    fn w(&self) -> usize;
    fn h(&self) -> usize;
    fn get_border_mode(&self) -> BorderMode;

    fn get_window_area(&self) -> PixelsArea {
        PixelsArea::with_size(self.h(), self.w())
    }
}

/// Filter that treats every channel as an independent plane.
pub trait ByLayer {
    fn process_layer(&self, layer: &Matrix2D<u8>) -> Matrix2D<u8>;
}
