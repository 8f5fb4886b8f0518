mod pixel_pos;
mod pixels_area;
mod pixels_iter;

pub use pixel_pos::PixelPos;
pub use pixels_area::PixelsArea;
pub use pixels_iter::PixelsIter;
