use rayon::prelude::*;
use crate::my_err::MyError;
use super::super::super::*;
use super::super::filter_trait::*;
use super::super::*;


/// Replaces every block of the image with its mean color.
#[derive(Clone)]
pub struct Mosaic {
    block_size: BlockSize,
    name: String
}

impl Mosaic {
    pub const DEFAULT_BLOCK_SIZE: usize = 10;

    pub fn new(block_size: BlockSize) -> Self {
        Mosaic { block_size, name: "Mosaic".to_string() }
    }

    pub fn with_block_size(block_size: usize) -> Result<Self, MyError> {
        Ok(Mosaic::new(BlockSize::new(block_size)?))
    }

    pub fn block_size(&self) -> usize { self.block_size.value }
}

impl Filter for Mosaic {
    fn process(&self, img: &Img) -> Result<Img, MyError> {
        tracing::debug!(
            rows = img.h(),
            cols = img.w(),
            channels = img.d(),
            block_size = self.block_size(),
            "Applying mosaic"
        );
        process_each_layer(img, self)
    }

    fn get_description(&self) -> String { format!("{} {}x{}", &self.name, self.block_size(), self.block_size()) }

    fn params_to_string(&self) -> Option<String> {
        Some(self.block_size.content_to_string())
    }
}

impl Default for Mosaic {
    fn default() -> Self {
        Mosaic::new(BlockSize::default())
    }
}

impl ByLayer for Mosaic {
    fn process_layer(&self, layer: &Matrix2D<u8>) -> Matrix2D<u8> {
        let block_size = self.block_size();
        let (width, height) = (layer.w(), layer.h());

        let mut mat_res = Matrix2D::<u8>::empty_size_of(layer);

        // one chunk is one row of blocks
        mat_res.pixels_mut()
            .par_chunks_mut(block_size.saturating_mul(width))
            .enumerate()
            .for_each(|(blocks_row, rows_res)| {
                let top = blocks_row * block_size;

                for left in (0..width).step_by(block_size) {
                    let block = PixelsArea::clipped_block(PixelPos::new(top, left), block_size, height, width);

                    let sum: u64 = block.get_pixels_iter()
                        .map(|pos| layer[pos] as u64)
                        .sum();
                    let mean = saturate_u8(sum as f64 / block.pixels_count() as f64);

                    for pos in block.get_pixels_iter() {
                        rows_res[(pos.row - top) * width + pos.col] = mean;
                    }
                }
            });

        mat_res
    }
}
