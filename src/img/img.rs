use std::path::Path;
use fltk::{enums::ColorDepth as FlColorDepth, image as fl_image, prelude::ImageExt};
use super::*;

pub const JPEG_QUALITY: u8 = 100;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// One intensity sample per pixel.
    L8,
    /// Three color samples per pixel in stored order (R, G, B).
    Rgb8,
}

impl ColorDepth {
    pub fn channels(&self) -> usize {
        match self {
            ColorDepth::L8 => 1,
            ColorDepth::Rgb8 => 3,
        }
    }
}


/// Raster image owning one row-major buffer of interleaved 8-bit samples.
///
/// A row starts every `stride` bytes and holds `width * channels` meaningful
/// bytes; the rest of the stride is padding. An `Img` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Img {
    width: usize,
    height: usize,
    stride: usize,
    color_depth: ColorDepth,
    pixels: Vec<u8>,
}

impl Img {
    pub fn new(width: usize, height: usize, color_depth: ColorDepth, pixels: Vec<u8>) -> Result<Self, MyError> {
        let row_len = Self::row_len(width, color_depth)?;
        Self::with_stride(width, height, row_len, color_depth, pixels)
    }

    pub fn with_stride(
        width: usize, height: usize, stride: usize,
        color_depth: ColorDepth, pixels: Vec<u8>
    ) -> Result<Self, MyError> {
        if width == 0 || height == 0 {
            return Err(MyError::new(format!("Image is empty: {} (rows) x {} (cols)", height, width)));
        }

        let row_len = Self::row_len(width, color_depth)?;
        if stride < row_len {
            return Err(MyError::new(format!("Row stride {} is less than row length {}", stride, row_len)));
        }

        let needed = stride.checked_mul(height - 1)
            .and_then(|len| len.checked_add(row_len))
            .ok_or_else(|| MyError::new(format!(
                "Image {} (rows) x {} (cols) with stride {} is too large", height, width, stride)))?;
        if pixels.len() < needed {
            return Err(MyError::new(format!("Image buffer has {} bytes, {} needed", pixels.len(), needed)));
        }

        Ok(Img { width, height, stride, color_depth, pixels })
    }

    pub fn filled(width: usize, height: usize, color_depth: ColorDepth, color: &[u8]) -> Result<Self, MyError> {
        if color.len() != color_depth.channels() {
            return Err(MyError::new(format!(
                "Fill color has {} channels, image has {}", color.len(), color_depth.channels())));
        }
        let pixels_count = width.checked_mul(height)
            .filter(|count| count.checked_mul(color.len()).is_some())
            .ok_or_else(|| MyError::new(format!("Image {} (rows) x {} (cols) is too large", height, width)))?;
        Self::new(width, height, color_depth, color.repeat(pixels_count))
    }

    fn row_len(width: usize, color_depth: ColorDepth) -> Result<usize, MyError> {
        width.checked_mul(color_depth.channels())
            .ok_or_else(|| MyError::new(format!("Image row of {} pixels is too long", width)))
    }

    /// Interleaves planes of equal size into an image.
    pub fn from_layers(layers: Vec<Matrix2D<u8>>, color_depth: ColorDepth) -> Result<Self, MyError> {
        if layers.len() != color_depth.channels() {
            return Err(MyError::new(format!(
                "{} layers given for an image with {} channels", layers.len(), color_depth.channels())));
        }

        let (width, height) = (layers[0].w(), layers[0].h());
        if layers.iter().any(|l| l.w() != width || l.h() != height) {
            return Err(MyError::new("Layers have different sizes".to_string()));
        }

        let d = layers.len();
        let mut pixels = vec![0_u8; width * height * d];
        for (ch_num, layer) in layers.iter().enumerate() {
            for (pix_num, val) in layer.pixels().iter().enumerate() {
                pixels[pix_num * d + ch_num] = *val;
            }
        }

        Self::new(width, height, color_depth, pixels)
    }

    pub fn w(&self) -> usize { self.width }
    pub fn h(&self) -> usize { self.height }
    pub fn d(&self) -> usize { self.color_depth.channels() }
    pub fn color_depth(&self) -> ColorDepth { self.color_depth }

    pub fn get_area(&self) -> PixelsArea {
        PixelsArea::with_size(self.h(), self.w())
    }

    fn offset(&self, pos: PixelPos) -> usize {
        if pos.col >= self.width || pos.row >= self.height {
            panic!("pos is {:?} which doesn't fit into {}x{}", pos, self.height, self.width);
        }
        pos.row * self.stride + pos.col * self.d()
    }

    pub fn pixel(&self, pos: PixelPos) -> &[u8] {
        let offset = self.offset(pos);
        &self.pixels[offset..offset + self.d()]
    }

    pub fn pixel_mut(&mut self, pos: PixelPos) -> &mut [u8] {
        let offset = self.offset(pos);
        let d = self.d();
        &mut self.pixels[offset..offset + d]
    }

    /// Meaningful bytes of a row, padding excluded.
    pub fn row(&self, row: usize) -> &[u8] {
        let offset = self.offset(PixelPos::new(row, 0));
        &self.pixels[offset..offset + self.width * self.d()]
    }

    pub fn layer(&self, ch_num: usize) -> Matrix2D<u8> {
        assert!(ch_num < self.d());

        let mut layer = Matrix2D::<u8>::empty_with_size(self.width, self.height);
        for (row, layer_row) in layer.pixels_mut().chunks_exact_mut(self.width).enumerate() {
            let src = self.row(row).iter().skip(ch_num).step_by(self.d());
            for (dst, val) in layer_row.iter_mut().zip(src) {
                *dst = *val;
            }
        }

        layer
    }

    pub fn layers(&self) -> Vec<Matrix2D<u8>> {
        (0..self.d()).map(|ch_num| self.layer(ch_num)).collect()
    }

    /// Pixel bytes without row padding.
    pub fn to_packed(&self) -> Vec<u8> {
        if self.stride == self.width * self.d() {
            return self.pixels[..self.stride * self.height].to_vec();
        }

        let mut packed = Vec::<u8>::with_capacity(self.width * self.height * self.d());
        for row in 0..self.height {
            packed.extend_from_slice(self.row(row));
        }
        packed
    }

    /// Decodes a PNG/JPEG/BMP file into a 3-channel image.
    pub fn load_as_rgb(path: &Path) -> Result<Self, MyError> {
        if !path.exists() {
            return Err(MyError::new(format!("File '{}' not found", path.display())));
        }

        let im = fl_image::SharedImage::load(path)?;
        Self::from_fltk_as_rgb(&im)
    }

    pub fn from_fltk_as_rgb<T: ImageExt>(im: &T) -> Result<Self, MyError> {
        if im.data_w() <= 0 || im.data_h() <= 0 {
            return Err(MyError::new("Loaded image has no pixels".to_string()));
        }

        let width = im.data_w() as usize;
        let height = im.data_h() as usize;
        let src_depth = im.depth();
        let src_channels = src_depth as u8 as usize;
        let all_pixels: Vec<u8> = im.to_rgb_data();

        if all_pixels.len() < width * height * src_channels {
            return Err(MyError::new(format!(
                "Loaded image has {} bytes, {} expected", all_pixels.len(), width * height * src_channels)));
        }

        let mut pixels = Vec::<u8>::with_capacity(width * height * 3);
        for src in all_pixels.chunks_exact(src_channels).take(width * height) {
            match src_depth {
                FlColorDepth::L8 | FlColorDepth::La8 => pixels.extend_from_slice(&[src[0], src[0], src[0]]),
                FlColorDepth::Rgb8 | FlColorDepth::Rgba8 => pixels.extend_from_slice(&src[..3]),
            }
        }

        Self::new(width, height, ColorDepth::Rgb8, pixels)
    }

    pub fn get_drawable_copy(&self) -> Result<fl_image::RgbImage, MyError> {
        let depth = match self.color_depth {
            ColorDepth::L8 => FlColorDepth::L8,
            ColorDepth::Rgb8 => FlColorDepth::Rgb8,
        };

        let im_rgb = fl_image::RgbImage::new(
            &self.to_packed(),
            self.width as i32, self.height as i32, depth)?;

        Ok(im_rgb)
    }

    pub fn try_save(&self, path: &Path) -> Result<(), MyError> {
        use jpeg_encoder::{Encoder, ColorType};

        if self.width > u16::MAX as usize || self.height > u16::MAX as usize {
            return Err(MyError::new(format!(
                "Image {}x{} is too large for JPEG", self.height, self.width)));
        }

        let color_type = match self.color_depth {
            ColorDepth::L8 => ColorType::Luma,
            ColorDepth::Rgb8 => ColorType::Rgb,
        };

        let encoder = Encoder::new_file(path, JPEG_QUALITY)?;
        encoder.encode(&self.to_packed(), self.width as u16, self.height as u16, color_type)?;

        Ok(())
    }
}

impl Index<PixelPos> for Img {
    type Output = [u8];

    fn index(&self, index: PixelPos) -> &Self::Output {
        self.pixel(index)
    }
}

impl IndexMut<PixelPos> for Img {
    fn index_mut(&mut self, index: PixelPos) -> &mut Self::Output {
        self.pixel_mut(index)
    }
}
