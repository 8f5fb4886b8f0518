use super::super::super::*;
use super::super::filter_trait::*;
use super::super::*;
use crate::my_err::MyError;

#[derive(Clone)]
pub struct MedianFilter {
    size: FilterWindowSize,
    border: BorderMode,
    name: String,
}

impl MedianFilter {
    pub const DEFAULT_KSIZE: usize = 5;

    pub fn new(size: FilterWindowSize, border: BorderMode) -> Result<Self, MyError> {
        let size = size
            .check_size_be_1()?
            .check_w_equals_h()?
            .check_w_h_odd()?;

        Ok(MedianFilter {
            size,
            border,
            name: "Median blur".to_string(),
        })
    }

    pub fn with_ksize(ksize: usize) -> Result<Self, MyError> {
        MedianFilter::new(FilterWindowSize::new(ksize, ksize), BorderMode::Replicate)
    }
}

impl WindowFilter for MedianFilter {
    fn process_window(&self, window_buffer: &mut [u8]) -> u8 {
        let mut hist_buffer = [0_usize; PIXEL_VALUES_COUNT];

        for val in window_buffer.iter() {
            hist_buffer[*val as usize] += 1_usize;
        }

        // the median is the value at index len / 2 of the sorted window
        let mut values_until_median = window_buffer.len() / 2;
        let mut bin_ind = 0_usize;
        while bin_ind < hist_buffer.len() && values_until_median >= hist_buffer[bin_ind] {
            values_until_median -= hist_buffer[bin_ind];
            bin_ind += 1;
        }

        bin_ind.min(PIXEL_VALUES_COUNT - 1) as u8
    }

    fn w(&self) -> usize {
        self.size.width
    }

    fn h(&self) -> usize {
        self.size.height
    }

    fn get_border_mode(&self) -> BorderMode {
        self.border
    }
}

impl Filter for MedianFilter {
    fn process(&self, img: &Img) -> Result<Img, MyError> {
        tracing::debug!(
            rows = img.h(),
            cols = img.w(),
            channels = img.d(),
            ksize = self.w(),
            "Applying median blur"
        );
        process_each_layer(img, self)
    }

    fn get_description(&self) -> String {
        format!("{} {}x{}", &self.name, self.h(), self.w())
    }

    fn params_to_string(&self) -> Option<String> {
        let params_str = format!(
            "{}\n{}",
            self.size.content_to_string(),
            self.border.content_to_string()
        );
        Some(params_str)
    }
}

impl Default for MedianFilter {
    fn default() -> Self {
        MedianFilter {
            size: FilterWindowSize::new(Self::DEFAULT_KSIZE, Self::DEFAULT_KSIZE),
            border: BorderMode::Replicate,
            name: "Median blur".to_string(),
        }
    }
}

impl ByLayer for MedianFilter {
    fn process_layer(&self, layer: &Matrix2D<u8>) -> Matrix2D<u8> {
        process_with_window(layer, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_median() {
        let filter = MedianFilter::default();
        assert_eq!(filter.process_window(&mut [0, 0, 255]), 0);
        assert_eq!(filter.process_window(&mut [0, 255, 255]), 255);
        assert_eq!(filter.process_window(&mut [9, 3, 7, 1, 5]), 5);
        assert_eq!(filter.process_window(&mut [200; 9]), 200);
    }

    #[test]
    fn lonely_bright_pixel_disappears() {
        let pixels = vec![
            0, 0, 0,
            0, 255, 0,
            0, 0, 0,
        ];
        let img = Img::new(3, 3, ColorDepth::L8, pixels).unwrap();

        let res = MedianFilter::default().process(&img).unwrap();

        assert_eq!(res[PixelPos::new(1, 1)], [0]);
        assert_eq!(res.to_packed(), vec![0; 9]);
    }

    #[test]
    fn uniform_image_is_unchanged() {
        let img = Img::filled(13, 7, ColorDepth::Rgb8, &[12, 140, 250]).unwrap();
        let res = MedianFilter::default().process(&img).unwrap();
        assert_eq!(res, img);
    }

    #[test]
    fn ksize_1_is_identity() {
        let pixels: Vec<u8> = (0..6 * 5 * 3).map(|v| (v * 37 % 256) as u8).collect();
        let img = Img::new(6, 5, ColorDepth::Rgb8, pixels).unwrap();

        let res = MedianFilter::with_ksize(1).unwrap().process(&img).unwrap();
        assert_eq!(res, img);
    }

    #[test]
    fn replicated_border() {
        let img = Img::new(5, 1, ColorDepth::L8, vec![5, 1, 4, 2, 3]).unwrap();

        let res = MedianFilter::with_ksize(3).unwrap().process(&img).unwrap();

        assert_eq!(res.to_packed(), vec![5, 4, 2, 3, 3]);
    }

    #[test]
    fn salt_noise_is_removed() {
        let mut img = Img::filled(5, 5, ColorDepth::Rgb8, &[50, 60, 70]).unwrap();
        img[PixelPos::new(2, 2)].copy_from_slice(&[255, 0, 255]);
        img[PixelPos::new(0, 4)].copy_from_slice(&[0, 255, 0]);

        let res = MedianFilter::with_ksize(3).unwrap().process(&img).unwrap();

        let expected = Img::filled(5, 5, ColorDepth::Rgb8, &[50, 60, 70]).unwrap();
        assert_eq!(res, expected);
    }

    #[test]
    fn even_or_zero_ksize() {
        assert!(MedianFilter::with_ksize(4).is_err());
        assert!(MedianFilter::with_ksize(0).is_err());
        assert!(MedianFilter::new(FilterWindowSize::new(3, 5), BorderMode::Replicate).is_err());
    }

    #[test]
    fn params_string() {
        let filter = MedianFilter::default();
        assert_eq!(filter.get_description(), "Median blur 5x5");
        assert_eq!(filter.params_to_string(), Some("5 x 5\nBorder: replicate".to_string()));

        let filter = MedianFilter::new(FilterWindowSize::new(3, 3), BorderMode::Reflect101).unwrap();
        assert_eq!(filter.params_to_string(), Some("3 x 3\nBorder: reflect101".to_string()));
        assert_eq!(filter.get_border_mode(), BorderMode::Reflect101);
    }
}
