use super::{ColorDepth, Img, Matrix2D, PixelPos};

// 0.299, 0.587, 0.114 scaled by 2^14
const RGB_2_GRAY_RED: u32 = 4899;
const RGB_2_GRAY_GREEN: u32 = 9617;
const RGB_2_GRAY_BLUE: u32 = 1868;
const RGB_2_GRAY_SHIFT: u32 = 14;

/// Luminance plane of an image. Gray images are copied as is.
pub fn rgb_to_gray(img: &Img) -> Matrix2D<u8> {
    match img.color_depth() {
        ColorDepth::L8 => img.layer(0),
        ColorDepth::Rgb8 => {
            let mut grayed_layer = Matrix2D::<u8>::empty_with_size(img.w(), img.h());

            for pos in img.get_area().get_pixels_iter() {
                let (r, g, b) = (img[pos][0] as u32, img[pos][1] as u32, img[pos][2] as u32);

                let gray = (r * RGB_2_GRAY_RED
                    + g * RGB_2_GRAY_GREEN
                    + b * RGB_2_GRAY_BLUE
                    + (1 << (RGB_2_GRAY_SHIFT - 1))) >> RGB_2_GRAY_SHIFT;

                grayed_layer[pos] = gray.min(255) as u8;
            }

            grayed_layer
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        let pixels = vec![
            255, 0, 0,
            0, 255, 0,
            0, 0, 255,
            255, 255, 255,
        ];
        let img = Img::new(4, 1, ColorDepth::Rgb8, pixels).unwrap();

        let gray = rgb_to_gray(&img);
        assert_eq!(gray[PixelPos::new(0, 0)], 76);
        assert_eq!(gray[PixelPos::new(0, 1)], 150);
        assert_eq!(gray[PixelPos::new(0, 2)], 29);
        assert_eq!(gray[PixelPos::new(0, 3)], 255);
    }

    #[test]
    fn gray_is_copied() {
        let img = Img::new(2, 1, ColorDepth::L8, vec![7, 9]).unwrap();
        assert_eq!(rgb_to_gray(&img).pixels(), &[7, 9]);
    }
}
