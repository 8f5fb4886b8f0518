pub mod filter_option;
pub mod filter_trait;
pub mod linear;
pub mod non_linear;

use std::convert::TryFrom;
use rayon::prelude::*;
use self::filter_trait::{ByLayer, Filter, WindowFilter};
use crate::{
    img::{Img, Matrix2D, PixelPos},
    my_err::MyError,
};

pub use self::{linear::*, non_linear::*};

pub type FilterBase = Box<dyn Filter>;


/// Filter chosen by the user, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    Mosaic { block_size: usize },
    MedianBlur { ksize: usize },
    Scharr,
}

impl FilterKind {
    pub const NAMES: [&'static str; 3] = ["Mosaic", "Median blur", "Scharr operator"];

    /// Looks a filter up by its human-readable name.
    pub fn with_name(name: &str, block_size: usize) -> Option<Self> {
        match name {
            "Mosaic" => Some(FilterKind::Mosaic { block_size }),
            "Median blur" => Some(FilterKind::MedianBlur { ksize: MedianFilter::DEFAULT_KSIZE }),
            "Scharr operator" => Some(FilterKind::Scharr),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Mosaic { .. } => Self::NAMES[0],
            FilterKind::MedianBlur { .. } => Self::NAMES[1],
            FilterKind::Scharr => Self::NAMES[2],
        }
    }
}

impl Default for FilterKind {
    fn default() -> Self {
        FilterKind::Mosaic { block_size: Mosaic::DEFAULT_BLOCK_SIZE }
    }
}

impl TryFrom<FilterKind> for FilterBase {
    type Error = MyError;

    fn try_from(kind: FilterKind) -> Result<Self, Self::Error> {
        let filter = match kind {
            FilterKind::Mosaic { block_size } => Box::new(Mosaic::with_block_size(block_size)?) as FilterBase,
            FilterKind::MedianBlur { ksize } => Box::new(MedianFilter::with_ksize(ksize)?) as FilterBase,
            FilterKind::Scharr => Box::new(ScharrEdgeDetection::default()) as FilterBase,
        };
        Ok(filter)
    }
}


fn process_with_window<T: WindowFilter>(init: &Matrix2D<u8>, filter: &T) -> Matrix2D<u8> {
    assert!(filter.w() > 0);
    assert!(filter.h() > 0);

    let mut res = Matrix2D::<u8>::empty_size_of(init);

    let layer_ext = init.extended_for_window_filter(filter);
    let window_area = filter.get_window_area();

    res.pixels_mut()
        .par_chunks_mut(init.w())
        .enumerate()
        .for_each(|(row, row_res)| {
            let mut pixel_buf = vec![0_u8; filter.w() * filter.h()];

            for (col, res_val) in row_res.iter_mut().enumerate() {
                // window's top left corner in the extended plane
                let pos_im = PixelPos::new(row, col);

                for pos_w in window_area.get_pixels_iter() {
                    let buf_ind: usize = pos_w.row * filter.w() + pos_w.col;
                    pixel_buf[buf_ind] = layer_ext[pos_im + pos_w];
                }

                *res_val = filter.process_window(&mut pixel_buf[..]);
            }
        });

    res
}

fn process_each_layer<F: ByLayer>(img: &Img, filter: &F) -> Result<Img, MyError> {
    let res_layers: Vec<Matrix2D<u8>> = img.layers()
        .iter()
        .map(|layer| filter.process_layer(layer))
        .collect();

    Img::from_layers(res_layers, img.color_depth())
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use crate::img::{
        filter::{linear::*, non_linear::*, FilterBase, FilterKind},
        ColorDepth, Img,
    };

    fn all_filters() -> Vec<FilterBase> {
        vec![
            Box::new(Mosaic::default()) as FilterBase,
            Box::new(MedianFilter::default()) as FilterBase,
            Box::new(ScharrEdgeDetection::default()) as FilterBase,
        ]
    }

    #[test]
    fn all_filters_keep_size() {
        let pixels: Vec<u8> = (0..23 * 17 * 3).map(|v| (v * 7 % 256) as u8).collect();
        let img = Img::new(23, 17, ColorDepth::Rgb8, pixels).unwrap();

        for filter in all_filters().iter() {
            let res = filter.process(&img).unwrap();
            assert_eq!(res.w(), img.w(), "{}", filter.get_description());
            assert_eq!(res.h(), img.h(), "{}", filter.get_description());
        }
    }

    #[test]
    fn descriptions() {
        let described: Vec<(String, Option<String>)> = all_filters()
            .iter()
            .map(|f| (f.get_description(), f.params_to_string()))
            .collect();

        assert_eq!(described, vec![
            ("Mosaic 10x10".to_string(), Some("Block: 10".to_string())),
            ("Median blur 5x5".to_string(), Some("5 x 5\nBorder: replicate".to_string())),
            ("Scharr operator 3x3".to_string(), None),
        ]);
    }

    #[test]
    fn kinds_by_name() {
        for name in FilterKind::NAMES.iter() {
            let kind = FilterKind::with_name(name, 10).unwrap();
            assert_eq!(kind.name(), *name);
            assert!(FilterBase::try_from(kind).is_ok());
        }
        assert_eq!(FilterKind::with_name("Mosaic", 4), Some(FilterKind::Mosaic { block_size: 4 }));
        assert_eq!(FilterKind::with_name("Blur", 4), None);
        assert_eq!(FilterKind::default(), FilterKind::Mosaic { block_size: 10 });
    }

    #[test]
    fn invalid_kind_params() {
        assert!(FilterBase::try_from(FilterKind::Mosaic { block_size: 0 }).is_err());
        assert!(FilterBase::try_from(FilterKind::MedianBlur { ksize: 4 }).is_err());
        assert!(FilterBase::try_from(FilterKind::MedianBlur { ksize: 0 }).is_err());
    }
}
