use std::ops::{Index, IndexMut};
use crate::my_err::MyError;
use self::filter::filter_trait::WindowFilter;
use self::filter::filter_option::*;

pub mod filter;
mod color_ops;
mod matrix2d;
mod iterators;
mod img;

pub use color_ops::rgb_to_gray;
pub use matrix2d::Matrix2D;
pub use iterators::*;
pub use img::{Img, ColorDepth};

pub const PIXEL_VALUES_COUNT: usize = 256_usize;

/// Rounds to nearest (ties to even) and saturates into a pixel value.
pub fn saturate_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0_f64, 255_f64) as u8
}
