use crate::my_err::MyError;
use super::super::super::*;
use super::super::filter_trait::*;
use super::super::LinearKernel;


/// Gradient magnitude `(|Gx| + |Gy|) / 2` of the luminance, single channel.
#[derive(Clone)]
pub struct ScharrEdgeDetection {
    name: String,
    dx_filter: LinearKernel,
    dy_filter: LinearKernel,
}

impl ScharrEdgeDetection {
    pub fn new() -> Self {
        ScharrEdgeDetection {
            name: "Scharr operator".to_string(),
            dx_filter: LinearKernel::scharr_dx(),
            dy_filter: LinearKernel::scharr_dy(),
        }
    }
}

fn abs_saturated(grad: i16) -> f64 {
    grad.unsigned_abs().min(255) as f64
}

impl Filter for ScharrEdgeDetection {
    fn process(&self, img: &Img) -> Result<Img, MyError> {
        tracing::debug!(
            rows = img.h(),
            cols = img.w(),
            channels = img.d(),
            "Applying Scharr operator"
        );

        let gray = rgb_to_gray(img);

        // derivatives by X and Y
        let dx = self.dx_filter.correlate(&gray);
        let dy = self.dy_filter.correlate(&gray);

        let mut magnitude = Matrix2D::<u8>::empty_size_of(&gray);
        for ((val, gx), gy) in magnitude.pixels_mut().iter_mut().zip(dx.pixels()).zip(dy.pixels()) {
            *val = saturate_u8(0.5 * abs_saturated(*gx) + 0.5 * abs_saturated(*gy));
        }

        Img::from_layers(vec![magnitude], ColorDepth::L8)
    }

    fn get_description(&self) -> String {
        format!("{} {}x{}", self.name, self.dx_filter.h(), self.dx_filter.w())
    }

    fn params_to_string(&self) -> Option<String> {
        None
    }
}

impl Default for ScharrEdgeDetection {
    fn default() -> Self {
        ScharrEdgeDetection::new()
    }
}
