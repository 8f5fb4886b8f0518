mod median;
mod scharr_edge_detection;

pub use median::MedianFilter;
pub use scharr_edge_detection::ScharrEdgeDetection;
