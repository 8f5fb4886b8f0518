mod kernel;
mod mosaic;

pub use kernel::LinearKernel;
pub use mosaic::Mosaic;
