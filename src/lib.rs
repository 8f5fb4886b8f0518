pub mod my_err;
pub mod img;
pub mod utils;
pub mod dispatch;
pub mod my_ui;
