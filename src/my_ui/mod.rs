use fltk::app;
use crate::my_err::MyError;

pub mod message;
pub mod small_dlg;
mod filter_window;

pub use filter_window::FilterWindow;

pub const WIN_TITLE: &str = "Image Filter App";
pub const WIN_WIDTH: i32 = 600;
pub const WIN_HEIGHT: i32 = 600;
pub const PREVIEW_SIZE: i32 = 400;
pub const CONTROL_HEIGHT: i32 = 30;

const PADDING: i32 = 10;

pub fn create_app() -> Result<(), MyError> {
    let app = app::App::default();

    let mut filter_window = FilterWindow::new();
    filter_window.process_event_loop(app)?;

    Ok(())
}
