use std::path::PathBuf;
use fltk::{
    app::{self, Receiver},
    button, dialog,
    enums::{Align, FrameType},
    frame, group, image::RgbImage, input, menu,
    prelude::{GroupExt, ImageExt, InputExt, MenuExt, WidgetBase, WidgetExt},
    window,
};
use crate::{
    dispatch::{self, Session},
    img::{filter::{FilterKind, Mosaic}, Img},
    my_err::MyError,
    utils::Pos,
};
use super::{message::Msg, small_dlg::*, *};


pub struct FilterWindow {
    session: Session,
    rx_ui: Receiver<Msg>,

    // graphical parts
    wind: window::Window,
    frame_img: frame::Frame,
    choice_filter: menu::Choice,
    inp_block_size: input::IntInput,
}

impl FilterWindow {
    pub fn new() -> Self {
        let (tx_ui, rx_ui) = app::channel::<Msg>();

        let mut wind = window::Window::default()
            .with_size(WIN_WIDTH, WIN_HEIGHT)
            .with_label(WIN_TITLE)
            .center_screen();

        let mut column = group::Pack::default()
            .with_pos((WIN_WIDTH - PREVIEW_SIZE) / 2, PADDING)
            .with_size(PREVIEW_SIZE, WIN_HEIGHT - PADDING * 2);
        column.set_spacing(PADDING / 2);

        let mut frame_img = frame::Frame::default().with_size(PREVIEW_SIZE, PREVIEW_SIZE);
        frame_img.set_frame(FrameType::EmbossedBox);
        frame_img.set_align(Align::Center);

        let mut btn_load = button::Button::default()
            .with_size(PREVIEW_SIZE, CONTROL_HEIGHT)
            .with_label("Load image");
        btn_load.emit(tx_ui, Msg::Load);

        let mut choice_filter = menu::Choice::default()
            .with_size(PREVIEW_SIZE, CONTROL_HEIGHT)
            .with_label("Filter");
        for name in FilterKind::NAMES.iter() {
            choice_filter.add_choice(name);
        }
        choice_filter.set_value(0);

        let mut inp_block_size = input::IntInput::default()
            .with_size(PREVIEW_SIZE, CONTROL_HEIGHT)
            .with_label("Block size");
        inp_block_size.set_value(&Mosaic::DEFAULT_BLOCK_SIZE.to_string());

        // block size makes sense only for the mosaic
        let mut inp_for_choice = inp_block_size.clone();
        choice_filter.set_callback(move |c| {
            if c.value() == 0 {
                inp_for_choice.activate();
            } else {
                inp_for_choice.deactivate();
            }
        });

        let mut btn_apply = button::Button::default()
            .with_size(PREVIEW_SIZE, CONTROL_HEIGHT)
            .with_label("Apply filter");
        btn_apply.emit(tx_ui, Msg::Apply);

        let mut btn_save = button::Button::default()
            .with_size(PREVIEW_SIZE, CONTROL_HEIGHT)
            .with_label("Save result");
        btn_save.emit(tx_ui, Msg::Save);

        column.end();
        wind.end();
        wind.show();

        FilterWindow {
            session: Session::new(),
            rx_ui,
            wind,
            frame_img,
            choice_filter,
            inp_block_size,
        }
    }

    pub fn process_event_loop(&mut self, app: app::App) -> Result<(), MyError> {
        while app.wait() {
            if let Some(msg) = self.rx_ui.recv() {
                tracing::debug!(?msg, "UI message");

                let res = match msg {
                    Msg::Load => self.process_load_msg(),
                    Msg::Apply => self.process_apply_msg(),
                    Msg::Save => self.process_save_msg(),
                };

                if let Err(err) = res {
                    tracing::warn!(?msg, error = %err, "UI action failed");
                    show_err_msg(self.get_center_pos(), err);
                }
            }
        }

        Ok(())
    }

    fn process_load_msg(&mut self) -> Result<(), MyError> {
        let mut dlg = dialog::NativeFileChooser::new(dialog::NativeFileChooserType::BrowseFile);
        dlg.set_filter("Images\t*.{png,jpg,jpeg,bmp}");
        dlg.show();

        let path: PathBuf = dlg.filename();
        if path.as_os_str().is_empty() {
            return Ok(());
        }

        let res = self.session.load(&path).map(|_| ());
        // a failed load leaves nothing to show
        let shown = self.session.displayed().cloned();
        self.display(shown)?;
        res
    }

    fn process_apply_msg(&mut self) -> Result<(), MyError> {
        let kind = self.selected_filter()?;

        if let Some(img) = self.session.apply(&kind)? {
            let img = img.clone();
            self.display(Some(img))?;
        }

        Ok(())
    }

    fn process_save_msg(&mut self) -> Result<(), MyError> {
        let img = match self.session.displayed() {
            Some(img) => img,
            None => return Err(MyError::new("There is no image to save".to_string())),
        };

        let mut dlg = dialog::NativeFileChooser::new(dialog::NativeFileChooserType::BrowseSaveFile);
        dlg.set_option(dialog::NativeFileChooserOptions::SaveAsConfirm);
        dlg.set_filter("JPEG\t*.jpg");
        dlg.set_preset_file(&dispatch::default_result_file_name());
        dlg.show();

        let path: PathBuf = dlg.filename();
        if path.as_os_str().is_empty() {
            return Ok(());
        }

        dispatch::on_save(img, &path)?;

        let what = if self.session.filtered().is_some() { "Result" } else { "Image" };
        show_info_msg(self.get_center_pos(), &format!("{} saved to {}", what, path.display()));

        Ok(())
    }

    fn selected_filter(&self) -> Result<FilterKind, MyError> {
        let name = self.choice_filter.choice()
            .ok_or_else(|| MyError::new("No filter is selected".to_string()))?;

        let kind = FilterKind::with_name(&name, Mosaic::DEFAULT_BLOCK_SIZE)
            .ok_or_else(|| MyError::new(format!("Unknown filter '{}'", name)))?;

        match kind {
            FilterKind::Mosaic { .. } => {
                let block_size = self.inp_block_size.value().trim().parse::<usize>()?;
                Ok(FilterKind::Mosaic { block_size })
            },
            other => Ok(other),
        }
    }

    fn display(&mut self, img: Option<Img>) -> Result<(), MyError> {
        match img {
            Some(img) => {
                let mut drawable: RgbImage = img.get_drawable_copy()?;
                drawable.scale(PREVIEW_SIZE, PREVIEW_SIZE, true, true);
                self.frame_img.set_image(Some(drawable));
            },
            None => self.frame_img.set_image(None::<RgbImage>),
        }

        self.frame_img.redraw();
        Ok(())
    }

    fn get_center_pos(&self) -> Pos {
        Pos::new(
            self.wind.x() + self.wind.w() / 2,
            self.wind.y() + self.wind.h() / 2,
        )
    }
}
