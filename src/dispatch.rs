use std::{convert::TryFrom, path::Path};
use chrono::Local;
use crate::{
    img::{filter::{FilterBase, FilterKind}, Img},
    my_err::MyError,
};


pub fn on_load(path: &Path) -> Result<Img, MyError> {
    let img = Img::load_as_rgb(path)?;
    tracing::info!(path = %path.display(), rows = img.h(), cols = img.w(), "Image loaded");
    Ok(img)
}

pub fn on_apply(img: &Img, kind: &FilterKind) -> Result<Img, MyError> {
    let filter = FilterBase::try_from(*kind)?;
    let res = filter.process(img)?;
    tracing::info!(
        filter = %filter.get_description(),
        params = %filter.params_to_string().unwrap_or_default(),
        "Filter applied"
    );
    Ok(res)
}

pub fn on_save(img: &Img, path: &Path) -> Result<(), MyError> {
    img.try_save(path)?;
    tracing::info!(path = %path.display(), "Result saved");
    Ok(())
}

pub fn default_result_file_name() -> String {
    format!("Result {}.jpg", Local::now().format("%d-%m-%Y_%H.%M.%S"))
}


/// Images owned by the window between events.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Img>,
    filtered: Option<Img>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn filtered(&self) -> Option<&Img> { self.filtered.as_ref() }

    fn set_current(&mut self, img: Img) -> &Img {
        self.filtered = None;
        self.current.insert(img)
    }

    /// A failed load leaves the session without an image.
    pub fn load(&mut self, path: &Path) -> Result<&Img, MyError> {
        self.current = None;
        self.filtered = None;

        match on_load(path) {
            Ok(img) => Ok(self.set_current(img)),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Image not loaded");
                Err(err)
            }
        }
    }

    /// Returns `Ok(None)` when there is nothing to filter.
    pub fn apply(&mut self, kind: &FilterKind) -> Result<Option<&Img>, MyError> {
        let img = match self.current.as_ref() {
            Some(img) => img,
            None => {
                tracing::debug!("No image to apply {} to", kind.name());
                return Ok(None);
            }
        };

        let res = on_apply(img, kind)?;
        Ok(Some(self.filtered.insert(res)))
    }

    /// The image to show: the last result, or the loaded one.
    pub fn displayed(&self) -> Option<&Img> {
        self.filtered.as_ref().or(self.current.as_ref())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::img::ColorDepth;

    fn gray_square() -> Img {
        let mut pixels = vec![0_u8; 9];
        pixels[4] = 255;
        Img::new(3, 3, ColorDepth::L8, pixels).unwrap()
    }

    #[test]
    fn apply_without_image_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.apply(&FilterKind::Scharr).unwrap(), None);
        assert!(session.displayed().is_none());
    }

    #[test]
    fn apply_stores_result() {
        let mut session = Session::new();
        session.set_current(gray_square());

        let res = session.apply(&FilterKind::MedianBlur { ksize: 5 }).unwrap().unwrap();
        assert_eq!(res.to_packed(), vec![0; 9]);

        assert_eq!(session.displayed(), session.filtered());
        assert_eq!(session.current, Some(gray_square()));
    }

    #[test]
    fn new_image_drops_old_result() {
        let mut session = Session::new();
        session.set_current(gray_square());
        session.apply(&FilterKind::Scharr).unwrap();
        assert!(session.filtered().is_some());

        let img = Img::filled(2, 2, ColorDepth::L8, &[7]).unwrap();
        assert_eq!(session.set_current(img.clone()), &img);
        assert!(session.filtered().is_none());
        assert_eq!(session.displayed(), Some(&img));
    }

    #[test]
    fn failed_apply_keeps_display() {
        let mut session = Session::new();
        session.set_current(gray_square());

        assert!(session.apply(&FilterKind::Mosaic { block_size: 0 }).is_err());
        assert_eq!(session.displayed(), Some(&gray_square()));
    }

    #[test]
    fn failed_load_clears_session() {
        let mut session = Session::new();
        session.set_current(gray_square());

        assert!(session.load(Path::new("/no/such/dir/img.png")).is_err());
        assert!(session.current.is_none());
        assert!(session.displayed().is_none());
    }

    #[test]
    fn on_apply_mosaic() {
        let img = Img::filled(20, 20, ColorDepth::Rgb8, &[10, 20, 30]).unwrap();
        let res = on_apply(&img, &FilterKind::default()).unwrap();
        assert_eq!(res, img);
    }

    #[test]
    fn on_save_writes_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_result_file_name());

        let img = Img::filled(8, 8, ColorDepth::Rgb8, &[1, 2, 3]).unwrap();
        on_save(&img, &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn result_file_name() {
        let name = default_result_file_name();
        assert!(name.starts_with("Result "));
        assert!(name.ends_with(".jpg"));
    }
}
