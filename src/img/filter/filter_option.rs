use crate::my_err::MyError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterWindowSize { pub width: usize, pub height: usize }

impl FilterWindowSize {
    pub fn new(width: usize, height: usize) -> Self {
        FilterWindowSize { width, height }
    }
    pub fn check_w_equals_h(self) -> Result<Self, MyError> {
        if self.width != self.height {
            return Err(MyError::new("Filter window width and height must be equal".to_string()));
        }
        Ok(self)
    }
    pub fn check_size_be_1(self) -> Result<Self, MyError> {
        if self.width < 1 || self.height < 1 {
            return Err(MyError::new("Filter window size must be >= 1".to_string()));
        }
        Ok(self)
    }
    pub fn check_w_h_odd(self) -> Result<Self, MyError> {
        if self.width % 2 == 0 || self.height % 2 == 0 {
            return Err(MyError::new("Filter window size must be odd".to_string()));
        }
        Ok(self)
    }

    pub fn content_to_string(&self) -> String {
        format!("{} x {}", self.height, self.width)
    }
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSize { pub value: usize }

impl BlockSize {
    pub fn new(value: usize) -> Result<Self, MyError> {
        if value == 0 {
            return Err(MyError::new("Block size must be >= 1".to_string()));
        }
        Ok(BlockSize { value })
    }

    pub fn content_to_string(&self) -> String {
        format!("Block: {}", self.value)
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        BlockSize { value: 10 }
    }
}


/// How a plane is continued past its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderMode {
    /// `aaa|abcd|ddd`
    Replicate,
    /// `dcb|abcd|cba`
    Reflect101,
    Constant(u8),
}

impl BorderMode {
    /// Maps a possibly out-of-range coordinate onto `0..len`.
    /// `None` means the constant border value is to be used.
    pub fn resolve(&self, ind: isize, len: usize) -> Option<usize> {
        assert!(len > 0);

        let last = len as isize - 1;
        if 0 <= ind && ind <= last {
            return Some(ind as usize);
        }

        match self {
            BorderMode::Replicate => Some(ind.clamp(0, last) as usize),
            BorderMode::Reflect101 => {
                if last == 0 {
                    return Some(0);
                }
                let mut ind = ind;
                while ind < 0 || ind > last {
                    if ind < 0 { ind = -ind; }
                    if ind > last { ind = 2 * last - ind; }
                }
                Some(ind as usize)
            },
            BorderMode::Constant(_) => None,
        }
    }

    pub fn content_to_string(&self) -> String {
        match self {
            BorderMode::Replicate => "Border: replicate".to_string(),
            BorderMode::Reflect101 => "Border: reflect101".to_string(),
            BorderMode::Constant(val) => format!("Border: {}", val),
        }
    }
}
