#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos { pub x: i32, pub y: i32 }

impl Pos {
    pub fn new(x: i32, y: i32) -> Self { Pos { x, y } }
}
