#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Msg {
    Load,
    Apply,
    Save,
}
