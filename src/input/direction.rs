#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    Left,
    Right,
    Up,
    Down,
}

impl CursorDirection {
    /// Column/row offset; rows grow downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            CursorDirection::Left => (-1, 0),
            CursorDirection::Right => (1, 0),
            CursorDirection::Up => (0, -1),
            CursorDirection::Down => (0, 1),
        }
    }
}
