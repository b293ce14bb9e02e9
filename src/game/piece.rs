use crate::game::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    I, J, L, O, S, T, Z
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I,
        PieceType::J,
        PieceType::L,
        PieceType::O,
        PieceType::S,
        PieceType::T,
        PieceType::Z,
    ];

    /// Color a locked block of this piece leaves on the board.
    pub fn color(self) -> Color {
        match self {
            PieceType::I => Color::Red,
            PieceType::J => Color::White,
            PieceType::L => Color::Magenta,
            PieceType::O => Color::Blue,
            PieceType::S => Color::Green,
            PieceType::T => Color::Brown,
            PieceType::Z => Color::Cyan,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceType::I),
            'J' => Some(PieceType::J),
            'L' => Some(PieceType::L),
            'O' => Some(PieceType::O),
            'S' => Some(PieceType::S),
            'T' => Some(PieceType::T),
            'Z' => Some(PieceType::Z),
            _ => None,
        }
    }
}
