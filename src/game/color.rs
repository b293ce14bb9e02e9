use rand::Rng;

use crate::error::BoardError;
use crate::game::piece::PieceType;

/// Cell color. Each piece color is named after the tetromino that leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red,     // I
    White,   // J
    Magenta, // L
    Blue,    // O
    Green,   // S
    Brown,   // T
    Cyan,    // Z
    #[default]
    Background,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::White,
        Color::Magenta,
        Color::Blue,
        Color::Green,
        Color::Brown,
        Color::Cyan,
        Color::Background,
    ];

    pub const PIECES: [Color; 7] = [
        Color::Red,
        Color::White,
        Color::Magenta,
        Color::Blue,
        Color::Green,
        Color::Brown,
        Color::Cyan,
    ];

    pub fn is_background(self) -> bool {
        self == Color::Background
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn random_piece() -> Color {
        let mut rng = rand::thread_rng();
        Self::PIECES[rng.gen_range(0..Self::PIECES.len())]
    }

    /// Single character used in text dumps: the piece letter, or `.` for background.
    pub fn glyph(self) -> char {
        match self {
            Color::Red => 'I',
            Color::White => 'J',
            Color::Magenta => 'L',
            Color::Blue => 'O',
            Color::Green => 'S',
            Color::Brown => 'T',
            Color::Cyan => 'Z',
            Color::Background => '.',
        }
    }
}

impl From<PieceType> for Color {
    fn from(piece: PieceType) -> Self {
        piece.color()
    }
}

impl TryFrom<u8> for Color {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(BoardError::InvalidColor(value))
    }
}
