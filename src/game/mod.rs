pub mod board;
pub mod color;
pub mod piece;
pub mod state;

pub use board::Board;
pub use color::Color;
pub use piece::PieceType;
pub use state::Editor;
