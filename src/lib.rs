#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

pub use constants::{Playfield, BOARD_HEIGHT, BOARD_WIDTH};
pub use error::{BoardError, Result};
pub use game::{Board, Color, Editor, PieceType};
