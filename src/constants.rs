use crate::game::Board;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// The standard 10x20 playfield.
pub type Playfield = Board<BOARD_WIDTH, BOARD_HEIGHT>;
