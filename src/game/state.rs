use tracing::{debug, warn};

use crate::constants::Playfield;
use crate::error::{BoardError, Result};
use crate::game::color::Color;
use crate::game::piece::PieceType;
use crate::input::direction::CursorDirection;

/// Interactive editing session over a single playfield.
pub struct Editor {
    pub board: Playfield,
    pub cursor: (usize, usize),
    pub brush: Color,
    pub last_error: Option<BoardError>,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            board: Playfield::new(),
            cursor: (0, 0),
            brush: PieceType::I.color(),
            last_error: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("board reset");
    }

    /// Move the cursor one cell. Returns false when already at the edge.
    pub fn move_cursor(&mut self, dir: CursorDirection) -> bool {
        let (dx, dy) = dir.delta();
        let x = self.cursor.0 as i32 + dx;
        let y = self.cursor.1 as i32 + dy;
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.board.width() || y >= self.board.height() {
            return false;
        }
        self.cursor = (x, y);
        true
    }

    pub fn select_piece(&mut self, piece: PieceType) {
        self.brush = piece.color();
        debug!(?piece, brush = ?self.brush, "brush selected");
    }

    pub fn cell_under_cursor(&self) -> Result<Color> {
        self.board.get(self.cursor.0, self.cursor.1)
    }

    pub fn paint(&mut self) -> Result<()> {
        self.write(self.brush)
    }

    pub fn erase(&mut self) -> Result<()> {
        self.write(Color::Background)
    }

    pub fn paint_random(&mut self) -> Result<()> {
        self.write(Color::random_piece())
    }

    fn write(&mut self, color: Color) -> Result<()> {
        let (x, y) = self.cursor;
        match self.board.set(x, y, color) {
            Ok(()) => {
                debug!(x, y, ?color, "cell written");
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(x, y, ?color, error = %e, "cell write rejected");
                self.last_error = Some(e);
                Err(e)
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
