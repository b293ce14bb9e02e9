use std::fmt;

use crate::error::{BoardError, Result};
use crate::game::color::Color;

/// Fixed-size playfield of `W` columns by `H` rows.
///
/// Cells are stored row-major: `y` selects the row (0 is the top), `x` the
/// column within it. The nested array is contiguous, so cell `(x, y)` sits at
/// flat index `y * W + x`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board<const W: usize, const H: usize> {
    cells: [[Color; W]; H],
}

impl<const W: usize, const H: usize> Board<W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    const NON_EMPTY: () = assert!(W > 0 && H > 0, "board dimensions must be non-zero");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            cells: [[Color::Background; W]; H],
        }
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    pub fn cell_count(&self) -> usize {
        W * H
    }

    fn check(&self, x: usize, y: usize) -> Result<()> {
        if x >= W || y >= H {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: W,
                height: H,
            });
        }
        Ok(())
    }

    /// Row-major flat index of `(x, y)`.
    pub fn index_of(&self, x: usize, y: usize) -> Result<usize> {
        self.check(x, y)?;
        Ok(y * W + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Color> {
        self.check(x, y)?;
        Ok(self.cells[y][x])
    }

    /// Store `color` at `(x, y)`. Out-of-range writes leave the board untouched.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        self.check(x, y)?;
        self.cells[y][x] = color;
        Ok(())
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color; W]> + '_ {
        self.cells.iter()
    }

    /// Every cell as `(x, y, color)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &color)| (x, y, color))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.cells().filter(|&(_, _, c)| !c.is_background()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }
}

impl<const W: usize, const H: usize> Default for Board<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> fmt::Display for Board<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for color in row {
                write!(f, "{}", color.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Standard = Board<10, 20>;

    #[test]
    fn new_board_is_all_background() {
        let board = Standard::new();
        assert_eq!(board.cell_count(), 200);
        assert_eq!(board.cells().count(), 200);
        for y in 0..20 {
            for x in 0..10 {
                assert_eq!(board.get(x, y), Ok(Color::Background));
            }
        }
        assert!(board.is_empty());
        assert_eq!(board, Standard::default());
    }

    #[test]
    fn write_then_read_single_cell() {
        let mut board = Standard::new();
        board.set(3, 0, Color::Cyan).unwrap();
        assert_eq!(board.get(3, 0), Ok(Color::Cyan));
        assert_eq!(board.get(3, 1), Ok(Color::Background));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut board = Standard::new();
        let err = BoardError::OutOfBounds {
            x: 10,
            y: 0,
            width: 10,
            height: 20,
        };
        assert_eq!(board.get(10, 0), Err(err));
        assert_eq!(board.set(10, 0, Color::Red), Err(err));
        assert!(matches!(
            board.set(0, 20, Color::Red),
            Err(BoardError::OutOfBounds { x: 0, y: 20, .. })
        ));
        assert!(board.get(usize::MAX, usize::MAX).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn storage_is_row_major() {
        let mut board = Board::<3, 2>::new();
        assert_eq!(board.index_of(0, 0), Ok(0));
        assert_eq!(board.index_of(2, 0), Ok(2));
        assert_eq!(board.index_of(0, 1), Ok(3));
        assert_eq!(board.index_of(2, 1), Ok(5));
        assert!(board.index_of(3, 0).is_err());

        board.set(1, 1, Color::Green).unwrap();
        let order: Vec<(usize, usize)> = board.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        let rows: Vec<&[Color; 3]> = board.rows().collect();
        assert_eq!(rows[1][1], Color::Green);
    }

    #[test]
    fn display_dumps_rows_top_to_bottom() {
        let mut board = Board::<4, 2>::new();
        board.set(0, 0, Color::Red).unwrap();
        board.set(3, 1, Color::Brown).unwrap();
        assert_eq!(board.to_string(), "I...\n...T");
    }

    #[test]
    fn dimensions_are_reported() {
        let board = Board::<7, 3>::new();
        assert_eq!((board.width(), board.height()), (7, 3));
        assert_eq!(Board::<7, 3>::WIDTH * Board::<7, 3>::HEIGHT, board.cell_count());
    }
}
