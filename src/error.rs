/// Error types for board access
use thiserror::Error;

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur when reading or writing the board
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell coordinates outside the board
    #[error("Cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Raw value that does not name a color
    #[error("Invalid color value: {0}")]
    InvalidColor(u8),
}
