use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::{Editor, PieceType};
use crate::input::direction::CursorDirection;

/// Apply one key event to the editor. Returns true when the key did something.
///
/// Quit and reset are handled by the main loop, not here.
pub fn handle_input(editor: &mut Editor, key_code: KeyCode, kind: KeyEventKind) -> bool {
    if kind == KeyEventKind::Release {
        return false;
    }

    // Rejected writes land in `editor.last_error` for the status panel.
    match key_code {
        KeyCode::Left => editor.move_cursor(CursorDirection::Left),
        KeyCode::Right => editor.move_cursor(CursorDirection::Right),
        KeyCode::Up => editor.move_cursor(CursorDirection::Up),
        KeyCode::Down => editor.move_cursor(CursorDirection::Down),
        KeyCode::Char(' ') | KeyCode::Enter => editor.paint().is_ok(),
        KeyCode::Backspace | KeyCode::Delete => editor.erase().is_ok(),
        KeyCode::Char('x') | KeyCode::Char('X') => editor.paint_random().is_ok(),
        KeyCode::Char(c) => match PieceType::from_char(c) {
            Some(piece) => {
                editor.select_piece(piece);
                true
            }
            None => false,
        },
        _ => false,
    }
}
