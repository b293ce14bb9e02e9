pub mod direction;
pub mod handler;

pub use direction::CursorDirection;
pub use handler::handle_input;
