use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::File,
    io::{self, stdout, Stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing::info;

use tboard::input::handle_input;
use tboard::ui::ui;
use tboard::Editor;

type AppResult = Result<(), Box<dyn std::error::Error>>;

/// tboard - paint cells on a Tetris playfield
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write log output to this file (the terminal is taken by the UI)
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> AppResult {
    let args = Args::parse();

    if let Some(path) = &args.log {
        let file = File::create(path)
            .map_err(|e| format!("Failed to create log file {}: {}", path.display(), e))?;
        tracing_subscriber::fmt()
            .with_max_level(args.log_level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut editor = Editor::new();
    info!(
        width = editor.board.width(),
        height = editor.board.height(),
        "editor started"
    );

    let result = run(&mut terminal, &mut editor);

    // Cleanup runs even if the loop failed
    let cleanup = restore_terminal(&mut terminal);

    info!(filled = editor.board.filled_count(), "editor closed\n{}", editor.board);
    exit_status(result, cleanup)
}

/// Run every restore step, reporting the first failure.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = terminal::disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// An error from the editor loop takes precedence over a cleanup error.
fn exit_status(result: AppResult, cleanup: io::Result<()>) -> AppResult {
    result.and(cleanup.map_err(Into::into))
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, editor: &mut Editor) -> AppResult {
    loop {
        terminal.draw(|f| ui(f, editor))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        if kind == KeyEventKind::Press {
                            return Ok(());
                        }
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if kind == KeyEventKind::Press {
                            editor.reset();
                        }
                    }
                    _ => {
                        handle_input(editor, code, kind);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flags_default_to_no_file_at_info() {
        let args = Args::try_parse_from(["tboard"]).unwrap();
        assert_eq!(args.log, None);
        assert_eq!(args.log_level, tracing::Level::INFO);
    }

    #[test]
    fn log_flags_parse() {
        let args =
            Args::try_parse_from(["tboard", "--log", "board.log", "--log-level", "DEBUG"]).unwrap();
        assert_eq!(args.log, Some(PathBuf::from("board.log")));
        assert_eq!(args.log_level, tracing::Level::DEBUG);

        let args = Args::try_parse_from(["tboard", "-l", "x.log"]).unwrap();
        assert_eq!(args.log, Some(PathBuf::from("x.log")));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["tboard", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn loop_error_wins_over_cleanup_error() {
        let run_err: AppResult = Err("loop failed".into());
        let cleanup = Err(io::Error::other("cleanup failed"));
        let err = exit_status(run_err, cleanup).unwrap_err();
        assert_eq!(err.to_string(), "loop failed");
    }

    #[test]
    fn cleanup_error_surfaces_after_clean_loop() {
        let cleanup = Err(io::Error::other("cleanup failed"));
        let err = exit_status(Ok(()), cleanup).unwrap_err();
        assert_eq!(err.to_string(), "cleanup failed");

        assert!(exit_status(Ok(()), Ok(())).is_ok());
    }
}
