use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::game::{Color, Editor, PieceType};

pub fn ui(f: &mut Frame, editor: &Editor) {
    let size = f.size();

    let board_height = editor.board.height() as u16 + 2;
    let board_width = editor.board.width() as u16 * 2 + 2; // 2 chars per cell

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(15),          // Brush panel
            Constraint::Length(board_width), // Board
            Constraint::Length(24),          // Status panel
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    render_brush(f, editor, horizontal_chunks[1]);
    render_board(f, editor, horizontal_chunks[2]);
    render_status(f, editor, horizontal_chunks[3]);
}

/// Terminal color used to draw a cell.
pub fn term_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::White => TermColor::White,
        Color::Magenta => TermColor::Magenta,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Brown => TermColor::Rgb(150, 75, 0),
        Color::Cyan => TermColor::Cyan,
        Color::Background => TermColor::DarkGray,
    }
}

/// One line per board row, two terminal columns per cell.
pub fn board_lines(editor: &Editor) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(editor.board.height());

    for (y, row) in editor.board.rows().enumerate() {
        let mut line_spans = Vec::with_capacity(row.len());
        for (x, &color) in row.iter().enumerate() {
            let span = if (x, y) == editor.cursor {
                let fg = if color.is_background() {
                    TermColor::White
                } else {
                    term_color(color)
                };
                Span::styled("[]", Style::default().fg(fg))
            } else if color.is_background() {
                // Checkerboard for empty cells
                if (x + y) % 2 == 0 {
                    Span::styled("░░", Style::default().fg(TermColor::DarkGray))
                } else {
                    Span::styled("  ", Style::default())
                }
            } else {
                Span::styled("██", Style::default().fg(term_color(color)))
            };
            line_spans.push(span);
        }
        lines.push(Line::from(line_spans));
    }

    lines
}

fn render_board(f: &mut Frame, editor: &Editor, area: Rect) {
    let board_widget = Paragraph::new(board_lines(editor))
        .block(Block::default().borders(Borders::ALL).title("tboard"));

    f.render_widget(board_widget, area);
}

fn render_brush(f: &mut Frame, editor: &Editor, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Current brush
            Constraint::Length(10), // Palette
            Constraint::Min(1),
        ])
        .split(area);

    let brush_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("████", Style::default().fg(term_color(editor.brush)))]),
        Line::from(vec![Span::raw(format!("{:?}", editor.brush))]),
    ];
    let brush_widget = Paragraph::new(brush_text)
        .block(Block::default().borders(Borders::ALL).title("Brush"))
        .alignment(Alignment::Center);
    f.render_widget(brush_widget, chunks[0]);

    let palette_text: Vec<Line> = PieceType::ALL
        .iter()
        .map(|&piece| {
            let color = piece.color();
            Line::from(vec![
                Span::raw(format!("{:?} ", piece)),
                Span::styled("██", Style::default().fg(term_color(color))),
            ])
        })
        .collect();
    let palette_widget = Paragraph::new(palette_text)
        .block(Block::default().borders(Borders::ALL).title("Pieces"))
        .alignment(Alignment::Center);
    f.render_widget(palette_widget, chunks[1]);
}

fn render_status(f: &mut Frame, editor: &Editor, area: Rect) {
    let (x, y) = editor.cursor;
    let under_cursor = match editor.cell_under_cursor() {
        Ok(color) => format!("{:?}", color),
        Err(_) => "-".to_string(),
    };

    let mut status_text = vec![
        Line::from(vec![Span::raw(format!("Cursor: {},{}", x, y))]),
        Line::from(vec![Span::raw(format!("Cell: {}", under_cursor))]),
        Line::from(vec![Span::raw(format!(
            "Filled: {}/{}",
            editor.board.filled_count(),
            editor.board.cell_count()
        ))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Arrows  move")]),
        Line::from(vec![Span::raw("IJLOSTZ brush")]),
        Line::from(vec![Span::raw("Space   paint")]),
        Line::from(vec![Span::raw("Bksp    erase")]),
        Line::from(vec![Span::raw("X       random")]),
        Line::from(vec![Span::raw("R reset  Q quit")]),
    ];

    if let Some(err) = editor.last_error {
        status_text.push(Line::from(vec![Span::raw("")]));
        status_text.push(Line::from(vec![Span::styled(
            err.to_string(),
            Style::default().fg(TermColor::Red),
        )]));
    }

    // Errors run longer than the panel is wide
    let status_widget = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });

    f.render_widget(status_widget, area);
}
