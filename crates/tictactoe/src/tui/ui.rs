//! Stateless rendering of the board and status line.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{CellState, Mark, Position};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let game = app.game();
    let title = format!(
        "Tic-Tac-Toe  |  {} opponent  |  you play {}",
        game.difficulty(),
        game.human_mark()
    );
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let last = game.last_move().map(|m| m.position);
    draw_board(frame, chunks[1], game.board().cells(), app.cursor(), last);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move  enter/1-9 place  r restart  d difficulty  f first  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    cells: &[CellState; 9],
    cursor: Position,
    last: Option<Position>,
) {
    let grid = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = frame_block.inner(grid);
    frame.render_widget(frame_block, grid);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            draw_cell(frame, *cell_area, cells[pos.to_index()], pos, cursor, last);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: CellState,
    pos: Position,
    cursor: Position,
    last: Option<Position>,
) {
    let (symbol, mut style) = match cell {
        CellState::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        CellState::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    if Some(pos) == last {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::A => Color::Blue,
        Mark::B => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
