use super::board_widget::{board_lines, marker_color};
use crate::game::{ConnectFour, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, game: &ConnectFour, message: &Option<String>) {
    let board_height = game.board().row_count() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &ConnectFour, area: ratatui::layout::Rect) {
    let (status, color) = match game.phase() {
        Phase::Won(marker) => (format!("{} WINS!", marker.name()), marker_color(marker)),
        Phase::Draw => ("Draw!".to_string(), Color::White),
        Phase::NotStarted | Phase::InProgress => {
            let marker = game.current_marker();
            (format!("{} - it's your turn", marker.name()), marker_color(marker))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &ConnectFour, area: ratatui::layout::Rect) {
    // Hide the column pointer once the game is decided
    let selected = (!game.is_over()).then_some(game.selected_column());
    let board_widget =
        Paragraph::new(board_lines(game.board(), selected)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line =
        Line::from("←/→: Move  |  Enter/↓: Drop  |  R: Restart  |  Esc: Menu  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
