use crate::game::{Board, Marker};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Colour a marker is drawn in.
pub fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::X => Color::Red,
        Marker::O => Color::Blue,
    }
}

/// Column label: A, B, C, ...
pub fn column_label(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

/// Board lines, top row first, framed, with column labels above and a
/// pointer under the selected column.
pub fn board_lines(board: &Board, selected_column: Option<usize>) -> Vec<Line<'static>> {
    let cols = board.column_count();
    let mut lines = Vec::with_capacity(board.row_count() + 4);

    // Column labels with selection indicator
    let mut label_line = vec![Span::raw(" ")];
    for col in 0..cols {
        let label = format!(" {} ", column_label(col));
        if Some(col) == selected_column {
            label_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            label_line.push(Span::raw(label));
        }
    }
    label_line.push(Span::raw(" "));
    lines.push(Line::from(label_line));

    let rule = "═".repeat(cols * 3);
    lines.push(Line::from(format!("╔{rule}╗")));

    // Row 0 is the bottom, so draw from the top down
    for row in board.rows().into_iter().rev() {
        let mut spans = vec![Span::raw("║")];
        for cell in row {
            let span = match cell {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(marker) => Span::styled(" ● ", Style::default().fg(marker_color(marker))),
            };
            spans.push(span);
        }
        spans.push(Span::raw("║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("╚{rule}╝")));

    if let Some(selected) = selected_column {
        let mut indicator = vec![Span::raw(" ")];
        for col in 0..cols {
            if col == selected {
                indicator.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator.push(Span::raw("   "));
            }
        }
        indicator.push(Span::raw(" "));
        lines.push(Line::from(indicator));
    }

    lines
}
