use super::app::Screen;
use crate::party::{
    segment_label, ChocolateWheel, CoinFlip, Face, ParcelState, PassTheParcel, PinPhase,
    PinTheTail, Point,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split into a body and a one-line-of-help footer.
fn body_and_footer(frame: &Frame) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(frame.area());
    (chunks[0], chunks[1])
}

fn render_footer(frame: &mut Frame, text: &str, area: Rect) {
    let controls = Paragraph::new(Line::from(text.to_string()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, area);
}

fn titled(screen: Screen) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(screen.title())
}

pub fn render_menu(frame: &mut Frame, selected: usize) {
    let (body, footer) = body_and_footer(frame);

    let mut lines = vec![Line::from(""), Line::from("Pick a game"), Line::from("")];
    for (index, game) in Screen::GAMES.iter().enumerate() {
        let text = format!("{}. {}", index + 1, game.title());
        if index == selected {
            lines.push(Line::from(Span::styled(
                format!("▶ {text}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {text}")));
        }
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(titled(Screen::Menu));
    frame.render_widget(menu, body);
    render_footer(frame, "↑/↓: Choose  |  Enter or 1-5: Play  |  Q/Esc: Quit", footer);
}

pub fn render_parcel(frame: &mut Frame, parcel: &PassTheParcel) {
    let (body, footer) = body_and_footer(frame);

    let (headline, prompt) = match parcel.state() {
        ParcelState::Idle => ("Ready?", "Enter: Start game"),
        ParcelState::Passing(_) => ("Pass it on", "Enter: Next  |  R: Reset"),
        ParcelState::Unwrapped => ("You win!", "Enter: Play again"),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(titled(Screen::Parcel));
    frame.render_widget(widget, body);
    render_footer(frame, &format!("{prompt}  |  Esc: Menu"), footer);
}

pub fn render_coin(frame: &mut Frame, coin: &CoinFlip) {
    let (body, footer) = body_and_footer(frame);

    let color = match coin.face() {
        Face::Heads => Color::Yellow,
        Face::Tails => Color::Blue,
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("( {} )", coin.face().letter()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Flips: {}", coin.flips())),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(titled(Screen::Coin));
    frame.render_widget(widget, body);
    render_footer(frame, "Enter/Space: Flip That Coin  |  Esc: Menu", footer);
}

fn segment_color(label: &str) -> Color {
    match label {
        "peachpuff" => Color::Rgb(255, 218, 185),
        "pink" => Color::Rgb(255, 192, 203),
        "palegreen" => Color::Rgb(152, 251, 152),
        "lightcyan" => Color::Rgb(224, 255, 255),
        "powderblue" => Color::Rgb(176, 224, 230),
        _ => Color::Rgb(216, 191, 216),
    }
}

pub fn render_wheel(frame: &mut Frame, wheel: &ChocolateWheel) {
    let (body, footer) = body_and_footer(frame);

    let count = wheel.segment_count();
    let landed = wheel.landed_segment();

    // The landed segment with two neighbours either side
    let mut strip = Vec::new();
    for offset in -2i64..=2 {
        let index = (landed as i64 + offset).rem_euclid(count as i64) as usize;
        let label = segment_label(index);
        let mut style = Style::default().fg(Color::Black).bg(segment_color(label));
        if offset == 0 {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        strip.push(Span::styled(format!(" {:>2} ", index + 1), style));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from("▼"),
        Line::from(strip),
        Line::from(""),
    ];
    if wheel.spins() > 0 {
        lines.push(Line::from(format!(
            "Number {} ({})",
            landed + 1,
            wheel.landed_label()
        )));
    }
    lines.push(Line::from(format!("Spins: {}", wheel.spins())));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(titled(Screen::Wheel));
    frame.render_widget(widget, body);
    render_footer(frame, "Enter/Space: Spin  |  Esc: Menu", footer);
}

pub fn render_pin(
    frame: &mut Frame,
    pin: &PinTheTail,
    cursor: Point,
    name_input: &str,
    message: &Option<String>,
) {
    let (body, footer) = body_and_footer(frame);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(body);

    render_field(frame, pin, cursor, columns[0]);
    render_scoreboard(frame, pin, name_input, message, columns[1]);

    let help = match pin.phase() {
        PinPhase::SignUp => {
            "Type a name + Enter: Add  |  Del: Remove last  |  Tab: Start  |  Esc: Menu"
        }
        PinPhase::Playing => {
            "Arrows: Aim  |  Enter: Pin  |  Name + Tab: Join  |  Ctrl-R: Reset  |  Esc: Menu"
        }
        PinPhase::Done => "R: Play again  |  Del: Remove last  |  Esc: Menu  |  Q: Quit",
    };
    render_footer(frame, help, footer);
}

fn render_field(frame: &mut Frame, pin: &PinTheTail, cursor: Point, area: Rect) {
    let config = pin.config();
    let target = pin.target();
    let aiming = pin.phase() == PinPhase::Playing;

    let mut lines = Vec::with_capacity(config.field_height as usize);
    for y in 0..config.field_height {
        let mut spans = Vec::with_capacity(config.field_width as usize);
        for x in 0..config.field_width {
            let here = Point::new(x, y);
            let pinned = pin
                .markers()
                .find(|(_, point)| *point == here)
                .and_then(|(name, _)| name.chars().next());

            let span = if aiming && here == cursor {
                Span::styled("+", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else if here == target {
                Span::styled("◎", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            } else if let Some(initial) = pinned {
                Span::styled(initial.to_string(), Style::default().fg(Color::Black))
            } else {
                Span::raw(" ")
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let field = Paragraph::new(lines)
        .style(Style::default().bg(Color::LightBlue))
        .block(titled(Screen::Pin));
    frame.render_widget(field, area);
}

fn render_scoreboard(
    frame: &mut Frame,
    pin: &PinTheTail,
    name_input: &str,
    message: &Option<String>,
    area: Rect,
) {
    let mut lines = Vec::new();
    for entry in pin.scoreboard() {
        let score = entry
            .score
            .map_or_else(|| "-".to_string(), |score| score.to_string());
        lines.push(Line::from(format!("{:<20} {:>5}", entry.player, score)));
    }
    lines.push(Line::from(""));

    match pin.phase() {
        PinPhase::SignUp => lines.push(Line::from(format!("Add player: {name_input}_"))),
        PinPhase::Playing => {
            if let Some(player) = pin.current_player() {
                lines.push(Line::from(vec![
                    Span::styled(player.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(", you're up!"),
                ]));
            }
            lines.push(Line::from(format!("Join: {name_input}_")));
        }
        PinPhase::Done => lines.push(Line::from("All pinned!")),
    }

    if let Some(message) = message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
    frame.render_widget(widget, area);
}
