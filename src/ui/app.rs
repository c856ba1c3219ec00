use crate::config::AppConfig;
use crate::game::{ConnectFour, MoveError, Phase, PlaceError};
use crate::party::{
    ChocolateWheel, CoinFlip, ParcelState, PassTheParcel, PinPhase, PinTheTail, Point,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    ConnectFour,
    Parcel,
    Coin,
    Wheel,
    Pin,
}

impl Screen {
    /// Games listed on the menu, in order
    pub const GAMES: [Screen; 5] = [
        Screen::ConnectFour,
        Screen::Parcel,
        Screen::Coin,
        Screen::Wheel,
        Screen::Pin,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Menu => "Party Games",
            Screen::ConnectFour => "Connect Four",
            Screen::Parcel => "Pass the Parcel",
            Screen::Coin => "Flip That Coin",
            Screen::Wheel => "Chocolate Wheel",
            Screen::Pin => "Pin the Tail",
        }
    }
}

pub struct App {
    pub(super) screen: Screen,
    pub(super) menu_index: usize,
    pub(super) connect_four: ConnectFour,
    pub(super) parcel: PassTheParcel,
    pub(super) coin: CoinFlip,
    pub(super) wheel: ChocolateWheel,
    pub(super) pin: PinTheTail,
    pub(super) pin_cursor: Point,
    pub(super) name_input: String,
    pub(super) message: Option<String>,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, screen: Screen) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let c4 = &config.connect_four;
        let pin = PinTheTail::new(config.pin.clone(), &mut rng);

        App {
            screen,
            menu_index: 0,
            connect_four: ConnectFour::new(c4.rows, c4.columns, c4.first_marker),
            parcel: PassTheParcel::new(config.parcel.clone()),
            coin: CoinFlip::new(config.coin.clone()),
            wheel: ChocolateWheel::new(config.wheel.clone()),
            pin_cursor: field_centre(&pin),
            pin,
            name_input: String::new(),
            message: None,
            rng,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(screen = self.screen.title(), "party games started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!("party games closed");
        Ok(())
    }

    /// Handle terminal events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::Esc {
            match self.screen {
                Screen::Menu => self.should_quit = true,
                _ => self.open(Screen::Menu),
            }
            return;
        }

        // Letters are names until the pin the tail round is done
        let typing = self.screen == Screen::Pin && self.pin.phase() != PinPhase::Done;
        if key.code == KeyCode::Char('q') && !typing {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::ConnectFour => self.handle_connect_four_key(key),
            Screen::Parcel => self.handle_parcel_key(key),
            Screen::Coin => self.handle_coin_key(key),
            Screen::Wheel => self.handle_wheel_key(key),
            Screen::Pin => self.handle_pin_key(key),
        }
    }

    fn open(&mut self, screen: Screen) {
        debug!(screen = screen.title(), "switching screen");
        self.screen = screen;
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.menu_index + 1 < Screen::GAMES.len() {
                    self.menu_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.open(Screen::GAMES[self.menu_index]);
            }
            KeyCode::Char(c) => {
                if let Some(index) = c.to_digit(10) {
                    let index = index as usize;
                    if (1..=Screen::GAMES.len()).contains(&index) {
                        self.menu_index = index - 1;
                        self.open(Screen::GAMES[index - 1]);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_connect_four_key(&mut self, key: KeyEvent) {
        // Any key starts a new game once someone has won
        if self.connect_four.is_over() {
            self.connect_four.reset();
            self.message = Some("New game started!".to_string());
            return;
        }

        match key.code {
            KeyCode::Left => self.connect_four.move_left(),
            KeyCode::Right => self.connect_four.move_right(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => self.drop_piece(),
            KeyCode::Char('r') => {
                self.connect_four.reset();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.connect_four.drop_piece() {
            Ok(Phase::Won(marker)) => {
                self.message = Some(format!(
                    "{} wins! Press any key to play again.",
                    marker.name()
                ));
            }
            Ok(Phase::Draw) => {
                self.message = Some("It's a draw! Press any key to play again.".to_string());
            }
            Ok(_) => {}
            Err(MoveError::Place(PlaceError::ColumnFull(_))) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::Place(PlaceError::OutOfBounds { .. })) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn handle_parcel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => match self.parcel.state() {
                ParcelState::Idle => {
                    self.parcel.start(&mut self.rng);
                }
                ParcelState::Passing(_) => {
                    self.parcel.pass_on();
                }
                ParcelState::Unwrapped => {
                    self.parcel.play_again();
                }
            },
            KeyCode::Char('r') => self.parcel.reset(),
            _ => {}
        }
    }

    fn handle_coin_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.coin.flip(&mut self.rng);
        }
    }

    fn handle_wheel_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.wheel.spin(&mut self.rng);
        }
    }

    fn handle_pin_key(&mut self, key: KeyEvent) {
        match self.pin.phase() {
            PinPhase::SignUp => self.handle_sign_up_key(key),
            PinPhase::Playing => self.handle_aim_key(key),
            PinPhase::Done => match key.code {
                KeyCode::Char('r') => self.reset_pin(),
                KeyCode::Delete => self.remove_last_player(),
                _ => {}
            },
        }
    }

    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.name_input.push(c),
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Enter => self.add_typed_player(),
            KeyCode::Delete => self.remove_last_player(),
            KeyCode::Tab => {
                if self.pin.start() {
                    self.pin_cursor = field_centre(&self.pin);
                } else {
                    self.message = Some("Add a player first!".to_string());
                }
            }
            _ => {}
        }
    }

    fn handle_aim_key(&mut self, key: KeyEvent) {
        let config = self.pin.config();
        let (max_x, max_y) = (
            config.field_width.saturating_sub(1),
            config.field_height.saturating_sub(1),
        );
        let cursor = &mut self.pin_cursor;

        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_pin()
            }
            KeyCode::Left => cursor.x = cursor.x.saturating_sub(1),
            KeyCode::Right => cursor.x = (cursor.x + 1).min(max_x),
            KeyCode::Up => cursor.y = cursor.y.saturating_sub(1),
            KeyCode::Down => cursor.y = (cursor.y + 1).min(max_y),
            KeyCode::Enter => {
                let point = *cursor;
                self.pin.pin(point);
                self.pin_cursor = field_centre(&self.pin);
            }
            // Latecomers can still sign up mid-round
            KeyCode::Char(c) => self.name_input.push(c),
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Tab => self.add_typed_player(),
            _ => {}
        }
    }

    fn add_typed_player(&mut self) {
        let name = std::mem::take(&mut self.name_input);
        if !self.pin.add_player(&name) && !name.trim().is_empty() {
            self.message = Some(format!("{} is already playing", name.trim()));
        }
    }

    fn remove_last_player(&mut self) {
        if let Some(last) = self.pin.players().last().cloned() {
            self.pin.remove_player(&last);
        }
    }

    fn reset_pin(&mut self) {
        debug!("pin the tail reset");
        self.pin.reset(&mut self.rng);
        self.pin_cursor = field_centre(&self.pin);
        self.name_input.clear();
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::party_view::render_menu(frame, self.menu_index),
            Screen::ConnectFour => {
                super::game_view::render(frame, &self.connect_four, &self.message)
            }
            Screen::Parcel => super::party_view::render_parcel(frame, &self.parcel),
            Screen::Coin => super::party_view::render_coin(frame, &self.coin),
            Screen::Wheel => super::party_view::render_wheel(frame, &self.wheel),
            Screen::Pin => super::party_view::render_pin(
                frame,
                &self.pin,
                self.pin_cursor,
                &self.name_input,
                &self.message,
            ),
        }
    }
}

fn field_centre(pin: &PinTheTail) -> Point {
    let config = pin.config();
    Point::new(config.field_width / 2, config.field_height / 2)
}
