use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use party_games::config::AppConfig;
use party_games::logging;
use party_games::ui::{App, Screen};
use ratatui::{backend::CrosstermBackend, Terminal};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    Menu,
    ConnectFour,
    Parcel,
    Coin,
    Wheel,
    Pin,
}

impl From<Game> for Screen {
    fn from(game: Game) -> Self {
        match game {
            Game::Menu => Screen::Menu,
            Game::ConnectFour => Screen::ConnectFour,
            Game::Parcel => Screen::Parcel,
            Game::Coin => Screen::Coin,
            Game::Wheel => Screen::Wheel,
            Game::Pin => Screen::Pin,
        }
    }
}

/// Party games for the terminal.
#[derive(Parser)]
#[command(name = "party-games", about = "Connect Four and other party games")]
struct Cli {
    /// Game to open at startup
    #[arg(long, value_enum, default_value = "menu")]
    game: Game,

    /// Path to TOML configuration file
    #[arg(long, default_value = "party-games.toml")]
    config: PathBuf,

    /// Override Connect Four board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override Connect Four board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Seed the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path, cli.verbose)
            .with_context(|| format!("opening log file {}", path.display()))?;
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.connect_four.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.connect_four.columns = columns;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().context("invalid command-line overrides")?;

    run(&config, cli.game.into()).context("running terminal UI")
}

fn run(config: &AppConfig, screen: Screen) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, screen);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
