use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bingo_board::config::AppConfig;
use bingo_board::game::BingoGame;
use bingo_board::logging;
use bingo_board::storage::FileStore;
use bingo_board::ui::App;

/// Play bingo with a board filled by your own entries.
#[derive(Parser)]
#[command(name = "bingo-board", version, about = "Play bingo in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "bingo.toml")]
    config: PathBuf,

    /// Override the directory the board is saved in
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the storage key (file name) of the saved board
    #[arg(long)]
    key: Option<String>,

    /// Seed for reproducible square placement
    #[arg(long)]
    seed: Option<u64>,

    /// Discard the saved board and start over
    #[arg(long)]
    new_game: bool,

    /// Print the saved board and exit
    #[arg(long)]
    print_board: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }
    if let Some(key) = cli.key {
        config.storage.key = key;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    let log_guard = if config.logging.enabled {
        logging::init(&config.log_dir(), &config.logging.filter)
    } else {
        None
    };
    if let Some(guard) = &log_guard {
        tracing::info!(
            config = %cli.config.display(),
            data_dir = %config.storage.data_dir.display(),
            key = %config.storage.key,
            log_dir = %guard.log_dir().display(),
            "starting"
        );
    }

    let store = FileStore::new(&config.storage.data_dir, &config.storage.key);
    let mut game = BingoGame::load(Box::new(store), config.game.rng());
    if cli.new_game {
        game.reset().context("starting a new board")?;
    }

    if cli.print_board {
        print!("{}", game.board());
        println!("Entries: {}", game.entry_count());
        return Ok(());
    }

    run_tui(App::new(game)).context("running terminal UI")
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    if let Err(err) = &res {
        tracing::error!(error = %err, "terminal UI failed");
    }
    res
}
