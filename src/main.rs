use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, SystemTime},
};
use tracing::info;

use typesprint::{
    app::{App, Flow},
    config::{ConfigStore, FileConfigStore},
    logging::init_logging,
    round::{RoundController, RoundSettings},
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker, TICK_RATE_MS},
    word_bank::WordBank,
};

/// one-minute typing sprint: type the prompt, get wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Random words are shown; the clock starts on your first keystroke. When time runs out the words you typed are compared position by position against the prompt."
)]
pub struct Cli {
    /// length of a round in seconds (default 60, or the config file)
    #[clap(short = 's', long)]
    round_secs: Option<u64>,

    /// number of words in the prompt (default 30, or the config file)
    #[clap(short = 'w', long = "words")]
    word_count: Option<usize>,

    /// settings file to read instead of the per-user config.json
    #[clap(long)]
    config: Option<PathBuf>,

    /// countdown refresh interval in milliseconds
    #[clap(long, default_value_t = TICK_RATE_MS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// append logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// more log detail (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn round_settings(&self) -> typesprint::Result<RoundSettings> {
        let store = match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        };
        store
            .load()
            .with_overrides(self.round_secs, self.word_count)
            .round_settings()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = cli.round_settings()?;
    info!(
        secs = settings.round_secs,
        words = settings.word_count,
        "starting typesprint"
    );
    let mut app = App::new(RoundController::new(settings, WordBank::lorem()?));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(cli.tick_ms)),
    );
    let outcome = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        if app.handle_event(runner.step(), SystemTime::now()) == Flow::Quit {
            break;
        }
    }

    Ok(())
}
