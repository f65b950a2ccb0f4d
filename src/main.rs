use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use lottopick::{
    batch::run_batch,
    config::{Config, ConfigStore, FileConfigStore},
    controller::Controller,
    game::{GameConfig, GameType},
    history::DrawHistory,
    panel::{Panel, PanelAction},
    runtime::{CrosstermEventSource, DeviceEventSource, FixedTicker, Runner, Ticker},
    serial::WriterSerial,
    LottoError,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

/// autopick lottery numbers on a simulated knob-and-button device
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Pick a lottery game with the knob, then press the button for each number. Numbers never repeat within a round; PowerBall closes each round with a pick from 1-20."
)]
pub struct Cli {
    /// seed the random generator for a reproducible run
    #[clap(long)]
    seed: Option<u64>,

    /// polling interval of the simulated device in milliseconds
    #[clap(long)]
    tick_ms: Option<u64>,

    /// how long the LED and tone stay on after a pick; presses in that window are dropped
    #[clap(long)]
    pulse_ms: Option<u64>,

    /// knob travel per arrow key
    #[clap(long)]
    pot_step: Option<i32>,

    /// append every pick to the history CSV
    #[clap(long)]
    history: bool,

    /// history CSV location (implies --history)
    #[clap(long, value_name = "FILE")]
    history_file: Option<PathBuf>,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,

    /// run this many draw actions without the panel and print the serial output
    #[clap(short = 'n', long, requires = "game")]
    draws: Option<u32>,

    /// game for batch mode
    #[clap(short = 'g', long, value_enum, requires = "draws")]
    game: Option<GameType>,

    /// custom game: size of the number pool (1-45)
    #[clap(long, requires = "game")]
    max_number: Option<u16>,

    /// custom game: numbers per round
    #[clap(long, requires = "game")]
    game_size: Option<u16>,
}

impl Cli {
    /// Command-line values override the stored config.
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(tick_ms) = self.tick_ms {
            cfg.tick_ms = tick_ms;
        }
        if let Some(pulse_ms) = self.pulse_ms {
            cfg.pulse_ms = pulse_ms;
        }
        if let Some(pot_step) = self.pot_step {
            cfg.pot_step = pot_step;
        }
        if self.history || self.history_file.is_some() {
            cfg.history = true;
        }
        cfg
    }

    fn history_target(&self, cfg: &Config) -> Option<DrawHistory> {
        match (&self.history_file, cfg.history) {
            (Some(path), _) => Some(DrawHistory::with_path(path)),
            (None, true) => Some(DrawHistory::default_location()),
            (None, false) => None,
        }
    }

    fn game_config(&self) -> Result<Option<GameConfig>, LottoError> {
        let Some(game) = self.game else {
            return Ok(None);
        };
        if let Some(preset) = GameConfig::preset(game) {
            return Ok(Some(preset));
        }
        match (self.max_number, self.game_size) {
            (Some(max_number), Some(game_size)) => {
                GameConfig::custom(max_number, game_size).map(Some)
            }
            _ => Err(LottoError::MissingCustomParams),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = FileConfigStore::new();
    let cfg = cli.apply(store.load());
    if cli.save_config {
        store.save(&cfg)?;
    }
    let history = cli.history_target(&cfg);

    if let Some(draws) = cli.draws {
        let game = match cli.game_config() {
            Ok(Some(game)) => game,
            Ok(None) => Cli::command()
                .error(ErrorKind::MissingRequiredArgument, "--draws needs --game")
                .exit(),
            Err(e) => Cli::command()
                .error(ErrorKind::ValueValidation, e)
                .exit(),
        };
        let mut rng = cfg.rng();
        let mut serial = WriterSerial::new(io::stdout().lock());
        run_batch(game, draws, &mut rng, &mut serial, history.as_ref())?;
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(
            ErrorKind::Io,
            "stdin must be a tty (use --draws with --game for batch mode)",
        )
        .exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut panel = Panel::new(&cfg, Controller::from_config(&cfg), history);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::from_millis(cfg.tick_ms),
    );
    let result = start_tui(&mut terminal, &mut panel, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend, E: DeviceEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    panel: &mut Panel,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*panel, f.area()))?;

    loop {
        match panel.handle(&runner.step())? {
            PanelAction::Quit => break,
            PanelAction::Redraw => {
                terminal.draw(|f| f.render_widget(&*panel, f.area()))?;
            }
            PanelAction::Continue => {}
        }
    }

    Ok(())
}
