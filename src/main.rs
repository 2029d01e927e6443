use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{error, info};

use birch_and_silk::config::Config;
use birch_and_silk::display::{RenderTarget, TerminalTarget};
use birch_and_silk::error::Error;
use birch_and_silk::game::Game;
use birch_and_silk::input;

/// Input and timer polling period; well under the flight tick.
const FRAME: Duration = Duration::from_millis(5);

#[derive(Debug, Parser)]
#[command(version, about = "A Song of Birch and Silk: turn-based archery on a text grid")]
struct Args {
    /// Seed the enemy spawner for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
    /// Milliseconds between two steps of a flying arrow.
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Spawn enemies on every N-th turn.
    #[arg(long)]
    spawn_frequency: Option<u64>,
    /// Enemies spawned per spawning turn.
    #[arg(long)]
    spawn_quantity: Option<usize>,
    /// Write logs here (the terminal itself is taken by the game).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            seed: self.seed,
            tick_interval: self
                .tick_ms
                .map_or(defaults.tick_interval, Duration::from_millis),
            spawn_frequency: self.spawn_frequency.unwrap_or(defaults.spawn_frequency),
            spawn_quantity: self.spawn_quantity.unwrap_or(defaults.spawn_quantity),
            ..defaults
        }
    }
}

fn init_logging(path: Option<&Path>) -> Result<(), Error> {
    let default_filter = if path.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = path {
        let file = File::create(path).map_err(|source| Error::LogFile {
            path: path.display().to_string(),
            source,
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    let mut game = Game::new(args.config())?;

    let mut target = TerminalTarget::new(BufWriter::new(stdout()));
    terminal::enable_raw_mode()?;
    target.writer().execute(terminal::EnterAlternateScreen)?;
    target.writer().execute(cursor::Hide)?;

    // Blocking key reads live on their own thread so the loop can keep
    // ticking a flying arrow between key presses.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut game, &mut target, &rx);

    // Always restore the terminal
    let _ = target.writer().execute(cursor::Show);
    let _ = target.writer().execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        error!("{err}");
    }
    result
}

fn is_interrupt(ev: &Event) -> bool {
    matches!(
        ev,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL)
    )
}

fn run<W: Write>(
    game: &mut Game,
    target: &mut TerminalTarget<W>,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), Error> {
    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            if is_interrupt(&ev) {
                info!("interrupted");
                return Ok(());
            }
            if let Some(action) = input::from_event(&ev) {
                game.handle(action);
            }
            if game.should_quit() {
                return Ok(());
            }
        }

        game.poll_flight(Instant::now());

        if game.take_refresh() {
            target.present(&game.render())?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
