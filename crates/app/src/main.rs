use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{DEFAULT_FLIP_DELAY, SessionController};
use storage::csv_files::{DEFAULT_FULL_DECK, DEFAULT_RESUME};
use storage::{CsvDeckFiles, DeckOrigin, Storage};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidFlipSecs { raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidFlipSecs { raw } => {
                write!(f, "invalid --flip-secs value: {raw} (expected a whole number >= 1)")
            }
            ArgsError::EmptyPath { flag } => write!(f, "{flag} cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(raw: String, flag: &'static str) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(raw))
}

fn parse_flip_secs(raw: String) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs >= 1 => Ok(Duration::from_secs(secs)),
        _ => Err(ArgsError::InvalidFlipSecs { raw }),
    }
}

struct DesktopApp {
    session: Mutex<Option<SessionController>>,
    flip_delay: Duration,
}

impl UiApp for DesktopApp {
    fn take_session(&self) -> Option<SessionController> {
        self.session.lock().ok().and_then(|mut guard| guard.take())
    }

    fn flip_delay(&self) -> Duration {
        self.flip_delay
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    deck: PathBuf,
    resume: PathBuf,
    flip_delay: Duration,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--deck <csv>] [--resume <csv>] [--flip-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --deck {DEFAULT_FULL_DECK}");
    eprintln!("  --resume {DEFAULT_RESUME}");
    eprintln!("  --flip-secs {}", DEFAULT_FLIP_DELAY.as_secs());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WORDFLIP_DECK, WORDFLIP_RESUME, WORDFLIP_FLIP_SECS, RUST_LOG");
}

impl Args {
    /// Environment first, flags override.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut deck = env("WORDFLIP_DECK")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_FULL_DECK), PathBuf::from);
        let mut resume = env("WORDFLIP_RESUME")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_RESUME), PathBuf::from);
        let mut flip_delay = match env("WORDFLIP_FLIP_SECS") {
            Some(raw) => parse_flip_secs(raw)?,
            None => DEFAULT_FLIP_DELAY,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--deck" => {
                    deck = require_path(require_value(args, "--deck")?, "--deck")?;
                }
                "--resume" => {
                    resume = require_path(require_value(args, "--resume")?, "--resume")?;
                }
                "--flip-secs" => {
                    flip_delay = parse_flip_secs(require_value(args, "--flip-secs")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            deck,
            resume,
            flip_delay,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::csv(CsvDeckFiles::new(parsed.deck, parsed.resume));
    let session = SessionController::load(Arc::clone(&storage.decks))?;
    match session.origin() {
        DeckOrigin::Resume => log::info!(
            "resuming with {} word(s) left from the last session",
            session.remaining()
        ),
        DeckOrigin::FullDeck => log::info!("starting on the full deck"),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session: Mutex::new(Some(session)),
        flip_delay: parsed.flip_delay,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flash Cards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
