use std::io;
use std::panic;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_classic::config::{theme_by_name, Theme, DEFAULT_GRID, THEMES};
use snake_classic::game::GameState;
use snake_classic::input::{GameInput, InputHandler};
use snake_classic::renderer::{self, ViewOptions};
use snake_classic::scheduler::Scheduler;
use snake_classic::settings::{load_settings, Settings};
use snake_classic::terminal_runtime::{restore_terminal, TerminalSession};

/// Loop sleep keeping input responsive without burning CPU.
const IDLE_SLEEP: Duration = Duration::from_millis(8);

/// Classic fixed-grid Snake for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Color theme id (overrides the settings file).
    #[arg(long)]
    theme: Option<String>,

    /// Seed the item placement RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the background grid dots.
    #[arg(long = "no-grid")]
    no_grid: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Ignoring settings file: {error}");
            Settings::default()
        }
    };

    let theme_id = cli.theme.as_deref().unwrap_or(&settings.theme);
    let Some(theme) = theme_by_name(theme_id) else {
        let available: Vec<&str> = THEMES.iter().map(|theme| theme.name).collect();
        eprintln!(
            "Unknown theme {theme_id:?}; available themes: {}",
            available.join(", ")
        );
        return ExitCode::from(2);
    };
    let show_grid = settings.show_grid && !cli.no_grid;

    install_panic_hook();

    match run(cli.seed, theme, show_grid) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(seed: Option<u64>, theme: &Theme, show_grid: bool) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::default();

    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(DEFAULT_GRID, seed),
        None => GameState::new(DEFAULT_GRID),
    };
    let mut scheduler = Scheduler::with_default_period();
    scheduler.start(Instant::now());

    loop {
        let view = ViewOptions { theme, show_grid };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, view))?;

        if let Some(game_input) = input.poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => state.request_heading_change(direction),
                GameInput::Restart => {
                    if !state.is_running() {
                        state.reset();
                        scheduler.start(Instant::now());
                    }
                }
            }
        }

        if scheduler.poll(Instant::now()) {
            state.advance();
            if !state.is_running() {
                scheduler.stop();
            }
        }

        thread::sleep(IDLE_SLEEP);
    }

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
