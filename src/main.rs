//! Terminal Hangman runner (default binary).
//!
//! Draws the current screen, polls crossterm for keys with a short timeout,
//! and ticks the session between polls so an expired countdown shows up
//! while the player is still typing.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use hangman::core::GameConfig;
use hangman::input::map_key_event;
use hangman::session::{Screen, Session, FAREWELL};
use hangman::term::{GameView, Prompt, ScreenView, TerminalRenderer, Viewport};
use hangman::types::TICK_MS;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(config.log_path.as_deref());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
    } else {
        println!("{FAREWELL}");
    }
    result
}

/// Log to `HANGMAN_LOG_PATH` when set. Otherwise stderr, silent unless
/// `RUST_LOG` asks for output (stderr shares the game screen).
fn init_logging(log_path: Option<&Path>) {
    if let Some(path) = log_path {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            let filter = EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy();
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
            return;
        }
    }

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut session = Session::new(config);
    let view = GameView::default();
    let tick = Duration::from_millis(TICK_MS);

    while session.is_running() {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        draw(term, &view, &session, Viewport::new(w, h))?;

        // Input, or a timeout so the countdown keeps moving.
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(key) = map_key_event(key) {
                        session.handle_key(key);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        session.tick();
    }

    Ok(())
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &Session,
    viewport: Viewport,
) -> Result<()> {
    let input = session.input();
    let prompt = Prompt {
        label: session.prompt().unwrap_or_default(),
        input: &input,
    };

    let snapshot = session.game().map(|game| game.snapshot());
    let screen = match (session.screen(), &snapshot) {
        (Screen::Playing | Screen::PlayAgain, Some(snapshot)) => ScreenView::Game {
            snapshot,
            seconds_left: session.seconds_left(),
            messages: session.messages(),
            prompt,
        },
        _ => ScreenView::Menu {
            messages: session.messages(),
            prompt,
        },
    };

    let fb = view.render(&screen, viewport);
    term.draw(&fb)
}
