//! Terminal UI for intersections.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, KEY_HELP, command_for};
pub use ui::draw;

use crate::config::GameConfig;
use crate::source::LoadedPuzzle;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use intersections_core::{Action, GameController, GameSession, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Plays one puzzle on the real terminal.
///
/// Takes over the screen until the player quits, then restores it.
#[instrument(skip_all, fields(number = ?loaded.number))]
pub async fn run_tui(config: &GameConfig, loaded: LoadedPuzzle) -> Result<GameSession> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (key_tx, key_rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        if let Err(e) = read_keys(key_tx) {
            error!(error = %e, "Key reader stopped");
        }
    });

    let res = play(config, loaded, &mut terminal, key_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Forwards key presses until the game loop hangs up.
fn read_keys(tx: mpsc::UnboundedSender<KeyCode>) -> io::Result<()> {
    while !tx.is_closed() {
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && tx.send(key.code).is_err()
        {
            break;
        }
    }
    debug!("Key reader finished");
    Ok(())
}

/// Runs the game loop, drawing to `terminal` and reading `keys`.
///
/// Returns the final session once the player quits or the key stream ends.
#[instrument(skip_all, fields(number = ?loaded.number))]
pub async fn play<B: Backend>(
    config: &GameConfig,
    loaded: LoadedPuzzle,
    terminal: &mut Terminal<B>,
    mut keys: mpsc::UnboundedReceiver<KeyCode>,
) -> Result<GameSession> {
    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let session = GameSession::new(loaded.puzzle, loaded.number, &mut rng);
    let mut controller = GameController::new(session, App::new());

    let (unflag_tx, mut unflag_rx) = mpsc::unbounded_channel::<Vec<Position>>();

    loop {
        for positions in controller.observer_mut().take_flagged() {
            schedule_unflag(unflag_tx.clone(), positions, config.unflag_delay());
        }

        terminal
            .draw(|frame| draw(frame, controller.session(), controller.observer()))
            .map_err(|e| anyhow::anyhow!("Failed to draw: {}", e))?;

        tokio::select! {
            key = keys.recv() => {
                let Some(key) = key else {
                    debug!("Key stream closed");
                    break;
                };
                if !handle_key(&mut controller, key) {
                    info!("Player quit");
                    break;
                }
            }
            Some(positions) = unflag_rx.recv() => {
                controller.clear_flags(&positions);
            }
        }
    }

    info!(phase = ?controller.session().phase(), "Game loop finished");
    let (session, _) = controller.into_parts();
    Ok(session)
}

/// Applies one key. Returns false when the player quits.
fn handle_key(controller: &mut GameController<App>, key: KeyCode) -> bool {
    let Some(command) = command_for(key) else {
        return true;
    };
    debug!(?key, ?command, "Key pressed");

    match command {
        Command::Quit => return false,
        Command::Cursor(step) => {
            let (session, app) = controller.parts_mut();
            app.move_cursor(session, step);
        }
        Command::Pick => {
            let id = controller
                .observer()
                .cursor_card(controller.session())
                .map(|card| card.id());
            match id {
                Some(id) => dispatch(controller, Action::Select(id)),
                None => controller.observer_mut().set_status("No cards left in the pool"),
            }
        }
        Command::Game(action) => dispatch(controller, action),
    }
    true
}

/// Forwards an intent, telling the player when nothing happened.
fn dispatch(controller: &mut GameController<App>, action: Action) {
    if let Err(reason) = controller.try_dispatch(action) {
        debug!(%action, %reason, "Rejected key");
        controller
            .observer_mut()
            .set_status(format!("Can't {}: {}", action, reason));
    }
}

/// Clears incorrect markers after `delay`. Not cancellable: a late
/// clear is harmless whatever the board looks like by then.
fn schedule_unflag(tx: mpsc::UnboundedSender<Vec<Position>>, positions: Vec<Position>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // The loop may already be gone.
        let _ = tx.send(positions);
    });
}
