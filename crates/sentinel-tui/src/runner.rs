//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal for the lifetime of the console:
//! - `run`: set up terminal, streams, and signal handling, then tear down
//! - `run_loop`: drain channel messages, render, poll terminal input

use std::sync::Arc;

use sentinel_app::config::Settings;
use sentinel_app::{process_message, signals, spawn_streams, AppState, Message};
use sentinel_core::prelude::*;
use sentinel_stream::{DirectiveApi, DirectiveControl, Endpoints};
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the console against the resolved endpoints until the user quits.
pub async fn run(settings: Settings, endpoints: Endpoints) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = terminal::init()?;

    let mut state = AppState::new(settings);
    info!(
        "Connecting to {} (logs: {}, directives: {})",
        state.server_label, endpoints.logs, endpoints.directives
    );

    // Unified message channel: streams, signals, and action results
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let clients = spawn_streams(&endpoints, msg_tx.clone());
    let control = Arc::new(DirectiveApi::new(endpoints.api_base.clone()));

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &control);

    // The receiver is gone by now, so stream handlers blocked on a full
    // channel fail their send and the tasks can finish.
    clients.shutdown().await;

    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    control: &Arc<C>,
) -> Result<()>
where
    C: DirectiveControl + Sync + 'static,
{
    while !state.should_quit() {
        // Stream events, signals, and action results
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, control);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, control);
        }
    }

    info!("Quit requested, shutting down");
    Ok(())
}
