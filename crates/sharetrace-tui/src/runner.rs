//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use tokio::sync::mpsc;

use sharetrace_app::config::Settings;
use sharetrace_app::message::Message;
use sharetrace_app::process::process_message;
use sharetrace_app::signals;
use sharetrace_app::state::AppState;
use sharetrace_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
///
/// `initial_image` is loaded as if it had been picked on the phone.
pub async fn run(settings: Settings, initial_image: Option<PathBuf>) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting: tick={}ms pace_with_narrative={}",
        settings.upload.tick_interval_ms, settings.upload.pace_with_narrative
    );

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse() {
        warn!("{}", e);
    }

    let mut state = AppState::with_settings(settings);

    // Unified message channel (signal handler, file loads, ticker)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    if let Some(path) = initial_image {
        process_message(
            &mut state,
            Message::SelectImage { path: Some(path) },
            &msg_tx,
        );
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    // No ticker may outlive the UI
    state.stop_ticker();

    terminal::disable_mouse();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process background messages (signals, file loads, ticker)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll().context("Failed to read terminal events")? {
            process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}
