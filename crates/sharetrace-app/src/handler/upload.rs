//! Image picking, Share, ticker and reset handlers

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sharetrace_core::prelude::*;
use sharetrace_core::SelectedImage;

use crate::message::TickerTaskSlot;
use crate::phone::TickOutcome;
use crate::state::{AppState, NoticeLevel, TickerHandle, UiMode};

use super::{UpdateAction, UpdateResult};

/// Expand a leading `~/` against the home directory
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Enter in the file prompt
pub fn handle_file_prompt_submit(state: &mut AppState) -> UpdateResult {
    let raw = state.file_prompt.input.trim().to_string();
    state.file_prompt.clear();
    state.ui_mode = UiMode::Normal;

    let path = if raw.is_empty() {
        None
    } else {
        Some(expand_home(&raw))
    };
    handle_select_image(state, path)
}

/// Begin loading a picked file; `None` leaves everything as it was
pub fn handle_select_image(state: &mut AppState, path: Option<PathBuf>) -> UpdateResult {
    let Some(path) = path else {
        debug!("No file selected");
        return UpdateResult::none();
    };
    if state.phone.state().is_active() {
        debug!("Ignoring file pick during upload: {}", path.display());
        return UpdateResult::none();
    }

    info!("Loading image {}", path.display());
    state.loading_image = true;
    state.set_notice(NoticeLevel::Info, format!("Reading {}…", path.display()));
    UpdateResult::action(UpdateAction::LoadImage { path })
}

pub fn handle_image_loaded(state: &mut AppState, image: SelectedImage) -> UpdateResult {
    state.loading_image = false;
    if state.phone.select_image(Some(image), &mut state.narrative) {
        state.notice = None;
    }
    UpdateResult::none()
}

pub fn handle_image_load_failed(state: &mut AppState, path: PathBuf, error: String) -> UpdateResult {
    warn!("Failed to load {}: {}", path.display(), error);
    state.loading_image = false;
    state.set_notice(NoticeLevel::Error, error);
    UpdateResult::none()
}

/// Share button: new cycle, and a ticker only when nothing paces the phone
pub fn handle_start_upload(state: &mut AppState) -> UpdateResult {
    let Some(cycle) = state.phone.start_upload(&mut state.narrative) else {
        return UpdateResult::none();
    };

    // The previous cycle's ticker must not touch the new one
    state.stop_ticker();
    state.ui_mode = UiMode::Normal;
    state.notice = None;
    state.sync_upload();

    if state.phone.needs_ticker(state.progress_override()) {
        let upload = &state.settings.upload;
        UpdateResult::action(UpdateAction::StartTicker {
            cycle,
            interval: Duration::from_millis(upload.tick_interval_ms),
            max_increment: upload.max_increment,
        })
    } else {
        debug!("Cycle {} paced by the narrative; no ticker", cycle);
        UpdateResult::none()
    }
}

pub fn handle_tick(state: &mut AppState, cycle: u64, increment: f64) -> UpdateResult {
    match state.phone.apply_tick(cycle, increment) {
        TickOutcome::Ignored => {}
        TickOutcome::Advanced(progress) => {
            trace!("Cycle {} progress {:.1}", cycle, progress);
        }
        TickOutcome::Finished => {
            debug!("Cycle {} ticker reached 100", cycle);
            state.stop_ticker();
        }
    }
    UpdateResult::none()
}

/// Adopt the ticker task, unless its cycle was already retired
pub fn handle_ticker_started(
    state: &mut AppState,
    cycle: u64,
    shutdown_tx: Arc<tokio::sync::watch::Sender<bool>>,
    task_handle: TickerTaskSlot,
) -> UpdateResult {
    let handle = TickerHandle::new(cycle, shutdown_tx, task_handle);
    let current = state.phone.cycle() == cycle && state.phone.needs_ticker(state.progress_override());
    if current {
        state.stop_ticker();
        state.ticker = Some(handle);
    } else {
        debug!("Ticker for retired cycle {} started late; stopping it", cycle);
        handle.stop();
    }
    UpdateResult::none()
}

pub fn handle_cancel_post(state: &mut AppState) -> UpdateResult {
    if !state.phone.can_edit_caption() {
        return UpdateResult::none();
    }
    state.stop_ticker();
    state.phone.cancel(&mut state.narrative);
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    state.stop_ticker();
    state.phone.reset(&mut state.narrative);
    state.ui_mode = UiMode::Normal;
    state.notice = None;
    UpdateResult::none()
}
