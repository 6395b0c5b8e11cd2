//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, scroll, upload, UpdateResult};

/// Process a message and update state
///
/// Every message ends with a phone/narrative sync pass, the equivalent of the
/// render effects that keep both progress displays in step.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);
    state.sync_upload();
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.narrative.viewport_mut().tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Image Picker Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenFilePrompt => {
            if state.phone.state().is_active() {
                return UpdateResult::none();
            }
            state.file_prompt.clear();
            state.ui_mode = UiMode::FilePrompt;
            UpdateResult::none()
        }
        Message::FilePromptInput(c) => {
            state.file_prompt.input.push(c);
            UpdateResult::none()
        }
        Message::FilePromptBackspace => {
            state.file_prompt.input.pop();
            UpdateResult::none()
        }
        Message::FilePromptSubmit => upload::handle_file_prompt_submit(state),
        Message::FilePromptCancel => {
            state.file_prompt.clear();
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::SelectImage { path } => upload::handle_select_image(state, path),
        Message::ImageLoaded { image } => upload::handle_image_loaded(state, image),
        Message::ImageLoadFailed { path, error } => {
            upload::handle_image_load_failed(state, path, error)
        }

        // ─────────────────────────────────────────────────────────
        // Phone Messages
        // ─────────────────────────────────────────────────────────
        Message::StartUpload => upload::handle_start_upload(state),
        Message::CancelPost => upload::handle_cancel_post(state),
        Message::ResetPhone => upload::handle_reset(state),
        Message::StartCaptionEdit => {
            if state.phone.can_edit_caption() {
                state.ui_mode = UiMode::CaptionInput;
            }
            UpdateResult::none()
        }
        Message::CaptionInput(c) => {
            state.phone.push_caption_char(c);
            UpdateResult::none()
        }
        Message::CaptionBackspace => {
            state.phone.pop_caption_char();
            UpdateResult::none()
        }
        Message::FinishCaptionEdit => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload Ticker Messages
        // ─────────────────────────────────────────────────────────
        Message::UploadTick { cycle, increment } => upload::handle_tick(state, cycle, increment),
        Message::UploadTickerStarted {
            cycle,
            shutdown_tx,
            task_handle,
        } => upload::handle_ticker_started(state, cycle, shutdown_tx, task_handle),

        // ─────────────────────────────────────────────────────────
        // Narrative Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollBy(delta) => scroll::handle_scroll_by(state, delta),
        Message::NextSlide => scroll::handle_next_slide(state),
        Message::PreviousSlide => scroll::handle_previous_slide(state),
        Message::JumpToSlide(index) => scroll::handle_jump_to_slide(state, index),
        Message::FirstSlide => scroll::handle_jump_to_slide(state, 0),
        Message::LastSlide => {
            let last = state.narrative.viewport().slide_count().saturating_sub(1);
            scroll::handle_jump_to_slide(state, last)
        }
    }
}
