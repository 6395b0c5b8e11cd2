//! Application state (Model in TEA pattern)

use std::sync::Arc;

use sharetrace_core::prelude::*;
use sharetrace_core::UploadState;

use crate::config::Settings;
use crate::message::TickerTaskSlot;
use crate::narrative::NarrativeStage;
use crate::phone::PhoneSimulator;

/// Bound on phone/narrative reconciliation passes per update
const MAX_SYNC_PASSES: usize = 4;

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keys drive the phone and the story
    #[default]
    Normal,

    /// Typing a file path for the image picker
    FilePrompt,

    /// Typing the post caption on the gallery screen
    CaptionInput,
}

/// Text entry state for the image path prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePromptState {
    pub input: String,
}

impl FilePromptState {
    pub fn clear(&mut self) {
        self.input.clear();
    }
}

/// Severity of a one-line notice shown under the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Running simulated-progress task for one upload cycle
pub struct TickerHandle {
    pub cycle: u64,
    shutdown_tx: Arc<tokio::sync::watch::Sender<bool>>,
    task_handle: TickerTaskSlot,
}

impl TickerHandle {
    pub fn new(
        cycle: u64,
        shutdown_tx: Arc<tokio::sync::watch::Sender<bool>>,
        task_handle: TickerTaskSlot,
    ) -> Self {
        Self {
            cycle,
            shutdown_tx,
            task_handle,
        }
    }

    /// Signal shutdown and abort the task
    pub fn stop(self) {
        let _ = self.shutdown_tx.send(true);
        if let Ok(mut slot) = self.task_handle.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
        debug!("Ticker for cycle {} stopped", self.cycle);
    }
}

impl std::fmt::Debug for TickerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerHandle")
            .field("cycle", &self.cycle)
            .finish()
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub settings: Settings,
    pub phone: PhoneSimulator,
    pub narrative: NarrativeStage,
    pub file_prompt: FilePromptState,
    pub notice: Option<Notice>,
    /// A file read is in flight
    pub loading_image: bool,
    /// Ticker of the current upload cycle, if one runs
    pub ticker: Option<TickerHandle>,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::Normal,
            narrative: NarrativeStage::new(&settings),
            phone: PhoneSimulator::new(),
            settings,
            file_prompt: FilePromptState::default(),
            notice: None,
            loading_image: false,
            ticker: None,
            quitting: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn quit(&mut self) {
        self.stop_ticker();
        self.quitting = true;
    }

    pub fn upload_state(&self) -> UploadState {
        self.phone.state()
    }

    /// Override the narrative currently imposes on the phone
    pub fn progress_override(&self) -> Option<f64> {
        self.narrative.progress_override()
    }

    /// Progress drawn on the phone's bar
    pub fn phone_display_progress(&self) -> f64 {
        self.phone.display_progress(self.progress_override())
    }

    /// Let the phone and the narrative settle on one progress value
    ///
    /// The phone reacting (e.g. completing) changes the narrative, which in
    /// turn changes the override; a few passes reach a fixed point.
    pub fn sync_upload(&mut self) {
        for _ in 0..MAX_SYNC_PASSES {
            let progress_override = self.narrative.progress_override();
            if !self.phone.sync(progress_override, &mut self.narrative) {
                break;
            }
        }
        if self.phone.is_complete() {
            self.stop_ticker();
        }
    }

    pub fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    pub fn set_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharetrace_core::SelectedImage;

    fn image() -> SelectedImage {
        SelectedImage::from_data_url("data:image/png;base64,iVBORw0KGgo=")
    }

    #[test]
    fn test_new_state() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert_eq!(state.upload_state(), UploadState::Idle);
        assert!(!state.should_quit());
        assert!(state.ticker.is_none());
    }

    #[test]
    fn test_sync_reaches_completion_under_override() {
        let mut state = AppState::new();
        state.narrative.viewport_mut().mount(10);
        state.phone.select_image(Some(image()), &mut state.narrative);
        state.phone.start_upload(&mut state.narrative);
        state.sync_upload();
        assert_eq!(state.phone_display_progress(), 13.0);

        state.narrative.viewport_mut().set_offset(70);
        state.sync_upload();
        assert_eq!(state.upload_state(), UploadState::Complete);
        assert!(state.narrative.is_complete());
        assert_eq!(state.phone_display_progress(), 100.0);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = AppState::new();
        state.quit();
        assert!(state.should_quit());
    }
}
