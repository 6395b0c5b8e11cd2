//! Message types for the application (TEA pattern)

use std::path::PathBuf;
use std::sync::Arc;

use sharetrace_core::SelectedImage;

use crate::input_key::InputKey;

/// Shared slot holding the ticker's JoinHandle, filled right after spawn
pub type TickerTaskSlot = Arc<std::sync::Mutex<Option<tokio::task::JoinHandle<()>>>>;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animation frames
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Image Picker Messages
    // ─────────────────────────────────────────────────────────
    /// Open the file path prompt (the phone's "+" button)
    OpenFilePrompt,
    /// Character typed into the file prompt
    FilePromptInput(char),
    /// Delete the last character of the file prompt
    FilePromptBackspace,
    /// Confirm the typed path
    FilePromptSubmit,
    /// Dismiss the prompt without choosing
    FilePromptCancel,
    /// Pick a file; `None` means the picker returned nothing
    SelectImage { path: Option<PathBuf> },
    /// Background read + encode finished
    ImageLoaded { image: SelectedImage },
    /// Background read failed
    ImageLoadFailed { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────
    // Phone Messages
    // ─────────────────────────────────────────────────────────
    /// Share button on the gallery screen
    StartUpload,
    /// X button on the gallery screen
    CancelPost,
    /// Return the phone to the empty feed from any screen
    ResetPhone,
    /// Focus the caption field
    StartCaptionEdit,
    /// Character typed into the caption
    CaptionInput(char),
    /// Delete the last caption character
    CaptionBackspace,
    /// Leave the caption field
    FinishCaptionEdit,

    // ─────────────────────────────────────────────────────────
    // Upload Ticker Messages
    // ─────────────────────────────────────────────────────────
    /// Simulated progress step for upload `cycle`
    UploadTick { cycle: u64, increment: f64 },
    /// Ticker task for `cycle` is running
    ///
    /// Carries the shutdown sender and task handle so the state can stop it.
    /// Stored as `Arc` because `Message` derives `Clone`.
    UploadTickerStarted {
        cycle: u64,
        shutdown_tx: Arc<tokio::sync::watch::Sender<bool>>,
        task_handle: TickerTaskSlot,
    },

    // ─────────────────────────────────────────────────────────
    // Narrative Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the story by rows (negative is up)
    ScrollBy(i32),
    /// Smooth scroll to the next slide
    NextSlide,
    /// Smooth scroll to the previous slide
    PreviousSlide,
    /// Smooth scroll to a slide by index
    JumpToSlide(usize),
    /// Smooth scroll to the first slide
    FirstSlide,
    /// Smooth scroll to the last slide
    LastSlide,
}
