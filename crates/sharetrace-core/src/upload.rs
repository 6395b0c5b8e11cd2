//! Upload lifecycle types and progress arithmetic

use rand::Rng;

/// Progress value at which an upload counts as finished
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Lifecycle of one share flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    /// Nothing picked yet (feed screen)
    #[default]
    Idle,
    /// Image picked, waiting for Share (gallery screen)
    ImageSelected,
    /// Progress is advancing
    Uploading,
    /// Progress reached 100; terminal "Shared!" display
    Complete,
}

impl UploadState {
    /// True while the upload screen is visible
    pub fn is_active(&self) -> bool {
        matches!(self, UploadState::Uploading | UploadState::Complete)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadState::Idle => "Idle",
            UploadState::ImageSelected => "Image selected",
            UploadState::Uploading => "Uploading",
            UploadState::Complete => "Complete",
        }
    }
}

/// Clamp any progress value into `[0, 100]`
///
/// NaN collapses to zero.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, PROGRESS_COMPLETE)
    }
}

/// Draw one simulated increment in `[0, max_increment)`
pub fn random_increment<R: Rng + ?Sized>(rng: &mut R, max_increment: f64) -> f64 {
    if max_increment <= 0.0 {
        return 0.0;
    }
    rng.gen::<f64>() * max_increment
}

/// Apply a ticker increment; the result never decreases and never exceeds 100
pub fn apply_increment(previous: f64, increment: f64) -> f64 {
    let previous = clamp_progress(previous);
    (previous + increment.max(0.0)).min(PROGRESS_COMPLETE)
}

/// Percentage of the story reached when `active` is the slide in view
///
/// `round((active + 1) / count * 100)`; zero when there are no slides.
pub fn slide_progress(active: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let active = active.min(count - 1);
    ((active as f64 + 1.0) / count as f64 * 100.0).round()
}
