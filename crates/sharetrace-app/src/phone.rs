//! Phone simulator state machine
//!
//! Models the share flow of a photo app: an empty feed, the gallery screen
//! with the picked image and a caption, and the upload screen whose progress
//! bar ends on "Shared!".
//!
//! ```text
//!   Idle ──select_image──▶ ImageSelected ──start_upload──▶ Uploading ──≥100──▶ Complete
//!    ▲                          │                              │                  │
//!    └──────────── reset ───────┴──────────────────────────────┴──────────────────┘
//! ```
//!
//! Every transition is reported to an [`UploadObserver`]. The observer is the
//! only coupling to the rest of the application.

use std::sync::Arc;

use sharetrace_core::prelude::*;
use sharetrace_core::{apply_increment, clamp_progress, SelectedImage, UploadState};

/// Maximum caption length, in characters
pub const MAX_CAPTION_CHARS: usize = 120;

/// Receiver of phone lifecycle notifications
///
/// All methods default to no-ops so observers only implement what they use.
pub trait UploadObserver {
    fn on_upload_start(&mut self) {}
    fn on_upload_progress(&mut self, _progress: f64) {}
    fn on_upload_complete(&mut self) {}
    fn on_reset(&mut self) {}
    fn on_image_selected(&mut self, _image: &Arc<SelectedImage>) {}
}

/// Observer that ignores everything
impl UploadObserver for () {}

/// Screen currently drawn on the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneScreen {
    Feed,
    Gallery,
    Uploading,
}

impl From<UploadState> for PhoneScreen {
    fn from(state: UploadState) -> Self {
        match state {
            UploadState::Idle => PhoneScreen::Feed,
            UploadState::ImageSelected => PhoneScreen::Gallery,
            UploadState::Uploading | UploadState::Complete => PhoneScreen::Uploading,
        }
    }
}

/// Result of feeding one ticker step to the phone
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Tick belongs to a retired cycle or the phone is not uploading
    Ignored,
    /// Progress moved to the contained value
    Advanced(f64),
    /// Progress reached 100; the ticker should stop
    Finished,
}

/// The phone's local state
#[derive(Debug, Clone, Default)]
pub struct PhoneSimulator {
    state: UploadState,
    image: Option<Arc<SelectedImage>>,
    progress: f64,
    caption: String,
    /// Incremented on every Share; ticks carry it
    cycle: u64,
    /// Last displayed progress handed to `on_upload_progress`
    last_reported: Option<f64>,
}

impl PhoneSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn screen(&self) -> PhoneScreen {
        self.state.into()
    }

    pub fn image(&self) -> Option<&Arc<SelectedImage>> {
        self.image.as_ref()
    }

    /// The phone's own progress value (timer driven, or the last override)
    pub fn raw_progress(&self) -> f64 {
        self.progress
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn is_complete(&self) -> bool {
        self.state == UploadState::Complete
    }

    /// Progress shown on screen: the override when present, else our own
    pub fn display_progress(&self, progress_override: Option<f64>) -> f64 {
        progress_override
            .map(clamp_progress)
            .unwrap_or(self.progress)
    }

    /// Take a decoded image and move to the gallery screen
    ///
    /// `None` means the picker was dismissed: nothing changes. An image that
    /// arrives while an upload is on screen is dropped.
    pub fn select_image(
        &mut self,
        image: Option<SelectedImage>,
        observer: &mut impl UploadObserver,
    ) -> bool {
        let Some(image) = image else {
            debug!("Image picker returned nothing");
            return false;
        };
        if self.state.is_active() {
            warn!("Ignoring image selection while an upload is on screen");
            return false;
        }

        let image = Arc::new(image);
        info!(
            "Image selected: {} ({} bytes)",
            image.file_name().unwrap_or("<unnamed>"),
            image.approx_size_bytes()
        );
        observer.on_image_selected(&image);
        // A caption belongs to the picture it was written for
        self.caption.clear();
        self.image = Some(image);
        self.state = UploadState::ImageSelected;
        true
    }

    /// Press Share: begin a new upload cycle at 0%
    ///
    /// Returns the new cycle id, or `None` when there is no image to share.
    pub fn start_upload(&mut self, observer: &mut impl UploadObserver) -> Option<u64> {
        if self.image.is_none() {
            debug!("Share pressed with no image selected");
            return None;
        }

        self.state = UploadState::Uploading;
        self.progress = 0.0;
        self.cycle += 1;
        info!("Upload cycle {} started", self.cycle);
        observer.on_upload_start();
        Some(self.cycle)
    }

    /// Whether the internal ticker has to drive progress
    pub fn needs_ticker(&self, progress_override: Option<f64>) -> bool {
        self.state == UploadState::Uploading && progress_override.is_none()
    }

    /// Apply one ticker step belonging to `cycle`
    pub fn apply_tick(&mut self, cycle: u64, increment: f64) -> TickOutcome {
        if cycle != self.cycle || self.state != UploadState::Uploading {
            trace!("Dropping tick for cycle {} (current {})", cycle, self.cycle);
            return TickOutcome::Ignored;
        }

        self.progress = apply_increment(self.progress, increment);
        if self.progress >= sharetrace_core::PROGRESS_COMPLETE {
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced(self.progress)
        }
    }

    /// Reconcile displayed progress with the observer
    ///
    /// Adopts an override into the raw progress, reports a changed displayed
    /// value, and performs the Uploading → Complete transition once progress
    /// hits 100. Calling it again in Complete has no side effects.
    /// Returns true if anything was reported.
    pub fn sync(
        &mut self,
        progress_override: Option<f64>,
        observer: &mut impl UploadObserver,
    ) -> bool {
        let mut changed = false;

        if let Some(value) = progress_override {
            self.progress = clamp_progress(value);
        }

        let display = self.display_progress(progress_override);
        if self.last_reported != Some(display) {
            self.last_reported = Some(display);
            observer.on_upload_progress(display);
            changed = true;
        }

        if self.state == UploadState::Uploading && display >= sharetrace_core::PROGRESS_COMPLETE {
            self.state = UploadState::Complete;
            info!("Upload cycle {} complete", self.cycle);
            observer.on_upload_complete();
            changed = true;
        }

        changed
    }

    /// Back to the empty feed; clears image, caption and progress
    pub fn reset(&mut self, observer: &mut impl UploadObserver) {
        if self.state != UploadState::Idle {
            info!("Phone reset from {}", self.state.label());
        }
        self.state = UploadState::Idle;
        self.image = None;
        self.progress = 0.0;
        self.caption.clear();
        observer.on_reset();
    }

    /// The X button on the gallery screen
    pub fn cancel(&mut self, observer: &mut impl UploadObserver) {
        self.reset(observer);
    }

    // ─────────────────────────────────────────────────────────
    // Caption
    // ─────────────────────────────────────────────────────────

    pub fn can_edit_caption(&self) -> bool {
        self.state == UploadState::ImageSelected
    }

    pub fn push_caption_char(&mut self, c: char) {
        if self.can_edit_caption()
            && !c.is_control()
            && self.caption.chars().count() < MAX_CAPTION_CHARS
        {
            self.caption.push(c);
        }
    }

    pub fn pop_caption_char(&mut self) {
        if self.can_edit_caption() {
            self.caption.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        starts: usize,
        completes: usize,
        resets: usize,
        selected: usize,
        progress: Vec<f64>,
    }

    impl UploadObserver for Recorder {
        fn on_upload_start(&mut self) {
            self.starts += 1;
        }
        fn on_upload_progress(&mut self, progress: f64) {
            self.progress.push(progress);
        }
        fn on_upload_complete(&mut self) {
            self.completes += 1;
        }
        fn on_reset(&mut self) {
            self.resets += 1;
        }
        fn on_image_selected(&mut self, _image: &Arc<SelectedImage>) {
            self.selected += 1;
        }
    }

    fn test_image() -> SelectedImage {
        SelectedImage::from_data_url("data:image/png;base64,iVBORw0KGgo=")
    }

    fn phone_in_gallery(obs: &mut Recorder) -> PhoneSimulator {
        let mut phone = PhoneSimulator::new();
        assert!(phone.select_image(Some(test_image()), obs));
        phone
    }

    #[test]
    fn test_new_phone_is_idle_feed() {
        let phone = PhoneSimulator::new();
        assert_eq!(phone.state(), UploadState::Idle);
        assert_eq!(phone.screen(), PhoneScreen::Feed);
        assert!(phone.image().is_none());
        assert_eq!(phone.raw_progress(), 0.0);
    }

    #[test]
    fn test_select_image_moves_to_gallery() {
        let mut obs = Recorder::default();
        let phone = phone_in_gallery(&mut obs);
        assert_eq!(phone.state(), UploadState::ImageSelected);
        assert_eq!(phone.screen(), PhoneScreen::Gallery);
        assert!(phone.image().is_some());
        assert_eq!(obs.selected, 1);
    }

    #[test]
    fn test_select_nothing_is_noop() {
        let mut obs = Recorder::default();
        let mut phone = PhoneSimulator::new();
        assert!(!phone.select_image(None, &mut obs));
        assert_eq!(phone.state(), UploadState::Idle);
        assert!(phone.image().is_none());
        assert_eq!(obs.selected, 0);

        let mut phone = phone_in_gallery(&mut obs);
        let before = phone.image().cloned();
        assert!(!phone.select_image(None, &mut obs));
        assert_eq!(phone.state(), UploadState::ImageSelected);
        assert!(Arc::ptr_eq(phone.image().unwrap(), before.as_ref().unwrap()));
    }

    #[test]
    fn test_new_image_in_gallery_drops_old_caption() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        phone.push_caption_char('o');
        phone.push_caption_char('k');
        assert_eq!(phone.caption(), "ok");

        assert!(phone.select_image(
            Some(SelectedImage::from_data_url("data:image/png;base64,AAAA")),
            &mut obs
        ));
        assert_eq!(phone.state(), UploadState::ImageSelected);
        assert_eq!(phone.caption(), "");
        assert_eq!(obs.selected, 2);
    }

    #[test]
    fn test_select_image_ignored_while_uploading() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        phone.start_upload(&mut obs);
        assert!(!phone.select_image(Some(test_image()), &mut obs));
        assert_eq!(phone.state(), UploadState::Uploading);
    }

    #[test]
    fn test_start_upload_resets_progress_and_notifies_once() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);

        let cycle = phone.start_upload(&mut obs);
        assert_eq!(cycle, Some(1));
        assert_eq!(phone.state(), UploadState::Uploading);
        assert_eq!(phone.raw_progress(), 0.0);
        assert_eq!(obs.starts, 1);

        phone.apply_tick(1, 40.0);
        assert_eq!(phone.raw_progress(), 40.0);

        // Sharing again restarts from zero with a fresh cycle
        assert_eq!(phone.start_upload(&mut obs), Some(2));
        assert_eq!(phone.raw_progress(), 0.0);
        assert_eq!(obs.starts, 2);
    }

    #[test]
    fn test_start_upload_without_image_is_rejected() {
        let mut obs = Recorder::default();
        let mut phone = PhoneSimulator::new();
        assert_eq!(phone.start_upload(&mut obs), None);
        assert_eq!(phone.state(), UploadState::Idle);
        assert_eq!(obs.starts, 0);
    }

    #[test]
    fn test_needs_ticker_only_without_override() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        assert!(!phone.needs_ticker(None));
        phone.start_upload(&mut obs);
        assert!(phone.needs_ticker(None));
        assert!(!phone.needs_ticker(Some(0.0)));
    }

    #[test]
    fn test_ticks_from_retired_cycle_are_ignored() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        phone.start_upload(&mut obs);
        phone.start_upload(&mut obs);

        assert_eq!(phone.apply_tick(1, 50.0), TickOutcome::Ignored);
        assert_eq!(phone.raw_progress(), 0.0);
        assert_eq!(phone.apply_tick(2, 50.0), TickOutcome::Advanced(50.0));
    }

    #[test]
    fn test_tick_never_exceeds_100() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        let cycle = phone.start_upload(&mut obs).unwrap();

        assert_eq!(phone.apply_tick(cycle, 90.0), TickOutcome::Advanced(90.0));
        assert_eq!(phone.apply_tick(cycle, 30.0), TickOutcome::Finished);
        assert_eq!(phone.raw_progress(), 100.0);
    }

    #[test]
    fn test_complete_fires_exactly_once() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        let cycle = phone.start_upload(&mut obs).unwrap();
        phone.apply_tick(cycle, 100.0);

        phone.sync(None, &mut obs);
        phone.sync(None, &mut obs);
        phone.sync(Some(100.0), &mut obs);

        assert_eq!(phone.state(), UploadState::Complete);
        assert_eq!(phone.screen(), PhoneScreen::Uploading);
        assert_eq!(obs.completes, 1);
        // Further ticks are ignored once complete
        assert_eq!(phone.apply_tick(cycle, 5.0), TickOutcome::Ignored);
    }

    #[test]
    fn test_override_drives_completion() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        phone.start_upload(&mut obs);

        phone.sync(Some(50.0), &mut obs);
        assert_eq!(phone.state(), UploadState::Uploading);
        assert_eq!(phone.raw_progress(), 50.0);

        phone.sync(Some(100.0), &mut obs);
        assert!(phone.is_complete());
        assert_eq!(obs.completes, 1);
    }

    #[test]
    fn test_sync_reports_progress_only_on_change() {
        let mut obs = Recorder::default();
        let mut phone = PhoneSimulator::new();
        phone.sync(None, &mut obs);
        phone.sync(None, &mut obs);
        assert_eq!(obs.progress, vec![0.0]);
    }

    #[test]
    fn test_sync_does_not_complete_outside_upload() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        phone.sync(Some(100.0), &mut obs);
        assert_eq!(phone.state(), UploadState::ImageSelected);
        assert_eq!(obs.completes, 0);
    }

    #[test]
    fn test_reset_clears_everything_and_allows_new_completion() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        let cycle = phone.start_upload(&mut obs).unwrap();
        phone.apply_tick(cycle, 100.0);
        phone.sync(None, &mut obs);
        assert_eq!(obs.completes, 1);

        phone.reset(&mut obs);
        assert_eq!(phone.state(), UploadState::Idle);
        assert!(phone.image().is_none());
        assert_eq!(phone.raw_progress(), 0.0);
        assert_eq!(phone.caption(), "");
        assert_eq!(obs.resets, 1);

        phone.select_image(Some(test_image()), &mut obs);
        let cycle = phone.start_upload(&mut obs).unwrap();
        phone.apply_tick(cycle, 100.0);
        phone.sync(None, &mut obs);
        assert_eq!(obs.completes, 2);
    }

    #[test]
    fn test_cancel_from_gallery() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        phone.push_caption_char('h');
        phone.cancel(&mut obs);
        assert_eq!(phone.screen(), PhoneScreen::Feed);
        assert!(phone.image().is_none());
        assert_eq!(phone.caption(), "");
        assert_eq!(obs.resets, 1);
    }

    #[test]
    fn test_caption_editing_only_in_gallery() {
        let mut obs = Recorder::default();
        let mut phone = PhoneSimulator::new();
        phone.push_caption_char('x');
        assert_eq!(phone.caption(), "");

        phone.select_image(Some(test_image()), &mut obs);
        for c in "hi!".chars() {
            phone.push_caption_char(c);
        }
        phone.push_caption_char('\n');
        assert_eq!(phone.caption(), "hi!");
        phone.pop_caption_char();
        assert_eq!(phone.caption(), "hi");

        phone.start_upload(&mut obs);
        phone.push_caption_char('z');
        assert_eq!(phone.caption(), "hi");
    }

    #[test]
    fn test_caption_is_bounded() {
        let mut obs = Recorder::default();
        let mut phone = phone_in_gallery(&mut obs);
        for _ in 0..(MAX_CAPTION_CHARS + 10) {
            phone.push_caption_char('a');
        }
        assert_eq!(phone.caption().chars().count(), MAX_CAPTION_CHARS);
    }
}
