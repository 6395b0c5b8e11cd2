//! Narrative stage: slide tracking, progress synchronization and previews
//!
//! The stage observes the phone. Before Share it mirrors the phone's own
//! progress. Once an upload is on screen the progress everybody sees is the
//! share of the story the reader has scrolled through, and 100 as soon as
//! the phone reports completion. The phone's bar is paced by reading, not by
//! the timer.

pub mod scroll;

use std::sync::Arc;

use sharetrace_core::prelude::*;
use sharetrace_core::{
    approx_size_bytes, byte_preview, clamp_progress, http_request_preview, size_label,
    slide_count, slide_progress, SelectedImage, PROGRESS_COMPLETE,
};

use crate::config::Settings;
use crate::phone::UploadObserver;

pub use scroll::{active_slide_for, ScrollViewport};

/// Views derived from one image, computed once per image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPreviews {
    pub byte_preview: String,
    pub size_bytes: u64,
    pub size_label: String,
    pub http_request: String,
}

impl DerivedPreviews {
    pub fn compute(image: &SelectedImage) -> Self {
        let size_bytes = approx_size_bytes(Some(image.data_url()));
        Self {
            byte_preview: byte_preview(Some(image.data_url())),
            size_bytes,
            size_label: size_label(size_bytes),
            http_request: http_request_preview(size_bytes, image.file_name(), image.mime()),
        }
    }

    /// Previews shown before any image exists
    pub fn empty() -> Self {
        Self {
            byte_preview: String::new(),
            size_bytes: 0,
            size_label: size_label(0),
            http_request: http_request_preview(0, None, ""),
        }
    }
}

/// Memoized previews keyed by the identity of the image `Arc`
#[derive(Debug, Clone)]
struct PreviewCache {
    source: Arc<SelectedImage>,
    previews: DerivedPreviews,
}

/// State of the right-hand story panel
#[derive(Debug, Clone)]
pub struct NarrativeStage {
    raw_progress: f64,
    is_uploading: bool,
    is_complete: bool,
    image: Option<Arc<SelectedImage>>,
    cache: Option<PreviewCache>,
    empty_previews: DerivedPreviews,
    viewport: ScrollViewport,
    pace_with_narrative: bool,
}

impl Default for NarrativeStage {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl NarrativeStage {
    pub fn new(settings: &Settings) -> Self {
        Self {
            raw_progress: 0.0,
            is_uploading: false,
            is_complete: false,
            image: None,
            cache: None,
            empty_previews: DerivedPreviews::empty(),
            viewport: ScrollViewport::new(
                slide_count(),
                settings.narrative.snap_idle_ticks,
                settings.narrative.scroll_step_divisor,
            ),
            pace_with_narrative: settings.upload.pace_with_narrative,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Last progress value the phone reported
    pub fn raw_progress(&self) -> f64 {
        self.raw_progress
    }

    pub fn image(&self) -> Option<&Arc<SelectedImage>> {
        self.image.as_ref()
    }

    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ScrollViewport {
        &mut self.viewport
    }

    pub fn active_slide(&self) -> usize {
        self.viewport.active_slide()
    }

    /// Progress shown in the story and fed back to the phone
    ///
    /// Without narrative pacing the story follows the phone's timer, so
    /// both panels always show one number.
    pub fn synced_progress(&self) -> f64 {
        if self.is_complete {
            PROGRESS_COMPLETE
        } else if self.is_uploading && self.pace_with_narrative {
            slide_progress(self.active_slide(), self.viewport.slide_count())
        } else {
            self.raw_progress
        }
    }

    /// Value handed to the phone as its progress override
    pub fn progress_override(&self) -> Option<f64> {
        if self.pace_with_narrative && (self.is_uploading || self.is_complete) {
            Some(self.synced_progress())
        } else {
            None
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_complete {
            "Arrived at edge"
        } else if self.is_uploading {
            "Transmitting"
        } else {
            "Awaiting upload"
        }
    }

    /// Previews for the current image (or the empty set)
    pub fn previews(&self) -> &DerivedPreviews {
        self.cache
            .as_ref()
            .map(|c| &c.previews)
            .unwrap_or(&self.empty_previews)
    }

    /// Text for the byte preview panel
    pub fn byte_panel_text(&self) -> &str {
        if self.is_uploading || self.is_complete {
            let preview = &self.previews().byte_preview;
            if preview.is_empty() {
                "No image selected"
            } else {
                preview
            }
        } else {
            "Press Share to build payload"
        }
    }

    fn refresh_previews(&mut self) {
        let Some(image) = &self.image else {
            self.cache = None;
            return;
        };
        if let Some(cache) = &self.cache {
            if Arc::ptr_eq(&cache.source, image) {
                return;
            }
        }
        debug!("Recomputing narrative previews");
        self.cache = Some(PreviewCache {
            source: Arc::clone(image),
            previews: DerivedPreviews::compute(image),
        });
    }
}

impl UploadObserver for NarrativeStage {
    fn on_upload_start(&mut self) {
        self.is_uploading = true;
        self.is_complete = false;
        self.raw_progress = 0.0;
    }

    fn on_upload_progress(&mut self, progress: f64) {
        self.raw_progress = clamp_progress(progress);
    }

    fn on_upload_complete(&mut self) {
        self.is_complete = true;
        self.is_uploading = false;
    }

    fn on_reset(&mut self) {
        self.is_uploading = false;
        self.is_complete = false;
        self.raw_progress = 0.0;
        self.image = None;
        self.refresh_previews();
    }

    fn on_image_selected(&mut self, image: &Arc<SelectedImage>) {
        self.image = Some(Arc::clone(image));
        self.refresh_previews();
    }
}
