//! # sharetrace-core - Core Domain Types
//!
//! Foundation crate for sharetrace. Provides the image payload type, the pure
//! preview projections shown in the narrative, the fixed slide list, upload
//! lifecycle types, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Image (`image`)
//! - [`SelectedImage`] - Encoded `data:` URI plus file name and MIME type
//!
//! ### Previews (`preview`)
//! - [`byte_preview()`] - Hex dump of the leading bytes, capped at 48
//! - [`approx_size_bytes()`], [`size_label()`] - Size estimate and label
//! - [`http_request_preview()`], [`json_payload_preview()`] - Panel text
//!
//! ### Upload (`upload`)
//! - [`UploadState`] - Idle, ImageSelected, Uploading, Complete
//! - [`apply_increment()`], [`slide_progress()`] - Progress arithmetic
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum grouped by layer, with convenience constructors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use sharetrace_core::prelude::*;
//! ```

pub mod error;
pub mod image;
pub mod logging;
pub mod preview;
pub mod slides;
pub mod upload;

/// Prelude for common imports used throughout all sharetrace crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use image::{mime_from_path, SelectedImage};
pub use preview::{
    approx_size_bytes, byte_preview, http_request_preview, json_payload_preview, size_label,
    MAX_PREVIEW_BYTES, TLS_RECORD_PREVIEW,
};
pub use slides::{slide, slide_count, Slide, SLIDES};
pub use upload::{
    apply_increment, clamp_progress, random_increment, slide_progress, UploadState,
    PROGRESS_COMPLETE,
};
