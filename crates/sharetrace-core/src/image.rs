//! Selected image payload
//!
//! A [`SelectedImage`] holds the picture the phone is about to share as a
//! base64 `data:` URI, the same text-safe form a browser hands to its upload
//! code. All size and byte views are derived from that string.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::preview;

/// Fallback MIME type for files with an unknown extension
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// An encoded image chosen on the phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    data_url: String,
    file_name: Option<String>,
    mime: String,
}

impl SelectedImage {
    /// Wrap an already encoded data URI
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        let data_url = data_url.into();
        let mime = data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MIME)
            .to_string();
        Self {
            data_url,
            file_name: None,
            mime,
        }
    }

    /// Encode raw file bytes into a data URI
    pub fn from_bytes(bytes: &[u8], mime: &str, file_name: Option<String>) -> Self {
        Self {
            data_url: format!("data:{};base64,{}", mime, BASE64.encode(bytes)),
            file_name,
            mime: mime.to_string(),
        }
    }

    /// Encode bytes that were read from `path`
    pub fn from_path_bytes(path: &Path, bytes: &[u8]) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Self::from_bytes(bytes, mime_from_path(path), file_name)
    }

    /// The full `data:<mime>;base64,<payload>` string
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// The base64 payload after the comma
    pub fn encoded_payload(&self) -> &str {
        preview::encoded_payload(&self.data_url)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Approximate decoded size in bytes
    pub fn approx_size_bytes(&self) -> u64 {
        preview::approx_size_bytes(Some(&self.data_url))
    }

    /// Hex dump of the leading bytes (at most 48)
    pub fn byte_preview(&self) -> String {
        preview::byte_preview(Some(&self.data_url))
    }
}

/// Guess an image MIME type from the file extension
pub fn mime_from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        Some("svg") => "image/svg+xml",
        _ => DEFAULT_MIME,
    }
}
