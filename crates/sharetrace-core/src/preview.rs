//! Pure projections of an encoded image used by the narrative panels
//!
//! None of these functions fail: malformed input produces an empty or zero
//! value, never an error.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde_json::json;

/// Maximum number of bytes shown in the hex preview
pub const MAX_PREVIEW_BYTES: usize = 48;

/// Number of encoded characters decoded for the hex preview
const PREVIEW_PREFIX_CHARS: usize = 120;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Decoder that accepts missing padding and non-canonical trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Default file name used in the multipart preview
pub const DEFAULT_UPLOAD_NAME: &str = "identity.jpg";

/// A captured TLS application-data record, shown as-is
pub const TLS_RECORD_PREVIEW: &str =
    "17 03 03 00 9f 8b 41 7c 3e 2a 9a 51 6f d1 88 3c 1f 9d 6a 7b 0d 2f 4c 28 13 ...";

/// The part of a data URI after the first comma, or `""`
pub fn encoded_payload(data_url: &str) -> &str {
    data_url.split(',').nth(1).unwrap_or("")
}

/// Lowercase, space separated hex of the first decoded bytes
///
/// Returns an empty string when there is no image or the prefix does not
/// decode.
pub fn byte_preview(data_url: Option<&str>) -> String {
    let Some(data_url) = data_url else {
        return String::new();
    };
    let payload = encoded_payload(data_url).as_bytes();
    let prefix: Vec<u8> = payload[..payload.len().min(PREVIEW_PREFIX_CHARS)]
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    match LENIENT.decode(&prefix) {
        Ok(bytes) => bytes
            .iter()
            .take(MAX_PREVIEW_BYTES)
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" "),
        Err(e) => {
            tracing::debug!("Byte preview decode failed: {}", e);
            String::new()
        }
    }
}

/// Decoded size estimated from the base64 length (`len * 3 / 4`, rounded)
pub fn approx_size_bytes(data_url: Option<&str>) -> u64 {
    let Some(data_url) = data_url else {
        return 0;
    };
    let len = encoded_payload(data_url).len() as u64;
    (len * 3 + 2) / 4
}

/// Human readable size: `0 B`, `512 B`, `1.5 KB`, `2.0 MB`
pub fn size_label(bytes: u64) -> String {
    if bytes == 0 {
        "0 B".to_string()
    } else if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// The HTTPS POST the app would assemble for this upload
pub fn http_request_preview(content_length: u64, file_name: Option<&str>, mime: &str) -> String {
    let file_name = file_name.unwrap_or(DEFAULT_UPLOAD_NAME);
    let mime = if mime.starts_with("image/") {
        mime
    } else {
        "image/jpeg"
    };
    format!(
        "POST /upload HTTP/1.1\n\
         Host: i.instagram.com\n\
         Content-Type: multipart/form-data; boundary=----9d7\n\
         Content-Length: {content_length}\n\
         User-Agent: Instagram/314.0\n\
         \n\
         ------9d7\n\
         Content-Disposition: form-data; name=\"media\"; filename=\"{file_name}\"\n\
         Content-Type: {mime}\n\
         \n\
         <byte stream…>"
    )
}

/// The JSON body built in the app before it is UTF-8 encoded
///
/// The image field is abbreviated to its size so the panel stays readable.
pub fn json_payload_preview(caption: &str, size_bytes: u64) -> String {
    let body = json!({
        "caption": caption,
        "image": format!("<base64 · {}>", size_label(size_bytes)),
    });
    serde_json::to_string_pretty(&body).unwrap_or_default()
}
