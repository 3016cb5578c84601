// SPDX-License-Identifier: MPL-2.0
//! File typing for slot intake.
//!
//! A desktop file carries no declared MIME type, so the type is derived from
//! the file extension with a static table. Intake accepts a file when its
//! declared type starts with `image/`.

pub mod remote;

use crate::error::IntakeError;
use std::path::Path;

/// MIME type reported for files whose extension is unknown.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

const IMAGE_MIME_PREFIX: &str = "image/";

/// Supported media extensions
pub mod extensions {
    /// Image file extensions offered by the file picker filter.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "webp", "bmp", "ico", "tiff", "tif",
    ];
}

/// Extension → declared MIME type.
const MIME_TABLE: &[(&str, &str)] = &[
    // Images
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpe", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("ico", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    // Video
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    ("avi", "video/x-msvideo"),
    // Audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    // Documents
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("json", "application/json"),
    ("toml", "application/toml"),
    ("zip", "application/zip"),
];

/// Returns the declared MIME type of `path`, based on its extension.
#[must_use]
pub fn declared_mime_type(path: &Path) -> &'static str {
    let Some(extension) = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
    else {
        return UNKNOWN_MIME;
    };

    MIME_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or(UNKNOWN_MIME, |(_, mime)| mime)
}

/// Returns `true` if `mime` names an image type.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with(IMAGE_MIME_PREFIX)
}

/// Checks that `path` declares an image type.
///
/// # Errors
///
/// Returns [`IntakeError::NotAnImage`] carrying the declared type otherwise.
pub fn validate_image_file(path: &Path) -> Result<&'static str, IntakeError> {
    let mime = declared_mime_type(path);
    if is_image_mime(mime) {
        Ok(mime)
    } else {
        Err(IntakeError::NotAnImage {
            mime: mime.to_string(),
        })
    }
}
