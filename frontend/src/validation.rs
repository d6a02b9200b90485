//! Client-side file validation.
//!
//! Only the file name is checked: the extension after the last `.` must be
//! one of [`ACCEPTED_EXTENSIONS`]. The file content is never inspected.

use crate::config::{ACCEPTED_EXTENSIONS, NOT_AN_IMAGE_MESSAGE};
use crate::types::{AppError, AppResult};

/// Lower-cased suffix after the last `.`.
///
/// A name without any `.` yields the whole name, lower-cased.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Whether the name carries an accepted image extension.
pub fn is_accepted_image(file_name: &str) -> bool {
    let ext = file_extension(file_name);
    ACCEPTED_EXTENSIONS.contains(&ext.as_str())
}

/// Validate a selected file name, returning its extension.
pub fn validate_image_name(file_name: &str) -> AppResult<String> {
    if is_accepted_image(file_name) {
        Ok(file_extension(file_name))
    } else {
        Err(AppError::Validation(NOT_AN_IMAGE_MESSAGE.to_string()))
    }
}

/// Value for the file input's `accept` attribute (e.g. `.gif,.png`).
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}
