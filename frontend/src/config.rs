//! Application configuration.
//!
//! Centralized configuration for the classifier frontend.
//! The page is served by the classification server itself, so the
//! endpoint is relative to the page origin.

/// Upload endpoint.
///
/// The classification server answers `POST /` with the JSON results.
pub const UPLOAD_ENDPOINT: &str = "/";

/// Multipart field name the server reads the image from.
pub const FILE_FIELD: &str = "file";

/// File extensions accepted before anything is sent (lower-case).
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["gif", "png", "jpg", "jpeg"];

/// Shown when the selected file is not an accepted image.
pub const NOT_AN_IMAGE_MESSAGE: &str = "Not an Image...";

/// Shown when the request itself failed.
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred while processing the image.";

/// Prefix of the echoed image name.
pub const IMAGE_NAME_PREFIX: &str = "Test Image: ";

/// Application name, used for the page title and header.
pub const APP_NAME: &str = "Image Classifier";
