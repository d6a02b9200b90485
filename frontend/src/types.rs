//! Common types used across the frontend application.
//!
//! This module centralizes type definitions shared by the upload state,
//! the upload service and the components.
//!
//! # Categories
//!
//! - **State Types** - Upload mode of the widget
//! - **API Types** - Classification server response structures
//! - **Error Types** - Frontend error handling

use serde::Deserialize;
use std::fmt;

use crate::config::TRANSPORT_ERROR_MESSAGE;

// =============================================================================
// State Types
// =============================================================================

/// Upload mode of the widget.
///
/// Exactly one mode holds at a time. The container's CSS classes are
/// derived from it, see [`UploadState::css_modifier`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    /// Nothing uploaded, nothing in flight
    #[default]
    Idle,
    /// A request is in flight
    Uploading,
    /// The last request rendered its results
    Uploaded,
    /// The last request failed; an error message is shown
    Failed,
}

impl UploadState {
    /// Get the modifier class applied to the upload container, if any.
    pub fn css_modifier(&self) -> Option<&'static str> {
        match self {
            UploadState::Uploading => Some("file_uploading"),
            UploadState::Uploaded => Some("file_uploaded"),
            UploadState::Idle | UploadState::Failed => None,
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// One cell of a classification pair.
///
/// The server sends labels as strings and probabilities as numbers, but
/// either side may be either type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResultCell {
    /// Text cell
    Text(String),
    /// Numeric cell
    Number(serde_json::Number),
}

impl fmt::Display for ResultCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultCell::Text(text) => f.write_str(text),
            // Floats print like the browser would: `1.0` -> `1`, `1e-05` -> `0.00001`
            ResultCell::Number(number) => match number.as_f64() {
                Some(value) if number.is_f64() && value == 0.0 => f.write_str("0"),
                Some(value) if number.is_f64() => write!(f, "{}", value),
                _ => write!(f, "{}", number),
            },
        }
    }
}

/// Response from the classification endpoint.
///
/// Every field is optional on the wire: an error response only carries
/// `error`, a successful one carries `image_name` and `zipped_data`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClassifyResponse {
    /// Application-level error message
    #[serde(default)]
    pub error: Option<String>,
    /// Name under which the server stored the image
    #[serde(default)]
    pub image_name: Option<String>,
    /// Ordered (label, value) pairs
    #[serde(default)]
    pub zipped_data: Vec<(ResultCell, ResultCell)>,
}

impl ClassifyResponse {
    /// The application error carried by the payload, if any.
    ///
    /// An empty string counts as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }

    /// Convert the pairs into display rows, preserving order.
    pub fn rows(&self) -> Vec<ResultRow> {
        self.zipped_data
            .iter()
            .map(|(label, value)| ResultRow {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect()
    }
}

/// A rendered row of the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    /// First cell (class label)
    pub label: String,
    /// Second cell (score)
    pub value: String,
}

/// Completion of a single upload request.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// The server classified the image.
    Success(ClassifyResponse),
    /// The server answered but reported an error.
    ApplicationError(String),
    /// The request failed, or the answer could not be used.
    TransportError,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// All of them are recoverable and end up as the widget's error text.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Unsupported file extension.
    Validation(String),
    /// Error reported by the server in its payload.
    Application(String),
    /// Network/HTTP failure or unusable response.
    Transport(String),
}

impl AppError {
    /// Text shown to the user.
    ///
    /// Transport causes are only logged; the user gets a fixed message.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Application(msg) => msg,
            AppError::Transport(_) => TRANSPORT_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Application(msg) => write!(f, "Server error: {}", msg),
            AppError::Transport(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
