//! HTTP service uploading an image to the classification server.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::FILE_FIELD;
use crate::types::{AppError, AppResult, ClassifyResponse, UploadOutcome};

/// Upload an image and classify the completion.
///
/// Every failure below the application level (building the form, sending,
/// non-2xx status, unreadable body) collapses into
/// [`UploadOutcome::TransportError`]; the cause is only logged.
pub async fn upload_image(file: File, endpoint: &str) -> UploadOutcome {
    match send(&file, endpoint).await {
        Ok(body) => classify_body(&body),
        Err(e) => {
            log::warn!("Upload of {} failed: {}", file.name(), e);
            UploadOutcome::TransportError
        }
    }
}

/// The single multipart part carrying the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name
    pub field: &'static str,
    /// File name sent with the part, unchanged from the user's file
    pub file_name: String,
}

/// Describe the part a file is uploaded as.
pub fn file_part(file_name: &str) -> FilePart {
    FilePart {
        field: FILE_FIELD,
        file_name: file_name.to_string(),
    }
}

/// Build the multipart body: one part, raw file bytes, original name.
pub fn build_form(file: &File) -> AppResult<FormData> {
    let part = file_part(&file.name());

    let form_data = FormData::new()
        .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(part.field, file, &part.file_name)
        .map_err(|e| AppError::Transport(format!("Failed to append file: {:?}", e)))?;

    Ok(form_data)
}

/// POST the file as multipart form data and return the response text.
async fn send(file: &File, endpoint: &str) -> AppResult<String> {
    let form_data = build_form(file)?;

    log::info!("📤 Uploading {} ({} bytes) to {}", file.name(), file.size(), endpoint);

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Transport(format!(
            "Server error ({}): {}",
            response.status(),
            response.status_text()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))
}

/// Decode a 2xx response body and classify it.
pub fn classify_body(body: &str) -> UploadOutcome {
    match serde_json::from_str::<ClassifyResponse>(body) {
        Ok(response) => match response.error_message() {
            Some(message) => {
                log::warn!("Server rejected the image: {}", message);
                UploadOutcome::ApplicationError(message.to_string())
            }
            None => {
                log::info!("✅ Classified {} ({} results)",
                    response.image_name.as_deref().unwrap_or("?"),
                    response.zipped_data.len());
                UploadOutcome::Success(response)
            }
        },
        Err(e) => {
            log::warn!("Failed to parse response: {}", e);
            UploadOutcome::TransportError
        }
    }
}
