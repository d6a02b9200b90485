//! Upload widget state.
//!
//! [`WidgetState`] holds everything the upload widget displays. Every user
//! or network event is a method on it, and the DOM classes are computed
//! from it, so the component only has to render the state and carry out
//! the side effects a transition asks for (clearing the file input,
//! sending the request, revoking object URLs).
//!
//! ```text
//!          valid file            success
//!   Idle ─────────────▶ Uploading ───────▶ Uploaded
//!    ▲                      │                  │
//!    │ remove               │ error            │ valid file
//!    │                      ▼                  ▼
//!    └──────────────────  Failed  ─────────▶ Uploading
//! ```

use crate::config::IMAGE_NAME_PREFIX;
use crate::types::{AppError, ResultRow, UploadOutcome, UploadState};
use crate::validation::validate_image_name;

/// What the component must do after a file was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Not an image: clear the file input, send nothing.
    Rejected,
    /// Send the file to the server.
    Submit,
}

/// What the component must do once a request completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Results rendered: reset the file input and schedule the reveal.
    Rendered,
    /// Error shown; the file input is left alone.
    Failed,
}

/// DOM side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Reset the file input's value.
    ClearInput,
    /// POST the selected file.
    Send,
    /// Call [`WidgetState::reveal`] on the next UI turn.
    ScheduleReveal,
}

impl Selection {
    /// Side effects to run, in order.
    pub fn effects(&self) -> &'static [Effect] {
        match self {
            Selection::Rejected => &[Effect::ClearInput],
            Selection::Submit => &[Effect::Send],
        }
    }
}

impl Completion {
    /// Side effects to run, in order.
    pub fn effects(&self) -> &'static [Effect] {
        match self {
            Completion::Rendered => &[Effect::ClearInput, Effect::ScheduleReveal],
            Completion::Failed => &[],
        }
    }
}

/// Display state of the upload widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    upload: UploadState,
    error: Option<String>,
    image_name: String,
    rows: Vec<ResultRow>,
    preview_src: Option<String>,
    results_visible: bool,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a freshly selected file.
    ///
    /// Previous results stay on screen; they are only replaced when the new
    /// response arrives.
    pub fn select_file(&mut self, file_name: &str) -> Selection {
        match validate_image_name(file_name) {
            Ok(_) => {
                self.error = None;
                self.upload = UploadState::Uploading;
                log::debug!("upload state -> {:?} ({})", self.upload, file_name);
                Selection::Submit
            }
            Err(err) => {
                log::warn!("{}: {}", err, file_name);
                self.error = Some(err.user_message().to_string());
                Selection::Rejected
            }
        }
    }

    /// Apply the completion of an upload request.
    ///
    /// A completion is applied whenever it arrives, even after a remove or
    /// while another request is in flight.
    pub fn complete(&mut self, outcome: UploadOutcome) -> Completion {
        match outcome {
            UploadOutcome::Success(response) => {
                self.image_name = format!(
                    "{}{}",
                    IMAGE_NAME_PREFIX,
                    response.image_name.as_deref().unwrap_or_default()
                );
                self.rows = response.rows();
                self.upload = UploadState::Uploaded;
                log::debug!("upload state -> {:?} ({} rows)", self.upload, self.rows.len());
                Completion::Rendered
            }
            UploadOutcome::ApplicationError(message) => {
                self.fail(AppError::Application(message));
                Completion::Failed
            }
            UploadOutcome::TransportError => {
                self.fail(AppError::Transport("request failed".to_string()));
                Completion::Failed
            }
        }
    }

    fn fail(&mut self, err: AppError) {
        self.error = Some(err.user_message().to_string());
        self.upload = UploadState::Failed;
        log::debug!("upload state -> {:?} ({})", self.upload, err);
    }

    /// Show the local preview and the results container.
    ///
    /// Runs one UI turn after [`Completion::Rendered`]. Returns the preview
    /// URL it replaced, which the caller should revoke.
    pub fn reveal(&mut self, preview_src: String) -> Option<String> {
        self.results_visible = true;
        self.preview_src.replace(preview_src)
    }

    /// Reset the widget to its idle look.
    ///
    /// Returns the preview URL that was shown, which the caller should
    /// revoke. The error text is kept. Calling it again is a no-op.
    pub fn remove(&mut self) -> Option<String> {
        self.upload = UploadState::Idle;
        self.image_name.clear();
        self.rows.clear();
        self.results_visible = false;
        self.preview_src.take()
    }

    pub fn upload_state(&self) -> UploadState {
        self.upload
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn preview_src(&self) -> Option<&str> {
        self.preview_src.as_deref()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Classes of the upload container.
    pub fn container_class(&self) -> String {
        match self.upload.css_modifier() {
            Some(modifier) => format!("button_outer {}", modifier),
            None => "button_outer".to_string(),
        }
    }

    /// Classes of the preview host.
    pub fn preview_class(&self) -> &'static str {
        if self.preview_src.is_some() {
            "uploaded_view show"
        } else {
            "uploaded_view"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NOT_AN_IMAGE_MESSAGE, TRANSPORT_ERROR_MESSAGE};
    use crate::types::{ClassifyResponse, ResultCell};

    fn text(s: &str) -> ResultCell {
        ResultCell::Text(s.to_string())
    }

    fn success(name: &str, pairs: &[(&str, &str)]) -> UploadOutcome {
        UploadOutcome::Success(ClassifyResponse {
            error: None,
            image_name: Some(name.to_string()),
            zipped_data: pairs.iter().map(|(l, v)| (text(l), text(v))).collect(),
        })
    }

    fn row(label: &str, value: &str) -> ResultRow {
        ResultRow {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    /// Select, complete and reveal a successful upload.
    fn uploaded(pairs: &[(&str, &str)]) -> WidgetState {
        let mut state = WidgetState::new();
        assert_eq!(state.select_file("cat.png"), Selection::Submit);
        assert_eq!(state.complete(success("cat.png", pairs)), Completion::Rendered);
        assert_eq!(state.reveal("blob:preview-1".to_string()), None);
        state
    }

    fn count(effects: &[Effect], wanted: Effect) -> usize {
        effects.iter().filter(|e| **e == wanted).count()
    }

    #[test]
    fn test_rejected_selection_only_clears_input() {
        let mut state = WidgetState::new();
        let effects = state.select_file("notes.txt").effects();
        assert_eq!(effects, &[Effect::ClearInput]);
        assert_eq!(count(effects, Effect::Send), 0);
    }

    #[test]
    fn test_valid_selection_sends_exactly_once() {
        let mut state = WidgetState::new();
        for name in ["a.gif", "b.PNG", "c.jpg", "d.jpeg"] {
            let effects = state.select_file(name).effects();
            assert_eq!(count(effects, Effect::Send), 1, "{}", name);
            assert_eq!(count(effects, Effect::ClearInput), 0, "{}", name);
        }
    }

    #[test]
    fn test_success_resets_input_then_reveals() {
        let mut state = WidgetState::new();
        state.select_file("cat.png");
        let effects = state.complete(success("cat.png", &[("cat", "0.92")])).effects();
        assert_eq!(effects, &[Effect::ClearInput, Effect::ScheduleReveal]);
    }

    #[test]
    fn test_failure_leaves_input_alone() {
        let mut state = WidgetState::new();
        state.select_file("cat.png");
        assert!(state.complete(UploadOutcome::ApplicationError("bad file".into())).effects().is_empty());

        state.select_file("cat.png");
        assert!(state.complete(UploadOutcome::TransportError).effects().is_empty());
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = WidgetState::new();
        assert_eq!(state.upload_state(), UploadState::Idle);
        assert_eq!(state.error(), None);
        assert!(!state.results_visible());
        assert!(state.rows().is_empty());
        assert_eq!(state.container_class(), "button_outer");
        assert_eq!(state.preview_class(), "uploaded_view");
    }

    #[test]
    fn test_invalid_file_is_rejected_without_state_change() {
        let mut state = WidgetState::new();
        for name in ["notes.txt", "movie.MP4", "script.js"] {
            assert_eq!(state.select_file(name), Selection::Rejected);
            assert_eq!(state.error(), Some(NOT_AN_IMAGE_MESSAGE));
            assert_eq!(state.upload_state(), UploadState::Idle);
        }
    }

    #[test]
    fn test_invalid_file_keeps_uploaded_results() {
        let mut state = uploaded(&[("cat", "0.92")]);
        assert_eq!(state.select_file("notes.txt"), Selection::Rejected);
        assert_eq!(state.upload_state(), UploadState::Uploaded);
        assert_eq!(state.rows().len(), 1);
        assert!(state.results_visible());
    }

    #[test]
    fn test_valid_file_clears_error_and_submits() {
        let mut state = WidgetState::new();
        state.select_file("notes.txt");

        assert_eq!(state.select_file("Photo.JPEG"), Selection::Submit);
        assert_eq!(state.error(), None);
        assert_eq!(state.upload_state(), UploadState::Uploading);
        assert_eq!(state.container_class(), "button_outer file_uploading");
    }

    #[test]
    fn test_success_renders_rows_in_order() {
        let mut state = WidgetState::new();
        state.select_file("cat.png");

        let completion = state.complete(success("123_ab_cat.png", &[("cat", "0.92"), ("dog", "0.08")]));
        assert_eq!(completion, Completion::Rendered);
        assert_eq!(state.rows(), &[row("cat", "0.92"), row("dog", "0.08")]);
        assert_eq!(state.image_name(), "Test Image: 123_ab_cat.png");
        assert_eq!(state.upload_state(), UploadState::Uploaded);
        assert_eq!(state.container_class(), "button_outer file_uploaded");

        // preview and container only appear on the reveal turn
        assert!(!state.results_visible());
        assert_eq!(state.preview_src(), None);

        state.reveal("blob:preview".to_string());
        assert!(state.results_visible());
        assert_eq!(state.preview_src(), Some("blob:preview"));
        assert_eq!(state.preview_class(), "uploaded_view show");
    }

    #[test]
    fn test_success_with_numeric_scores() {
        let mut state = WidgetState::new();
        state.select_file("rose.jpg");
        let response: ClassifyResponse = serde_json::from_str(
            r#"{"image_name": "rose.jpg", "zipped_data": [["rose", 0.97], ["lotus", 0.02]]}"#,
        )
        .unwrap();

        state.complete(UploadOutcome::Success(response));
        assert_eq!(state.rows(), &[row("rose", "0.97"), row("lotus", "0.02")]);
    }

    #[test]
    fn test_application_error_keeps_results() {
        let mut state = uploaded(&[("cat", "0.92")]);
        let before = state.rows().to_vec();

        state.select_file("other.png");
        assert_eq!(state.complete(UploadOutcome::ApplicationError("bad file".into())), Completion::Failed);

        assert_eq!(state.error(), Some("bad file"));
        assert_eq!(state.upload_state(), UploadState::Failed);
        assert!(!state.upload_state().is_uploading());
        assert_eq!(state.rows(), before.as_slice());
        assert_eq!(state.image_name(), "Test Image: cat.png");
        assert!(state.results_visible());
    }

    #[test]
    fn test_transport_error_shows_generic_message() {
        let mut state = uploaded(&[("cat", "0.92"), ("dog", "0.08")]);

        state.select_file("again.gif");
        assert_eq!(state.complete(UploadOutcome::TransportError), Completion::Failed);

        assert_eq!(state.error(), Some(TRANSPORT_ERROR_MESSAGE));
        assert_eq!(state.upload_state(), UploadState::Failed);
        assert_eq!(state.container_class(), "button_outer");
        assert_eq!(state.rows().len(), 2);
        assert_eq!(state.preview_src(), Some("blob:preview-1"));
    }

    #[test]
    fn test_stale_rows_survive_until_new_success() {
        let mut state = uploaded(&[("cat", "0.92"), ("dog", "0.08")]);

        state.select_file("next.png");
        assert_eq!(state.upload_state(), UploadState::Uploading);
        assert_eq!(state.rows().len(), 2);
        assert!(state.results_visible());

        state.complete(success("next.png", &[("bird", "0.99")]));
        assert_eq!(state.rows(), &[row("bird", "0.99")]);

        // the new preview replaces the old one
        assert_eq!(state.reveal("blob:preview-2".to_string()), Some("blob:preview-1".to_string()));
    }

    #[test]
    fn test_remove_resets_and_is_idempotent() {
        let mut state = uploaded(&[("cat", "0.92")]);

        assert_eq!(state.remove(), Some("blob:preview-1".to_string()));
        assert_eq!(state.upload_state(), UploadState::Idle);
        assert_eq!(state.preview_src(), None);
        assert_eq!(state.preview_class(), "uploaded_view");
        assert!(!state.results_visible());
        assert!(state.rows().is_empty());
        assert_eq!(state.image_name(), "");

        let after_first = state.clone();
        assert_eq!(state.remove(), None);
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_remove_when_idle_is_noop() {
        let mut state = WidgetState::new();
        assert_eq!(state.remove(), None);
        assert_eq!(state, WidgetState::new());
    }

    #[test]
    fn test_remove_keeps_error_text() {
        let mut state = WidgetState::new();
        state.select_file("notes.txt");
        state.remove();
        assert_eq!(state.error(), Some(NOT_AN_IMAGE_MESSAGE));
    }

    #[test]
    fn test_round_trip_starts_fresh_cycle() {
        let mut state = uploaded(&[("cat", "0.92")]);
        state.remove();

        let selection = state.select_file("cat.png");
        assert_eq!(selection, Selection::Submit);
        assert_eq!(selection.effects(), &[Effect::Send]);
        assert_eq!(state.upload_state(), UploadState::Uploading);
        assert!(state.rows().is_empty());
        assert_eq!(state.image_name(), "");
        assert_eq!(state.preview_src(), None);
    }

    #[test]
    fn test_late_completion_after_remove_is_applied() {
        let mut state = WidgetState::new();
        state.select_file("cat.png");
        state.remove();
        assert_eq!(state.upload_state(), UploadState::Idle);

        state.complete(success("cat.png", &[("cat", "0.92")]));
        assert_eq!(state.upload_state(), UploadState::Uploaded);
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn test_missing_image_name() {
        let mut state = WidgetState::new();
        state.select_file("cat.png");
        state.complete(UploadOutcome::Success(ClassifyResponse::default()));
        assert_eq!(state.image_name(), "Test Image: ");
        assert!(state.rows().is_empty());
    }
}
