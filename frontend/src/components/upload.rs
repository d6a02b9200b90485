//! Image upload widget.
//!
//! Handles file selection, upload to the classification server, and
//! rendering of the results. All displayed state lives in a single
//! [`WidgetState`] signal; this component only wires events to it and
//! performs the DOM side effects its transitions ask for.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{Event, File, HtmlInputElement, Url};

use crate::components::ResultsTable;
use crate::services::upload_image;
use crate::state::{Effect, WidgetState};
use crate::validation::accept_attribute;
use crate::UPLOAD_ENDPOINT;

#[component]
pub fn UploadWidget() -> impl IntoView {
    let state = create_rw_signal(WidgetState::new());
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        // Only the first file of the selection is used
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let Some(selection) = state.try_update(|s| s.select_file(&file.name())) else {
            return;
        };

        for effect in selection.effects() {
            match effect {
                Effect::ClearInput => clear_file_input(file_input),
                Effect::Send => spawn_local(submit(state, file_input, file.clone())),
                Effect::ScheduleReveal => {}
            }
        }
    };

    let on_remove = move |_| {
        if let Some(Some(url)) = state.try_update(|s| s.remove()) {
            revoke_preview(&url);
        }
        clear_file_input(file_input);
        log::info!("🧹 Upload removed");
    };

    view! {
        <div class="panel">
            <div class=move || state.with(|s| s.container_class())>
                <div class="btn_upload">
                    <input
                        type="file"
                        id="upload_file"
                        accept=accept_attribute()
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    "Upload Image"
                </div>
                <div class="processing_bar">
                    {move || state.with(|s| s.upload_state().is_uploading()).then_some("⏳ Processing...")}
                </div>
                <div class="success_box"></div>
            </div>
        </div>

        <div class="error_msg">
            {move || state.with(|s| s.error().unwrap_or_default().to_string())}
        </div>

        <div class=move || state.with(|s| s.preview_class()) id="uploaded_view">
            <span class="file_remove" on:click=on_remove>"X"</span>
            {move || state.with(|s| {
                s.preview_src().map(|src| {
                    let src = src.to_string();
                    view! { <img src=src/> }
                })
            })}
        </div>

        <ResultsTable state=state/>
    }
}

/// Send the file and apply the completion once it arrives.
///
/// Nothing prevents a second submission while this one is in flight, and
/// a remove does not cancel it: each completion is applied as it comes.
async fn submit(state: RwSignal<WidgetState>, file_input: NodeRef<html::Input>, file: File) {
    let outcome = upload_image(file.clone(), UPLOAD_ENDPOINT).await;

    let Some(completion) = state.try_update(|s| s.complete(outcome)) else {
        return;
    };

    for effect in completion.effects() {
        match effect {
            // Same file may be picked again
            Effect::ClearInput => clear_file_input(file_input),
            Effect::ScheduleReveal => {
                TimeoutFuture::new(0).await;
                reveal_preview(state, &file);
            }
            Effect::Send => {}
        }
    }
}

fn reveal_preview(state: RwSignal<WidgetState>, file: &File) {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => {
            log::debug!("Preview URL created: {}", url);
            if let Some(Some(replaced)) = state.try_update(|s| s.reveal(url)) {
                revoke_preview(&replaced);
            }
        }
        Err(e) => log::warn!("Failed to create preview URL: {:?}", e),
    }
}

fn clear_file_input(file_input: NodeRef<html::Input>) {
    if let Some(input) = file_input.get_untracked() {
        input.set_value("");
    }
}

fn revoke_preview(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke preview URL {}: {:?}", url, e);
    } else {
        log::debug!("Preview URL revoked: {}", url);
    }
}
