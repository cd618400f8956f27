use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::state::UploadState;
use crate::api_client::analysis::{upload_financial_file, FinancialReport, Language};

const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload file. Please try again.";

#[derive(Properties, PartialEq)]
pub struct UploadPanelProps {
    /// Invoked exactly once with the decoded report on a successful upload.
    pub on_success: Callback<FinancialReport>,
    #[prop_or_default]
    pub language: Language,
}

#[function_component(UploadPanel)]
pub fn upload_panel(props: &UploadPanelProps) -> Html {
    let state = use_state(UploadState::<File>::default);

    let on_file_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            log::debug!(
                "File selection changed: {:?}",
                file.as_ref().map(|f| f.name())
            );
            state.set((*state).clone().select_file(file));
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_success = props.on_success.clone();
        let language = props.language;

        Callback::from(move |_: MouseEvent| {
            if !state.can_submit() {
                return;
            }
            let Some(file) = (*state).file.clone() else {
                return;
            };

            state.set((*state).clone().begin_upload());

            let state = state.clone();
            let on_success = on_success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match upload_financial_file(&file, language).await {
                    Ok(report) => {
                        state.set((*state).clone().finish());
                        on_success.emit(report);
                    }
                    Err(e) => {
                        log::error!("Upload failed: {}", e);
                        state.set((*state).clone().fail(UPLOAD_FAILED_MESSAGE));
                    }
                }
            });
        })
    };

    html! {
        <div class="card bg-base-100 shadow max-w-xl mx-auto">
            <div class="card-body">
                <h3 class="card-title">{"Upload Financial Records"}</h3>
                <p class="text-sm text-gray-500 mb-2">
                    {"Upload your CSV, Excel, or PDF statements."}
                </p>

                <input
                    type="file"
                    accept=".csv,.xlsx,.xls,.pdf"
                    class="file-input file-input-bordered w-full"
                    onchange={on_file_change}
                    disabled={state.loading}
                />

                {if let Some(error) = state.error.as_ref() {
                    html! {
                        <div class="alert alert-error mt-4">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div class="card-actions justify-end mt-4">
                    <button
                        class="btn btn-primary"
                        onclick={on_submit}
                        disabled={!state.can_submit()}
                    >
                        {if state.loading {
                            html! { <><span class="loading loading-spinner loading-sm"></span>{" Analyzing..."}</> }
                        } else {
                            html! { "Analyze Financials" }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
