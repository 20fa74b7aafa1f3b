use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

const DEFAULT_LOADING_MESSAGE: &str = "Loading your travels...";

fn loading_text(message: Option<String>) -> String {
    message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_string())
}

/// Spinner shown in the sidebar while the city store is busy.
#[component]
pub fn LoadingView(#[prop(optional)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container" role="status">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-container__message">{loading_text(message)}</p>
        </div>
    }
}
