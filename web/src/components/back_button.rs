use leptos::prelude::*;

#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn--back"
            on:click=move |ev| {
                ev.prevent_default();
                if let Some(window) = web_sys::window() {
                    if let Ok(history) = window.history() {
                        let _ = history.back();
                    }
                }
            }
        >
            "← Back"
        </button>
    }
}
