use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
        </MessageBar>
    }
}

/// Neutral hint shown in place of an empty list or form.
#[component]
pub fn Message(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="message">
            <span role="img">"👋"</span>
            " "
            {message}
        </p>
    }
}
