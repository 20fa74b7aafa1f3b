use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <A href="/" attr:class="navbar__logo">
            <span class="logo__mark">"🌍"</span>
            "WorldWise"
        </A>
    }
}
