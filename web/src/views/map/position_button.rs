use leptos::{prelude::*, task::spawn_local};

use crate::state::GeolocationSource;

/// "Use your position" trigger; hidden once a position is known.
#[component]
pub fn PositionButton(geolocation: GeolocationSource) -> impl IntoView {
    let position = geolocation.position();
    let is_loading = geolocation.is_loading();

    move || {
        if position.get().is_some() {
            return None;
        }
        let geolocation = geolocation.clone();
        Some(view! {
            <button
                class="btn btn--position"
                on:click=move |_| {
                    let geolocation = geolocation.clone();
                    spawn_local(async move { geolocation.get_position().await });
                }
            >
                {move || if is_loading.get() { "Loading..." } else { "Use your position" }}
            </button>
        })
    }
}
