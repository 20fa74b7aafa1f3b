use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::{Outlet, A};

use crate::{
    components::{error::ErrorView, logo::Logo, user_badge::UserBadge},
    state::{AuthStore, CityStore, GeolocationSource},
    views::map::map_renderer::MapRenderer,
};

#[component]
fn AppNav() -> impl IntoView {
    view! {
        <nav class="app-nav">
            <ul>
                <li><A href="/app/cities">"Cities"</A></li>
                <li><A href="/app/countries">"Countries"</A></li>
            </ul>
        </nav>
    }
}

#[component]
fn Sidebar(store: CityStore) -> impl IntoView {
    view! {
        <div class="sidebar">
            <Logo/>
            <AppNav/>
            {move || store.error().map(|message| view! {
                <ErrorView message=Some(message) />
            })}
            <Outlet/>
            <footer class="sidebar__footer">
                <p class="sidebar__copyright">"© Copyright WorldWise Inc."</p>
            </footer>
        </div>
    }
}

/// The signed-in area: sidebar with the nested views on the left, map on the right.
///
/// Mounting it loads the city collection once.
#[component]
pub fn AppLayout(
    store: CityStore,
    auth: AuthStore,
    geolocation: GeolocationSource,
) -> impl IntoView {
    let loader = store.clone();
    Effect::new(move |_| {
        let store = loader.clone();
        spawn_local(async move {
            if let Err(err) = store.fetch_all().await {
                leptos::logging::error!("Failed to load cities: {}", err);
            }
        });
    });

    view! {
        <div class="app">
            <Sidebar store=store.clone() />
            <UserBadge auth=auth />
            <MapRenderer store=store geolocation=geolocation />
        </div>
    }
}
