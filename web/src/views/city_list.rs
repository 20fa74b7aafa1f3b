use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use shared_types::City;

use crate::{
    components::{error::Message, loading::LoadingView},
    state::{map_position::city_route, CityStore},
    utils::format::format_date,
};

#[component]
pub fn CityItem(store: CityStore, city: City) -> impl IntoView {
    let href = city_route(&city);
    let City {
        id,
        city_name,
        emoji,
        date,
        ..
    } = city;

    let is_active = {
        let store = store.clone();
        let id = id.clone();
        move || {
            store
                .current_city()
                .with(|current| current.as_ref().is_some_and(|current| current.id == id))
        }
    };

    // The row stays until the remote delete succeeds.
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let store = store.clone();
        let id = id.clone();
        spawn_local(async move {
            if let Err(err) = store.delete_city(&id).await {
                leptos::logging::error!("Failed to delete city {}: {}", id, err);
            }
        });
    };

    view! {
        <li class="city-item" class:active=is_active>
            <A href=href attr:class="city-item__link">
                <span class="city-item__emoji">{emoji}</span>
                <h3 class="city-item__name">{city_name}</h3>
                <time class="city-item__date">"(" {format_date(&date)} ")"</time>
                <button class="city-item__delete" on:click=on_delete>"×"</button>
            </A>
        </li>
    }
}

#[component]
pub fn CityList(store: CityStore) -> impl IntoView {
    move || {
        if store.is_loading() {
            return view! { <LoadingView/> }.into_any();
        }

        let cities = store.cities().get();
        if cities.is_empty() {
            return view! {
                <Message message="Add your first city by clicking on a city on the map" />
            }
            .into_any();
        }

        view! {
            <ul class="city-list">
                {cities.into_iter().map(|city| view! {
                    <CityItem store=store.clone() city=city />
                }).collect_view()}
            </ul>
        }
        .into_any()
    }
}
