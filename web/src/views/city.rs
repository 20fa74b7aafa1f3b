use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_params_map;
use shared_types::City;

use crate::{
    components::{back_button::BackButton, error::Message, loading::LoadingView},
    state::CityStore,
    utils::format::format_date_with_weekday,
};

fn wikipedia_url(city_name: &str) -> String {
    format!(
        "https://en.wikipedia.org/wiki/{}",
        urlencoding::encode(city_name)
    )
}

#[component]
fn CityDetails(city: City) -> impl IntoView {
    let City {
        city_name,
        emoji,
        date,
        notes,
        ..
    } = city;
    let notes = notes.filter(|notes| !notes.trim().is_empty());
    let wiki = wikipedia_url(&city_name);

    view! {
        <div class="city">
            <div class="city__row">
                <h6>"City name"</h6>
                <h3>
                    <span>{emoji}</span>
                    " "
                    {city_name.clone()}
                </h3>
            </div>

            <div class="city__row">
                <h6>"You went to " {city_name.clone()} " on"</h6>
                <p>{format_date_with_weekday(&date)}</p>
            </div>

            {notes.map(|notes| view! {
                <div class="city__row">
                    <h6>"Your notes"</h6>
                    <p>{notes}</p>
                </div>
            })}

            <div class="city__row">
                <h6>"Learn more"</h6>
                <a href=wiki target="_blank" rel="noreferrer">
                    "Check out " {city_name} " on Wikipedia →"
                </a>
            </div>

            <div>
                <BackButton/>
            </div>
        </div>
    }
}

/// Detail page for `/app/cities/:id`. Loads the city through the store's cache.
#[component]
pub fn CityPage(store: CityStore) -> impl IntoView {
    let params = use_params_map();
    let city_id = Memo::new(move |_| params.read().get("id"));

    let loader = store.clone();
    Effect::new(move |_| {
        let Some(id) = city_id.get() else {
            return;
        };
        let store = loader.clone();
        spawn_local(async move {
            if let Err(err) = store.fetch_by_id(&id).await {
                leptos::logging::error!("Failed to load city {}: {}", id, err);
            }
        });
    });

    move || {
        if store.is_loading() {
            return view! { <LoadingView/> }.into_any();
        }

        let wanted = city_id.get();
        match store.current_city().get() {
            Some(city) if wanted.as_deref() == Some(city.id.as_str()) => {
                view! { <CityDetails city=city /> }.into_any()
            }
            _ if store.error().is_some() => {
                view! { <Message message="We could not load this city" /> }.into_any()
            }
            _ => view! { <LoadingView/> }.into_any(),
        }
    }
}
