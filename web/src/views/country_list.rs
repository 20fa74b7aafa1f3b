use leptos::prelude::*;
use shared_types::Country;

use crate::{
    components::{error::Message, loading::LoadingView},
    state::CityStore,
};

#[component]
pub fn CountryItem(country: Country) -> impl IntoView {
    view! {
        <li class="country-item">
            <span>{country.emoji}</span>
            <span>{country.country}</span>
        </li>
    }
}

#[component]
pub fn CountryList(store: CityStore) -> impl IntoView {
    move || {
        if store.is_loading() {
            return view! { <LoadingView/> }.into_any();
        }

        let countries = store.countries();
        if countries.is_empty() {
            return view! {
                <Message message="Add your first city by clicking on a city on the map" />
            }
            .into_any();
        }

        view! {
            <ul class="country-list">
                {countries.into_iter().map(|country| view! {
                    <CountryItem country=country />
                }).collect_view()}
            </ul>
        }
        .into_any()
    }
}
