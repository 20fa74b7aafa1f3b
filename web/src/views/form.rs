use std::sync::Arc;

use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use shared_types::{NewCity, Position};
use thaw::{Button, ButtonAppearance, ButtonType, Input};

use crate::{
    components::{back_button::BackButton, error::Message, loading::LoadingView},
    geocode::ReverseGeocoder,
    state::{map_position::use_url_position, CityStore},
    utils::format::today,
};

/// Builds the record to submit, or `None` while the form is incomplete.
pub fn build_draft(
    position: Option<Position>,
    city_name: &str,
    country: &str,
    emoji: &str,
    date: &str,
    notes: &str,
) -> Option<NewCity> {
    let position = position?;
    let city_name = city_name.trim();
    let date = date.trim();
    if city_name.is_empty() || date.is_empty() {
        return None;
    }

    let notes = notes.trim();
    Some(NewCity {
        city_name: city_name.to_string(),
        country: country.to_string(),
        emoji: emoji.to_string(),
        date: date.to_string(),
        notes: (!notes.is_empty()).then(|| notes.to_string()),
        position,
    })
}

/// New-city form for `/app/form?lat=..&lng=..`.
///
/// The clicked point is reverse geocoded to pre-fill the name, country and flag.
#[component]
pub fn CityForm(store: CityStore, geocoder: Arc<dyn ReverseGeocoder>) -> impl IntoView {
    let navigate = use_navigate();
    let url_position = use_url_position();

    let city_name = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let emoji = RwSignal::new(String::new());
    let date = RwSignal::new(today());
    let notes = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);

    Effect::new(move |_| {
        if saved.get() {
            navigate("/app/cities", Default::default());
        }
    });

    let place = LocalResource::new(move || {
        let geocoder = geocoder.clone();
        let position = url_position.get();
        async move {
            match position {
                Some(position) => geocoder.place_at(position).await.map(Some),
                None => Ok(None),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = place.get() {
            if let Ok(Some(found)) = result.as_ref() {
                city_name.set(found.city_name.clone());
                country.set(found.country.clone());
                emoji.set(found.emoji.clone());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = build_draft(
            url_position.get_untracked(),
            &city_name.get_untracked(),
            &country.get_untracked(),
            &emoji.get_untracked(),
            &date.get_untracked(),
            &notes.get_untracked(),
        ) else {
            leptos::logging::warn!("City name and date are required");
            return;
        };

        let store = store.clone();
        saving.set(true);
        spawn_local(async move {
            match store.create_city(draft).await {
                Ok(_) => saved.set(true),
                Err(err) => leptos::logging::error!("Failed to create city: {}", err),
            }
            saving.set(false);
        });
    };

    move || {
        if url_position.get().is_none() {
            return view! { <Message message="Start by clicking somewhere on the map" /> }
                .into_any();
        }

        match place.get() {
            None => {
                return view! { <LoadingView message="Looking up this place...".to_string() /> }
                    .into_any()
            }
            Some(result) => {
                if let Err(err) = result.as_ref() {
                    return view! { <Message message=err.to_string() /> }.into_any();
                }
            }
        }

        let on_submit = on_submit.clone();
        view! {
            <form class="form" class:loading=move || saving.get() on:submit=on_submit>
                <div class="form__row">
                    <label for="cityName">"City name"</label>
                    <Input value=city_name />
                    <span class="form__flag">{move || emoji.get()}</span>
                </div>

                <div class="form__row">
                    <label for="date">"When did you go to " {move || city_name.get()} "?"</label>
                    <input
                        id="date"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <label for="notes">"Notes about your trip to " {move || city_name.get()}</label>
                    <textarea
                        id="notes"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form__buttons">
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        loading=Signal::from(saving)
                    >
                        "Add"
                    </Button>
                    <BackButton/>
                </div>
            </form>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_form_builds_a_draft() {
        let draft = build_draft(
            Some(Position::new(38.7, -9.1)),
            " Lisbon ",
            "Portugal",
            "🇵🇹",
            "2024-01-01",
            "  ",
        )
        .unwrap();

        assert_eq!(draft.city_name, "Lisbon");
        assert_eq!(draft.notes, None);
        assert_eq!(draft.position, Position::new(38.7, -9.1));
    }

    #[test]
    fn missing_name_date_or_position_blocks_submission() {
        let position = Some(Position::new(38.7, -9.1));
        assert!(build_draft(position, "", "Portugal", "🇵🇹", "2024-01-01", "").is_none());
        assert!(build_draft(position, "Lisbon", "Portugal", "🇵🇹", "", "").is_none());
        assert!(build_draft(None, "Lisbon", "Portugal", "🇵🇹", "2024-01-01", "").is_none());
    }

    #[test]
    fn notes_are_kept_when_present() {
        let draft = build_draft(
            Some(Position::new(38.7, -9.1)),
            "Lisbon",
            "Portugal",
            "🇵🇹",
            "2024-01-01",
            "Pastéis de nata",
        )
        .unwrap();
        assert_eq!(draft.notes.as_deref(), Some("Pastéis de nata"));
    }
}
