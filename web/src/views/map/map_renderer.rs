use leptos::prelude::*;
use leptos_leaflet::{
    leaflet::{Map, MouseEvent},
    prelude::{JsRwSignal, MapContainer, Marker, Popup, TileLayer},
};
use leptos_router::hooks::use_navigate;
use shared_types::Position;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

use super::position_button::PositionButton;
use crate::{
    components::error::ErrorView,
    state::{
        map_position::{form_route, map_center, use_url_position},
        CityStore, GeolocationSource,
    },
};

const INITIAL_ZOOM: f64 = 6.0;

fn to_leaflet(position: Position) -> leptos_leaflet::prelude::Position {
    leptos_leaflet::prelude::Position::new(position.lat, position.lng)
}

/// The map: a marker per stored city, centered by the URL or geolocation, and a click
/// handler that opens the entry form for the clicked point.
#[component]
pub fn MapRenderer(store: CityStore, geolocation: GeolocationSource) -> impl IntoView {
    let navigate = use_navigate();
    let url_position = use_url_position();
    let center = map_center(url_position.into(), geolocation.position().into());

    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| {
        let new_pos = to_leaflet(center.get());
        if let Some(map) = map.get_untracked() {
            map.set_view(&new_pos.as_lat_lng(), map.get_zoom());
        }
    });

    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };

        let navigate = navigate.clone();
        let cb: Closure<dyn FnMut(MouseEvent)> = Closure::wrap(Box::new(move |event: MouseEvent| {
            let clicked = event.lat_lng();
            let target = form_route(Position::new(clicked.lat(), clicked.lng()));
            leptos::logging::log!("Map clicked, opening {}", target);
            navigate(&target, Default::default());
        }));

        let raw_map: &EventTarget = map_instance.unchecked_ref();
        if raw_map
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::error!("Failed to attach the map click handler");
        }

        cb.forget();
    });

    let position_error = geolocation.error();

    view! {
        <div class="map-container">
            <PositionButton geolocation=geolocation />
            {move || position_error.get().map(|message| view! {
                <div class="map-container__error">
                    <ErrorView message=Some(message) />
                </div>
            })}
            <MapContainer
                class="map"
                center=to_leaflet(center.get_untracked())
                zoom=INITIAL_ZOOM
                set_view=true
                map=map.write_only()
            >
                <TileLayer
                    url="https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png"
                    attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                />
                {move ||
                    store.cities().get().into_iter().map(|city| {
                        view! {
                            <Marker position=to_leaflet(city.position) draggable=false>
                                <Popup>
                                    <span>{city.emoji.clone()}</span>
                                    " "
                                    <span>{city.city_name.clone()}</span>
                                </Popup>
                            </Marker>
                        }
                    }).collect_view()
                }
            </MapContainer>
        </div>
    }
}
