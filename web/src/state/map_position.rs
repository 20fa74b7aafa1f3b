use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use shared_types::{City, Position};

/// Where the map opens before anything better is known.
pub const DEFAULT_CENTER: Position = Position::new(40.0, 0.0);

/// Reads a position from `lat`/`lng` query values. Both must be finite decimals.
pub fn position_from_query(lat: Option<&str>, lng: Option<&str>) -> Option<Position> {
    let parse = |raw: Option<&str>| {
        raw.and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
    };
    Some(Position::new(parse(lat)?, parse(lng)?))
}

/// Current `?lat=..&lng=..` of the route, if both are present.
pub fn use_url_position() -> Memo<Option<Position>> {
    let query = use_query_map();
    Memo::new(move |_| {
        query.with(|query| {
            position_from_query(query.get("lat").as_deref(), query.get("lng").as_deref())
        })
    })
}

/// URL coordinates beat a geolocation fix, which beats the last center shown.
pub fn resolve_center(
    url: Option<Position>,
    geolocation: Option<Position>,
    last_known: Position,
) -> Position {
    url.or(geolocation).unwrap_or(last_known)
}

/// Map center that follows the URL and the geolocation result.
///
/// When neither source has a value the previous center is kept, starting from
/// [`DEFAULT_CENTER`].
pub fn map_center(
    url: Signal<Option<Position>>,
    geolocation: Signal<Option<Position>>,
) -> Memo<Position> {
    Memo::new(move |previous: Option<&Position>| {
        resolve_center(
            url.get(),
            geolocation.get(),
            previous.copied().unwrap_or(DEFAULT_CENTER),
        )
    })
}

fn with_position(path: &str, position: Position) -> String {
    format!("{path}?lat={}&lng={}", position.lat, position.lng)
}

/// Entry form seeded with a clicked point.
pub fn form_route(position: Position) -> String {
    with_position("/app/form", position)
}

pub fn city_route(city: &City) -> String {
    with_position(
        &format!("/app/cities/{}", urlencoding::encode(&city.id)),
        city.position,
    )
}
