use std::sync::Arc;

use leptos::prelude::*;
use shared_types::{City, Country, NewCity};

use super::load::LoadState;
use crate::api::{CityApi, CityApiError};

pub const LOAD_CITIES_FAILED: &str = "There was an error loading cities...";
pub const LOAD_CITY_FAILED: &str = "There was an error loading the city...";
pub const CREATE_CITY_FAILED: &str = "There was an error creating the city...";
pub const DELETE_CITY_FAILED: &str = "There was an error deleting the city...";

/// Reactive container for the visited cities.
///
/// The signals are private: views get read-only handles and every mutation goes through
/// `fetch_all`, `fetch_by_id`, `create_city` or `delete_city`. The handle is cheap to clone
/// and is passed down to the components that need it.
#[derive(Clone)]
pub struct CityStore {
    api: Arc<dyn CityApi>,
    cities: RwSignal<Vec<City>>,
    current_city: RwSignal<Option<City>>,
    load: RwSignal<LoadState>,
    // Id of the most recent `fetch_by_id`; responses for any other id are dropped.
    requested_id: StoredValue<Option<String>>,
}

impl CityStore {
    pub fn new(api: Arc<dyn CityApi>) -> Self {
        Self {
            api,
            cities: RwSignal::new(Vec::new()),
            current_city: RwSignal::new(None),
            load: RwSignal::new(LoadState::default()),
            requested_id: StoredValue::new(None),
        }
    }

    pub fn cities(&self) -> ReadSignal<Vec<City>> {
        self.cities.read_only()
    }

    pub fn current_city(&self) -> ReadSignal<Option<City>> {
        self.current_city.read_only()
    }

    pub fn load_state(&self) -> ReadSignal<LoadState> {
        self.load.read_only()
    }

    pub fn is_loading(&self) -> bool {
        self.load.with(LoadState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.load.with(|state| state.error().map(str::to_string))
    }

    /// Distinct countries of the collection, recomputed on every read.
    pub fn countries(&self) -> Vec<Country> {
        self.cities.with(|cities| countries_of(cities))
    }

    /// Replaces the collection with the remote one.
    pub async fn fetch_all(&self) -> Result<(), CityApiError> {
        self.load.update(LoadState::begin);
        match self.api.list_cities().await {
            Ok(cities) => {
                leptos::logging::log!("Loaded {} cities", cities.len());
                self.cities.set(cities);
                self.load.update(LoadState::succeed);
                Ok(())
            }
            Err(err) => Err(self.fail(err, LOAD_CITIES_FAILED)),
        }
    }

    /// Loads one city into the current-city slot.
    ///
    /// Skips the request when `id` is already the current city. Only the response for the
    /// most recently requested id is applied.
    pub async fn fetch_by_id(&self, id: &str) -> Result<(), CityApiError> {
        self.requested_id.update_value(|requested| *requested = Some(id.to_string()));

        let is_current = self
            .current_city
            .with_untracked(|current| current.as_ref().is_some_and(|city| city.id == id));
        if is_current {
            return Ok(());
        }

        self.load.update(LoadState::begin);
        let result = self.api.get_city(id).await;

        let still_wanted = self
            .requested_id
            .with_value(|requested| requested.as_deref() == Some(id));
        if !still_wanted {
            leptos::logging::log!("Discarding response for superseded city {}", id);
            self.load.update(LoadState::succeed);
            return Ok(());
        }

        match result {
            Ok(city) => {
                self.current_city.set(Some(city));
                self.load.update(LoadState::succeed);
                Ok(())
            }
            Err(err) => Err(self.fail(err, LOAD_CITY_FAILED)),
        }
    }

    /// Persists a new city, appends the stored record and makes it the current city.
    pub async fn create_city(&self, draft: NewCity) -> Result<City, CityApiError> {
        self.load.update(LoadState::begin);
        match self.api.create_city(&draft).await {
            Ok(city) => {
                leptos::logging::log!("Created city {} ({})", city.city_name, city.id);
                self.cities.update(|cities| {
                    cities.retain(|existing| existing.id != city.id);
                    cities.push(city.clone());
                });
                self.requested_id
                    .update_value(|requested| *requested = Some(city.id.clone()));
                self.current_city.set(Some(city.clone()));
                self.load.update(LoadState::succeed);
                Ok(city)
            }
            Err(err) => Err(self.fail(err, CREATE_CITY_FAILED)),
        }
    }

    /// Deletes a city remotely, then locally. Nothing is removed before the remote confirms.
    pub async fn delete_city(&self, id: &str) -> Result<(), CityApiError> {
        self.load.update(LoadState::begin);
        match self.api.delete_city(id).await {
            Ok(()) => {
                leptos::logging::log!("Deleted city {}", id);
                self.cities.update(|cities| cities.retain(|city| city.id != id));
                let was_current = self
                    .current_city
                    .with_untracked(|current| current.as_ref().is_some_and(|city| city.id == id));
                if was_current {
                    self.current_city.set(None);
                }
                self.load.update(LoadState::succeed);
                Ok(())
            }
            Err(err) => Err(self.fail(err, DELETE_CITY_FAILED)),
        }
    }

    fn fail(&self, err: CityApiError, message: &str) -> CityApiError {
        leptos::logging::error!("{}: {}", message, err);
        self.load.update(|state| state.fail(message));
        err
    }
}

/// One entry per country, in order of first appearance.
pub fn countries_of(cities: &[City]) -> Vec<Country> {
    cities.iter().fold(Vec::new(), |mut countries: Vec<Country>, city| {
        if !countries.iter().any(|known| known.country == city.country) {
            countries.push(Country {
                country: city.country.clone(),
                emoji: city.emoji.clone(),
            });
        }
        countries
    })
}
