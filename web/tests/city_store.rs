use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;
use shared_types::{City, Country, NewCity, Position};
use worldwise::{
    api::{CityApi, CityApiError},
    state::CityStore,
};

/// In-memory remote store with sequential ids.
#[derive(Default)]
struct InMemoryCityApi {
    cities: Mutex<Vec<City>>,
    next_id: AtomicUsize,
    get_calls: AtomicUsize,
}

impl InMemoryCityApi {
    fn with(cities: Vec<City>) -> Self {
        Self {
            next_id: AtomicUsize::new(cities.len() + 1),
            cities: Mutex::new(cities),
            ..Default::default()
        }
    }
}

#[async_trait(?Send)]
impl CityApi for InMemoryCityApi {
    async fn list_cities(&self) -> Result<Vec<City>, CityApiError> {
        Ok(self.cities.lock().unwrap().clone())
    }

    async fn get_city(&self, id: &str) -> Result<City, CityApiError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.cities
            .lock()
            .unwrap()
            .iter()
            .find(|city| city.id == id)
            .cloned()
            .ok_or(CityApiError::Status(404))
    }

    async fn create_city(&self, draft: &NewCity) -> Result<City, CityApiError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let city = City {
            id,
            city_name: draft.city_name.clone(),
            country: draft.country.clone(),
            emoji: draft.emoji.clone(),
            date: draft.date.clone(),
            notes: draft.notes.clone(),
            position: draft.position,
        };
        self.cities.lock().unwrap().push(city.clone());
        Ok(city)
    }

    async fn delete_city(&self, id: &str) -> Result<(), CityApiError> {
        self.cities.lock().unwrap().retain(|city| city.id != id);
        Ok(())
    }
}

fn lisbon_draft() -> NewCity {
    NewCity {
        city_name: "Lisbon".to_string(),
        country: "Portugal".to_string(),
        emoji: "🇵🇹".to_string(),
        date: "2024-01-01".to_string(),
        notes: None,
        position: Position::new(38.7, -9.1),
    }
}

fn city(id: &str, name: &str) -> City {
    City {
        id: id.to_string(),
        city_name: name.to_string(),
        country: "Portugal".to_string(),
        emoji: "🇵🇹".to_string(),
        date: "2024-01-01".to_string(),
        notes: None,
        position: Position::new(38.7, -9.1),
    }
}

#[tokio::test]
async fn created_city_appears_once_after_refetch() {
    let store = CityStore::new(Arc::new(InMemoryCityApi::default()));
    store.fetch_all().await.unwrap();

    let created = store.create_city(lisbon_draft()).await.unwrap();
    store.fetch_all().await.unwrap();

    let cities = store.cities().get_untracked();
    assert_eq!(cities.iter().filter(|city| city.id == created.id).count(), 1);
    assert_eq!(store.current_city().get_untracked(), Some(created));
}

#[tokio::test]
async fn deleted_city_stays_gone_after_refetch() {
    let store = CityStore::new(Arc::new(InMemoryCityApi::with(vec![
        city("1", "Lisbon"),
        city("2", "Porto"),
    ])));
    store.fetch_all().await.unwrap();

    store.delete_city("1").await.unwrap();
    store.fetch_all().await.unwrap();

    let ids: Vec<String> = store.cities().get_untracked().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["2".to_string()]);
}

#[tokio::test]
async fn fetching_the_current_city_again_skips_the_remote() {
    let api = Arc::new(InMemoryCityApi::with(vec![city("1", "Lisbon")]));
    let store = CityStore::new(api.clone());

    store.fetch_by_id("1").await.unwrap();
    store.fetch_by_id("1").await.unwrap();

    assert_eq!(api.get_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        store.current_city().get_untracked().map(|city| city.city_name),
        Some("Lisbon".to_string())
    );
}

#[tokio::test]
async fn adding_lisbon_lists_portugal_as_the_only_country() {
    let store = CityStore::new(Arc::new(InMemoryCityApi::default()));
    store.fetch_all().await.unwrap();

    store.create_city(lisbon_draft()).await.unwrap();

    assert_eq!(
        store.countries(),
        vec![Country {
            country: "Portugal".to_string(),
            emoji: "🇵🇹".to_string(),
        }]
    );
}

/// Remote whose answers are released by the test, one oneshot per call.
struct ScriptedCityApi {
    lists: Mutex<Vec<oneshot::Receiver<Result<Vec<City>, CityApiError>>>>,
    cities: Mutex<Vec<(String, oneshot::Receiver<Result<City, CityApiError>>)>>,
    creates: Mutex<Vec<oneshot::Receiver<Result<City, CityApiError>>>>,
    deletes: Mutex<Vec<oneshot::Receiver<Result<(), CityApiError>>>>,
}

impl ScriptedCityApi {
    fn new() -> Self {
        Self {
            lists: Mutex::new(Vec::new()),
            cities: Mutex::new(Vec::new()),
            creates: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
        }
    }

    fn city_reply(&self, id: &str) -> oneshot::Sender<Result<City, CityApiError>> {
        let (tx, rx) = oneshot::channel();
        self.cities.lock().unwrap().push((id.to_string(), rx));
        tx
    }

    fn create_reply(&self) -> oneshot::Sender<Result<City, CityApiError>> {
        let (tx, rx) = oneshot::channel();
        self.creates.lock().unwrap().push(rx);
        tx
    }

    fn delete_reply(&self) -> oneshot::Sender<Result<(), CityApiError>> {
        let (tx, rx) = oneshot::channel();
        self.deletes.lock().unwrap().push(rx);
        tx
    }
}

async fn settle<T>(
    receiver: oneshot::Receiver<Result<T, CityApiError>>,
) -> Result<T, CityApiError> {
    receiver
        .await
        .unwrap_or(Err(CityApiError::Request("dropped".to_string())))
}

#[async_trait(?Send)]
impl CityApi for ScriptedCityApi {
    async fn list_cities(&self) -> Result<Vec<City>, CityApiError> {
        let receiver = self.lists.lock().unwrap().remove(0);
        settle(receiver).await
    }

    async fn get_city(&self, id: &str) -> Result<City, CityApiError> {
        let receiver = {
            let mut pending = self.cities.lock().unwrap();
            let index = pending
                .iter()
                .position(|(wanted, _)| wanted == id)
                .expect("unexpected city request");
            pending.remove(index).1
        };
        settle(receiver).await
    }

    async fn create_city(&self, _draft: &NewCity) -> Result<City, CityApiError> {
        let receiver = self.creates.lock().unwrap().remove(0);
        settle(receiver).await
    }

    async fn delete_city(&self, _id: &str) -> Result<(), CityApiError> {
        let receiver = self.deletes.lock().unwrap().remove(0);
        settle(receiver).await
    }
}

#[tokio::test]
async fn loading_flag_spans_a_successful_fetch() {
    let api = ScriptedCityApi::new();
    let (tx, rx) = oneshot::channel();
    api.lists.lock().unwrap().push(rx);
    let store = CityStore::new(Arc::new(api));

    let observer = store.clone();
    let (result, ()) = futures::join!(store.fetch_all(), async move {
        assert!(observer.is_loading());
        tx.send(Ok(vec![city("1", "Lisbon")])).unwrap();
    });

    assert!(result.is_ok());
    assert!(!store.is_loading());
    assert_eq!(store.error(), None);
    assert_eq!(store.cities().get_untracked().len(), 1);
}

#[tokio::test]
async fn loading_flag_spans_a_failed_fetch() {
    let api = ScriptedCityApi::new();
    let (tx, rx) = oneshot::channel();
    api.lists.lock().unwrap().push(rx);
    let store = CityStore::new(Arc::new(api));

    let observer = store.clone();
    let (result, ()) = futures::join!(store.fetch_all(), async move {
        assert!(observer.is_loading());
        tx.send(Err(CityApiError::Status(503))).unwrap();
    });

    assert_eq!(result, Err(CityApiError::Status(503)));
    assert!(!store.is_loading());
    assert_eq!(
        store.error().as_deref(),
        Some("There was an error loading cities...")
    );
    assert!(store.cities().get_untracked().is_empty());
}

#[tokio::test]
async fn out_of_order_responses_keep_the_latest_request() {
    let api = ScriptedCityApi::new();
    let (a_tx, a_rx) = oneshot::channel();
    let (b_tx, b_rx) = oneshot::channel();
    api.cities.lock().unwrap().push(("a".to_string(), a_rx));
    api.cities.lock().unwrap().push(("b".to_string(), b_rx));
    let store = CityStore::new(Arc::new(api));

    let (first, second, ()) = futures::join!(store.fetch_by_id("a"), store.fetch_by_id("b"), async {
        b_tx.send(Ok(city("b", "Porto"))).unwrap();
        a_tx.send(Ok(city("a", "Lisbon"))).unwrap();
    });

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(
        store.current_city().get_untracked().map(|city| city.id),
        Some("b".to_string())
    );
    assert!(!store.is_loading());
}

#[tokio::test]
async fn loading_flag_spans_fetch_by_id_on_both_paths() {
    let api = Arc::new(ScriptedCityApi::new());
    let found = api.city_reply("a");
    let missing = api.city_reply("b");
    let store = CityStore::new(api.clone());

    let observer = store.clone();
    let (result, ()) = futures::join!(store.fetch_by_id("a"), async move {
        assert!(observer.is_loading());
        found.send(Ok(city("a", "Lisbon"))).unwrap();
    });
    assert!(result.is_ok());
    assert!(!store.is_loading());

    let observer = store.clone();
    let (result, ()) = futures::join!(store.fetch_by_id("b"), async move {
        assert!(observer.is_loading());
        missing.send(Err(CityApiError::Status(404))).unwrap();
    });
    assert_eq!(result, Err(CityApiError::Status(404)));
    assert!(!store.is_loading());
    assert_eq!(
        store.error().as_deref(),
        Some("There was an error loading the city...")
    );
    assert_eq!(
        store.current_city().get_untracked().map(|city| city.id),
        Some("a".to_string())
    );
}

#[tokio::test]
async fn loading_flag_spans_create_city_on_both_paths() {
    let api = Arc::new(ScriptedCityApi::new());
    let accepted = api.create_reply();
    let rejected = api.create_reply();
    let store = CityStore::new(api.clone());

    let observer = store.clone();
    let (result, ()) = futures::join!(store.create_city(lisbon_draft()), async move {
        assert!(observer.is_loading());
        accepted.send(Ok(city("1", "Lisbon"))).unwrap();
    });
    assert!(result.is_ok());
    assert!(!store.is_loading());

    let observer = store.clone();
    let (result, ()) = futures::join!(store.create_city(lisbon_draft()), async move {
        assert!(observer.is_loading());
        rejected.send(Err(CityApiError::Status(500))).unwrap();
    });
    assert_eq!(result, Err(CityApiError::Status(500)));
    assert!(!store.is_loading());
    assert_eq!(
        store.error().as_deref(),
        Some("There was an error creating the city...")
    );
    assert_eq!(store.cities().get_untracked().len(), 1);
}

#[tokio::test]
async fn loading_flag_spans_delete_city_on_both_paths() {
    let api = Arc::new(ScriptedCityApi::new());
    let listed = {
        let (tx, rx) = oneshot::channel();
        api.lists.lock().unwrap().push(rx);
        tx
    };
    let rejected = api.delete_reply();
    let accepted = api.delete_reply();
    let store = CityStore::new(api.clone());

    listed.send(Ok(vec![city("1", "Lisbon")])).unwrap();
    store.fetch_all().await.unwrap();

    let observer = store.clone();
    let (result, ()) = futures::join!(store.delete_city("1"), async move {
        assert!(observer.is_loading());
        rejected.send(Err(CityApiError::Status(404))).unwrap();
    });
    assert_eq!(result, Err(CityApiError::Status(404)));
    assert!(!store.is_loading());
    assert_eq!(store.cities().get_untracked().len(), 1);

    let observer = store.clone();
    let (result, ()) = futures::join!(store.delete_city("1"), async move {
        assert!(observer.is_loading());
        accepted.send(Ok(())).unwrap();
    });
    assert!(result.is_ok());
    assert!(!store.is_loading());
    assert_eq!(store.error(), None);
    assert!(store.cities().get_untracked().is_empty());
}

#[tokio::test]
async fn returning_to_the_cached_city_drops_the_pending_request() {
    let api = Arc::new(ScriptedCityApi::new());
    let first = api.city_reply("a");
    let detour = api.city_reply("b");
    let store = CityStore::new(api.clone());

    first.send(Ok(city("a", "Lisbon"))).unwrap();
    store.fetch_by_id("a").await.unwrap();

    let (to_b, back_to_a) = futures::join!(store.fetch_by_id("b"), async {
        let result = store.fetch_by_id("a").await;
        detour.send(Ok(city("b", "Porto"))).unwrap();
        result
    });

    assert!(to_b.is_ok());
    assert!(back_to_a.is_ok());
    assert_eq!(
        store.current_city().get_untracked().map(|city| city.id),
        Some("a".to_string())
    );
    assert!(!store.is_loading());
}
