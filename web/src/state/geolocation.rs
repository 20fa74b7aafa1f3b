use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;
use shared_types::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Your browser does not support geolocation")]
    Unsupported,
    #[error("{0}")]
    Platform(String),
}

/// One-shot "where am I" query offered by the platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait PositionProvider: Send + Sync {
    async fn current_position(&self) -> Result<Position, GeolocationError>;
}

/// `navigator.geolocation.getCurrentPosition` wrapped in a future.
#[derive(Default)]
pub struct BrowserGeolocation;

#[async_trait(?Send)]
impl PositionProvider for BrowserGeolocation {
    async fn current_position(&self) -> Result<Position, GeolocationError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let geolocation = web_sys::window()
            .and_then(|window| window.navigator().geolocation().ok())
            .ok_or(GeolocationError::Unsupported)?;

        let mut request = |resolve: js_sys::Function, reject: js_sys::Function| {
            if let Err(err) =
                geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
            {
                let _ = reject.call1(&wasm_bindgen::JsValue::NULL, &err);
            }
        };
        let promise = js_sys::Promise::new(&mut request);

        let value = JsFuture::from(promise).await.map_err(|err| {
            let message = err
                .dyn_ref::<web_sys::PositionError>()
                .map(|err| err.message())
                .unwrap_or_else(|| "Unable to retrieve your location".to_string());
            GeolocationError::Platform(message)
        })?;

        let position = value
            .dyn_into::<web_sys::Position>()
            .map_err(|_| GeolocationError::Platform("Unexpected position payload".to_string()))?;
        let coords = position.coords();
        Ok(Position::new(coords.latitude(), coords.longitude()))
    }
}

/// Tracks the latest geolocation request and its outcome.
///
/// Triggering while a request is pending restarts it: each trigger gets a new generation
/// and only the newest generation may write its result.
#[derive(Clone)]
pub struct GeolocationSource {
    provider: Arc<dyn PositionProvider>,
    is_loading: RwSignal<bool>,
    position: RwSignal<Option<Position>>,
    error: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl GeolocationSource {
    pub fn new(provider: Arc<dyn PositionProvider>) -> Self {
        Self {
            provider,
            is_loading: RwSignal::new(false),
            position: RwSignal::new(None),
            error: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    pub fn is_loading(&self) -> ReadSignal<bool> {
        self.is_loading.read_only()
    }

    pub fn position(&self) -> ReadSignal<Option<Position>> {
        self.position.read_only()
    }

    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    pub async fn get_position(&self) {
        self.generation.update_value(|generation| *generation += 1);
        let generation = self.generation.get_value();

        self.is_loading.set(true);
        self.error.set(None);

        let result = self.provider.current_position().await;
        if self.generation.get_value() != generation {
            leptos::logging::log!("Dropping superseded geolocation result #{}", generation);
            return;
        }

        match result {
            Ok(position) => {
                leptos::logging::log!("Geolocation resolved at {}, {}", position.lat, position.lng);
                self.position.set(Some(position));
            }
            Err(err) => {
                leptos::logging::warn!("Geolocation failed: {}", err);
                self.error.set(Some(err.to_string()));
            }
        }
        self.is_loading.set(false);
    }
}
