pub mod auth;
pub mod cities;
pub mod geolocation;
pub mod load;
pub mod map_position;

pub use auth::{AuthState, AuthStore};
pub use cities::CityStore;
pub use geolocation::GeolocationSource;
pub use load::LoadState;
