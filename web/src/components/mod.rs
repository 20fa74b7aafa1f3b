pub mod auth_guard;
pub mod back_button;
pub mod error;
pub mod loading;
pub mod logo;
pub mod navbar;
pub mod user_badge;

pub use error::{ErrorView, Message};
pub use loading::LoadingView;
