use leptos::prelude::*;
use shared_types::User;

pub const LOGIN_ROUTE: &str = "/login";

const DEMO_EMAIL: &str = "jack@example.com";
const DEMO_PASSWORD: &str = "qwerty";

fn demo_user() -> User {
    User {
        name: "Jack".to_string(),
        email: DEMO_EMAIL.to_string(),
        avatar: "https://i.pravatar.cc/100?u=zz".to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut => None,
        }
    }
}

/// Holder of the signed-in user. Only `login` and `logout` write to it.
#[derive(Clone, Copy)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::LoggedOut),
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }

    /// Checks the demo credentials. Returns whether the user is now signed in.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            leptos::logging::log!("User {} logged in", email);
            self.state.set(AuthState::LoggedIn(demo_user()));
            true
        } else {
            leptos::logging::warn!("Rejected login attempt for {}", email);
            false
        }
    }

    pub fn logout(&self) {
        leptos::logging::log!("User logged out");
        self.state.set(AuthState::LoggedOut);
    }
}

/// Result of checking a protected route.
#[derive(Debug, PartialEq, Eq)]
pub enum Access<V> {
    Granted(V),
    Redirect(&'static str),
}

/// Runs `render` only for a signed-in user; everyone else is sent to the login route.
pub fn guard<V>(state: &AuthState, render: impl FnOnce() -> V) -> Access<V> {
    if state.is_authenticated() {
        Access::Granted(render())
    } else {
        Access::Redirect(LOGIN_ROUTE)
    }
}
