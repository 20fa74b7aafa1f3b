use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::{guard, Access, AuthStore};

#[component]
pub fn AccessDeniedState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-denied-title">
                    "🚫 Access Denied"
                </div>
                <div class="auth-guard-denied-subtitle">
                    "Redirecting to login..."
                </div>
            </div>
        </div>
    }
}

/// Renders `children` for a signed-in user and redirects everyone else to the login page.
///
/// The children are only constructed after the check passes, so nothing inside the
/// protected tree (such as the initial city fetch) runs for a logged-out visitor.
#[component]
pub fn RequireAuth(auth: AuthStore, children: ChildrenFn) -> impl IntoView {
    move || {
        let children = children.clone();
        match auth.state().with(|state| guard(state, move || children().into_any())) {
            Access::Granted(view) => view,
            Access::Redirect(path) => view! {
                <Redirect path=path/>
                <AccessDeniedState/>
            }
            .into_any(),
        }
    }
}
