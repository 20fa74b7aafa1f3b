use leptos::prelude::*;

use crate::state::AuthStore;

/// Avatar, greeting and logout button for the signed-in user.
///
/// Logging out flips the auth state; the route guard around the app takes care of
/// leaving the protected pages.
#[component]
pub fn UserBadge(auth: AuthStore) -> impl IntoView {
    move || {
        auth.user().map(|user| {
            view! {
                <div class="user">
                    <img src=user.avatar.clone() alt=user.name.clone()/>
                    <span>"Welcome, " {user.name.clone()}</span>
                    <button on:click=move |_| auth.logout()>"Logout"</button>
                </div>
            }
        })
    }
}
