use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use thaw::*;

use crate::{components::navbar::Navbar, state::AuthStore};

#[component]
pub fn LoginPage(auth: AuthStore) -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new("jack@example.com".to_string());
    let password = RwSignal::new("qwerty".to_string());
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled =
        Memo::new(move |_| email.get().is_empty() || password.get().is_empty());

    // Already signed in, or just signed in: leave the login page for the app.
    Effect::new(move |_| {
        if auth.state().with(|state| state.is_authenticated()) {
            navigate(
                "/app",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let submit_login = move || {
        error_message.set(None);
        if !auth.login(&email.get_untracked(), &password.get_untracked()) {
            error_message.set(Some("Wrong email or password".to_string()));
        }
    };

    view! {
        <main class="login">
            <Navbar/>
            <div class="auth-card">
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_login();
                }>
                    <div class="auth-form-group">
                        <label>"Email address"</label>
                        <Input
                            class="auth-input"
                            placeholder="Email"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>

                    <div class="auth-form-group">
                        <label>"Password"</label>
                        <Input
                            class="auth-input"
                            placeholder="Password"
                            input_type=InputType::Password
                            value=password
                        />
                    </div>

                    {move || error_message.get().map(|msg| view! {
                        <div class="auth-error-message">{msg}</div>
                    })}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Login"
                    </Button>
                </form>
            </div>
        </main>
    }
}
