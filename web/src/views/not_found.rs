use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <main class="not-found">
            <div class="not-found__card">
                <div class="not-found__code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p>"This place is not on the map. The page you are looking for does not exist."</p>
                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "🌍 Go Home"
                </button>
            </div>
        </main>
    }
}
