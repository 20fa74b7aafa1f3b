use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <main class="product">
            <Navbar/>
            <section>
                <div>
                    <h2>"About WorldWise."</h2>
                    <p>
                        "Every city you visit leaves a mark. WorldWise puts those marks on a map \
                         so you can look back at where you have been, when you went and what \
                         you thought of it."
                    </p>
                    <p>
                        "Click anywhere on the map to add a city, write down a few notes and \
                         watch your own travel atlas grow."
                    </p>
                </div>
            </section>
        </main>
    }
}
