use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="homepage">
            <Navbar/>
            <section class="homepage__hero">
                <h1>
                    "You travel the world."
                    <br/>
                    "WorldWise keeps track of your adventures."
                </h1>
                <h2>
                    "A world map that tracks your footsteps into every city you can think of. \
                     Never forget your wonderful experiences, and show your friends how you \
                     have wandered the world."
                </h2>
                <A href="/login" attr:class="cta">"Start tracking now"</A>
            </section>
        </main>
    }
}
