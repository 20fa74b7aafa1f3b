use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <main class="product">
            <Navbar/>
            <section>
                <div>
                    <h2>
                        "Simple pricing."
                        <br/>
                        "Just $9/month."
                    </h2>
                    <p>
                        "One plan with every feature: unlimited cities, notes for each trip \
                         and your whole history on a single map."
                    </p>
                </div>
            </section>
        </main>
    }
}
