use leptos::prelude::*;
use leptos_router::components::A;

use super::logo::Logo;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <Logo/>
                </div>

                <div class="navbar__links">
                    <A href="/pricing" attr:class="navbar__link">
                        "Pricing"
                    </A>
                    <A href="/product" attr:class="navbar__link">
                        "Product"
                    </A>
                    <A href="/login" attr:class="navbar__link navbar__link--cta">
                        "Login"
                    </A>
                </div>
            </div>
        </nav>
    }
}
