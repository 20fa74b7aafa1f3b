use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::{
    api::HttpCityApi,
    components::auth_guard::RequireAuth,
    config::AppConfig,
    geocode::{HttpReverseGeocoder, ReverseGeocoder},
    state::{geolocation::BrowserGeolocation, AuthStore, CityStore, GeolocationSource},
    views::{
        app_layout::AppLayout, city::CityPage, city_list::CityList, country_list::CountryList,
        form::CityForm, home::HomePage, login::LoginPage, not_found::NotFoundPage,
        pricing::PricingPage, product::ProductPage,
    },
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/leaflet@1.9.3/dist/leaflet.css"
                />
                <script
                    src="https://unpkg.com/leaflet@1.9.3/dist/leaflet.js"
                    defer
                ></script>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = AppConfig::from_env();
    let store = CityStore::new(Arc::new(HttpCityApi::new(config.api_base_url.clone())));
    let auth = AuthStore::new();
    let geolocation = GeolocationSource::new(Arc::new(BrowserGeolocation));
    let geocoder: Arc<dyn ReverseGeocoder> =
        Arc::new(HttpReverseGeocoder::new(config.geocode_url.clone()));

    let list_store = store.clone();
    let index_store = store.clone();
    let city_store = store.clone();
    let country_store = store.clone();
    let form_store = store.clone();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/worldwise.css"/>
        <Title text="WorldWise"/>

        <ConfigProvider>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("product") view=ProductPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("login") view=move || view! { <LoginPage auth=auth/> }/>
                    <ParentRoute
                        path=StaticSegment("app")
                        view=move || {
                            let store = store.clone();
                            let geolocation = geolocation.clone();
                            view! {
                                <RequireAuth auth=auth>
                                    <AppLayout
                                        store=store.clone()
                                        auth=auth
                                        geolocation=geolocation.clone()
                                    />
                                </RequireAuth>
                            }
                        }
                    >
                        <Route
                            path=StaticSegment("")
                            view=move || view! { <CityList store=index_store.clone()/> }
                        />
                        <Route
                            path=StaticSegment("cities")
                            view=move || view! { <CityList store=list_store.clone()/> }
                        />
                        <Route
                            path=(StaticSegment("cities"), ParamSegment("id"))
                            view=move || view! { <CityPage store=city_store.clone()/> }
                        />
                        <Route
                            path=StaticSegment("countries")
                            view=move || view! { <CountryList store=country_store.clone()/> }
                        />
                        <Route
                            path=StaticSegment("form")
                            view=move || {
                                view! {
                                    <CityForm store=form_store.clone() geocoder=geocoder.clone()/>
                                }
                            }
                        />
                    </ParentRoute>
                </Routes>
            </Router>
        </ConfigProvider>
    }
}
