//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::nav::Nav;
use crate::pages::{home::Home, restaurant::RestaurantPage};

/// Server-side application state, provided as Leptos context for server functions.
#[derive(Clone, Debug)]
#[cfg(feature = "ssr")]
pub struct AppState {
    pub config: std::sync::Arc<dinesafe_common::config::Config>,
    pub source: crate::server::source::DocumentSource,
    pub http: reqwest::Client,
    pub image_cache: crate::server::storage::UrlCache,
    pub leptos_options: LeptosOptions,
}

#[cfg(feature = "ssr")]
impl AppState {
    pub fn new(
        config: dinesafe_common::config::Config,
        leptos_options: LeptosOptions,
    ) -> Result<Self, crate::server::StoreError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        let config = std::sync::Arc::new(config);
        let source = crate::server::source::DocumentSource::from_config(&config, http.clone());

        Ok(AppState {
            config,
            source,
            http,
            image_cache: crate::server::storage::new_cache(),
            leptos_options,
        })
    }
}

/// Dummy state for the client – never actually constructed on WASM, but the
/// type must exist so server functions can reference it in their signatures.
#[derive(Clone, Debug)]
#[cfg(not(feature = "ssr"))]
pub struct AppState;

/// HTML document wrapping `<App/>` for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/dinesafe-web.css"/>
        <Title text="DineSafe – COVID-friendly restaurants"/>
        <Meta name="description" content="Restaurants and the safety measures they take"/>

        <Router>
            <Nav/>
            <main class="main-content">
                <Routes fallback=|| view! { <p class="error">"Page not found."</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/restaurant/:id") view=RestaurantPage/>
                </Routes>
            </main>
        </Router>
    }
}
