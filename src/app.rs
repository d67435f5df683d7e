//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::router::APP_ROUTES;
use crate::state::auth::AuthStore;
use crate::util::storage::default_storage;

/// Root application component.
///
/// Builds the auth store from `config` and the build's storage backend,
/// provides it as context, and renders the route outlet.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let auth = AuthStore::load(&config, default_storage());
    provide_context(auth);

    view! {
        <Title text=config.display_name.clone()/>

        <Router>
            <NavBar/>
            <main>
                <RouteOutlet/>
            </main>
        </Router>
    }
}

/// Renders the view `APP_ROUTES` picks for the current pathname.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| {
        let entry = APP_ROUTES.resolve(&location.pathname.get());
        log::debug!("route resolved: {}", entry.name.as_str());
        entry.name
    });

    move || APP_ROUTES.entry(route.get()).render()
}
