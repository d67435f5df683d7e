//! Fallback page for unmatched paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::RouteName;

#[component]
pub fn PageNotFound() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"Page not found."</h1>
            <A href=RouteName::Home.path()>"Go home"</A>
        </section>
    }
}
