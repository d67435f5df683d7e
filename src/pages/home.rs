//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthStore;

#[component]
pub fn HomeView() -> impl IntoView {
    let state = expect_context::<AuthStore>().state();

    let greeting = move || {
        state.with(|s| match &s.username {
            Some(name) => format!("Welcome back, {name}."),
            None => format!("Welcome to {}.", s.display_name),
        })
    };

    view! {
        <section class="home-page">
            <h1>{greeting}</h1>
        </section>
    }
}
