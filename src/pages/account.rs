//! Account page with the current username and a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::router::RouteName;
use crate::state::auth::AuthStore;

/// Account page. Renders for every visitor; the router applies no guard.
#[component]
pub fn AccountView() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let state = store.state();
    let navigate = use_navigate();

    let username = move || state.with(|s| s.username.clone().unwrap_or_else(|| "Not signed in".to_owned()));

    let on_logout = move |_| {
        if let Err(e) = store.reset_auth() {
            log::warn!("logout left storage behind: {e}");
        }
        navigate(RouteName::LogIn.path(), NavigateOptions::default());
    };

    view! {
        <section class="account-page">
            <h1>"Account"</h1>
            <p class="account-page__username">{username}</p>
            <button class="btn account-page__logout" on:click=on_logout>
                "Log out"
            </button>
        </section>
    }
}
