//! Top navigation bar shown on every route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::RouteName;
use crate::state::auth::AuthStore;

/// Navigation bar with the application name and session-dependent links.
///
/// Signed-in visitors see a link to their account; everyone else sees the
/// sign-up and log-in links.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let state = store.state();
    let display_name = move || state.with(|s| s.display_name.clone());
    let signed_in = Signal::derive(move || store.is_authenticated());

    view! {
        <nav class="nav-bar">
            <A href=RouteName::Home.path()>
                <span class="nav-bar__brand">{display_name}</span>
            </A>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || signed_in.get()
                fallback=|| {
                    view! {
                        <A href=RouteName::SignUp.path()>"Sign up"</A>
                        <A href=RouteName::LogIn.path()>"Log in"</A>
                    }
                }
            >
                <A href=RouteName::Account.path()>"Account"</A>
            </Show>
        </nav>
    }
}
