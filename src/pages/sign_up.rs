//! Sign-up page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::RouteName;

#[component]
pub fn SignUpView() -> impl IntoView {
    view! {
        <section class="auth-page">
            <h1>"Create an account"</h1>
            <p class="auth-page__hint">
                "Already registered? "
                <A href=RouteName::LogIn.path()>"Log in"</A>
            </p>
        </section>
    }
}
