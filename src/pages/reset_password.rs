//! Password reset page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::RouteName;

#[component]
pub fn ResetPasswordView() -> impl IntoView {
    view! {
        <section class="auth-page">
            <h1>"Reset password"</h1>
            <p class="auth-page__hint">
                <A href=RouteName::LogIn.path()>"Back to log in"</A>
            </p>
        </section>
    }
}
