//! Log-in page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::RouteName;

#[component]
pub fn LogInView() -> impl IntoView {
    view! {
        <section class="auth-page">
            <h1>"Log in"</h1>
            <p class="auth-page__hint">
                <A href=RouteName::ResetPassword.path()>"Forgot password?"</A>
            </p>
            <p class="auth-page__hint">
                "No account yet? "
                <A href=RouteName::SignUp.path()>"Sign up"</A>
            </p>
        </section>
    }
}
