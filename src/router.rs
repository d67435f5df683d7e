//! Route table mapping URL paths to page views.
//!
//! DESIGN
//! ======
//! Explicit routes are tried in declaration order and the first match wins.
//! The catch-all lives in its own `fallback` slot rather than as the last
//! array element, so a table without one cannot be built and `resolve` never
//! fails. `entries()` still yields it last.
//!
//! Matching is case-insensitive, ignores one trailing slash, and drops the
//! query string and fragment before comparing.
//!
//! Resolution runs over `use_location().pathname` instead of leptos_router's
//! `<Routes>` because the Leptos matcher is case-sensitive.
//!
//! No route is guarded here; `/account` renders whether or not a token is held.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use leptos::prelude::*;

use crate::pages::{
    account::AccountView, home::HomeView, log_in::LogInView, not_found::PageNotFound,
    reset_password::ResetPasswordView, sign_up::SignUpView,
};

/// Pattern string used by the catch-all entry.
pub const CATCH_ALL_PATTERN: &str = "/:pathMatch(.*)*";

/// Named views the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    SignUp,
    LogIn,
    Account,
    ResetPassword,
    PageNotFound,
}

impl RouteName {
    /// Stable route name, as used in navigation and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::SignUp => "signup",
            Self::LogIn => "login",
            Self::Account => "account",
            Self::ResetPassword => "reset-password",
            Self::PageNotFound => "PageNotFound",
        }
    }

    /// Path pattern for this route. Explicit routes return their canonical
    /// href; `PageNotFound` returns [`CATCH_ALL_PATTERN`].
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignUp => "/sign-up",
            Self::LogIn => "/log-in",
            Self::Account => "/account",
            Self::ResetPassword => "/reset-password",
            Self::PageNotFound => CATCH_ALL_PATTERN,
        }
    }

    /// Component rendered for this route.
    pub const fn view(self) -> fn() -> AnyView {
        match self {
            Self::Home => home,
            Self::SignUp => sign_up,
            Self::LogIn => log_in,
            Self::Account => account,
            Self::ResetPassword => reset_password,
            Self::PageNotFound => not_found,
        }
    }
}

/// One row of the route table.
pub struct RouteEntry {
    pub pattern: &'static str,
    pub name: RouteName,
    pub view: fn() -> AnyView,
}

impl RouteEntry {
    const fn new(name: RouteName) -> Self {
        Self { pattern: name.path(), name, view: name.view() }
    }

    /// Whether this entry accepts `path`. The catch-all accepts everything.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern == CATCH_ALL_PATTERN || normalize(path).eq_ignore_ascii_case(self.pattern)
    }

    /// Render this entry's view.
    pub fn render(&self) -> AnyView {
        (self.view)()
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry").field("pattern", &self.pattern).field("name", &self.name).finish_non_exhaustive()
    }
}

/// Ordered explicit routes plus a catch-all fallback.
#[derive(Debug)]
pub struct RouteTable {
    routes: &'static [RouteEntry],
    fallback: &'static RouteEntry,
}

impl RouteTable {
    pub const fn new(routes: &'static [RouteEntry], fallback: &'static RouteEntry) -> Self {
        Self { routes, fallback }
    }

    /// First explicit route matching `path`, else the fallback.
    pub fn resolve(&self, path: &str) -> &'static RouteEntry {
        self.routes.iter().find(|r| r.matches(path)).unwrap_or(self.fallback)
    }

    /// Entry registered under `name`; unknown names map to the fallback.
    pub fn entry(&self, name: RouteName) -> &'static RouteEntry {
        self.routes.iter().find(|r| r.name == name).unwrap_or(self.fallback)
    }

    /// All entries in declaration order, catch-all last.
    pub fn entries(&self) -> impl Iterator<Item = &'static RouteEntry> {
        self.routes.iter().chain(std::iter::once(self.fallback))
    }
}

/// Reduce a location to the path part compared against patterns.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

// =============================================================
// Application routes
// =============================================================

fn home() -> AnyView {
    view! { <HomeView/> }.into_any()
}

fn sign_up() -> AnyView {
    view! { <SignUpView/> }.into_any()
}

fn log_in() -> AnyView {
    view! { <LogInView/> }.into_any()
}

fn account() -> AnyView {
    view! { <AccountView/> }.into_any()
}

fn reset_password() -> AnyView {
    view! { <ResetPasswordView/> }.into_any()
}

fn not_found() -> AnyView {
    view! { <PageNotFound/> }.into_any()
}

static ROUTES: [RouteEntry; 5] = [
    RouteEntry::new(RouteName::Home),
    RouteEntry::new(RouteName::SignUp),
    RouteEntry::new(RouteName::LogIn),
    RouteEntry::new(RouteName::Account),
    RouteEntry::new(RouteName::ResetPassword),
];

static NOT_FOUND: RouteEntry = RouteEntry::new(RouteName::PageNotFound);

/// The application's route table.
pub static APP_ROUTES: RouteTable = RouteTable::new(&ROUTES, &NOT_FOUND);
