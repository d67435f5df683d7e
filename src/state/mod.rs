//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State objects are created once in `App` and injected through Leptos
//! context; nothing here is a global.

pub mod auth;
