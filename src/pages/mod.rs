//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is registered in `router::APP_ROUTES` and reads shared state
//! from context. Pages stay thin; form and request handling live with the
//! backend client, not here.

pub mod account;
pub mod home;
pub mod log_in;
pub mod not_found;
pub mod reset_password;
pub mod sign_up;
