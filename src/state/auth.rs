//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AuthStore` at mount and hands it out through Leptos
//! context. Views read the snapshot reactively and call the mutators on
//! login, profile load, and logout. Nothing here validates tokens or guards
//! routes; the store only remembers strings.
//!
//! PERSISTENCE
//! ===========
//! `token` and `username` are read from storage once in `AuthStore::load` and
//! written back synchronously on every mutation. The in-memory signal is
//! updated before the write, so a failed write still leaves the session usable
//! for the current page and the error is returned to the caller.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::util::storage::{KeyValueStorage, StorageError};

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the signed-in username.
pub const USERNAME_KEY: &str = "username";
/// Header name produced by [`AuthStore::authorization_header`].
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Snapshot of the auth session.
///
/// `token` and `username` are independent; either may be set without the
/// other. `server_addr` and `display_name` come from config and never change
/// after load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub server_addr: String,
    pub display_name: String,
    pub username: Option<String>,
}

/// Owner of the auth session: a reactive signal plus its storage sink.
#[derive(Clone)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    storage: Arc<dyn KeyValueStorage>,
    auth_prefix: Arc<str>,
}

impl AuthStore {
    /// Build the store from config and whatever `storage` already holds.
    pub fn load(config: &AppConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let state = AuthState {
            token: storage.get_item(TOKEN_KEY),
            server_addr: config.server_addr.clone(),
            display_name: config.display_name.clone(),
            username: storage.get_item(USERNAME_KEY),
        };
        log::debug!(
            "auth store loaded (token: {}, username: {})",
            state.token.is_some(),
            state.username.is_some()
        );
        Self { state: RwSignal::new(state), storage, auth_prefix: Arc::from(config.auth_prefix.as_str()) }
    }

    /// Read-only handle onto the session. Every holder observes mutations
    /// made through this store.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current state without subscribing the caller.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Replace the session token and persist it under [`TOKEN_KEY`].
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails; the in-memory token is
    /// already updated.
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), StorageError> {
        let token = token.into();
        self.state.update(|s| s.token = Some(token.clone()));
        self.persist(TOKEN_KEY, &token)
    }

    /// Replace the username and persist it under [`USERNAME_KEY`].
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails; the in-memory username is
    /// already updated.
    pub fn set_username(&self, username: impl Into<String>) -> Result<(), StorageError> {
        let username = username.into();
        self.state.update(|s| s.username = Some(username.clone()));
        self.persist(USERNAME_KEY, &username)
    }

    /// Single-entry header map: `Authorization: <prefix> <token>`.
    ///
    /// Without a token the value is the prefix followed by a bare space.
    pub fn authorization_header(&self) -> HashMap<&'static str, String> {
        let token = self.state.with_untracked(|s| s.token.clone()).unwrap_or_default();
        HashMap::from([(AUTHORIZATION_HEADER, format!("{} {token}", self.auth_prefix))])
    }

    /// Clear token and username, in memory and in storage.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` hit; both removals are attempted.
    pub fn reset_auth(&self) -> Result<(), StorageError> {
        self.state.update(|s| {
            s.token = None;
            s.username = None;
        });
        let token = self.forget(TOKEN_KEY);
        let username = self.forget(USERNAME_KEY);
        token.and(username)
    }

    /// Whether a non-empty token is held. Display hint only.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.token.as_deref().is_some_and(|t| !t.is_empty()))
    }

    fn persist(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.storage.set_item(key, value) {
            Ok(()) => {
                log::debug!("persisted {key}");
                Ok(())
            }
            Err(e) => {
                log::warn!("auth persistence failed: {e}");
                Err(e)
            }
        }
    }

    fn forget(&self, key: &str) -> Result<(), StorageError> {
        match self.storage.remove_item(key) {
            Ok(()) => {
                log::debug!("removed {key}");
                Ok(())
            }
            Err(e) => {
                log::warn!("auth persistence failed: {e}");
                Err(e)
            }
        }
    }
}
