//! Durable storage for the bearer credential.
//!
//! Three `localStorage` entries: the token itself, a boolean session-active
//! marker, and a logout timestamp written when the credential is cleared.
//! `clear` removes the credential and the session marker together so a
//! reload after logout can never resurrect the session.
//!
//! Outside the browser (SSR build, native tests) the entries live in a
//! process-local map; the API is total either way and never panics.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

const TOKEN_KEY: &str = "catalogo_admin_token";
const SESSION_KEY: &str = "catalogo_admin_session";
const LOGOUT_AT_KEY: &str = "catalogo_admin_logout_at";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK: std::cell::RefCell<std::collections::HashMap<&'static str, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Persist a credential. Survives a full page reload.
pub fn save(token: &str) {
    set_item(TOKEN_KEY, token);
    set_item(SESSION_KEY, "true");
}

/// Read the stored credential, if any.
pub fn load() -> Option<String> {
    get_item(TOKEN_KEY)
}

/// Remove the credential and the session marker, recording when the
/// session ended.
pub fn clear() {
    remove_item(TOKEN_KEY);
    remove_item(SESSION_KEY);
    set_item(LOGOUT_AT_KEY, &timestamp_millis().to_string());
}

/// Whether the session-active marker is set. Informational only: the
/// session holder trusts backend verification, not this flag.
pub fn has_session_marker() -> bool {
    get_item(SESSION_KEY).as_deref() == Some("true")
}

/// Millisecond timestamp of the last `clear`, if one happened.
pub fn last_logout_at() -> Option<u64> {
    get_item(LOGOUT_AT_KEY).and_then(|value| value.parse().ok())
}

fn set_item(key: &'static str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| {
            map.borrow_mut().insert(key, value.to_owned());
        });
    }
}

fn get_item(key: &'static str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| map.borrow().get(key).cloned())
    }
}

fn remove_item(key: &'static str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| {
            map.borrow_mut().remove(key);
        });
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn timestamp_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "hydrate"))]
fn timestamp_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
