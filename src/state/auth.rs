//! Session state: the single source of truth for "is this client
//! authenticated, and as whom."
//!
//! DESIGN
//! ======
//! The session is a three-state machine. `Initializing` covers startup and
//! the first verification round-trip; afterwards the machine cycles between
//! `Unauthenticated` and `Authenticated` for the lifetime of the tab.
//! "Authenticated" means backend-verified: the state is only entered through
//! a successful `validate` call, never from token presence alone.
//!
//! Every transition that touches the credential store pairs the storage
//! write with the in-memory update inside one synchronous call, so the
//! stored token and the session can never be observed disagreeing.
//! Consumers read the predicates; errors never escape this module except
//! from `login`, which reports them for form messaging.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::auth_api;
use crate::net::error::AuthError;
use crate::net::types::{Credentials, User};
use crate::util::credential_store;

/// Where the client currently stands with the authentication backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    /// Startup: a stored credential may still be in flight to `validate`.
    #[default]
    Initializing,
    /// No verified credential.
    Unauthenticated,
    /// The backend accepted `token` and resolved `user`.
    Authenticated { user: User, token: String },
}

/// Authentication state held in a context-provided signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    /// True during the initial verification round-trip.
    pub fn is_loading(&self) -> bool {
        matches!(self.session, Session::Initializing)
    }

    /// True iff the session is backend-verified. Pure; performs no I/O.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated { .. })
    }

    /// True iff authenticated as an administrator.
    pub fn is_admin(&self) -> bool {
        match &self.session {
            Session::Authenticated { user, .. } => user.is_admin(),
            Session::Initializing | Session::Unauthenticated => false,
        }
    }

    /// The verified user, when authenticated.
    pub fn user(&self) -> Option<&User> {
        match &self.session {
            Session::Authenticated { user, .. } => Some(user),
            Session::Initializing | Session::Unauthenticated => None,
        }
    }

    /// Enter `Authenticated`, persisting the credential in the same step.
    pub fn resolve(&mut self, token: String, user: User) {
        credential_store::save(&token);
        self.session = Session::Authenticated { user, token };
    }

    /// Enter `Unauthenticated`, clearing the credential in the same step.
    pub fn downgrade(&mut self) {
        credential_store::clear();
        self.session = Session::Unauthenticated;
    }

    /// Enter `Unauthenticated` without touching the store. Startup path for
    /// a client that never had a credential.
    pub fn settle_unauthenticated(&mut self) {
        self.session = Session::Unauthenticated;
    }
}

/// Startup reconciliation: verify the stored credential, if any.
///
/// Leaves the session `Unauthenticated` when the store is empty or the
/// backend rejects the token.
pub async fn initialize(auth: RwSignal<AuthState>) {
    match credential_store::load() {
        Some(token) => {
            verify(auth, token).await;
        }
        None => auth.update(AuthState::settle_unauthenticated),
    }
}

/// Verify a credential against the backend and settle the session either
/// way. The only operation that leaves `Initializing`.
///
/// Failures are authoritative: no retry, store cleared, session downgraded.
/// Returns whether the credential was accepted.
pub async fn verify(auth: RwSignal<AuthState>, token: String) -> bool {
    match auth_api::validate(&token).await {
        Ok(user) => {
            auth.update(|state| state.resolve(token, user));
            true
        }
        Err(err) => {
            leptos::logging::warn!("credential verification failed: {err}");
            auth.update(AuthState::downgrade);
            false
        }
    }
}

/// Submit credentials, persist the issued token, and re-verify it to
/// resolve the user before reporting success.
///
/// # Errors
///
/// `InvalidCredentials` when the backend rejects the pair,
/// `VerificationFailed` when the fresh token does not validate,
/// `ServiceUnavailable` otherwise. Failed logins leave both the store and
/// the session untouched except that a failed verification clears the
/// just-persisted token.
pub async fn login(auth: RwSignal<AuthState>, credentials: Credentials) -> Result<(), AuthError> {
    match auth_api::login(&credentials).await {
        Ok(token) => {
            credential_store::save(&token);
            if verify(auth, token).await {
                Ok(())
            } else {
                Err(AuthError::VerificationFailed)
            }
        }
        Err(err) => Err(AuthError::from_login_failure(&err)),
    }
}

/// Drop the session and the stored credential synchronously. The caller is
/// responsible for navigating to `/login`; the guard unmounts any protected
/// view as soon as the signal changes.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(AuthState::downgrade);
}
