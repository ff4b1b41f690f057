use super::*;
use crate::net::error::ApiError;
use crate::util::credential_store;

fn user(role: &str) -> User {
    User {
        id: 1,
        email: "a@b.com".to_owned(),
        role: role.to_owned(),
    }
}

// Each test runs on its own thread, so the credential store fallback is
// fresh per test.

// =============================================================
// State machine shape
// =============================================================

#[test]
fn starts_initializing() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn authenticated_strictly_between_resolve_and_downgrade() {
    let mut state = AuthState::default();
    state.settle_unauthenticated();
    assert!(!state.is_authenticated());

    state.resolve("tok".to_owned(), user("ADMIN"));
    assert!(state.is_authenticated());

    state.downgrade();
    assert!(!state.is_authenticated());
}

#[test]
fn resolve_exposes_the_user() {
    let mut state = AuthState::default();
    state.resolve("tok".to_owned(), user("ADMIN"));
    assert_eq!(state.user().map(|u| u.email.as_str()), Some("a@b.com"));
}

// =============================================================
// Role predicate
// =============================================================

#[test]
fn admin_implies_authenticated_never_the_inverse() {
    let mut state = AuthState::default();
    assert!(!state.is_admin());

    state.settle_unauthenticated();
    assert!(!state.is_admin());

    state.resolve("tok".to_owned(), user("ADMIN"));
    assert!(state.is_admin());

    state.downgrade();
    assert!(!state.is_admin());
}

#[test]
fn non_admin_role_is_authenticated_but_not_admin() {
    let mut state = AuthState::default();
    state.resolve("tok".to_owned(), user("CAPTURISTA"));
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

// =============================================================
// Store pairing
// =============================================================

#[test]
fn resolve_persists_the_credential_in_the_same_step() {
    let mut state = AuthState::default();
    state.resolve("tok-77".to_owned(), user("ADMIN"));
    assert_eq!(credential_store::load().as_deref(), Some("tok-77"));
}

#[test]
fn downgrade_clears_the_store_in_the_same_step() {
    let mut state = AuthState::default();
    state.resolve("tok-77".to_owned(), user("ADMIN"));

    state.downgrade();
    assert!(!state.is_authenticated());
    assert!(credential_store::load().is_none());
}

#[test]
fn downgrade_works_from_any_prior_state() {
    credential_store::save("stale");
    let mut state = AuthState::default();

    // Verification failure straight out of Initializing.
    state.downgrade();
    assert!(!state.is_authenticated());
    assert!(credential_store::load().is_none());
}

#[test]
fn settling_without_a_credential_leaves_the_store_untouched() {
    let mut state = AuthState::default();
    state.settle_unauthenticated();
    assert!(credential_store::load().is_none());
    assert!(credential_store::last_logout_at().is_none());
}

// =============================================================
// Login failure mapping
// =============================================================

#[test]
fn rejected_login_maps_to_invalid_credentials() {
    let err = AuthError::from_login_failure(&ApiError::Unauthorized);
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn transport_failure_maps_to_service_unavailable() {
    let err = AuthError::from_login_failure(&ApiError::Service("timeout".to_owned()));
    assert_eq!(err, AuthError::ServiceUnavailable);
}
