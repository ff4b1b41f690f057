use super::*;
use crate::net::types::User;
use crate::state::auth::Session;

fn authenticated(role: &str) -> AuthState {
    AuthState {
        session: Session::Authenticated {
            user: User {
                id: 1,
                email: "a@b.com".to_owned(),
                role: role.to_owned(),
            },
            token: "tok".to_owned(),
        },
    }
}

fn unauthenticated() -> AuthState {
    AuthState {
        session: Session::Unauthenticated,
    }
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn initializing_never_renders_protected_content() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, false), GuardOutcome::Waiting);
    assert_eq!(evaluate(&state, true), GuardOutcome::Waiting);
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(
        evaluate(&unauthenticated(), false),
        GuardOutcome::RedirectLogin
    );
}

#[test]
fn verified_admin_is_allowed_everywhere() {
    let state = authenticated("ADMIN");
    assert!(state.is_admin());
    assert_eq!(evaluate(&state, false), GuardOutcome::Allow);
    assert_eq!(evaluate(&state, true), GuardOutcome::Allow);
}

#[test]
fn non_admin_is_denied_on_admin_views_only() {
    let state = authenticated("CAPTURISTA");
    assert_eq!(evaluate(&state, false), GuardOutcome::Allow);
    assert_eq!(evaluate(&state, true), GuardOutcome::Denied);
}

#[test]
fn admin_requirement_never_overrides_the_login_redirect() {
    assert_eq!(
        evaluate(&unauthenticated(), true),
        GuardOutcome::RedirectLogin
    );
}
