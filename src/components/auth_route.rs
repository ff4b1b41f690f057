//! Route guard gating protected views on session state.
//!
//! The decision is a pure function of the current [`AuthState`] so it can
//! be exercised without a browser; the component re-runs it on every
//! signal change, so a background verification failure unmounts protected
//! content without a reload.

#[cfg(test)]
#[path = "auth_route_test.rs"]
mod auth_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

/// What the guard should render for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: neutral waiting indicator, no content, no
    /// redirect.
    Waiting,
    /// Not authenticated: send to the login view.
    RedirectLogin,
    /// Authenticated but lacking the administrator capability.
    Denied,
    /// Render the protected content.
    Allow,
}

/// Evaluate the guard for a view that may additionally require the
/// administrator role.
pub fn evaluate(state: &AuthState, require_admin: bool) -> GuardOutcome {
    if state.is_loading() {
        GuardOutcome::Waiting
    } else if !state.is_authenticated() {
        GuardOutcome::RedirectLogin
    } else if require_admin && !state.is_admin() {
        GuardOutcome::Denied
    } else {
        GuardOutcome::Allow
    }
}

/// Wrapper for protected views. Re-evaluates on every navigation and on
/// every session-state change; the originally requested path rides along to
/// `/login` for the post-login return.
#[component]
pub fn RequireAuth(children: ChildrenFn, #[prop(optional)] admin: bool) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    move || match evaluate(&auth.get(), admin) {
        GuardOutcome::Waiting => view! {
            <div class="auth-route auth-route--loading">
                <span class="auth-route__spinner"></span>
                <p>"Verificando autenticación..."</p>
            </div>
        }
        .into_any(),
        GuardOutcome::RedirectLogin => {
            let from = location.pathname.get_untracked();
            view! { <Redirect path=format!("/login?from={from}")/> }.into_any()
        }
        GuardOutcome::Denied => view! {
            <div class="auth-route auth-route--denied">
                <p>"Acceso denegado. Se requieren permisos de administrador."</p>
            </div>
        }
        .into_any(),
        GuardOutcome::Allow => children(),
    }
}
