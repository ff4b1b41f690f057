//! Top navigation bar, shown only while authenticated.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Section links, the session's email, dark-mode toggle, and logout.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = move || {
        auth.get()
            .user()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth::logout(auth);
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    let on_toggle_dark = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    let dark_label = move || if ui.get().dark_mode { "☀" } else { "☾" };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Catálogo Académico"</span>
            <a class="navbar__link" href="/divisiones">"Divisiones"</a>
            <a class="navbar__link" href="/profesores">"Profesores"</a>
            <a class="navbar__link" href="/categorias">"Categorías"</a>
            <span class="navbar__spacer"></span>
            <button class="navbar__dark-toggle" title="Cambiar tema" on:click=on_toggle_dark>
                {dark_label}
            </button>
            <span class="navbar__user">{email}</span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </nav>
    }
}
