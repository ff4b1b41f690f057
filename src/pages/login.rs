//! Login page with email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Credentials;
use crate::state::auth::{self, AuthState};
use crate::state::ui::{UiState, notify_error, notify_success};

/// Login form. On success navigates to the originally requested page (the
/// guard passes it along as `?from=`), defaulting to the division list.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitting.set(true);

        let destination = query
            .get_untracked()
            .get("from")
            .unwrap_or_else(|| "/divisiones".to_owned());
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match auth::login(auth_state, credentials).await {
                Ok(()) => {
                    notify_success(ui, "Inicio de sesión exitoso");
                    navigate(&destination, NavigateOptions::default());
                }
                Err(err) => notify_error(ui, err.to_string()),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Iniciar sesión"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <label class="login-page__label">
                    "Email"
                    <input
                        type="email"
                        required=true
                        autofocus=true
                        placeholder="tu@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Contraseña"
                    <input
                        type="password"
                        required=true
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary login-page__submit"
                    type="submit"
                    prop:disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() { "Iniciando sesión..." } else { "Iniciar sesión" }
                    }}
                </button>
            </form>
        </div>
    }
}
