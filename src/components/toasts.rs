//! Toast stack rendering the transient notifications queued in `UiState`.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Fixed-position stack of toasts with manual dismiss; entries also
/// auto-expire via the queue helpers in `state::ui`.
#[component]
pub fn Toasts() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toasts">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| ui.update(|state| state.dismiss_toast(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
