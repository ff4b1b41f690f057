//! Modal confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Backdrop + dialog asking the user to confirm. Clicking the backdrop or
/// "Cancelar" cancels; "Confirmar" runs the action.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirmar"</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Confirmar"
                    </button>
                </div>
            </div>
        </div>
    }
}
