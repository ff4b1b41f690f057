//! Select-and-assign row shared by the association screens.

use leptos::prelude::*;

/// Dropdown of assignable options (id + label) with an action button.
/// `selection` holds the chosen id as a string, empty when nothing is
/// selected; the options list shrinks as assignments land, so the parent
/// passes it as a derived signal.
#[component]
pub fn AssignPicker(
    options: Signal<Vec<(i64, String)>>,
    selection: RwSignal<String>,
    on_assign: Callback<()>,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="assign-picker">
            <select
                class="assign-picker__select"
                prop:value=move || selection.get()
                on:change=move |ev| selection.set(event_target_value(&ev))
            >
                <option value="">"Selecciona..."</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, label)| {
                            view! { <option value=id.to_string()>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button class="btn btn--primary" on:click=move |_| on_assign.run(())>
                {label}
            </button>
        </div>
    }
}
