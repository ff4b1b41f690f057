//! Division management page.

use leptos::prelude::*;

use crate::components::crud_page::{Column, CrudPage, RowLink};
use crate::net::types::Division;

/// Division list with search, active filter, modal form, and a per-row link
/// to the division's educational programs.
#[component]
pub fn DivisionesPage() -> impl IntoView {
    let columns = vec![
        Column {
            header: "ID",
            cell: |d: &Division| d.id.map(|id| id.to_string()).unwrap_or_default(),
        },
        Column {
            header: "Clave",
            cell: |d: &Division| d.clave.clone(),
        },
        Column {
            header: "Nombre",
            cell: |d: &Division| d.nombre.clone(),
        },
        Column {
            header: "Activo",
            cell: |d: &Division| if d.activo { "Sí" } else { "No" }.to_owned(),
        },
    ];

    let links = vec![RowLink {
        label: "Programas",
        href: |d: &Division| format!("/programas/{}", d.id.unwrap_or_default()),
    }];

    let form = |initial: Option<Division>, on_submit: Callback<Division>, on_cancel: Callback<()>| {
        view! { <DivisionForm initial=initial on_submit=on_submit on_cancel=on_cancel/> }.into_any()
    };

    view! {
        <CrudPage
            title=Signal::derive(|| "Gestión de Divisiones".to_owned())
            columns=columns
            links=links
            form=form
            show_active_filter=true
        />
    }
}

/// Modal form for creating or editing a division.
#[component]
fn DivisionForm(
    initial: Option<Division>,
    on_submit: Callback<Division>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = initial.as_ref().and_then(|d| d.id);
    let clave = RwSignal::new(initial.as_ref().map(|d| d.clave.clone()).unwrap_or_default());
    let nombre = RwSignal::new(initial.as_ref().map(|d| d.nombre.clone()).unwrap_or_default());
    let activo = RwSignal::new(initial.as_ref().is_some_and(|d| d.activo));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Division {
            id,
            clave: clave.get_untracked(),
            nombre: nombre.get_untracked(),
            activo: activo.get_untracked(),
        });
    };

    view! {
        <form class="entity-form" on:submit=submit>
            <label class="entity-form__label">
                "Clave"
                <input
                    type="text"
                    required=true
                    prop:value=move || clave.get()
                    on:input=move |ev| clave.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Nombre"
                <input
                    type="text"
                    required=true
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label entity-form__label--inline">
                "Activo"
                <input
                    type="checkbox"
                    prop:checked=move || activo.get()
                    on:change=move |ev| activo.set(event_target_checked(&ev))
                />
            </label>
            <div class="dialog__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
                <button class="btn btn--primary" type="submit">
                    "Guardar"
                </button>
            </div>
        </form>
    }
}
