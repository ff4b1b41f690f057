//! Professor-category management page.

use leptos::prelude::*;

use crate::components::crud_page::{Column, CrudPage, RowLink};
use crate::net::types::Categoria;

/// Category list with per-row links to the category's professors and
/// requirement types.
#[component]
pub fn CategoriasPage() -> impl IntoView {
    let columns = vec![
        Column {
            header: "ID",
            cell: |c: &Categoria| c.id.map(|id| id.to_string()).unwrap_or_default(),
        },
        Column {
            header: "Nombre",
            cell: |c: &Categoria| c.nombre.clone(),
        },
        Column {
            header: "Categoría estatal",
            cell: |c: &Categoria| c.categoria_estatal.clone(),
        },
        Column {
            header: "Categoría federal",
            cell: |c: &Categoria| c.categoria_federal.clone(),
        },
        Column {
            header: "Activo",
            cell: |c: &Categoria| if c.activo { "Sí" } else { "No" }.to_owned(),
        },
    ];

    let links = vec![
        RowLink {
            label: "Profesores",
            href: |c: &Categoria| format!("/categorias/{}/profesores", c.id.unwrap_or_default()),
        },
        RowLink {
            label: "Requisitos",
            href: |c: &Categoria| format!("/categorias/{}/requisitos", c.id.unwrap_or_default()),
        },
    ];

    let form = |initial: Option<Categoria>,
                on_submit: Callback<Categoria>,
                on_cancel: Callback<()>| {
        view! { <CategoriaForm initial=initial on_submit=on_submit on_cancel=on_cancel/> }
            .into_any()
    };

    view! {
        <CrudPage
            title=Signal::derive(|| "Gestión de Categorías".to_owned())
            columns=columns
            links=links
            form=form
            show_active_filter=true
        />
    }
}

/// Modal form for creating or editing a category.
#[component]
fn CategoriaForm(
    initial: Option<Categoria>,
    on_submit: Callback<Categoria>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let base = initial.unwrap_or_default();
    let id = base.id;
    let nombre = RwSignal::new(base.nombre);
    let estatal = RwSignal::new(base.categoria_estatal);
    let federal = RwSignal::new(base.categoria_federal);
    let activo = RwSignal::new(base.activo);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Categoria {
            id,
            nombre: nombre.get_untracked(),
            categoria_estatal: estatal.get_untracked(),
            categoria_federal: federal.get_untracked(),
            activo: activo.get_untracked(),
        });
    };

    view! {
        <form class="entity-form" on:submit=submit>
            <label class="entity-form__label">
                "Nombre"
                <input
                    type="text"
                    required=true
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Categoría estatal"
                <input
                    type="text"
                    prop:value=move || estatal.get()
                    on:input=move |ev| estatal.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Categoría federal"
                <input
                    type="text"
                    prop:value=move || federal.get()
                    on:input=move |ev| federal.set(event_target_value(&ev))
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
