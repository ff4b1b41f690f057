//! Requisites of one requirement type within a category.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::crud_page::{Column, CrudPage};
use crate::net::catalog;
use crate::net::types::{Requisito, TipoRequisito};

/// Requisite list narrowed to the requirement type in the route. The
/// service only serves the whole collection, so the narrowing happens
/// client-side through the row filter.
#[component]
pub fn RequisitosPage() -> impl IntoView {
    let params = use_params_map();
    let categoria_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or_default()
    });
    let tipo_id = Memo::new(move |_| {
        params
            .read()
            .get("tipoRequisitoId")
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let categoria = LocalResource::new(move || {
        let id = categoria_id.get();
        async move { catalog::fetch_categoria(id).await }
    });
    let tipo = LocalResource::new(move || {
        let id = tipo_id.get();
        async move { catalog::fetch_tipo_requisito(id).await }
    });

    let title = Signal::derive(move || {
        let tipo_nombre = match tipo.get() {
            Some(Ok(tipo)) => tipo.nombre,
            _ => return "Requisitos".to_owned(),
        };
        match categoria.get() {
            Some(Ok(categoria)) => {
                format!("Requisitos de {tipo_nombre} ({})", categoria.nombre)
            }
            _ => format!("Requisitos de {tipo_nombre}"),
        }
    });

    let row_filter = Callback::new(move |requisito: Requisito| {
        requisito.tipo_requisito.as_ref().and_then(|t| t.id) == Some(tipo_id.get())
    });

    let columns = vec![
        Column {
            header: "ID",
            cell: |r: &Requisito| r.id.map(|id| id.to_string()).unwrap_or_default(),
        },
        Column {
            header: "Nombre",
            cell: |r: &Requisito| r.nombre.clone(),
        },
        Column {
            header: "Tipo",
            cell: |r: &Requisito| {
                r.tipo_requisito
                    .as_ref()
                    .map(|t| t.nombre.clone())
                    .unwrap_or_else(|| "Sin tipo".to_owned())
            },
        },
    ];

    let form = move |initial: Option<Requisito>,
                     on_submit: Callback<Requisito>,
                     on_cancel: Callback<()>| {
        view! {
            <RequisitoForm
                initial=initial
                tipo_id=tipo_id.get_untracked()
                on_submit=on_submit
                on_cancel=on_cancel
            />
        }
        .into_any()
    };

    view! {
        <CrudPage
            title=title
            columns=columns
            form=form
            row_filter=row_filter
        />
    }
}

/// Modal form for a requisite. The requirement type is fixed by the route,
/// so the form only edits the name.
#[component]
fn RequisitoForm(
    initial: Option<Requisito>,
    tipo_id: i64,
    on_submit: Callback<Requisito>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = initial.as_ref().and_then(|r| r.id);
    let nombre = RwSignal::new(initial.as_ref().map(|r| r.nombre.clone()).unwrap_or_default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Requisito {
            id,
            nombre: nombre.get_untracked(),
            tipo_requisito: Some(TipoRequisito {
                id: Some(tipo_id),
                nombre: String::new(),
            }),
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
