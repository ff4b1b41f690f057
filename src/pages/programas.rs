//! Educational programs of a division.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::crud_page::{Column, CrudPage, RowLink};
use crate::config;
use crate::net::catalog;
use crate::net::types::Programa;

/// Program list scoped to the division in the route. Listing goes through
/// the division's nested endpoint; creation carries the division id as a
/// query parameter.
#[component]
pub fn ProgramasPage() -> impl IntoView {
    let params = use_params_map();
    let division_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let division = LocalResource::new(move || {
        let id = division_id.get();
        async move { catalog::fetch_division(id).await }
    });

    let title = Signal::derive(move || match division.get() {
        Some(Ok(division)) => format!("Programas educativos de {}", division.nombre),
        _ => "Programas educativos".to_owned(),
    });

    let list_url = Signal::derive(move || {
        format!("{}/{}/programas", config::division(), division_id.get())
    });
    let create_url = Signal::derive(move || {
        format!(
            "{}?idDivision={}",
            config::programa_educativo(),
            division_id.get()
        )
    });

    let columns = vec![
        Column {
            header: "ID",
            cell: |p: &Programa| p.id.map(|id| id.to_string()).unwrap_or_default(),
        },
        Column {
            header: "Clave",
            cell: |p: &Programa| p.clave.clone(),
        },
        Column {
            header: "Programa educativo",
            cell: |p: &Programa| p.programa_educativo.clone(),
        },
        Column {
            header: "Activo",
            cell: |p: &Programa| if p.activo { "Sí" } else { "No" }.to_owned(),
        },
    ];

    let links = vec![RowLink {
        label: "Profesores",
        href: |p: &Programa| format!("/programas/{}/profesores", p.id.unwrap_or_default()),
    }];

    let form = |initial: Option<Programa>, on_submit: Callback<Programa>, on_cancel: Callback<()>| {
        view! { <ProgramaForm initial=initial on_submit=on_submit on_cancel=on_cancel/> }
            .into_any()
    };

    view! {
        <CrudPage
            title=title
            columns=columns
            links=links
            form=form
            list_url=list_url
            create_url=create_url
        />
    }
}

/// Modal form for creating or editing a program.
#[component]
fn ProgramaForm(
    initial: Option<Programa>,
    on_submit: Callback<Programa>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let base = initial.unwrap_or_default();
    let id = base.id;
    let clave = RwSignal::new(base.clave);
    let nombre = RwSignal::new(base.programa_educativo);
    let activo = RwSignal::new(base.activo);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Programa {
            id,
            clave: clave.get_untracked(),
            programa_educativo: nombre.get_untracked(),
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
                "Programa educativo"
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
