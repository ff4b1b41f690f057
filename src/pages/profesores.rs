//! Professor management page.

use leptos::prelude::*;

use crate::components::crud_page::{Column, CrudPage};
use crate::net::types::Profesor;

/// Professor list. The service defaults to active records, matching the
/// pre-checked filter.
#[component]
pub fn ProfesoresPage() -> impl IntoView {
    let columns = vec![
        Column {
            header: "ID",
            cell: |p: &Profesor| p.id.map(|id| id.to_string()).unwrap_or_default(),
        },
        Column {
            header: "Nombre",
            cell: |p: &Profesor| p.nombre.clone(),
        },
        Column {
            header: "Apellidos",
            cell: |p: &Profesor| p.apellidos.clone(),
        },
        Column {
            header: "Clave PE",
            cell: |p: &Profesor| p.clavepe.clone(),
        },
        Column {
            header: "Género",
            cell: |p: &Profesor| if p.genero == "M" { "Masculino" } else { "Femenino" }.to_owned(),
        },
        Column {
            header: "Estado",
            cell: |p: &Profesor| if p.activo { "Activo" } else { "Inactivo" }.to_owned(),
        },
    ];

    let form = |initial: Option<Profesor>, on_submit: Callback<Profesor>, on_cancel: Callback<()>| {
        view! { <ProfesorForm initial=initial on_submit=on_submit on_cancel=on_cancel/> }
            .into_any()
    };

    view! {
        <CrudPage
            title=Signal::derive(|| "Gestión de Profesores".to_owned())
            columns=columns
            form=form
            show_active_filter=true
            active_only_default=true
        />
    }
}

/// Modal form for creating or editing a professor.
#[component]
fn ProfesorForm(
    initial: Option<Profesor>,
    on_submit: Callback<Profesor>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let base = initial.unwrap_or_default();
    let id = base.id;
    let nombre = RwSignal::new(base.nombre);
    let apellidos = RwSignal::new(base.apellidos);
    let clavepe = RwSignal::new(base.clavepe);
    let genero = RwSignal::new(base.genero);
    let activo = RwSignal::new(base.activo);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Profesor {
            id,
            nombre: nombre.get_untracked(),
            apellidos: apellidos.get_untracked(),
            clavepe: clavepe.get_untracked(),
            genero: genero.get_untracked(),
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
                "Apellidos"
                <input
                    type="text"
                    required=true
                    prop:value=move || apellidos.get()
                    on:input=move |ev| apellidos.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Clave PE"
                <input
                    type="text"
                    required=true
                    prop:value=move || clavepe.get()
                    on:input=move |ev| clavepe.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Género"
                <select
                    prop:value=move || genero.get()
                    on:change=move |ev| genero.set(event_target_value(&ev))
                >
                    <option value="M">"Masculino"</option>
                    <option value="F">"Femenino"</option>
                </select>
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
