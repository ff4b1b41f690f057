//! Professors assigned to an educational program.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::assign_picker::AssignPicker;
use crate::net::catalog;
use crate::net::error::ApiError;
use crate::net::types::{Profesor, Programa};
use crate::state::ui::{UiState, notify_error, notify_success};

/// Assigned-professor list for the program in the route, with a picker over
/// every professor not yet assigned.
#[component]
pub fn ProfesoresProgramaPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let programa_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let data = LocalResource::new(move || {
        let id = programa_id.get();
        async move {
            let programa = catalog::fetch_programa(id).await?;
            let asignados = catalog::fetch_programa_profesores(id).await?;
            let disponibles = catalog::fetch_profesores(false).await?;
            Ok::<(Programa, Vec<Profesor>, Vec<Profesor>), ApiError>((
                programa,
                asignados,
                disponibles,
            ))
        }
    });

    let seleccion = RwSignal::new(String::new());

    let opciones = Signal::derive(move || match data.get() {
        Some(Ok((_, asignados, disponibles))) => disponibles
            .into_iter()
            .filter(|profesor| !asignados.iter().any(|asignado| asignado.id == profesor.id))
            .map(|profesor| (profesor.id.unwrap_or_default(), profesor.nombre_completo()))
            .collect(),
        _ => Vec::new(),
    });

    let asignar = {
        let data = data.clone();
        Callback::new(move |()| {
            let elegido = seleccion.get_untracked();
            if elegido.is_empty() {
                notify_error(ui, "Debes seleccionar un profesor");
                return;
            }
            let Some(Ok((_, _, disponibles))) = data.get() else {
                return;
            };
            let Some(profesor) = disponibles
                .into_iter()
                .find(|p| p.id.map(|id| id.to_string()).as_deref() == Some(elegido.as_str()))
            else {
                notify_error(ui, "Profesor no encontrado en la lista de disponibles.");
                return;
            };

            let id = programa_id.get_untracked();
            let data = data.clone();
            leptos::task::spawn_local(async move {
                match catalog::asignar_profesor_programa(id, &profesor).await {
                    Ok(()) => {
                        notify_success(ui, "Profesor asignado.");
                        seleccion.set(String::new());
                        data.refetch();
                    }
                    Err(err) => notify_error(ui, err.to_string()),
                }
            });
        })
    };

    view! {
        <div class="assoc-page">
            <Suspense fallback=move || view! { <p class="assoc-page__loading">"Cargando..."</p> }>
                {move || {
                    data.get().map(|result| match result {
                        Ok((programa, asignados, _)) => {
                            view! {
                                <header class="assoc-page__header">
                                    <h1>{format!("Profesores de {}", programa.programa_educativo)}</h1>
                                    <a class="btn btn--small" href="/divisiones">"Volver a divisiones"</a>
                                </header>

                                <AssignPicker
                                    options=opciones
                                    selection=seleccion
                                    on_assign=asignar
                                    label="Asignar profesor"
                                />

                                <table class="assoc-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Nombre"</th>
                                            <th>"Apellidos"</th>
                                            <th>"Clave PE"</th>
                                            <th>"Género"</th>
                                            <th>"Estado"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {asignados
                                            .into_iter()
                                            .map(|profesor| {
                                                view! {
                                                    <tr>
                                                        <td>{profesor.nombre.clone()}</td>
                                                        <td>{profesor.apellidos.clone()}</td>
                                                        <td>{profesor.clavepe.clone()}</td>
                                                        <td>
                                                            {if profesor.genero == "M" {
                                                                "Masculino"
                                                            } else {
                                                                "Femenino"
                                                            }}
                                                        </td>
                                                        <td>
                                                            {if profesor.activo { "Activo" } else { "Inactivo" }}
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! { <p class="assoc-page__error">{err.to_string()}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
