//! Professors assigned to a category.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::assign_picker::AssignPicker;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::catalog;
use crate::net::error::ApiError;
use crate::net::types::{Categoria, Profesor, ProfesorCategoria};
use crate::state::ui::{UiState, notify_error, notify_success};

/// Assignment list for the category in the route. Rows are assignment
/// relations; professor names resolve through the full professor list,
/// which also feeds the picker.
#[component]
pub fn ProfesoresCategoriaPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let categoria_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let data = LocalResource::new(move || {
        let id = categoria_id.get();
        async move {
            let categoria = catalog::fetch_categoria(id).await?;
            let relaciones = catalog::fetch_categoria_profesores(id).await?;
            let profesores = catalog::fetch_profesores(false).await?;
            Ok::<(Categoria, Vec<ProfesorCategoria>, Vec<Profesor>), ApiError>((
                categoria, relaciones, profesores,
            ))
        }
    });

    let seleccion = RwSignal::new(String::new());
    let pendiente = RwSignal::new(None::<ProfesorCategoria>);

    let opciones = Signal::derive(move || match data.get() {
        Some(Ok((_, relaciones, profesores))) => profesores
            .into_iter()
            .filter(|profesor| {
                !relaciones
                    .iter()
                    .any(|relacion| Some(relacion.profesor_id) == profesor.id)
            })
            .map(|profesor| (profesor.id.unwrap_or_default(), profesor.nombre_completo()))
            .collect(),
        _ => Vec::new(),
    });

    let asignar = {
        let data = data.clone();
        Callback::new(move |()| {
            let elegido = seleccion.get_untracked();
            let Ok(profesor_id) = elegido.parse::<i64>() else {
                notify_error(ui, "Debes seleccionar un profesor");
                return;
            };
            let id = categoria_id.get_untracked();
            let data = data.clone();
            leptos::task::spawn_local(async move {
                match catalog::asignar_profesor_categoria(profesor_id, id).await {
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

    let desasignar = {
        let data = data.clone();
        Callback::new(move |()| {
            let Some(relacion) = pendiente.get_untracked() else {
                return;
            };
            pendiente.set(None);
            let data = data.clone();
            leptos::task::spawn_local(async move {
                match catalog::desasignar_profesor_categoria(relacion.id).await {
                    Ok(()) => {
                        notify_success(ui, "Profesor desasignado.");
                        data.refetch();
                    }
                    Err(err) => notify_error(ui, err.to_string()),
                }
            });
        })
    };

    let cancelar = Callback::new(move |()| pendiente.set(None));

    view! {
        <div class="assoc-page">
            <Suspense fallback=move || view! { <p class="assoc-page__loading">"Cargando..."</p> }>
                {move || {
                    data.get().map(|result| match result {
                        Ok((categoria, relaciones, profesores)) => {
                            view! {
                                <header class="assoc-page__header">
                                    <h1>{format!("Profesores de la categoría {}", categoria.nombre)}</h1>
                                    <a class="btn btn--small" href="/categorias">"Volver a categorías"</a>
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
                                            <th>"Estado"</th>
                                            <th>"Acciones"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {relaciones
                                            .into_iter()
                                            .map(|relacion| {
                                                let profesor = profesores
                                                    .iter()
                                                    .find(|p| p.id == Some(relacion.profesor_id));
                                                let nombre = profesor
                                                    .map(|p| p.nombre.clone())
                                                    .unwrap_or_else(|| "Desconocido".to_owned());
                                                let apellidos = profesor
                                                    .map(|p| p.apellidos.clone())
                                                    .unwrap_or_default();
                                                let target = relacion.clone();
                                                let badge_class = if relacion.active {
                                                    "badge badge--active"
                                                } else {
                                                    "badge badge--inactive"
                                                };
                                                view! {
                                                    <tr>
                                                        <td>{nombre}</td>
                                                        <td>{apellidos}</td>
                                                        <td>
                                                            <span class=badge_class>
                                                                {if relacion.active { "Activo" } else { "Inactivo" }}
                                                            </span>
                                                        </td>
                                                        <td>
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| pendiente.set(Some(target.clone()))
                                                            >
                                                                "Desasignar"
                                                            </button>
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

            <Show when=move || pendiente.with(Option::is_some)>
                <ConfirmDialog
                    message="¿Desasignar este profesor de la categoría?".to_owned()
                    on_confirm=desasignar
                    on_cancel=cancelar
                />
            </Show>
        </div>
    }
}
