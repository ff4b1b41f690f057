//! Requirement types linked to a category.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::assign_picker::AssignPicker;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::catalog;
use crate::net::error::ApiError;
use crate::net::types::{Categoria, CategoriaTipoRequisito, TipoRequisito};
use crate::state::ui::{UiState, notify_error, notify_success};

/// Link list for the category in the route, a picker over unlinked
/// requirement types, and an inline modal for creating a brand-new type
/// (which is then auto-selected in the picker).
#[component]
pub fn TiposRequisitosCategoriaPage() -> impl IntoView {
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
            // The link endpoint serves every category; narrow to ours.
            let vinculos = catalog::fetch_categoria_tipo_requisitos()
                .await?
                .into_iter()
                .filter(|vinculo| vinculo.categoria.id == id)
                .collect::<Vec<_>>();
            let tipos = catalog::fetch_tipos_requisitos().await?;
            Ok::<(Categoria, Vec<CategoriaTipoRequisito>, Vec<TipoRequisito>), ApiError>((
                categoria, vinculos, tipos,
            ))
        }
    });

    let seleccion = RwSignal::new(String::new());
    let pendiente = RwSignal::new(None::<CategoriaTipoRequisito>);
    let show_create = RwSignal::new(false);
    let nuevo_nombre = RwSignal::new(String::new());

    let opciones = Signal::derive(move || match data.get() {
        Some(Ok((_, vinculos, tipos))) => tipos
            .into_iter()
            .filter(|tipo| {
                !vinculos
                    .iter()
                    .any(|vinculo| vinculo.tipo_requisito.id == tipo.id)
            })
            .map(|tipo| (tipo.id.unwrap_or_default(), tipo.nombre))
            .collect(),
        _ => Vec::new(),
    });

    let vincular = {
        let data = data.clone();
        Callback::new(move |()| {
            let elegido = seleccion.get_untracked();
            let Ok(tipo_id) = elegido.parse::<i64>() else {
                notify_error(ui, "Debes seleccionar un tipo de requisito");
                return;
            };
            let id = categoria_id.get_untracked();
            let data = data.clone();
            leptos::task::spawn_local(async move {
                match catalog::vincular_tipo_requisito(id, tipo_id).await {
                    Ok(()) => {
                        notify_success(ui, "Tipo de requisito asignado.");
                        seleccion.set(String::new());
                        data.refetch();
                    }
                    Err(err) => notify_error(ui, err.to_string()),
                }
            });
        })
    };

    let desvincular = {
        let data = data.clone();
        Callback::new(move |()| {
            let Some(vinculo) = pendiente.get_untracked() else {
                return;
            };
            pendiente.set(None);
            let Some(tipo_id) = vinculo.tipo_requisito.id else {
                return;
            };
            let categoria_id = vinculo.categoria.id;
            let data = data.clone();
            leptos::task::spawn_local(async move {
                match catalog::desvincular_tipo_requisito(categoria_id, tipo_id).await {
                    Ok(()) => {
                        notify_success(ui, "Tipo de requisito desasignado.");
                        data.refetch();
                    }
                    Err(err) => notify_error(ui, err.to_string()),
                }
            });
        })
    };

    let cancelar = Callback::new(move |()| pendiente.set(None));

    let crear_tipo = {
        let data = data.clone();
        Callback::new(move |()| {
            let nombre = nuevo_nombre.get_untracked();
            if nombre.trim().is_empty() {
                notify_error(ui, "Debes ingresar un nombre para el tipo de requisito");
                return;
            }
            let data = data.clone();
            leptos::task::spawn_local(async move {
                match catalog::crear_tipo_requisito(nombre.trim()).await {
                    Ok(tipo) => {
                        notify_success(ui, "Tipo de requisito creado.");
                        // Preselect the new type so one more click links it.
                        if let Some(id) = tipo.id {
                            seleccion.set(id.to_string());
                        }
                        show_create.set(false);
                        nuevo_nombre.set(String::new());
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
                        Ok((categoria, vinculos, _)) => {
                            view! {
                                <header class="assoc-page__header">
                                    <h1>
                                        {format!("Tipos de requisito de la categoría {}", categoria.nombre)}
                                    </h1>
                                    <a class="btn btn--small" href="/categorias">"Volver a categorías"</a>
                                </header>

                                <div class="assoc-page__toolbar">
                                    <AssignPicker
                                        options=opciones
                                        selection=seleccion
                                        on_assign=vincular
                                        label="Asignar tipo"
                                    />
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            nuevo_nombre.set(String::new());
                                            show_create.set(true);
                                        }
                                    >
                                        "Nuevo tipo"
                                    </button>
                                </div>

                                <table class="assoc-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Tipo de requisito"</th>
                                            <th>"Acciones"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {vinculos
                                            .into_iter()
                                            .map(|vinculo| {
                                                let requisitos_href = format!(
                                                    "/categorias/{}/requisitos/{}",
                                                    vinculo.categoria.id,
                                                    vinculo.tipo_requisito.id.unwrap_or_default(),
                                                );
                                                let target = vinculo.clone();
                                                view! {
                                                    <tr>
                                                        <td>{vinculo.tipo_requisito.nombre.clone()}</td>
                                                        <td class="assoc-page__actions">
                                                            <a class="btn btn--small" href=requisitos_href>
                                                                "Requisitos"
                                                            </a>
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

            <Show when=move || show_create.get()>
                <div class="dialog-backdrop" on:click=move |_| show_create.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Nuevo tipo de requisito"</h2>
                        <label class="entity-form__label">
                            "Nombre"
                            <input
                                type="text"
                                prop:value=move || nuevo_nombre.get()
                                on:input=move |ev| nuevo_nombre.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        crear_tipo.run(());
                                    }
                                }
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_create.set(false)>
                                "Cancelar"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| crear_tipo.run(())>
                                "Crear"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || pendiente.with(Option::is_some)>
                <ConfirmDialog
                    message="¿Desasignar este tipo de requisito de la categoría?".to_owned()
                    on_confirm=desvincular
                    on_cancel=cancelar
                />
            </Show>
        </div>
    }
}
