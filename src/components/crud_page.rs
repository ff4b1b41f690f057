//! Generic list+form page over a catalog entity.
//!
//! DESIGN
//! ======
//! Every entity screen is the same machine: fetch a collection, search it
//! client-side, optionally filter to active records server-side, edit
//! through a modal form, delete behind a confirmation. `CrudPage` owns that
//! machine once, parameterized by a column spec, per-row navigation links,
//! and a form renderer; the entity pages only declare what differs.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::entity::{self, CatalogEntity};
use crate::net::error::ApiError;
use crate::state::ui::{UiState, notify_error, notify_success};

/// One table column: header plus cell text for a row.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

/// Per-row navigation link (e.g. a division's programs).
pub struct RowLink<T> {
    pub label: &'static str,
    pub href: fn(&T) -> String,
}

/// Generic CRUD page. `list_url`/`create_url` override the entity's
/// collection endpoint for screens whose list or create call is nested
/// under a parent (e.g. programs of a division); `row_filter` narrows
/// collections the backend only serves whole.
#[component]
pub fn CrudPage<T, F>(
    title: Signal<String>,
    columns: Vec<Column<T>>,
    form: F,
    #[prop(optional)] links: Vec<RowLink<T>>,
    #[prop(optional)] list_url: Option<Signal<String>>,
    #[prop(optional)] create_url: Option<Signal<String>>,
    #[prop(optional)] show_active_filter: bool,
    #[prop(optional)] active_only_default: bool,
    #[prop(optional)] row_filter: Option<Callback<T, bool>>,
) -> impl IntoView
where
    T: CatalogEntity,
    F: Fn(Option<T>, Callback<T>, Callback<()>) -> AnyView + Send + Sync + 'static,
{
    let ui = expect_context::<RwSignal<UiState>>();

    let active_only = RwSignal::new(active_only_default);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<T>);
    let show_form = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<T>);

    let columns = StoredValue::new(columns);
    let links = StoredValue::new(links);
    let form = StoredValue::new(form);

    let items = LocalResource::new(move || {
        let url = match list_url {
            Some(url) => url.get(),
            None => entity::list_url::<T>(show_active_filter.then(|| active_only.get())),
        };
        async move { entity::fetch_list::<T>(&url).await }
    });

    let open_create = move |_| {
        selected.set(None);
        form_error.set(None);
        show_form.set(true);
    };

    let close_form = Callback::new(move |()| {
        show_form.set(false);
        selected.set(None);
        form_error.set(None);
    });

    let submit = {
        let items = items.clone();
        Callback::new(move |record: T| {
            let create = create_url.map(|url| url.get_untracked());
            let items = items.clone();
            leptos::task::spawn_local(async move {
                match entity::save(&record, create.as_deref()).await {
                    Ok(()) => {
                        notify_success(ui, "Cambios guardados.");
                        show_form.set(false);
                        selected.set(None);
                        form_error.set(None);
                        items.refetch();
                    }
                    Err(ApiError::Validation(message)) => form_error.set(Some(message)),
                    Err(err) => notify_error(ui, err.to_string()),
                }
            });
        })
    };

    let request_delete = Callback::new(move |record: T| pending_delete.set(Some(record)));

    let confirm_delete = {
        let items = items.clone();
        Callback::new(move |()| {
            let Some(record) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let Some(id) = record.id() else {
                return;
            };
            let items = items.clone();
            leptos::task::spawn_local(async move {
                match entity::remove::<T>(id).await {
                    Ok(()) => {
                        notify_success(ui, "Registro eliminado.");
                        items.refetch();
                    }
                    Err(err) => notify_error(ui, err.to_string()),
                }
            });
        })
    };

    let cancel_delete = Callback::new(move |()| pending_delete.set(None));

    view! {
        <div class="crud-page">
            <header class="crud-page__header">
                <h1>{move || title.get()}</h1>
                <button class="btn btn--primary crud-page__add" title="Añadir" on:click=open_create>
                    "+"
                </button>
            </header>

            <div class="crud-page__filters">
                <input
                    class="crud-page__search"
                    type="search"
                    placeholder=T::SEARCH_PLACEHOLDER
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Show when=move || show_active_filter>
                    <label class="crud-page__active-filter">
                        <input
                            type="checkbox"
                            prop:checked=move || active_only.get()
                            on:change=move |ev| active_only.set(event_target_checked(&ev))
                        />
                        "Mostrar solo activos"
                    </label>
                </Show>
            </div>

            <Suspense fallback=move || view! { <p class="crud-page__loading">"Cargando..."</p> }>
                {move || {
                    items.get().map(|result| match result {
                        Ok(list) => {
                            let mut shown = entity::filter_by_term(&list, &search.get());
                            if let Some(filter) = row_filter {
                                shown.retain(|item| filter.run(item.clone()));
                            }
                            view! {
                                <table class="crud-page__table">
                                    <thead>
                                        <tr>
                                            {columns.with_value(|cols| {
                                                cols.iter()
                                                    .map(|col| view! { <th>{col.header}</th> })
                                                    .collect::<Vec<_>>()
                                            })}
                                            <th>"Acciones"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {shown
                                            .into_iter()
                                            .map(|item| {
                                                let edit_item = item.clone();
                                                let delete_item = item.clone();
                                                view! {
                                                    <tr>
                                                        {columns.with_value(|cols| {
                                                            cols.iter()
                                                                .map(|col| view! { <td>{(col.cell)(&item)}</td> })
                                                                .collect::<Vec<_>>()
                                                        })}
                                                        <td class="crud-page__actions">
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| {
                                                                    selected.set(Some(edit_item.clone()));
                                                                    form_error.set(None);
                                                                    show_form.set(true);
                                                                }
                                                            >
                                                                "Editar"
                                                            </button>
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| request_delete.run(delete_item.clone())
                                                            >
                                                                "Eliminar"
                                                            </button>
                                                            {links.with_value(|row_links| {
                                                                row_links
                                                                    .iter()
                                                                    .map(|link| {
                                                                        let href = (link.href)(&item);
                                                                        view! {
                                                                            <a class="btn btn--small" href=href>
                                                                                {link.label}
                                                                            </a>
                                                                        }
                                                                    })
                                                                    .collect::<Vec<_>>()
                                                            })}
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
                            view! { <p class="crud-page__error">{err.to_string()}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_form.get()>
                <div class="dialog-backdrop" on:click=move |_| close_form.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || {
                                if selected.with(Option::is_some) { "Editar registro" } else { "Nuevo registro" }
                            }}
                        </h2>
                        {move || {
                            form_error
                                .get()
                                .map(|message| view! { <p class="dialog__error">{message}</p> })
                        }}
                        {move || form.with_value(|form| form(selected.get(), submit, close_form))}
                    </div>
                </div>
            </Show>

            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    message="¿Eliminar este registro? Esta acción no se puede deshacer.".to_owned()
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </Show>
        </div>
    }
}
