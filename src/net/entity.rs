//! Generic CRUD capability over catalog entities.
//!
//! Every entity page works through the same four operations against its
//! collection endpoint, differing only in URL, searchable text, and the
//! server-side active filter. `CatalogEntity` captures those differences so
//! the list/form machinery exists once.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http;
use super::types::{Categoria, Division, Profesor, Programa, Requisito, TipoRequisito};
use crate::config;

/// A catalog entity editable through the generic CRUD page.
pub trait CatalogEntity:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Placeholder for the search box.
    const SEARCH_PLACEHOLDER: &'static str;

    /// Collection endpoint this entity lives under.
    fn collection_url() -> String;

    /// Query parameter for the server-side "solo activos" filter, if the
    /// backend supports one. The services spell it three different ways.
    fn active_filter_param() -> Option<&'static str> {
        None
    }

    /// Backend-assigned id; `None` before creation.
    fn id(&self) -> Option<i64>;

    /// Concatenated text the client-side search matches against.
    fn search_haystack(&self) -> String;
}

/// Collection URL with the active filter applied, when the entity has one.
pub fn list_url<T: CatalogEntity>(active_only: Option<bool>) -> String {
    let base = T::collection_url();
    match (T::active_filter_param(), active_only) {
        (Some(param), Some(value)) => format!("{base}?{param}={value}"),
        _ => base,
    }
}

/// Item URL for update/delete.
pub fn item_url<T: CatalogEntity>(id: i64) -> String {
    format!("{}/{id}", T::collection_url())
}

/// Case-insensitive client-side search over the haystack of each item.
pub fn filter_by_term<T: CatalogEntity>(items: &[T], term: &str) -> Vec<T> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.search_haystack().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Fetch a collection from an explicit URL (pages with nested list
/// endpoints pass their own).
pub async fn fetch_list<T: CatalogEntity>(url: &str) -> Result<Vec<T>, ApiError> {
    http::get_json(url).await
}

/// Create or update depending on whether the entity already has an id.
/// `create_url` overrides the collection endpoint for entities whose create
/// call carries extra context (e.g. programs created under a division).
pub async fn save<T: CatalogEntity>(entity: &T, create_url: Option<&str>) -> Result<(), ApiError> {
    match entity.id() {
        Some(id) => http::put_unit(&item_url::<T>(id), entity).await,
        None => {
            let url = match create_url {
                Some(url) => url.to_owned(),
                None => T::collection_url(),
            };
            http::post_unit(&url, entity).await
        }
    }
}

/// Delete by id.
pub async fn remove<T: CatalogEntity>(id: i64) -> Result<(), ApiError> {
    http::delete(&item_url::<T>(id)).await
}

impl CatalogEntity for Division {
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por clave o nombre...";

    fn collection_url() -> String {
        config::division()
    }

    fn active_filter_param() -> Option<&'static str> {
        Some("soloActivos")
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.clave, self.nombre)
    }
}

impl CatalogEntity for Programa {
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por clave o nombre...";

    fn collection_url() -> String {
        config::programa_educativo()
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.clave, self.programa_educativo)
    }
}

impl CatalogEntity for Profesor {
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por nombre, apellidos o clave PE...";

    fn collection_url() -> String {
        config::profesor()
    }

    fn active_filter_param() -> Option<&'static str> {
        Some("soloactivo")
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_haystack(&self) -> String {
        format!("{} {} {}", self.nombre, self.apellidos, self.clavepe)
    }
}

impl CatalogEntity for Categoria {
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por nombre...";

    fn collection_url() -> String {
        config::categorias()
    }

    fn active_filter_param() -> Option<&'static str> {
        Some("soloActivo")
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.nombre, self.categoria_estatal, self.categoria_federal
        )
    }
}

impl CatalogEntity for TipoRequisito {
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por nombre...";

    fn collection_url() -> String {
        config::tipos_requisitos()
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_haystack(&self) -> String {
        self.nombre.clone()
    }
}

impl CatalogEntity for Requisito {
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por nombre...";

    fn collection_url() -> String {
        config::requisitos()
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_haystack(&self) -> String {
        self.nombre.clone()
    }
}
