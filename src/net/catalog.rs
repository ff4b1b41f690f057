//! Catalog lookups and many-to-many assignment calls.
//!
//! Plain CRUD goes through the generic layer in [`super::entity`]; the
//! functions here cover the nested lookups and the assignment endpoints the
//! association screens use.

use super::error::ApiError;
use super::http;
use super::types::{
    Categoria, CategoriaTipoRequisito, Division, EntityRef, Profesor, ProfesorCategoria, Programa,
    Requisito, TipoRequisito,
};
use crate::config;

/// Fetch one division.
pub async fn fetch_division(id: i64) -> Result<Division, ApiError> {
    http::get_json(&format!("{}/{id}", config::division())).await
}

/// Fetch the programs of a division.
pub async fn fetch_division_programas(division_id: i64) -> Result<Vec<Programa>, ApiError> {
    http::get_json(&format!("{}/{division_id}/programas", config::division())).await
}

/// Fetch one educational program.
pub async fn fetch_programa(id: i64) -> Result<Programa, ApiError> {
    http::get_json(&format!("{}/{id}", config::programa_educativo())).await
}

/// Fetch the professors assigned to a program.
pub async fn fetch_programa_profesores(programa_id: i64) -> Result<Vec<Profesor>, ApiError> {
    http::get_json(&format!(
        "{}/{programa_id}/profesores",
        config::programa_educativo()
    ))
    .await
}

/// Assign a professor to a program. The division service expects the full
/// professor record as the PUT body.
pub async fn asignar_profesor_programa(
    programa_id: i64,
    profesor: &Profesor,
) -> Result<(), ApiError> {
    http::put_unit(
        &format!(
            "{}/asignar-profesor/{programa_id}",
            config::programa_educativo()
        ),
        profesor,
    )
    .await
}

/// Fetch the professor list, including inactive ones when `solo_activo` is
/// false.
pub async fn fetch_profesores(solo_activo: bool) -> Result<Vec<Profesor>, ApiError> {
    http::get_json(&format!("{}?soloactivo={solo_activo}", config::profesor())).await
}

/// Fetch one category.
pub async fn fetch_categoria(id: i64) -> Result<Categoria, ApiError> {
    http::get_json(&format!("{}/{id}", config::categorias())).await
}

/// Fetch the professor assignments of a category.
pub async fn fetch_categoria_profesores(
    categoria_id: i64,
) -> Result<Vec<ProfesorCategoria>, ApiError> {
    http::get_json(&format!("{}/profesor/{categoria_id}", config::categorias())).await
}

/// Assign a professor to a category. Arguments travel in the URL; the body
/// is empty.
pub async fn asignar_profesor_categoria(
    profesor_id: i64,
    categoria_id: i64,
) -> Result<(), ApiError> {
    http::post_empty(&format!(
        "{}/asignar-profesor/{profesor_id}?categoriaId={categoria_id}",
        config::categorias()
    ))
    .await
}

/// Remove a professor-to-category assignment by its relation id.
pub async fn desasignar_profesor_categoria(relacion_id: i64) -> Result<(), ApiError> {
    http::delete(&format!(
        "{}/desasignar-profesor/{relacion_id}",
        config::categorias()
    ))
    .await
}

/// Fetch all requirement types.
pub async fn fetch_tipos_requisitos() -> Result<Vec<TipoRequisito>, ApiError> {
    http::get_json(&config::tipos_requisitos()).await
}

/// Fetch one requirement type.
pub async fn fetch_tipo_requisito(id: i64) -> Result<TipoRequisito, ApiError> {
    http::get_json(&format!("{}/{id}", config::tipos_requisitos())).await
}

/// Create a requirement type and return the created record (the caller
/// auto-selects it in the picker).
pub async fn crear_tipo_requisito(nombre: &str) -> Result<TipoRequisito, ApiError> {
    let body = TipoRequisito {
        id: None,
        nombre: nombre.to_owned(),
    };
    http::post_json(&config::tipos_requisitos(), &body).await
}

/// Fetch every category-to-requirement-type link. The service exposes no
/// per-category filter; callers narrow the list client-side.
pub async fn fetch_categoria_tipo_requisitos() -> Result<Vec<CategoriaTipoRequisito>, ApiError> {
    http::get_json(&config::categoria_tipo_requisito()).await
}

/// Link a requirement type to a category.
pub async fn vincular_tipo_requisito(categoria_id: i64, tipo_id: i64) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "categoria": EntityRef { id: categoria_id },
        "tipoRequisito": EntityRef { id: tipo_id },
    });
    http::post_unit(&config::categoria_tipo_requisito(), &body).await
}

/// Unlink a requirement type from a category.
pub async fn desvincular_tipo_requisito(categoria_id: i64, tipo_id: i64) -> Result<(), ApiError> {
    http::delete(&format!(
        "{}/{categoria_id}/{tipo_id}",
        config::categoria_tipo_requisito()
    ))
    .await
}

/// Fetch all requisites. The service exposes no per-type filter; callers
/// narrow the list client-side.
pub async fn fetch_requisitos() -> Result<Vec<Requisito>, ApiError> {
    http::get_json(&config::requisitos()).await
}
