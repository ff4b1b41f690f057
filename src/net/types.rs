//! Wire models for the catalog and authentication services.
//!
//! Field names mirror the JSON the backends produce; `serde(rename)` covers
//! the camelCase outliers. Ids are backend-assigned: `None` until the entity
//! has been created.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Administrator role string as issued by the authentication service.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Authenticated user record returned by `/api/auth/validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl User {
    /// Whether this user carries the administrator role.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Login form payload for `/api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// An academic division.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Division {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub clave: String,
    pub nombre: String,
    pub activo: bool,
}

/// An educational program offered by a division.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Programa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub clave: String,
    #[serde(rename = "programaEducativo")]
    pub programa_educativo: String,
    pub activo: bool,
}

/// A professor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profesor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub apellidos: String,
    pub clavepe: String,
    /// `"M"` or `"F"`.
    pub genero: String,
    pub activo: bool,
}

impl Default for Profesor {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            apellidos: String::new(),
            clavepe: String::new(),
            genero: "M".to_owned(),
            activo: true,
        }
    }
}

impl Profesor {
    /// Display name as shown in assignment tables.
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }
}

/// A professor category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub categoria_estatal: String,
    pub categoria_federal: String,
    pub activo: bool,
}

impl Default for Categoria {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            categoria_estatal: String::new(),
            categoria_federal: String::new(),
            activo: true,
        }
    }
}

/// A requirement type. Link payloads reference types by id alone, so an
/// empty name stays off the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TipoRequisito {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nombre: String,
}

/// A requisite belonging to a requirement type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Requisito {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(rename = "tipoRequisito")]
    pub tipo_requisito: Option<TipoRequisito>,
}

/// Professor-to-category assignment as listed by
/// `/api/categorias/profesor/{categoriaId}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProfesorCategoria {
    pub id: i64,
    #[serde(rename = "profesorId")]
    pub profesor_id: i64,
    #[serde(default)]
    pub active: bool,
}

/// Reference by id, used in link payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

/// Category-to-requirement-type link as exchanged with
/// `/api/categoria-tipo-requisito`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoriaTipoRequisito {
    pub categoria: EntityRef,
    #[serde(rename = "tipoRequisito")]
    pub tipo_requisito: TipoRequisito,
}
