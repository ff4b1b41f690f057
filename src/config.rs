//! Service endpoint configuration.
//!
//! The catalog is served by four independent REST microservices. Their base
//! URLs are fixed at compile time via environment variables, falling back to
//! the local development ports.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DIVISION_BASE: &str = match option_env!("CATALOGO_API_DIV_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

const PROFESOR_BASE: &str = match option_env!("CATALOGO_API_PROF_URL") {
    Some(url) => url,
    None => "http://localhost:8081",
};

const CATEGORIA_BASE: &str = match option_env!("CATALOGO_API_CAT_URL") {
    Some(url) => url,
    None => "http://localhost:8082",
};

const AUTH_BASE: &str = match option_env!("CATALOGO_API_AUTH_URL") {
    Some(url) => url,
    None => "http://localhost:8083",
};

/// `/api/division` collection on the division service.
pub fn division() -> String {
    format!("{DIVISION_BASE}/api/division")
}

/// `/api/programaeducativo` collection on the division service.
pub fn programa_educativo() -> String {
    format!("{DIVISION_BASE}/api/programaeducativo")
}

/// `/api/profesor` collection on the professor service.
pub fn profesor() -> String {
    format!("{PROFESOR_BASE}/api/profesor")
}

/// `/api/categorias` collection on the category service.
pub fn categorias() -> String {
    format!("{CATEGORIA_BASE}/api/categorias")
}

/// `/api/categoria-tipo-requisito` link collection on the category service.
pub fn categoria_tipo_requisito() -> String {
    format!("{CATEGORIA_BASE}/api/categoria-tipo-requisito")
}

/// `/api/tipos-requisitos` collection on the category service.
pub fn tipos_requisitos() -> String {
    format!("{CATEGORIA_BASE}/api/tipos-requisitos")
}

/// `/api/requisitos` collection on the category service.
pub fn requisitos() -> String {
    format!("{CATEGORIA_BASE}/api/requisitos")
}

/// Login endpoint on the authentication service.
pub fn login() -> String {
    format!("{AUTH_BASE}/api/auth/login")
}

/// Credential validation endpoint on the authentication service.
pub fn validate() -> String {
    format!("{AUTH_BASE}/api/auth/validate")
}
