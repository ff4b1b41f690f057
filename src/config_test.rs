use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn division_endpoint_path() {
    assert!(division().ends_with("/api/division"));
}

#[test]
fn programa_educativo_endpoint_path() {
    assert!(programa_educativo().ends_with("/api/programaeducativo"));
}

#[test]
fn profesor_endpoint_path() {
    assert!(profesor().ends_with("/api/profesor"));
}

#[test]
fn categorias_endpoint_path() {
    assert!(categorias().ends_with("/api/categorias"));
}

#[test]
fn categoria_tipo_requisito_endpoint_path() {
    assert!(categoria_tipo_requisito().ends_with("/api/categoria-tipo-requisito"));
}

#[test]
fn tipos_requisitos_endpoint_path() {
    assert!(tipos_requisitos().ends_with("/api/tipos-requisitos"));
}

#[test]
fn requisitos_endpoint_path() {
    assert!(requisitos().ends_with("/api/requisitos"));
}

#[test]
fn auth_endpoints_share_a_base() {
    let login = login();
    let validate = validate();
    assert!(login.ends_with("/api/auth/login"));
    assert!(validate.ends_with("/api/auth/validate"));

    let login_base = login.trim_end_matches("/api/auth/login");
    let validate_base = validate.trim_end_matches("/api/auth/validate");
    assert_eq!(login_base, validate_base);
}

// =============================================================
// Service split
// =============================================================

#[test]
fn catalog_collections_live_on_the_category_service() {
    let base = categorias();
    let base = base.trim_end_matches("/api/categorias");
    assert!(tipos_requisitos().starts_with(base));
    assert!(requisitos().starts_with(base));
    assert!(categoria_tipo_requisito().starts_with(base));
}
