use super::*;

fn division(clave: &str, nombre: &str) -> Division {
    Division {
        id: Some(1),
        clave: clave.to_owned(),
        nombre: nombre.to_owned(),
        activo: true,
    }
}

// =============================================================
// URL building
// =============================================================

#[test]
fn list_url_applies_the_active_filter() {
    let url = list_url::<Division>(Some(true));
    assert!(url.ends_with("/api/division?soloActivos=true"));
}

#[test]
fn list_url_without_filter_is_the_collection() {
    let url = list_url::<Division>(None);
    assert!(url.ends_with("/api/division"));
}

#[test]
fn list_url_ignores_the_filter_when_unsupported() {
    let url = list_url::<TipoRequisito>(Some(true));
    assert!(url.ends_with("/api/tipos-requisitos"));
}

#[test]
fn each_service_spells_its_filter_parameter() {
    assert_eq!(Division::active_filter_param(), Some("soloActivos"));
    assert_eq!(Profesor::active_filter_param(), Some("soloactivo"));
    assert_eq!(Categoria::active_filter_param(), Some("soloActivo"));
}

#[test]
fn item_url_appends_the_id() {
    let url = item_url::<Profesor>(42);
    assert!(url.ends_with("/api/profesor/42"));
}

// =============================================================
// Client-side search
// =============================================================

#[test]
fn filter_matches_any_haystack_field() {
    let items = vec![
        division("DCB", "Ciencias Básicas"),
        division("DIE", "Ingeniería Eléctrica"),
    ];
    let hits = filter_by_term(&items, "eléctrica");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].clave, "DIE");
}

#[test]
fn filter_is_case_insensitive() {
    let items = vec![division("DCB", "Ciencias Básicas")];
    assert_eq!(filter_by_term(&items, "dcb").len(), 1);
    assert_eq!(filter_by_term(&items, "CIENCIAS").len(), 1);
}

#[test]
fn empty_term_keeps_everything() {
    let items = vec![
        division("DCB", "Ciencias Básicas"),
        division("DIE", "Ingeniería Eléctrica"),
    ];
    assert_eq!(filter_by_term(&items, "").len(), 2);
}
