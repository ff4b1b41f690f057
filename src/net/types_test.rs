use super::*;

// =============================================================
// Wire-format compatibility
// =============================================================

#[test]
fn programa_uses_camel_case_name_on_the_wire() {
    let programa: Programa = serde_json::from_value(serde_json::json!({
        "id": 3,
        "clave": "ISC",
        "programaEducativo": "Ingeniería en Sistemas",
        "activo": true,
    }))
    .unwrap();
    assert_eq!(programa.programa_educativo, "Ingeniería en Sistemas");

    let encoded = serde_json::to_value(&programa).unwrap();
    assert!(encoded.get("programaEducativo").is_some());
    assert!(encoded.get("programa_educativo").is_none());
}

#[test]
fn new_entity_omits_the_id_field() {
    let division = Division {
        id: None,
        clave: "DCB".to_owned(),
        nombre: "Ciencias Básicas".to_owned(),
        activo: true,
    };
    let encoded = serde_json::to_value(&division).unwrap();
    assert!(encoded.get("id").is_none());
}

#[test]
fn requisito_tolerates_a_missing_type() {
    let requisito: Requisito = serde_json::from_value(serde_json::json!({
        "id": 9,
        "nombre": "Acta de nacimiento",
        "tipoRequisito": null,
    }))
    .unwrap();
    assert!(requisito.tipo_requisito.is_none());
}

#[test]
fn profesor_categoria_decodes_relation_rows() {
    let relacion: ProfesorCategoria = serde_json::from_value(serde_json::json!({
        "id": 12,
        "profesorId": 7,
        "active": true,
    }))
    .unwrap();
    assert_eq!(relacion.profesor_id, 7);
    assert!(relacion.active);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn admin_role_is_exact() {
    let admin = User {
        id: 1,
        email: "a@b.com".to_owned(),
        role: "ADMIN".to_owned(),
    };
    let viewer = User {
        id: 2,
        email: "c@d.com".to_owned(),
        role: "admin".to_owned(),
    };
    assert!(admin.is_admin());
    assert!(!viewer.is_admin());
}

#[test]
fn nombre_completo_joins_name_and_surname() {
    let profesor = Profesor {
        nombre: "Ana".to_owned(),
        apellidos: "García López".to_owned(),
        ..Profesor::default()
    };
    assert_eq!(profesor.nombre_completo(), "Ana García López");
}
