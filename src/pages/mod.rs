//! Page components, one per route.

pub mod categorias;
pub mod divisiones;
pub mod login;
pub mod profesores;
pub mod profesores_categoria;
pub mod profesores_programa;
pub mod programas;
pub mod requisitos;
pub mod tipos_requisitos_categoria;
