//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models:
//! `auth` owns the session machine, `ui` owns toasts and theming. Both live
//! in `RwSignal`s provided via context by the root component.

pub mod auth;
pub mod ui;
