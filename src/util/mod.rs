//! Browser-facing utilities.

pub mod credential_store;
pub mod dark_mode;
