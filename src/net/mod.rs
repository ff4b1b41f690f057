//! REST layer for the four catalog microservices.
//!
//! DESIGN
//! ======
//! `http` holds the gloo-net plumbing and the status-to-error mapping;
//! everything above it is typed: `auth_api` for the authentication service,
//! `entity` for the generic CRUD capability, `catalog` for nested lookups
//! and assignment endpoints, `types` for the wire models.

pub mod auth_api;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod http;
pub mod types;
