//! # Roster REST
//!
//! REST API layer using Axum for the Roster employee service.
//! Provides the canonical `/api/employees` resource, the legacy Express-style
//! user routes, health endpoints and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
