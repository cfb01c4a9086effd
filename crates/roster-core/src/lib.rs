//! # Roster Core
//!
//! Core types, traits, and error definitions for the Roster employee service.
//! Every other layer (repository, service, REST) builds on the entity and the
//! error taxonomy defined here.

pub mod coerce;
pub mod employee;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;

pub use employee::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
