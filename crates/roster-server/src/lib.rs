//! # Roster Server Library
//!
//! Wiring for the Roster server: logging setup, backend selection and
//! application assembly. The binary in `main.rs` only drives these.

pub mod app;
pub mod logging;
pub mod startup;
