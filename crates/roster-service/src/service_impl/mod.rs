//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `employee_service.rs`).

pub mod employee_service_impl;

pub use employee_service_impl::EmployeeServiceImpl;
