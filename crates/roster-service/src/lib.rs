//! # Roster Service
//!
//! The resource store: business rules for the employee collection layered
//! over an injected [`roster_repository::EmployeeRepository`].

pub mod dto;
pub mod employee_service;
pub mod service_impl;

pub use dto::*;
pub use employee_service::*;
pub use service_impl::EmployeeServiceImpl;
