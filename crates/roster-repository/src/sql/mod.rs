//! Relational backend built on SQLx.

mod employee_repository;

pub use employee_repository::SqlEmployeeRepository;
