//! Data Transfer Objects (DTOs).

mod employee_dto;

pub use employee_dto::*;
