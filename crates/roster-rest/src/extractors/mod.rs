//! Custom Axum extractors.
//!
//! Every rejection is reported through [`crate::responses::AppError`] so that
//! malformed input always renders the common error body with status 400.

mod employee_id;
mod json;

pub use employee_id::{parse_employee_id, EmployeeIdPath, EmployeeIdQuery};
pub use json::AppJson;
