//! HTTP controllers.

pub mod employee_controller;
pub mod health_controller;
pub mod legacy_controller;
