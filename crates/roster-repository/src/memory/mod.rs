//! Document-style in-process backend.

mod employee_repository;

pub use employee_repository::MemoryEmployeeRepository;
