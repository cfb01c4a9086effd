//! # Roster Repository
//!
//! Persistence layer for the employee collection.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn EmployeeRepository>   (persistence contract)
//! SqlEmployeeRepository              (relational, SQLx / SQLite, AUTOINCREMENT ids)
//! MemoryEmployeeRepository           (document-style, in-process sequence counter)
//! ```
//!
//! Both backends assign ids on insert, never reuse them, and perform exactly
//! one write per mutating call.

pub mod memory;
pub mod pool;
pub mod sql;
pub mod traits;

pub use memory::MemoryEmployeeRepository;
pub use pool::*;
pub use sql::SqlEmployeeRepository;
pub use traits::*;
