//! HTTP middleware.

mod logging;

pub use logging::{logging_middleware, REQUEST_ID_HEADER};
