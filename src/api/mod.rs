// src/api/mod.rs
// HTTP API: routes, handlers, request types, and error mapping

pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

// Re-export commonly used items for external convenience
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use types::AnalyzeTextRequest;
