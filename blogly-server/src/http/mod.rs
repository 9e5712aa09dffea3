//! HTTP layer
//!
//! Axum server with:
//! - Server-rendered HTML pages for users and posts
//! - Request tracing
//! - Graceful shutdown
//! - HTML error pages with status mapping

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod views;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
