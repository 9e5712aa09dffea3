//! blogly-server: users, their blog posts, and the pages that show them
//!
//! Layers, bottom-up:
//! - `models`: validated input types (names, titles, content)
//! - `db`: connection pool, schema migrations, repositories
//! - `http`: axum router, handlers, HTML views, error mapping

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
