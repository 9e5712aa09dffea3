//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed to handlers as state - no global session
//! - Rely on DB constraints (NOT NULL, VARCHAR(25), FOREIGN KEY)
//! - Transactions for multi-step operations (user delete, post create)

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool, create_pool_with, PoolSettings};
pub use repos::*;
