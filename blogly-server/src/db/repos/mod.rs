//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps missing rows to
//! `DbError::NotFound` so handlers can turn them into 404s.

pub mod users;
pub mod posts;

pub use users::{User, UserRepo};
pub use posts::{Post, PostRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn user_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }

    pub(crate) fn post_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "post",
            id: id.to_string(),
        }
    }
}
