//! Route handlers organized by resource

pub mod health;
pub mod users;
pub mod posts;

/// State whose pool points at a closed port, for routes that must answer
/// without touching the database.
#[cfg(test)]
pub(crate) fn unreachable_state() -> crate::http::AppState {
    use crate::db::{create_lazy_pool, PoolSettings};
    use std::time::Duration;

    let settings = PoolSettings {
        max_connections: 1,
        acquire_timeout: Duration::from_millis(200),
    };
    let pool = create_lazy_pool("postgres://blogly@127.0.0.1:1/blogly_test", &settings)
        .expect("valid database url");
    crate::http::AppState::new(pool)
}
