//! Command implementations for the blogly CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use std::time::Duration;

use clap::Args;

use blogly_server::db::pool::{PoolSettings, DEFAULT_MAX_CONNECTIONS};

/// Default database, matching a local `createdb blogly`
pub const DEFAULT_DATABASE_URL: &str = "postgres:///blogly";

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a database connection before giving up
    #[arg(long, default_value_t = 30)]
    pub acquire_timeout: u64,
}

impl DatabaseArgs {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
        }
    }
}
