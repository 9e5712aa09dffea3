//! HTTP server command
//!
//! Creates the schema if needed, then serves the blogly pages.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use blogly_server::db::create_pool_with;
use blogly_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BLOGLY_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Skip schema migrations on startup
    #[arg(long)]
    pub no_migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting blogly server on {}", args.bind);

    let pool = create_pool_with(&args.db.database_url, &args.db.pool_settings())
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        run_migrations: !args.no_migrate,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
