//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use blogly_server::db::{create_pool_with, migrations};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the users and posts tables, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with(&args.db.database_url, &args.db.pool_settings())
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run schema migrations")?;

    pool.close().await;
    println!("✅ Schema is up to date");
    Ok(())
}
