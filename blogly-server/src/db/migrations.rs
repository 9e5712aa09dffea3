//! Schema migrations, run on startup
//!
//! Every statement is idempotent. The whole run holds a transaction-scoped
//! advisory lock so two processes starting at once don't race on
//! `CREATE TABLE IF NOT EXISTS`.

use sqlx::PgPool;

/// Advisory lock key for schema migrations ("blogly" in ASCII).
const MIGRATION_LOCK_KEY: i64 = 0x62_6c_6f_67_6c_79;

/// Create the users and posts tables if they don't exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            first_name VARCHAR(25) NOT NULL,
            last_name VARCHAR(25) NOT NULL,
            profile_pic TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // No ON DELETE CASCADE: UserRepo::delete removes posts explicitly
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            user_id INTEGER NOT NULL REFERENCES users(id)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(user_id)")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
