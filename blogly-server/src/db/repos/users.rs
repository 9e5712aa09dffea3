//! User repository
//!
//! - list: insertion order (ascending id)
//! - update: single UPDATE ... RETURNING, last write wins
//! - delete: lock user, then posts, then user, in one transaction

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::NewUser;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub profile_pic: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every user in insertion order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, profile_pic
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, profile_pic
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::user_not_found(id))
    }

    /// Insert a new user, returning the stored row with its generated id.
    pub async fn create(&self, new: &NewUser) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, profile_pic)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, profile_pic
            "#,
        )
        .bind(new.first_name.as_str())
        .bind(new.last_name.as_str())
        .bind(new.profile_pic.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Overwrite all mutable fields of an existing user.
    pub async fn update(&self, id: i32, new: &NewUser) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, profile_pic = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, profile_pic
            "#,
        )
        .bind(id)
        .bind(new.first_name.as_str())
        .bind(new.last_name.as_str())
        .bind(new.profile_pic.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::user_not_found(id))
    }

    /// Delete a user together with all of their posts (atomic).
    ///
    /// Returns the number of posts removed. The user row is locked first so
    /// no post can be added between clearing the posts and removing the user.
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::user_not_found(id))?;

        let posts_deleted = sqlx::query("DELETE FROM posts WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(user_id = id, posts_deleted, "User deleted");
        Ok(posts_deleted)
    }
}
