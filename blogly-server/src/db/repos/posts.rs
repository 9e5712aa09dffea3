//! Post repository
//!
//! Every lookup is scoped to the owning user: a post addressed through the
//! wrong user is reported as not found.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::NewPost;

/// Post record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's posts, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Create a post owned by `user_id` (atomic).
    ///
    /// Holds a key-share lock on the user row until the insert commits, so a
    /// concurrent user delete either waits for this post or has already
    /// removed the user (reported as `NotFound`).
    pub async fn create(&self, user_id: i32, new: &NewPost) -> Result<Post, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT 1 FROM users WHERE id = $1 FOR KEY SHARE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::user_not_found(user_id))?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, created_at, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(new.title.as_str())
        .bind(new.content.as_str())
        .bind(Utc::now())
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(user_id, post_id = post.id, "Post created");
        Ok(post)
    }

    /// Get a single post belonging to `user_id`.
    pub async fn get(&self, user_id: i32, post_id: i32) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::post_not_found(post_id))
    }

    /// Overwrite title and content of a post belonging to `user_id`.
    pub async fn update(
        &self,
        user_id: i32,
        post_id: i32,
        new: &NewPost,
    ) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $3, content = $4
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(new.title.as_str())
        .bind(new.content.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::post_not_found(post_id))
    }

    /// Delete a post belonging to `user_id`.
    pub async fn delete(&self, user_id: i32, post_id: i32) -> Result<(), DbError> {
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(DbError::post_not_found(post_id));
        }

        tracing::debug!(user_id, post_id, "Post deleted");
        Ok(())
    }
}
