//! Post pages, nested under their owning user

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::db::repos::{PostRepo, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{HtmlForm, PostPath, UserId};
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{NewPost, ValidationError};

/// Add/edit post form body
#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub post_content: Option<String>,
}

impl TryFrom<PostForm> for NewPost {
    type Error = ValidationError;

    fn try_from(form: PostForm) -> Result<Self, Self::Error> {
        NewPost::from_fields(form.title, form.post_content)
    }
}

/// GET /users/{id}/posts/new - show the add-post form
async fn show_new_post_form(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<Html<String>, ApiError> {
    let user = UserRepo::new(&state.pool).get(user_id).await?;
    Ok(Html(views::new_post_form(&user)))
}

/// POST /users/{id}/posts/new - create a post and go back to the user
///
/// A missing user is a 404 even when the form is also invalid.
async fn process_new_post(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    form: Result<HtmlForm<PostForm>, ApiError>,
) -> Result<Redirect, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;

    let HtmlForm(form) = form?;
    let new_post = NewPost::try_from(form)?;
    let post = PostRepo::new(&state.pool).create(user_id, &new_post).await?;

    tracing::info!(user_id, post_id = post.id, "Added post");
    Ok(Redirect::to(&views::user_url(user_id)))
}

/// GET /users/{id}/posts/{post_id}/details - show a post
async fn post_details(
    State(state): State<Arc<AppState>>,
    PostPath { user_id, post_id }: PostPath,
) -> Result<Html<String>, ApiError> {
    let user = UserRepo::new(&state.pool).get(user_id).await?;
    let post = PostRepo::new(&state.pool).get(user_id, post_id).await?;
    Ok(Html(views::post_detail(&user, &post)))
}

/// GET /users/{id}/posts/{post_id}/edit - show the edit form
async fn show_edit_post(
    State(state): State<Arc<AppState>>,
    PostPath { user_id, post_id }: PostPath,
) -> Result<Html<String>, ApiError> {
    let user = UserRepo::new(&state.pool).get(user_id).await?;
    let post = PostRepo::new(&state.pool).get(user_id, post_id).await?;
    Ok(Html(views::edit_post_form(&user, &post)))
}

/// POST /users/{id}/posts/{post_id}/edit - overwrite title and content
async fn process_edit_post(
    State(state): State<Arc<AppState>>,
    PostPath { user_id, post_id }: PostPath,
    form: Result<HtmlForm<PostForm>, ApiError>,
) -> Result<Redirect, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    PostRepo::new(&state.pool).get(user_id, post_id).await?;

    let HtmlForm(form) = form?;
    let new_post = NewPost::try_from(form)?;
    PostRepo::new(&state.pool)
        .update(user_id, post_id, &new_post)
        .await?;

    tracing::info!(user_id, post_id, "Updated post");
    Ok(Redirect::to(&views::post_url(user_id, post_id)))
}

/// POST /users/{id}/posts/{post_id}/delete - delete a post
async fn delete_post(
    State(state): State<Arc<AppState>>,
    PostPath { user_id, post_id }: PostPath,
) -> Result<Redirect, ApiError> {
    PostRepo::new(&state.pool).delete(user_id, post_id).await?;

    tracing::info!(user_id, post_id, "Deleted post");
    Ok(Redirect::to(&views::user_url(user_id)))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{id}/posts/new",
            get(show_new_post_form).post(process_new_post),
        )
        .route("/users/{id}/posts/{post_id}/details", get(post_details))
        .route(
            "/users/{id}/posts/{post_id}/edit",
            get(show_edit_post).post(process_edit_post),
        )
        .route("/users/{id}/posts/{post_id}/delete", post(delete_post))
}
