//! User pages: list, add, detail, edit, delete

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
use crate::http::extractors::{HtmlForm, UserId};
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{NewUser, ValidationError};

/// Add/edit user form body
#[derive(Debug, Deserialize)]
pub struct UserForm {
    #[serde(rename = "first-name")]
    pub first_name: Option<String>,
    #[serde(rename = "last-name")]
    pub last_name: Option<String>,
    #[serde(rename = "image-link")]
    pub image_link: Option<String>,
}

impl TryFrom<UserForm> for NewUser {
    type Error = ValidationError;

    fn try_from(form: UserForm) -> Result<Self, Self::Error> {
        NewUser::from_fields(form.first_name, form.last_name, form.image_link)
    }
}

/// GET / - redirect to the user list
async fn index() -> Redirect {
    Redirect::to("/users")
}

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Html(views::user_list(&users)))
}

/// GET /users/new - show the add-user form
async fn show_add_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Html(views::new_user_form(&users)))
}

/// POST /users/new - create a user and go back to the list
async fn process_add_form(
    State(state): State<Arc<AppState>>,
    HtmlForm(form): HtmlForm<UserForm>,
) -> Result<Redirect, ApiError> {
    let new_user = NewUser::try_from(form)?;
    let user = UserRepo::new(&state.pool).create(&new_user).await?;

    tracing::info!(user_id = user.id, "Added user");
    Ok(Redirect::to("/users"))
}

/// GET /users/{id} - user detail with their posts
async fn user_info(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Html<String>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    let posts = PostRepo::new(&state.pool).list_for_user(id).await?;
    Ok(Html(views::user_detail(&user, &posts)))
}

/// GET /users/{id}/edit - show the edit form
async fn show_edit_page(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Html<String>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    Ok(Html(views::edit_user_form(&user)))
}

/// POST /users/{id}/edit - overwrite the user's fields
///
/// A missing user is a 404 even when the form is also invalid.
async fn process_edit_form(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    form: Result<HtmlForm<UserForm>, ApiError>,
) -> Result<Redirect, ApiError> {
    UserRepo::new(&state.pool).get(id).await?;

    let HtmlForm(form) = form?;
    let new_user = NewUser::try_from(form)?;
    UserRepo::new(&state.pool).update(id, &new_user).await?;

    tracing::info!(user_id = id, "Updated user");
    Ok(Redirect::to(&views::user_url(id)))
}

/// POST /users/{id}/delete - delete the user and their posts
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Redirect, ApiError> {
    let posts_deleted = UserRepo::new(&state.pool).delete(id).await?;

    tracing::info!(user_id = id, posts_deleted, "Deleted user");
    Ok(Redirect::to("/users"))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/users", get(list_users))
        .route("/users/new", get(show_add_form).post(process_add_form))
        .route("/users/{id}", get(user_info))
        .route("/users/{id}/edit", get(show_edit_page).post(process_edit_form))
        .route("/users/{id}/delete", post(delete_user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::build_router;
    use crate::http::routes::unreachable_state;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn form_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_users() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/users");
    }

    #[tokio::test]
    async fn add_user_missing_field_is_400() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(form_request("/users/new", "first-name=Ada&last-name=Lovelace"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_user_wrong_content_type_is_400() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users/new")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"first-name": "Ada"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_user_overlong_name_is_400() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(form_request(
                "/users/new",
                "first-name=abcdefghijklmnopqrstuvwxyz&last-name=L&image-link=x",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_user_nul_character_is_400() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(form_request(
                "/users/new",
                "first-name=A%00&last-name=B&image-link=c",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn edit_non_integer_user_with_empty_body_is_404() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(form_request("/users/ada/edit", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_integer_user_id_is_404() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(Request::builder().uri("/users/ada").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let app = build_router(unreachable_state());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn user_form_converts_to_new_user() {
        let form = UserForm {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            image_link: Some("https://example.com/ada.png".into()),
        };
        let new_user = NewUser::try_from(form).unwrap();
        assert_eq!(new_user.last_name.as_str(), "Lovelace");
    }
}
