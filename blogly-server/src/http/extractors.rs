//! Custom Axum extractors
//!
//! Path ids behave like an integer route converter: a segment that isn't an
//! integer means the route doesn't name anything, so it is a 404.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;
use serde::de::DeserializeOwned;

use super::error::ApiError;

fn parse_id(resource: &'static str, raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::NotFound {
        resource,
        id: raw.to_owned(),
    })
}

/// Extract the user id from `/users/{id}/...`
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "user",
                id: String::new(),
            })?;

        Ok(Self(parse_id("user", &id)?))
    }
}

/// Extract both ids from `/users/{id}/posts/{post_id}/...`
pub struct PostPath {
    pub user_id: i32,
    pub post_id: i32,
}

impl<S> FromRequestParts<S> for PostPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((user_id, post_id)): Path<(String, String)> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::NotFound {
                    resource: "post",
                    id: String::new(),
                })?;

        Ok(Self {
            user_id: parse_id("user", &user_id)?,
            post_id: parse_id("post", &post_id)?,
        })
    }
}

/// `application/x-www-form-urlencoded` body whose rejection renders as a
/// 400 error page instead of axum's plain-text default.
pub struct HtmlForm<T>(pub T);

impl<T, S> FromRequest<S> for HtmlForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("user", "42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_non_integers_as_not_found() {
        let err = parse_id("post", "abc").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: "post", .. }));

        let err = parse_id("user", "99999999999").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: "user", .. }));
    }
}
