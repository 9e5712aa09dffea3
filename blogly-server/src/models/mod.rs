//! Domain models with validation at construction
//!
//! Form input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod post;

pub use validation::ValidationError;
pub(crate) use validation::reject_nul;
pub use user::{NewUser, PersonName, ProfilePic};
pub use post::{NewPost, PostContent, PostTitle};

/// Require a submitted form field to be present.
pub(crate) fn required(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
