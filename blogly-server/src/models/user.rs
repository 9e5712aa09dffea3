//! User field validation
//!
//! Names mirror the `VARCHAR(25)` columns; the profile picture is a free-form
//! image URL that only has to be present.

use super::ValidationError;

/// Maximum length for first and last names (characters)
pub const MAX_NAME_LEN: usize = 25;

/// Validated first or last name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new name for the given form field.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 25 characters
    /// - No NUL characters
    ///
    /// # Example
    /// ```
    /// use blogly_server::models::PersonName;
    ///
    /// assert!(PersonName::new("first-name", "Ada").is_ok());
    /// assert!(PersonName::new("first-name", "   ").is_err());
    /// ```
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        super::reject_nul(field, s)?;
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated profile picture URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePic(String);

impl ProfilePic {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        super::reject_nul("image-link", s)?;
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "image-link" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated input for creating or overwriting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub profile_pic: ProfilePic,
}

impl NewUser {
    /// Validate raw form values. Absent fields are reported before blank ones,
    /// in form order.
    pub fn from_fields(
        first_name: Option<String>,
        last_name: Option<String>,
        profile_pic: Option<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = super::required("first-name", first_name)?;
        let last_name = super::required("last-name", last_name)?;
        let profile_pic = super::required("image-link", profile_pic)?;

        Ok(Self {
            first_name: PersonName::new("first-name", &first_name)?,
            last_name: PersonName::new("last-name", &last_name)?,
            profile_pic: ProfilePic::new(&profile_pic)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(PersonName::new("first-name", "Ada").is_ok());
        assert!(PersonName::new("last-name", "Lovelace").is_ok());
        assert!(PersonName::new("first-name", "  Grace  ").is_ok());
    }

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(
            PersonName::new("last-name", "   ").unwrap_err(),
            ValidationError::Empty { field: "last-name" }
        );
    }

    #[test]
    fn max_length_counts_characters() {
        let name_25 = "é".repeat(25);
        assert!(PersonName::new("first-name", &name_25).is_ok());

        let name_26 = "a".repeat(26);
        let err = PersonName::new("first-name", &name_26).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 25, .. }));
    }

    #[test]
    fn rejects_nul_in_name_and_picture() {
        assert_eq!(
            PersonName::new("first-name", "A\0").unwrap_err(),
            ValidationError::NulCharacter { field: "first-name" }
        );
        assert_eq!(
            ProfilePic::new("x.png\0").unwrap_err(),
            ValidationError::NulCharacter { field: "image-link" }
        );
    }

    #[test]
    fn trims_whitespace() {
        let name = PersonName::new("first-name", "  Alan ").unwrap();
        assert_eq!(name.as_str(), "Alan");
    }

    #[test]
    fn new_user_requires_every_field() {
        let err = NewUser::from_fields(Some("Ada".into()), None, Some("http://x/a.png".into()))
            .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "last-name" });

        let err = NewUser::from_fields(Some("Ada".into()), Some("Lovelace".into()), Some("".into()))
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "image-link" });
    }

    #[test]
    fn new_user_from_complete_form() {
        let user = NewUser::from_fields(
            Some("Ada".into()),
            Some("Lovelace".into()),
            Some("https://example.com/ada.png".into()),
        )
        .unwrap();

        assert_eq!(user.first_name.as_str(), "Ada");
        assert_eq!(user.last_name.as_str(), "Lovelace");
        assert_eq!(user.profile_pic.as_str(), "https://example.com/ada.png");
    }
}
