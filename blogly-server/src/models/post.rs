//! Post title and content validation

use super::ValidationError;

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new post title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    ///
    /// # Example
    /// ```
    /// use blogly_server::models::PostTitle;
    ///
    /// assert!(PostTitle::new("Hello, world").is_ok());
    /// assert!(PostTitle::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        super::reject_nul("title", s)?;
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated post body. Stored verbatim; only whitespace-only bodies are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        super::reject_nul("post_content", s)?;
        if s.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "post_content",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated input for creating or overwriting a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
}

impl NewPost {
    pub fn from_fields(
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = super::required("title", title)?;
        let content = super::required("post_content", content)?;

        Ok(Self {
            title: PostTitle::new(&title)?,
            content: PostContent::new(&content)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_title() {
        assert_eq!(
            PostTitle::new("  ").unwrap_err(),
            ValidationError::Empty { field: "title" }
        );
    }

    #[test]
    fn content_is_kept_verbatim() {
        let content = PostContent::new("  line one\nline two\n").unwrap();
        assert_eq!(content.as_str(), "  line one\nline two\n");
    }

    #[test]
    fn rejects_nul_in_title_and_content() {
        assert_eq!(
            PostTitle::new("Hi\0").unwrap_err(),
            ValidationError::NulCharacter { field: "title" }
        );
        assert_eq!(
            PostContent::new("body\0").unwrap_err(),
            ValidationError::NulCharacter {
                field: "post_content"
            }
        );
    }

    #[test]
    fn new_post_missing_content() {
        let err = NewPost::from_fields(Some("Title".into()), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "post_content" });
    }

    #[test]
    fn new_post_from_complete_form() {
        let post = NewPost::from_fields(Some(" First ".into()), Some("Body".into())).unwrap();
        assert_eq!(post.title.as_str(), "First");
        assert_eq!(post.content.as_str(), "Body");
    }
}
