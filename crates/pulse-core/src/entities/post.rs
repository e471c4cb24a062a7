//! Post entity - a short user-authored post with a soft-delete lifecycle

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Maximum length of the optional image reference
pub const IMAGE_MAX_LEN: usize = 255;

/// Deletion state of a post
///
/// Soft deletion keeps the row around so it can still be looked up by the
/// delete path and permanently removed later; only `Active` posts are
/// visible to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostState {
    Active,
    SoftDeleted { at: DateTime<Utc> },
}

impl PostState {
    /// The soft-deletion timestamp, if any
    #[inline]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active => None,
            Self::SoftDeleted { at } => Some(*at),
        }
    }
}

impl From<Option<DateTime<Utc>>> for PostState {
    fn from(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            None => Self::Active,
            Some(at) => Self::SoftDeleted { at },
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub state: PostState,
}

impl Post {
    /// Create a new active Post
    ///
    /// # Errors
    /// Fails if the content is empty or the image reference is too long.
    pub fn new(
        id: Snowflake,
        owner_id: Snowflake,
        content: String,
        image: Option<String>,
    ) -> Result<Self, DomainError> {
        validate_content(&content)?;
        if let Some(ref image) = image {
            validate_image(image)?;
        }

        let now = Utc::now();
        Ok(Self {
            id,
            owner_id,
            content,
            image,
            created_at: now,
            updated_at: now,
            state: PostState::Active,
        })
    }

    /// Check if the post is visible to readers
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, PostState::Active)
    }

    /// Check if a user owns this post
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Apply an edit, leaving unset fields unchanged
    ///
    /// # Errors
    /// Fails if the new content is empty or the new image reference is too long.
    pub fn apply_edit(
        &mut self,
        content: Option<String>,
        image: Option<String>,
    ) -> Result<(), DomainError> {
        if let Some(content) = content {
            validate_content(&content)?;
            self.content = content;
        }
        if let Some(image) = image {
            validate_image(&image)?;
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "content must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_image(image: &str) -> Result<(), DomainError> {
    if image.len() > IMAGE_MAX_LEN {
        return Err(DomainError::ImageTooLong { max: IMAGE_MAX_LEN });
    }
    Ok(())
}
