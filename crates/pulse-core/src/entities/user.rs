//! User entity - an account that authors posts and likes

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            profile_picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the user has uploaded a profile picture
    #[inline]
    pub fn has_profile_picture(&self) -> bool {
        self.profile_picture.is_some()
    }
}
