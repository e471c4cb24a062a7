//! Like entity - a user's engagement with a post
//!
//! At most one like exists per (user, post) pair; the database layer
//! enforces this with a unique constraint.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Like entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub post_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like
    pub fn new(id: Snowflake, user_id: Snowflake, post_id: Snowflake) -> Self {
        Self {
            id,
            user_id,
            post_id,
            created_at: Utc::now(),
        }
    }
}
