//! Like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregated like count per post (from a grouped query)
#[derive(Debug, Clone, FromRow)]
pub struct LikeCountModel {
    pub post_id: i64,
    pub count: i64,
}
