//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Like, Post, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    ///
    /// With `include_deleted = false` a soft-deleted post is treated as
    /// absent; the delete path passes `true` so ownership can still be
    /// checked on an already-soft-deleted post.
    async fn find_by_id(&self, id: Snowflake, include_deleted: bool) -> RepoResult<Option<Post>>;

    /// List all active posts, newest first
    async fn list_active(&self) -> RepoResult<Vec<Post>>;

    /// List one owner's active posts, newest first
    async fn list_active_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update content/image of an active post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Soft delete an active post (sets the deletion timestamp)
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Permanently remove a post and all likes referencing it
    ///
    /// Both deletions happen in a single transaction so a crash cannot
    /// leave orphaned likes behind.
    async fn hard_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find a like by user and post
    async fn find(&self, user_id: Snowflake, post_id: Snowflake) -> RepoResult<Option<Like>>;

    /// Get all likes for a post, newest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Like>>;

    /// Insert a like
    ///
    /// The (user, post) pair is unique; a duplicate insert fails with
    /// `DomainError::AlreadyLiked` via the database constraint, so two
    /// concurrent likes can never both succeed.
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Remove a like; fails with `LikeNotFound` if none exists
    async fn delete(&self, user_id: Snowflake, post_id: Snowflake) -> RepoResult<()>;

    /// Count likes for a single post
    async fn count_by_post(&self, post_id: Snowflake) -> RepoResult<i64>;

    /// Count likes for a set of posts in one query
    ///
    /// Posts with no likes are absent from the result.
    async fn count_by_posts(&self, post_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, i64)>>;
}
