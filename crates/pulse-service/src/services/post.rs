//! Post service
//!
//! Handles post creation, editing, and the soft/permanent delete lifecycle.
//! All mutations are owner-only, enforced by a single guard.

use pulse_core::entities::Post;
use pulse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostWithOwner, UpdatePostRequest, WrittenPostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of a delete request, distinguishing the two delete modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    SoftDeleted,
    PermanentlyDeleted,
}

/// Single ownership guard used by every mutating operation
fn assert_owner(post: &Post, requester_id: Snowflake) -> ServiceResult<()> {
    if !post.is_owned_by(requester_id) {
        return Err(ServiceError::Forbidden);
    }
    Ok(())
}

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post owned by the requester
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        owner_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<WrittenPostResponse> {
        let post_id = self.ctx.generate_id();
        let post = Post::new(post_id, owner_id, request.content, request.image)?;

        self.ctx.post_repo().create(&post).await?;

        let owner = self
            .ctx
            .user_repo()
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", owner_id.to_string()))?;

        info!(post_id = %post_id, owner_id = %owner_id, "Post created");

        Ok(WrittenPostResponse::from(PostWithOwner { post, owner }))
    }

    /// Edit a post's content and/or image
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: Snowflake,
        requester_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<WrittenPostResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(post_id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        assert_owner(&post, requester_id)?;

        post.apply_edit(request.content, request.image)?;
        self.ctx.post_repo().update(&post).await?;

        let owner = self
            .ctx
            .user_repo()
            .find_by_id(requester_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", requester_id.to_string()))?;

        info!(post_id = %post_id, "Post updated");

        Ok(WrittenPostResponse::from(PostWithOwner { post, owner }))
    }

    /// Delete a post, softly by default or permanently with `force`
    ///
    /// The lookup includes soft-deleted posts so a pending permanent delete
    /// still passes the ownership check. A repeated non-force delete of an
    /// already-soft-deleted post succeeds without touching anything.
    #[instrument(skip(self))]
    pub async fn delete_post(
        &self,
        post_id: Snowflake,
        requester_id: Snowflake,
        force: bool,
    ) -> ServiceResult<DeleteOutcome> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id, true)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        assert_owner(&post, requester_id)?;

        if force {
            self.ctx.post_repo().hard_delete(post_id).await?;
            info!(post_id = %post_id, "Post permanently deleted");
            return Ok(DeleteOutcome::PermanentlyDeleted);
        }

        if post.is_active() {
            self.ctx.post_repo().soft_delete(post_id).await?;
        }
        info!(post_id = %post_id, "Post soft deleted");

        Ok(DeleteOutcome::SoftDeleted)
    }
}
