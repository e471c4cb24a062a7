//! Like service
//!
//! Handles liking, unliking, and like listings.

use pulse_core::entities::Like;
use pulse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{LikeResponse, PostLikeResponse, UserSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a post
    ///
    /// The target must be an active post. Duplicate likes surface as a
    /// conflict from the insert itself, so two concurrent requests for the
    /// same (user, post) pair cannot both succeed.
    #[instrument(skip(self))]
    pub async fn like(&self, user_id: Snowflake, post_id: Snowflake) -> ServiceResult<LikeResponse> {
        self.ctx
            .post_repo()
            .find_by_id(post_id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let like = Like::new(self.ctx.generate_id(), user_id, post_id);
        self.ctx.like_repo().create(&like).await?;

        info!(user_id = %user_id, post_id = %post_id, "Post liked");

        Ok(LikeResponse::from(&like))
    }

    /// Remove the requester's like from a post
    ///
    /// The post lookup includes soft-deleted posts: a like on a post the
    /// owner has since hidden can still be withdrawn.
    #[instrument(skip(self))]
    pub async fn unlike(&self, user_id: Snowflake, post_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .post_repo()
            .find_by_id(post_id, true)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        self.ctx.like_repo().delete(user_id, post_id).await?;

        info!(user_id = %user_id, post_id = %post_id, "Post unliked");

        Ok(())
    }

    /// List a post's likes, newest first, with liking-user summaries
    #[instrument(skip(self))]
    pub async fn list_likes(&self, post_id: Snowflake) -> ServiceResult<Vec<PostLikeResponse>> {
        self.ctx
            .post_repo()
            .find_by_id(post_id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let likes = self.ctx.like_repo().find_by_post(post_id).await?;

        let mut responses = Vec::with_capacity(likes.len());
        for like in likes {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(like.user_id)
                .await?
                .ok_or_else(|| ServiceError::internal("Liking user not found"))?;

            responses.push(PostLikeResponse {
                id: like.id.to_string(),
                user: UserSummaryResponse::from(&user),
                created_at: like.created_at,
            });
        }

        Ok(responses)
    }
}
