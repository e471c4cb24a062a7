//! Feed service - the read-model layer over posts and likes
//!
//! Read-only composition of the post and like stores: posts joined with
//! owner summaries and engagement. Holds no state of its own.

use std::collections::HashMap;

use pulse_core::entities::User;
use pulse_core::Snowflake;
use tracing::instrument;

use crate::dto::{
    FeedPostResponse, LikeDetailResponse, OwnPostResponse, PostDetailResponse, PostWithEngagement,
    UserSummaryResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All active posts, newest first, with owner summary and like count
    #[instrument(skip(self))]
    pub async fn list_feed(&self) -> ServiceResult<Vec<FeedPostResponse>> {
        let posts = self.ctx.post_repo().list_active().await?;

        let post_ids: Vec<Snowflake> = posts.iter().map(|p| p.id).collect();
        let counts: HashMap<Snowflake, i64> = self
            .ctx
            .like_repo()
            .count_by_posts(&post_ids)
            .await?
            .into_iter()
            .collect();

        let mut owners: HashMap<Snowflake, User> = HashMap::new();
        let mut responses = Vec::with_capacity(posts.len());

        for post in posts {
            let owner = match owners.get(&post.owner_id).cloned() {
                Some(owner) => owner,
                None => {
                    let owner = self
                        .ctx
                        .user_repo()
                        .find_by_id(post.owner_id)
                        .await?
                        .ok_or_else(|| ServiceError::internal("Post owner not found"))?;
                    owners.insert(post.owner_id, owner.clone());
                    owner
                }
            };

            let like_count = counts.get(&post.id).copied().unwrap_or(0);
            responses.push(FeedPostResponse::from(PostWithEngagement {
                post,
                owner,
                like_count,
            }));
        }

        Ok(responses)
    }

    /// One active post with owner summary and full per-like detail
    #[instrument(skip(self))]
    pub async fn get_post_detail(&self, post_id: Snowflake) -> ServiceResult<PostDetailResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let owner = self
            .ctx
            .user_repo()
            .find_by_id(post.owner_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Post owner not found"))?;

        let likes = self.ctx.like_repo().find_by_post(post_id).await?;

        let mut like_details = Vec::with_capacity(likes.len());
        for like in likes {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(like.user_id)
                .await?
                .ok_or_else(|| ServiceError::internal("Liking user not found"))?;

            like_details.push(LikeDetailResponse {
                user_id: like.user_id.to_string(),
                user_name: user.name,
                created_at: like.created_at,
            });
        }

        Ok(PostDetailResponse {
            id: post.id.to_string(),
            user: UserSummaryResponse::from(&owner),
            content: post.content,
            image: post.image,
            likes: like_details,
            created_at: post.created_at,
            updated_at: post.updated_at,
        })
    }

    /// One owner's active posts, newest first, with like counts
    #[instrument(skip(self))]
    pub async fn list_user_posts(&self, owner_id: Snowflake) -> ServiceResult<Vec<OwnPostResponse>> {
        let posts = self.ctx.post_repo().list_active_by_owner(owner_id).await?;

        let post_ids: Vec<Snowflake> = posts.iter().map(|p| p.id).collect();
        let counts: HashMap<Snowflake, i64> = self
            .ctx
            .like_repo()
            .count_by_posts(&post_ids)
            .await?
            .into_iter()
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| {
                let like_count = counts.get(&post.id).copied().unwrap_or(0);
                OwnPostResponse::from((post, like_count))
            })
            .collect())
    }
}
