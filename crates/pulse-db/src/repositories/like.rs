//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pulse_core::entities::Like;
use pulse_core::error::DomainError;
use pulse_core::traits::{LikeRepository, RepoResult};
use pulse_core::value_objects::Snowflake;

use crate::models::{LikeCountModel, LikeModel};

use super::error::{like_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, post_id: Snowflake) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT id, user_id, post_id, created_at
            FROM likes
            WHERE user_id = $1 AND post_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(post_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Like>> {
        let results = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT id, user_id, post_id, created_at
            FROM likes
            WHERE post_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Like::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        // The UNIQUE (user_id, post_id) constraint is the arbiter under
        // concurrent duplicate likes; exactly one insert wins.
        sqlx::query(
            r"
            INSERT INTO likes (id, user_id, post_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(like.id.into_inner())
        .bind(like.user_id.into_inner())
        .bind(like.post_id.into_inner())
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyLiked))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, post_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM likes WHERE user_id = $1 AND post_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(post_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(like_not_found(post_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_post(&self, post_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM likes WHERE post_id = $1
            ",
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_by_posts(&self, post_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, i64)>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = post_ids.iter().map(|s| s.into_inner()).collect();

        let results = sqlx::query_as::<_, LikeCountModel>(
            r"
            SELECT post_id, COUNT(*) as count
            FROM likes
            WHERE post_id = ANY($1)
            GROUP BY post_id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|r| (Snowflake::new(r.post_id), r.count))
            .collect())
    }
}
