//! Post entity <-> model mapper

use pulse_core::entities::{Post, PostState};
use pulse_core::value_objects::Snowflake;

use crate::models::PostModel;

/// Convert PostModel to Post entity
///
/// The nullable `deleted_at` column becomes the explicit `PostState` variant.
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.user_id),
            content: model.content,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
            state: PostState::from(model.deleted_at),
        }
    }
}
