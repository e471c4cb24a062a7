//! Like entity <-> model mapper

use pulse_core::entities::Like;
use pulse_core::value_objects::Snowflake;

use crate::models::LikeModel;

/// Convert LikeModel to Like entity
impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            post_id: Snowflake::new(model.post_id),
            created_at: model.created_at,
        }
    }
}
