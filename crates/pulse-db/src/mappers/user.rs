//! User entity <-> model mapper

use pulse_core::entities::User;
use pulse_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash stays behind in the db layer.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            profile_picture: model.profile_picture,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
