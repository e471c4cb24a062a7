//! Database models - SQLx-compatible structs for PostgreSQL tables

mod like;
mod post;
mod user;

pub use like::{LikeCountModel, LikeModel};
pub use post::PostModel;
pub use user::UserModel;
