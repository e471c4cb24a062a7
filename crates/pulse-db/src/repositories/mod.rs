//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pulse-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod like;
mod post;
mod user;

pub use like::PgLikeRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
