//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{LikeRepository, PostRepository, RepoResult, UserRepository};
