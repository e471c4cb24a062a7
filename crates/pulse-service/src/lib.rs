//! # pulse-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export services and DTOs for the API layer
pub use dto::{
    CreatePostRequest, CurrentUserResponse, FeedPostResponse, LikeDetailResponse, LikeResponse,
    LoginRequest, OwnPostResponse, PostDetailResponse, PostLikeResponse, RegisterRequest,
    UpdatePostRequest, UserSummaryResponse, WrittenPostResponse,
};
pub use services::{
    AuthService, DeleteOutcome, FeedService, LikeService, PostService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
