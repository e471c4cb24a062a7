//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, health, likes, posts, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately for probes)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .merge(auth_routes())
        .merge(post_routes())
        .merge(user_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Post and like routes
fn post_routes() -> Router<AppState> {
    Router::new()
        // Post CRUD
        .route("/posts", get(posts::index))
        .route("/posts", post(posts::store))
        .route("/posts/:post_id", get(posts::show))
        .route("/posts/:post_id", put(posts::update))
        .route("/posts/:post_id", delete(posts::destroy))
        // Likes
        .route("/posts/:post_id/like", post(likes::like))
        .route("/posts/:post_id/unlike", delete(likes::unlike))
        .route("/posts/:post_id/likes", get(likes::post_likes))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::me))
        .route("/users/:user_id/posts", get(users::user_posts))
}
