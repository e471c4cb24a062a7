//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and log them in, returning the profile and token
async fn register_and_login(server: &TestServer) -> (UserResponse, String) {
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/register", &register_req).await.unwrap();
    assert_json::<RegisterResponse>(response, StatusCode::CREATED)
        .await
        .unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/login", &login_req).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (login.user, login.access.token)
}

/// Create a post and return its id
async fn create_post(server: &TestServer, token: &str) -> String {
    let request = CreatePostRequest::unique();
    let response = server.post_auth("/api/posts", token, &request).await.unwrap();
    let created: PostMutationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.post.id
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
async fn test_ping() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/ping").await.expect("Request failed");
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "API works!");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/register", &request).await.unwrap();
    let body: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.user.name, request.name);
    assert_eq!(body.user.email, request.email);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/register", &request).await.unwrap();

    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_returns_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/login", &login_req).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!login.access.token.is_empty());
    assert_eq!(login.access.token_type, "Bearer");
    assert_eq!(login.user.email, register_req.email);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass1".to_string(),
    };

    let response = server.post("/api/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_returns_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = register_and_login(&server).await;

    let response = server.get_auth("/api/users/me", &token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["id"], serde_json::json!(user.id));
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/posts").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server.post_auth_empty("/api/logout", &token).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Logout successful");
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = register_and_login(&server).await;

    let request = CreatePostRequest::unique();
    let response = server.post_auth("/api/posts", &token, &request).await.unwrap();
    let created: PostMutationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.message, "Post created successfully");
    assert_eq!(created.post.content, request.content);
    assert_eq!(created.post.user.id, user.id);
}

#[tokio::test]
async fn test_create_post_empty_content_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let request = CreatePostRequest {
        content: String::new(),
        image: None,
    };
    let response = server.post_auth("/api/posts", &token, &request).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_feed_includes_created_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;
    let post_id = create_post(&server, &token).await;

    let response = server.get_auth("/api/posts", &token).await.unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let entry = feed.posts.iter().find(|p| p.id == post_id).unwrap();
    assert_eq!(entry.likes_count, 0);
}

#[tokio::test]
async fn test_show_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = register_and_login(&server).await;
    let post_id = create_post(&server, &token).await;

    let response = server
        .get_auth(&format!("/api/posts/{post_id}"), &token)
        .await
        .unwrap();
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.post.id, post_id);
    assert_eq!(detail.post.user.id, user.id);
    assert!(detail.post.likes.is_empty());
}

#[tokio::test]
async fn test_show_unknown_post_returns_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server.get_auth("/api/posts/999999999", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_own_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;
    let post_id = create_post(&server, &token).await;

    let request = UpdatePostRequest {
        content: Some("Updated content".to_string()),
        image: None,
    };
    let response = server
        .put_auth(&format!("/api/posts/{post_id}"), &token, &request)
        .await
        .unwrap();
    let updated: PostMutationResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.message, "Post updated successfully");
    assert_eq!(updated.post.content, "Updated content");
}

#[tokio::test]
async fn test_update_forbidden_for_non_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (_, other_token) = register_and_login(&server).await;
    let post_id = create_post(&server, &owner_token).await;

    let request = UpdatePostRequest {
        content: Some("Hijacked".to_string()),
        image: None,
    };
    let response = server
        .put_auth(&format!("/api/posts/{post_id}"), &other_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The post is untouched
    let response = server
        .get_auth(&format!("/api/posts/{post_id}"), &owner_token)
        .await
        .unwrap();
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(detail.post.content, "Hijacked");
}

#[tokio::test]
async fn test_soft_delete_hides_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = register_and_login(&server).await;
    let post_id = create_post(&server, &token).await;

    let response = server
        .delete_auth(&format!("/api/posts/{post_id}"), &token)
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post deleted successfully (soft delete)");

    // Gone from the feed
    let response = server.get_auth("/api/posts", &token).await.unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.posts.iter().all(|p| p.id != post_id));

    // Gone from the user's posts
    let response = server
        .get_auth(&format!("/api/users/{}/posts", user.id), &token)
        .await
        .unwrap();
    let posts: UserPostsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(posts.posts.iter().all(|p| p.id != post_id));

    // Gone from direct reads
    let response = server
        .get_auth(&format!("/api/posts/{post_id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // A repeated soft delete still succeeds
    let response = server
        .delete_auth(&format!("/api/posts/{post_id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_force_delete_removes_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;
    let post_id = create_post(&server, &token).await;

    let response = server
        .delete_auth(&format!("/api/posts/{post_id}?force=true"), &token)
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post permanently deleted");

    // Deleting again reports not found: the row is gone
    let response = server
        .delete_auth(&format!("/api/posts/{post_id}?force=true"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_soft_deleted_post_can_be_force_deleted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;
    let post_id = create_post(&server, &token).await;

    let response = server
        .delete_auth(&format!("/api/posts/{post_id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/posts/{post_id}?force=true"), &token)
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post permanently deleted");
}

#[tokio::test]
async fn test_delete_forbidden_for_non_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (_, other_token) = register_and_login(&server).await;
    let post_id = create_post(&server, &owner_token).await;

    let response = server
        .delete_auth(&format!("/api/posts/{post_id}"), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/posts/{post_id}?force=true"), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_user_posts_scoped_to_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_a, token_a) = register_and_login(&server).await;
    let (_, token_b) = register_and_login(&server).await;

    let post_a = create_post(&server, &token_a).await;
    let post_b = create_post(&server, &token_b).await;

    let response = server
        .get_auth(&format!("/api/users/{}/posts", user_a.id), &token_a)
        .await
        .unwrap();
    let posts: UserPostsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(posts.posts.iter().any(|p| p.id == post_a));
    assert!(posts.posts.iter().all(|p| p.id != post_b));
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (viewer, viewer_token) = register_and_login(&server).await;
    let post_id = create_post(&server, &owner_token).await;

    let response = server
        .post_auth_empty(&format!("/api/posts/{post_id}/like"), &viewer_token)
        .await
        .unwrap();
    let body: LikeMutationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.message, "Post liked successfully");
    assert_eq!(body.like.user_id, viewer.id);
    assert_eq!(body.like.post_id, post_id);
}

#[tokio::test]
async fn test_duplicate_like_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (_, viewer_token) = register_and_login(&server).await;
    let post_id = create_post(&server, &owner_token).await;

    let response = server
        .post_auth_empty(&format!("/api/posts/{post_id}/like"), &viewer_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/posts/{post_id}/like"), &viewer_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Exactly one like exists
    let response = server
        .get_auth(&format!("/api/posts/{post_id}/likes"), &viewer_token)
        .await
        .unwrap();
    let likes: LikesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(likes.likes.len(), 1);
}

#[tokio::test]
async fn test_like_unknown_post_returns_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server
        .post_auth_empty("/api/posts/999999999/like", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unlike_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (_, viewer_token) = register_and_login(&server).await;
    let post_id = create_post(&server, &owner_token).await;

    server
        .post_auth_empty(&format!("/api/posts/{post_id}/like"), &viewer_token)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/posts/{post_id}/unlike"), &viewer_token)
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post unliked successfully");

    // Unliking again reports not found: the like is gone
    let response = server
        .delete_auth(&format!("/api/posts/{post_id}/unlike"), &viewer_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_likes_listing_includes_liker() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (viewer, viewer_token) = register_and_login(&server).await;
    let post_id = create_post(&server, &owner_token).await;

    server
        .post_auth_empty(&format!("/api/posts/{post_id}/like"), &viewer_token)
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/api/posts/{post_id}/likes"), &owner_token)
        .await
        .unwrap();
    let likes: LikesResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(likes.likes.len(), 1);
    assert_eq!(likes.likes[0].user.id, viewer.id);
}

// ============================================================================
// Engagement Scenario
// ============================================================================

/// Owner creates a post, a viewer likes it twice (second conflicts), the
/// owner soft-deletes and then permanently deletes it.
#[tokio::test]
async fn test_post_engagement_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (_, viewer_token) = register_and_login(&server).await;

    // Owner creates post P
    let request = CreatePostRequest {
        content: "hello".to_string(),
        image: None,
    };
    let response = server
        .post_auth("/api/posts", &owner_token, &request)
        .await
        .unwrap();
    let created: PostMutationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let post_id = created.post.id;

    // Viewer likes P
    let response = server
        .post_auth_empty(&format!("/api/posts/{post_id}/like"), &viewer_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // like_count(P) == 1
    let response = server.get_auth("/api/posts", &viewer_token).await.unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = feed.posts.iter().find(|p| p.id == post_id).unwrap();
    assert_eq!(entry.likes_count, 1);

    // Second like conflicts, count unchanged
    let response = server
        .post_auth_empty(&format!("/api/posts/{post_id}/like"), &viewer_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server.get_auth("/api/posts", &viewer_token).await.unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = feed.posts.iter().find(|p| p.id == post_id).unwrap();
    assert_eq!(entry.likes_count, 1);

    // Owner soft-deletes: feed no longer shows P
    let response = server
        .delete_auth(&format!("/api/posts/{post_id}"), &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/posts", &viewer_token).await.unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.posts.iter().all(|p| p.id != post_id));

    // Owner permanently deletes: likes listing reports not found
    let response = server
        .delete_auth(&format!("/api/posts/{post_id}?force=true"), &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/posts/{post_id}/likes"), &viewer_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
