//! Authentication handlers
//!
//! Endpoints for user registration, login, and logout.

use axum::{extract::State, Json};
use pulse_common::auth::AccessToken;
use pulse_service::{AuthService, CurrentUserResponse, LoginRequest, RegisterRequest};
use serde::Serialize;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, MessageBody};
use crate::state::AppState;

/// Registration response body
#[derive(Debug, Serialize)]
pub struct RegisterBody {
    pub message: String,
    pub user: CurrentUserResponse,
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub message: String,
    pub user: CurrentUserResponse,
    pub access: AccessToken,
}

/// Register a new user
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterBody>>> {
    let service = AuthService::new(state.service_context());
    let user = service.register(request).await?;
    Ok(Created(Json(RegisterBody {
        message: "User registered successfully".to_string(),
        user,
    })))
}

/// Login with email and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginBody>> {
    let service = AuthService::new(state.service_context());
    let (user, access) = service.login(request).await?;
    Ok(Json(LoginBody {
        message: "Login successful".to_string(),
        user,
        access,
    }))
}

/// Logout the current user
///
/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageBody>> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.user_id).await?;
    Ok(Json(MessageBody::new("Logout successful")))
}
