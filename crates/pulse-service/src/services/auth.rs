//! Authentication service
//!
//! Handles user registration, login, and logout.

use pulse_common::auth::{hash_password, validate_password_strength, verify_password, AccessToken};
use pulse_common::AppError;
use pulse_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{CurrentUserResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<CurrentUserResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.name, request.email);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered successfully");

        Ok(CurrentUserResponse::from(&user))
    }

    /// Login with email and password, issuing an access token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> ServiceResult<(CurrentUserResponse, AccessToken)> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let access = self
            .ctx
            .jwt_service()
            .issue_token(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok((CurrentUserResponse::from(&user), access))
    }

    /// Logout the current user
    ///
    /// Access tokens are stateless, so there is nothing to revoke
    /// server-side; the client drops its token.
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: pulse_core::Snowflake) -> ServiceResult<()> {
        info!(user_id = %user_id, "User logged out");
        Ok(())
    }
}
